//! Command-line interface for querying Tourpack catalogues.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use std::io::Write;
use tourpack_core::{Region, RelationGraph, SqliteTourStore, TourStore};

mod error;
mod fs;
mod package;
mod regions;

pub use error::CliError;

use package::{PackageArgs, run_package};
use regions::{RegionsArgs, run_regions};

pub(crate) const ARG_DATABASE: &str = "database";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_MAX_DAYS: &str = "max-days";
pub(crate) const ARG_MAX_BUDGET: &str = "max-budget";
pub(crate) const ENV_PACKAGE_REGION: &str = "TOURPACK_CMDS_PACKAGE_REGION";
pub(crate) const DEFAULT_DATABASE: &str = "tours.db";

/// Run the Tourpack CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Regions(args) => run_regions(args, &SqliteCatalogue, &mut stdout),
        Command::Package(args) => run_package(args, &SqliteCatalogue, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourpack",
    about = "Assemble the most culturally valuable package of regional tours",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the regions available in the tour database.
    Regions(RegionsArgs),
    /// Select the best package of tours for a region.
    Package(PackageArgs),
}

/// Opens the tour catalogue for a command invocation.
pub(crate) trait Catalogue {
    fn regions(&self, database: &Utf8Path) -> Result<Vec<Region>, CliError>;
    fn graph(&self, database: &Utf8Path) -> Result<RelationGraph, CliError>;
}

/// Catalogue backed by a SQLite tour database.
pub(crate) struct SqliteCatalogue;

impl Catalogue for SqliteCatalogue {
    fn regions(&self, database: &Utf8Path) -> Result<Vec<Region>, CliError> {
        let store = SqliteTourStore::open(database.as_std_path())?;
        Ok(store.load_regions()?)
    }

    fn graph(&self, database: &Utf8Path) -> Result<RelationGraph, CliError> {
        let store = SqliteTourStore::open(database.as_std_path())?;
        let graph = RelationGraph::from_store(&store)?;
        log::debug!(
            "loaded {} tours and {} attractions from {database}",
            graph.tour_count(),
            graph.attraction_count()
        );
        Ok(graph)
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: serde::Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Check that a configured input path names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
