//! `regions` command: list the regions a package can be requested for.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_DATABASE, Catalogue, CliError, DEFAULT_DATABASE, require_existing, write_json};

/// CLI arguments for the `regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the regions stored in the tour database")]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct RegionsArgs {
    /// Path to the SQLite tour database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
}

pub(crate) fn run_regions(
    args: RegionsArgs,
    catalogue: &dyn Catalogue,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let database = resolve_database(merged);
    require_existing(&database, ARG_DATABASE)?;
    let regions = catalogue.regions(&database)?;
    write_json(writer, &regions)
}

pub(crate) fn resolve_database(args: RegionsArgs) -> Utf8PathBuf {
    args.database
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE))
}
