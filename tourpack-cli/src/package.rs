//! `package` command: select the best package of tours for a region.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tourpack_core::{
    Package, PackageConstraints, PackageOptimizer, PackageRequest, RegionId, Tour,
};

use crate::{
    ARG_DATABASE, ARG_MAX_BUDGET, ARG_MAX_DAYS, ARG_REGION, Catalogue, CliError, DEFAULT_DATABASE,
    ENV_PACKAGE_REGION, require_existing, write_json,
};

/// CLI arguments for the `package` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search every combination of the region's tours for the one \
                 with the highest cultural value. Tours sharing an attraction \
                 are never combined. Limits may come from CLI flags, \
                 configuration files, or environment variables; an empty \
                 limit means unconstrained.",
    about = "Select the best package of tours for a region"
)]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct PackageArgs {
    /// Region identifier to plan for.
    #[arg(value_name = ARG_REGION)]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Path to the SQLite tour database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Maximum total number of days.
    #[arg(long = ARG_MAX_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) max_days: Option<String>,
    /// Maximum total cost.
    #[arg(long = ARG_MAX_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_budget: Option<String>,
}

impl PackageArgs {
    fn into_config(self) -> Result<PackageConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PackageConfig::try_from(merged)
    }
}

/// Resolved `package` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PackageConfig {
    /// Region whose tours are considered.
    pub(crate) region: RegionId,
    /// Path to the SQLite tour database.
    pub(crate) database: Utf8PathBuf,
    /// Parsed limits.
    pub(crate) constraints: PackageConstraints,
}

impl TryFrom<PackageArgs> for PackageConfig {
    type Error = CliError;

    fn try_from(args: PackageArgs) -> Result<Self, Self::Error> {
        let region = args.region.ok_or(CliError::MissingArgument {
            field: ARG_REGION,
            env: ENV_PACKAGE_REGION,
        })?;
        let mut request = PackageRequest::new(region);
        request.max_days = args.max_days;
        request.max_budget = args.max_budget;
        let constraints = request.constraints()?;
        let database = args
            .database
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE));
        Ok(Self {
            region: request.region,
            database,
            constraints,
        })
    }
}

/// JSON payload written by the `package` command.
#[derive(Debug, Serialize)]
pub(crate) struct PackageReport<'a> {
    pub(crate) region: &'a RegionId,
    pub(crate) tours: &'a [Tour],
    pub(crate) total_days: u64,
    pub(crate) total_cost: f64,
    pub(crate) total_value: u64,
}

impl<'a> PackageReport<'a> {
    pub(crate) fn new(region: &'a RegionId, package: &'a Package) -> Self {
        Self {
            region,
            tours: &package.tours,
            total_days: package.total_days,
            total_cost: package.total_cost,
            total_value: package.total_value,
        }
    }
}

pub(crate) fn run_package(
    args: PackageArgs,
    catalogue: &dyn Catalogue,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let package = execute_package(&config, catalogue)?;
    write_json(writer, &PackageReport::new(&config.region, &package))
}

pub(super) fn execute_package(
    config: &PackageConfig,
    catalogue: &dyn Catalogue,
) -> Result<Package, CliError> {
    require_database(&config.database)?;
    let graph = catalogue.graph(&config.database)?;
    Ok(PackageOptimizer::new(&graph).generate_package(&config.region, &config.constraints))
}

fn require_database(path: &Utf8Path) -> Result<(), CliError> {
    require_existing(path, ARG_DATABASE)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PackageConfig, CliError> {
    let merged = PackageArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PackageConfig::try_from(merged)
}
