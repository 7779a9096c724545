//! Error types emitted by the Tourpack CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tourpack_core::{ConstraintError, LoadGraphError, SqliteTourStoreError};

/// Errors emitted by the Tourpack CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as supplied by the caller.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as supplied by the caller.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path as supplied by the caller.
        path: Utf8PathBuf,
        /// Source error returned by the filesystem.
        #[source]
        source: std::io::Error,
    },
    /// The day or budget limit could not be interpreted.
    #[error("invalid package limits: {0}")]
    InvalidConstraints(#[from] ConstraintError),
    /// Opening or reading the tour database failed.
    #[error(transparent)]
    Store(#[from] SqliteTourStoreError),
    /// Reading the catalogue from the tour database failed.
    #[error("failed to load the tour catalogue: {0}")]
    LoadCatalogue(#[from] LoadGraphError<SqliteTourStoreError>),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
