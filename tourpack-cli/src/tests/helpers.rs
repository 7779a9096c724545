//! Test helpers for building tour databases and in-memory catalogues.

use super::*;
use camino::Utf8PathBuf;
use tempfile::TempDir;
use tourpack_core::test_support::{MemoryStore, write_sqlite_database};
use tourpack_core::{Region, RelationGraph};

/// Catalogue serving a fixed in-memory dataset.
pub(super) struct MemoryCatalogue(pub(super) MemoryStore);

impl Catalogue for MemoryCatalogue {
    fn regions(&self, _database: &Utf8Path) -> Result<Vec<Region>, CliError> {
        Ok(self.0.regions.clone())
    }

    fn graph(&self, _database: &Utf8Path) -> Result<RelationGraph, CliError> {
        Ok(self.0.graph())
    }
}

/// Temporary directory holding a `tours.db` built from a dataset.
pub(super) struct DatabaseFixture {
    _dir: TempDir,
    pub(super) database: Utf8PathBuf,
}

impl DatabaseFixture {
    pub(super) fn with_sample() -> Self {
        Self::with_dataset(&MemoryStore::sample())
    }

    pub(super) fn with_dataset(dataset: &MemoryStore) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let database = root.join("tours.db");
        write_sqlite_database(database.as_std_path(), dataset).expect("write tour database");
        Self {
            _dir: dir,
            database,
        }
    }
}

/// Decode command output as JSON.
pub(super) fn parse_output(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("command output should be JSON")
}
