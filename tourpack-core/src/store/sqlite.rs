//! SQLite-backed tour catalogue.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::debug;
use rusqlite::{Connection, OpenFlags, Row, types::Value};
use thiserror::Error;

use crate::{Attraction, Region, RegionId, Relation, Tour, TourError};

use super::TourStore;

/// Tables read by [`SqliteTourStore`].
pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS regions (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS tours (
    id INTEGER PRIMARY KEY,
    region_id TEXT NOT NULL,
    name TEXT NOT NULL,
    duration_days INTEGER NOT NULL,
    cost REAL NOT NULL
);
CREATE TABLE IF NOT EXISTS attractions (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    cultural_value INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS tour_attractions (
    tour_id INTEGER NOT NULL,
    attraction_id INTEGER NOT NULL
);
";

/// Error raised when reading the tour catalogue from SQLite.
#[derive(Debug, Error)]
pub enum SqliteTourStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or running a query failed.
    #[error("failed to query {table}: {source}")]
    Query {
        /// Table being read.
        table: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored identifier does not fit the domain identifier type.
    #[error("{table} row has identifier {id} outside the supported range")]
    IdOutOfRange {
        /// Table being read.
        table: &'static str,
        /// Identifier read from SQLite.
        id: i64,
    },
    /// A stored integer column is negative or too large.
    #[error("{table} row {id} has {column} {value} outside the supported range")]
    ValueOutOfRange {
        /// Table being read.
        table: &'static str,
        /// Column holding the value.
        column: &'static str,
        /// Identifier of the row.
        id: u64,
        /// Value read from SQLite.
        value: i64,
    },
    /// A region identifier was NULL or binary.
    #[error("{table} row holds a region identifier that is not text or a number")]
    InvalidRegionId {
        /// Table being read.
        table: &'static str,
    },
    /// A stored tour failed validation.
    #[error(transparent)]
    InvalidTour(#[from] TourError),
}

/// Read-only tour catalogue stored in SQLite.
///
/// Rows are returned ordered by primary key so repeated loads build identical
/// graphs.
pub struct SqliteTourStore {
    connection: Connection,
    path: PathBuf,
}

impl fmt::Debug for SqliteTourStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteTourStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteTourStore {
    /// Open the database at `path` read-only.
    pub fn open<P>(path: P) -> Result<Self, SqliteTourStoreError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteTourStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("opened tour store at {}", path.display());
        Ok(Self {
            connection,
            path: path.to_path_buf(),
        })
    }

    fn query_rows<T, F>(
        &self,
        table: &'static str,
        sql: &str,
        map: F,
    ) -> Result<Vec<T>, SqliteTourStoreError>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let query_error = move |source| SqliteTourStoreError::Query { table, source };
        let mut statement = self.connection.prepare(sql).map_err(query_error)?;
        let rows = statement.query_map([], map).map_err(query_error)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(query_error)
    }
}

impl TourStore for SqliteTourStore {
    type Error = SqliteTourStoreError;

    fn load_regions(&self) -> Result<Vec<Region>, Self::Error> {
        let rows = self.query_rows("regions", "SELECT id, name FROM regions ORDER BY id", |row| {
            Ok((row.get::<_, Value>(0)?, row.get::<_, String>(1)?))
        })?;
        rows.into_iter()
            .map(|(id, name)| -> Result<Region, SqliteTourStoreError> {
                Ok(Region {
                    id: region_id("regions", id)?,
                    name,
                })
            })
            .collect()
    }

    fn load_tours(&self) -> Result<Vec<Tour>, Self::Error> {
        let rows = self.query_rows(
            "tours",
            "SELECT id, region_id, name, duration_days, cost FROM tours ORDER BY id",
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Value>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, f64>(4)?,
                ))
            },
        )?;
        rows.into_iter()
            .map(|(raw_id, region, name, raw_days, cost)| -> Result<Tour, SqliteTourStoreError> {
                let id = entity_id("tours", raw_id)?;
                let days = u32::try_from(raw_days).map_err(|_| {
                    SqliteTourStoreError::ValueOutOfRange {
                        table: "tours",
                        column: "duration_days",
                        id,
                        value: raw_days,
                    }
                })?;
                Ok(Tour::new(id, region_id("tours", region)?, name, days, cost)?)
            })
            .collect()
    }

    fn load_attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
        let rows = self.query_rows(
            "attractions",
            "SELECT id, name, cultural_value FROM attractions ORDER BY id",
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            },
        )?;
        rows.into_iter()
            .map(|(raw_id, name, raw_value)| -> Result<Attraction, SqliteTourStoreError> {
                let id = entity_id("attractions", raw_id)?;
                let value = u32::try_from(raw_value).map_err(|_| {
                    SqliteTourStoreError::ValueOutOfRange {
                        table: "attractions",
                        column: "cultural_value",
                        id,
                        value: raw_value,
                    }
                })?;
                Ok(Attraction::new(id, name, value))
            })
            .collect()
    }

    fn load_relations(&self) -> Result<Vec<Relation>, Self::Error> {
        let rows = self.query_rows(
            "tour_attractions",
            "SELECT tour_id, attraction_id FROM tour_attractions ORDER BY tour_id, attraction_id",
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
        )?;
        rows.into_iter()
            .map(|(tour_id, attraction_id)| -> Result<Relation, SqliteTourStoreError> {
                Ok(Relation::new(
                    entity_id("tour_attractions", tour_id)?,
                    entity_id("tour_attractions", attraction_id)?,
                ))
            })
            .collect()
    }
}

fn entity_id(table: &'static str, id: i64) -> Result<u64, SqliteTourStoreError> {
    u64::try_from(id).map_err(|_| SqliteTourStoreError::IdOutOfRange { table, id })
}

/// Normalise a stored region identifier to its textual form.
fn region_id(table: &'static str, value: Value) -> Result<RegionId, SqliteTourStoreError> {
    match value {
        Value::Text(text) => Ok(RegionId::from(text)),
        Value::Integer(number) => Ok(RegionId::from(number)),
        Value::Real(number) => Ok(RegionId::new(number)),
        Value::Null | Value::Blob(_) => Err(SqliteTourStoreError::InvalidRegionId { table }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Text("R1".into()), "R1")]
    #[case(Value::Integer(12), "12")]
    fn region_ids_are_normalised(#[case] value: Value, #[case] expected: &str) {
        let id = region_id("tours", value).expect("valid region id");
        assert_eq!(id.as_str(), expected);
    }

    #[rstest]
    fn null_region_id_is_rejected() {
        let err = region_id("tours", Value::Null).expect_err("null region");
        assert!(matches!(
            err,
            SqliteTourStoreError::InvalidRegionId { table: "tours" }
        ));
    }

    #[rstest]
    fn negative_ids_are_out_of_range() {
        let err = entity_id("tours", -3).expect_err("negative id");
        assert!(matches!(
            err,
            SqliteTourStoreError::IdOutOfRange { table: "tours", id: -3 }
        ));
    }
}
