//! Behavioural tests for `SqliteTourStore` using rstest-bdd.

use std::{cell::RefCell, path::PathBuf};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;
use tourpack_core::{
    PackageConstraints, PackageOptimizer, RegionId, RelationGraph, SqliteTourStore,
    SqliteTourStoreError, TourStore,
    test_support::{MemoryStore, write_sqlite_database},
};

/// Provides shared state for SQLite store scenarios.
#[derive(Debug)]
struct TourStoreWorld {
    temp_dir: TempDir,
    path: RefCell<Option<PathBuf>>,
    store: RefCell<Option<SqliteTourStore>>,
    error: RefCell<Option<SqliteTourStoreError>>,
}

impl TourStoreWorld {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
            path: RefCell::new(None),
            store: RefCell::new(None),
            error: RefCell::new(None),
        }
    }

    fn database_path(&self) -> PathBuf {
        self.temp_dir.path().join("tours.db")
    }

    fn persist(&self, dataset: &MemoryStore) {
        let path = self.database_path();
        write_sqlite_database(&path, dataset).expect("persist database");
        self.path.replace(Some(path));
    }

    fn with_store<T>(&self, f: impl FnOnce(&SqliteTourStore) -> T) -> T {
        assert!(self.error.borrow().is_none(), "unexpected store error");
        let store = self.store.borrow();
        f(store.as_ref().expect("store should be open"))
    }
}

#[fixture]
fn world() -> TourStoreWorld {
    TourStoreWorld::new()
}

#[given("a SQLite database containing the sample catalogue")]
fn given_sample(world: &TourStoreWorld) {
    world.persist(&MemoryStore::sample());
}

#[given("a path without a SQLite database")]
fn given_missing(world: &TourStoreWorld) {
    world
        .path
        .replace(Some(world.temp_dir.path().join("missing").join("tours.db")));
}

#[given("a SQLite database with a negative cultural value")]
fn given_negative_value(world: &TourStoreWorld) {
    let mut dataset = MemoryStore::sample();
    dataset.attractions.clear();
    world.persist(&dataset);
    let connection =
        rusqlite::Connection::open(world.database_path()).expect("reopen database for writing");
    connection
        .execute(
            "INSERT INTO attractions (id, name, cultural_value) VALUES (1, 'Broken', -4)",
            [],
        )
        .expect("insert invalid attraction");
}

#[when("I open the SQLite tour store")]
fn open_store(world: &TourStoreWorld) {
    let path = world
        .path
        .borrow()
        .clone()
        .expect("path should be initialised before opening the store");
    match SqliteTourStore::open(&path) {
        Ok(store) => {
            world.store.replace(Some(store));
            world.error.replace(None);
        }
        Err(err) => {
            world.store.replace(None);
            world.error.replace(Some(err));
        }
    }
}

#[then("the store lists regions R1 and R2")]
fn lists_regions(world: &TourStoreWorld) {
    let regions = world.with_store(|store| store.load_regions().expect("regions load"));
    let ids: Vec<_> = regions.into_iter().map(|region| region.id).collect();
    assert_eq!(ids, vec![RegionId::from("R1"), RegionId::from("R2")]);
}

#[then("the loaded graph recommends tours 1 and 2 for R1")]
fn recommends(world: &TourStoreWorld) {
    let graph = world.with_store(|store| RelationGraph::from_store(store).expect("graph loads"));
    let limits = PackageConstraints::unbounded()
        .with_max_days(5)
        .with_max_budget(300.0)
        .expect("valid budget");
    let package = PackageOptimizer::new(&graph).generate_package(&RegionId::from("R1"), &limits);
    assert_eq!(package.tour_ids().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(package.total_value, 35);
}

#[then("opening the store fails with an open error")]
fn open_error(world: &TourStoreWorld) {
    let error = world.error.borrow();
    assert!(matches!(
        error.as_ref(),
        Some(SqliteTourStoreError::OpenDatabase { .. })
    ));
}

#[then("loading attractions fails with an out of range error")]
fn out_of_range(world: &TourStoreWorld) {
    let err = world.with_store(|store| {
        store
            .load_attractions()
            .expect_err("negative value should be rejected")
    });
    assert!(matches!(
        err,
        SqliteTourStoreError::ValueOutOfRange {
            column: "cultural_value",
            value: -4,
            ..
        }
    ));
}

#[scenario(path = "tests/features/sqlite_tour_store.feature", index = 0)]
fn catalogue_round_trip(world: TourStoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sqlite_tour_store.feature", index = 1)]
fn missing_database(world: TourStoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sqlite_tour_store.feature", index = 2)]
fn negative_value(world: TourStoreWorld) {
    let _ = world;
}
