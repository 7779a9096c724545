//! In-memory fixtures shared by unit tests, behaviour tests and benchmarks.
//!
//! Available to this crate's unit tests and, for other targets, behind the
//! `test-support` feature.

use std::convert::Infallible;

use crate::{Attraction, Region, RegionId, Relation, RelationGraph, Tour, TourStore};

/// In-memory `TourStore` implementation used in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Regions returned by [`TourStore::load_regions`].
    pub regions: Vec<Region>,
    /// Tours returned by [`TourStore::load_tours`].
    pub tours: Vec<Tour>,
    /// Attractions returned by [`TourStore::load_attractions`].
    pub attractions: Vec<Attraction>,
    /// Pairs returned by [`TourStore::load_relations`].
    pub relations: Vec<Relation>,
}

impl MemoryStore {
    /// Two regions; `R1` holds two tours over three attractions and `R2` is empty.
    ///
    /// Tour 1 lasts 2 days, costs 100 and visits attractions 1 (value 10) and
    /// 2 (value 5). Tour 2 lasts 3 days, costs 150 and visits attraction 3
    /// (value 20).
    #[must_use]
    pub fn sample() -> Self {
        Self {
            regions: vec![Region::new("R1", "Piemonte"), Region::new("R2", "Liguria")],
            tours: vec![tour(1, "R1", 2, 100.0), tour(2, "R1", 3, 150.0)],
            attractions: vec![
                Attraction::new(1, "Mole Antonelliana", 10),
                Attraction::new(2, "Palazzo Madama", 5),
                Attraction::new(3, "Sacra di San Michele", 20),
            ],
            relations: vec![Relation::new(1, 1), Relation::new(1, 2), Relation::new(2, 3)],
        }
    }

    /// [`Self::sample`] plus tour 3 (1 day, cost 50) sharing attraction 1 with tour 1.
    #[must_use]
    pub fn sample_with_overlap() -> Self {
        let mut store = Self::sample();
        store.tours.push(tour(3, "R1", 1, 50.0));
        store.relations.push(Relation::new(3, 1));
        store
    }

    /// Build the graph for this dataset.
    ///
    /// Returns an empty graph when the dataset repeats an identifier.
    #[must_use]
    pub fn graph(&self) -> RelationGraph {
        RelationGraph::new(
            self.tours.iter().cloned(),
            self.attractions.iter().cloned(),
            self.relations.iter().copied(),
        )
        .unwrap_or_default()
    }
}

impl TourStore for MemoryStore {
    type Error = Infallible;

    fn load_regions(&self) -> Result<Vec<Region>, Self::Error> {
        Ok(self.regions.clone())
    }

    fn load_tours(&self) -> Result<Vec<Tour>, Self::Error> {
        Ok(self.tours.clone())
    }

    fn load_attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
        Ok(self.attractions.clone())
    }

    fn load_relations(&self) -> Result<Vec<Relation>, Self::Error> {
        Ok(self.relations.clone())
    }
}

/// Build a tour without validation; fixtures only use valid costs.
#[must_use]
pub fn tour(id: u64, region: &str, duration_days: u32, cost: f64) -> Tour {
    Tour {
        id,
        region: RegionId::from(region),
        name: format!("Tour {id}"),
        duration_days,
        cost,
    }
}

/// Graph for [`MemoryStore::sample`].
#[must_use]
pub fn sample_graph() -> RelationGraph {
    MemoryStore::sample().graph()
}

/// Graph for [`MemoryStore::sample_with_overlap`].
#[must_use]
pub fn sample_graph_with_overlap() -> RelationGraph {
    MemoryStore::sample_with_overlap().graph()
}

/// Write `store` into a fresh SQLite database at `path`.
#[cfg(feature = "store-sqlite")]
pub fn write_sqlite_database(
    path: &std::path::Path,
    store: &MemoryStore,
) -> Result<(), rusqlite::Error> {
    let mut connection = rusqlite::Connection::open(path)?;
    connection.execute_batch(crate::store::SCHEMA)?;
    let transaction = connection.transaction()?;
    for region in &store.regions {
        transaction.execute(
            "INSERT INTO regions (id, name) VALUES (?1, ?2)",
            (region.id.as_str(), region.name.as_str()),
        )?;
    }
    for entry in &store.tours {
        transaction.execute(
            "INSERT INTO tours (id, region_id, name, duration_days, cost) VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                sql_id(entry.id)?,
                entry.region.as_str(),
                entry.name.as_str(),
                entry.duration_days,
                entry.cost,
            ),
        )?;
    }
    for attraction in &store.attractions {
        transaction.execute(
            "INSERT INTO attractions (id, name, cultural_value) VALUES (?1, ?2, ?3)",
            (
                sql_id(attraction.id)?,
                attraction.name.as_str(),
                attraction.cultural_value,
            ),
        )?;
    }
    for relation in &store.relations {
        transaction.execute(
            "INSERT INTO tour_attractions (tour_id, attraction_id) VALUES (?1, ?2)",
            (sql_id(relation.tour_id)?, sql_id(relation.attraction_id)?),
        )?;
    }
    transaction.commit()
}

#[cfg(feature = "store-sqlite")]
fn sql_id(id: u64) -> Result<i64, rusqlite::Error> {
    i64::try_from(id).map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))
}
