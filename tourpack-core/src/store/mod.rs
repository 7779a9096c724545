//! Data access traits for tours, attractions and their relations.
//!
//! The `TourStore` trait defines a read-only interface over whatever backs the
//! tour catalogue. It supplies the collections the
//! [`RelationGraph`](crate::RelationGraph) is built from and the regions a caller
//! may choose between.

use crate::{Attraction, Region, Relation, Tour};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub(crate) use sqlite::SCHEMA;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteTourStore, SqliteTourStoreError};

/// Read-only access to a persisted tour catalogue.
///
/// Implementations should return collections in a stable order; the
/// optimizer reports the first of several equally valuable packages, so the
/// order of tours decides which one that is.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use tourpack_core::{Attraction, Region, Relation, RelationGraph, Tour, TourStore};
///
/// struct Fixed;
///
/// impl TourStore for Fixed {
///     type Error = Infallible;
///
///     fn load_regions(&self) -> Result<Vec<Region>, Self::Error> {
///         Ok(vec![Region::new("R1", "Piemonte")])
///     }
///     fn load_tours(&self) -> Result<Vec<Tour>, Self::Error> {
///         Ok(vec![Tour::new(1, "R1", "Langhe", 2, 100.0).expect("valid tour")])
///     }
///     fn load_attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
///         Ok(vec![Attraction::new(10, "Castle", 7)])
///     }
///     fn load_relations(&self) -> Result<Vec<Relation>, Self::Error> {
///         Ok(vec![Relation::new(1, 10)])
///     }
/// }
///
/// let graph = RelationGraph::from_store(&Fixed).expect("graph loads");
/// assert!(graph.is_linked(1, 10));
/// ```
pub trait TourStore {
    /// Failure reported by the backing storage.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every region callers may query.
    fn load_regions(&self) -> Result<Vec<Region>, Self::Error>;

    /// Every tour, across all regions.
    fn load_tours(&self) -> Result<Vec<Tour>, Self::Error>;

    /// Every attraction.
    fn load_attractions(&self) -> Result<Vec<Attraction>, Self::Error>;

    /// Every tour-attraction pair. Pairs may name unknown entities.
    fn load_relations(&self) -> Result<Vec<Relation>, Self::Error>;
}
