//! Core domain types and the package optimizer for Tourpack.
//!
//! A [`RelationGraph`] links tours to the attractions they visit. The
//! [`PackageOptimizer`] selects, from the tours of one region, the subset with
//! the highest total cultural value that respects optional day and budget
//! ceilings and never visits the same attraction twice.
//!
//! Loading the catalogue is delegated to a [`TourStore`]; the SQLite
//! implementation is available behind the `store-sqlite` feature.
//!
//! # Examples
//!
//! ```
//! use tourpack_core::{PackageConstraints, PackageOptimizer, RegionId, test_support::MemoryStore};
//! use tourpack_core::RelationGraph;
//!
//! let graph = RelationGraph::from_store(&MemoryStore::sample()).expect("graph loads");
//! let limits = PackageConstraints::parse(Some("5"), Some("300")).expect("valid limits");
//! let package = PackageOptimizer::new(&graph).generate_package(&RegionId::from("R1"), &limits);
//! assert_eq!(package.total_value, 35);
//! assert_eq!(package.total_cost, 250.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attraction;
mod constraints;
mod graph;
mod optimizer;
mod package;
mod region;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod tour;

pub use attraction::{Attraction, AttractionId};
pub use constraints::{ConstraintError, PackageConstraints};
pub use graph::{GraphError, LoadGraphError, Relation, RelationGraph};
pub use optimizer::PackageOptimizer;
pub use package::{Package, PackageDiagnostics, PackagePlanner, PackageRequest, PlanError};
pub use region::{Region, RegionId};
pub use store::TourStore;
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteTourStore, SqliteTourStoreError};
pub use tour::{Tour, TourError, TourId};
