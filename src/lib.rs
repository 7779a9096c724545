//! Facade crate for the Tourpack package planner.
//!
//! This crate re-exports the core domain types and the optimizer, and exposes
//! the SQLite tour store behind a feature flag.

#![forbid(unsafe_code)]

pub use tourpack_core::{
    Attraction, ConstraintError, GraphError, LoadGraphError, Package, PackageConstraints,
    PackageDiagnostics, PackageOptimizer, PackagePlanner, PackageRequest, PlanError, Region,
    RegionId, Relation, RelationGraph, Tour, TourError, TourStore,
};

#[cfg(feature = "store-sqlite")]
pub use tourpack_core::{SqliteTourStore, SqliteTourStoreError};

#[cfg(feature = "test-support")]
pub use tourpack_core::test_support;
