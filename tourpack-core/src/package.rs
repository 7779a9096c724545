//! Requests and results exchanged with package planners.

use std::time::Duration;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ConstraintError, PackageConstraints, RegionId, Tour};

/// Parameters for a package request as received from a caller.
///
/// Limits are kept in their textual form so that malformed input is reported by
/// the planner instead of being coerced at the edge.
///
/// # Examples
/// ```rust
/// use tourpack_core::PackageRequest;
///
/// let request = PackageRequest::new("R1").with_max_days("5");
/// assert_eq!(request.max_days.as_deref(), Some("5"));
/// assert!(request.max_budget.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageRequest {
    /// Region whose tours form the candidate pool.
    pub region: RegionId,
    /// Optional day ceiling; empty means unconstrained.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_days: Option<String>,
    /// Optional cost ceiling; empty means unconstrained.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_budget: Option<String>,
}

impl PackageRequest {
    /// Request a package for `region` without limits.
    pub fn new(region: impl Into<RegionId>) -> Self {
        Self {
            region: region.into(),
            max_days: None,
            max_budget: None,
        }
    }

    /// Set the raw day ceiling.
    #[must_use]
    pub fn with_max_days(mut self, days: impl Into<String>) -> Self {
        self.max_days = Some(days.into());
        self
    }

    /// Set the raw cost ceiling.
    #[must_use]
    pub fn with_max_budget(mut self, budget: impl Into<String>) -> Self {
        self.max_budget = Some(budget.into());
        self
    }

    /// Interpret the raw limits.
    pub fn constraints(&self) -> Result<PackageConstraints, ConstraintError> {
        PackageConstraints::parse(self.max_days.as_deref(), self.max_budget.as_deref())
    }
}

/// Statistics gathered while searching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageDiagnostics {
    /// Tours in the requested region.
    pub candidates: usize,
    /// Complete include/exclude assignments evaluated.
    pub leaves_evaluated: u64,
    /// Wall-clock time spent in the search.
    pub solve_time: Duration,
}

/// The best package found for a request.
///
/// An empty package has zero cost and zero value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Package {
    /// Chosen tours in region order.
    pub tours: Vec<Tour>,
    /// Sum of the chosen tours' costs.
    pub total_cost: f64,
    /// Sum of the values of the distinct attractions covered.
    pub total_value: u64,
    /// Sum of the chosen tours' durations.
    pub total_days: u64,
    /// Search statistics.
    pub diagnostics: PackageDiagnostics,
}

impl Package {
    /// Whether no tour was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Identifiers of the chosen tours in order.
    pub fn tour_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.tours.iter().map(|tour| tour.id)
    }
}

/// Errors returned by [`PackagePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The request carried malformed limits.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ConstraintError),
}

/// Select a package of tours for a request.
///
/// Planners must be `Send + Sync` so one instance can serve concurrent
/// requests; each call keeps its own search state.
pub trait PackagePlanner: Send + Sync {
    /// Plan a package, or report why the request cannot be served.
    fn plan(&self, request: &PackageRequest) -> Result<Package, PlanError>;
}
