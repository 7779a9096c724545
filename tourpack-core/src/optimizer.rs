//! Exhaustive package search.
//!
//! For the tours of one region the optimizer walks every include/exclude
//! assignment, rejecting a tour when it shares an attraction with the tours
//! already chosen or when it would break the day or budget ceiling. Each
//! complete assignment is valued by the distinct attractions it covers and the
//! first assignment reaching the highest value wins.
//!
//! The search is exponential in the number of tours in the region. It has no
//! value-based pruning and no internal time limit.

use std::collections::BTreeSet;
use std::time::Instant;

use log::{debug, trace};

use crate::{
    ConstraintError, Package, PackageConstraints, PackageDiagnostics, PackagePlanner,
    PackageRequest, PlanError, RegionId, RelationGraph, Tour,
};

/// Package optimizer borrowing a read-only [`RelationGraph`].
///
/// Every call owns its search state, so one optimizer may serve concurrent
/// queries against the same graph.
///
/// # Examples
/// ```
/// use tourpack_core::{PackageConstraints, PackageOptimizer, RegionId, test_support};
///
/// let graph = test_support::sample_graph();
/// let optimizer = PackageOptimizer::new(&graph);
/// let limits = PackageConstraints::unbounded().with_max_days(2);
/// let package = optimizer.generate_package(&RegionId::from("R1"), &limits);
/// assert_eq!(package.tour_ids().collect::<Vec<_>>(), vec![1]);
/// assert_eq!(package.total_value, 15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PackageOptimizer<'g> {
    graph: &'g RelationGraph,
}

impl<'g> PackageOptimizer<'g> {
    /// Construct an optimizer over `graph`.
    #[must_use]
    pub const fn new(graph: &'g RelationGraph) -> Self {
        Self { graph }
    }

    /// Find the highest-value package of tours in `region`.
    ///
    /// A region without tours yields an empty package with zero cost and value.
    #[must_use]
    pub fn generate_package(&self, region: &RegionId, constraints: &PackageConstraints) -> Package {
        let started_at = Instant::now();
        let candidates: Vec<Candidate<'g>> = self
            .graph
            .region_slots(region)
            .into_iter()
            .filter_map(|slot| {
                Some(Candidate {
                    tour: self.graph.tour_at(slot)?,
                    attractions: self.graph.links_of_tour_slot(slot)?,
                })
            })
            .collect();
        debug!(
            "searching {} candidate tours in region {region} (max days {:?}, max budget {:?})",
            candidates.len(),
            constraints.max_days,
            constraints.max_budget
        );

        let mut search = Search {
            graph: self.graph,
            candidates: &candidates,
            constraints,
            chosen: Vec::with_capacity(candidates.len()),
            best: None,
            leaves: 0,
        };
        search.explore(0, 0, 0.0, &BTreeSet::new());

        let leaves = search.leaves;
        let best = search.best.unwrap_or_default();
        let diagnostics = PackageDiagnostics {
            candidates: candidates.len(),
            leaves_evaluated: leaves,
            solve_time: started_at.elapsed(),
        };
        debug!(
            "region {region}: best value {} at cost {} over {} tours ({} leaves in {:?})",
            best.value,
            best.cost,
            best.tours.len(),
            leaves,
            diagnostics.solve_time
        );
        Package {
            tours: best.tours.into_iter().cloned().collect(),
            total_cost: best.cost,
            total_value: best.value,
            total_days: best.days,
            diagnostics,
        }
    }

    /// Parse raw limits and run [`Self::generate_package`].
    ///
    /// Malformed limits abort the query before any search work.
    pub fn generate_package_from_input(
        &self,
        region: &RegionId,
        max_days: Option<&str>,
        max_budget: Option<&str>,
    ) -> Result<Package, ConstraintError> {
        let constraints = PackageConstraints::parse(max_days, max_budget)?;
        Ok(self.generate_package(region, &constraints))
    }
}

impl PackagePlanner for PackageOptimizer<'_> {
    fn plan(&self, request: &PackageRequest) -> Result<Package, PlanError> {
        let constraints = request.constraints()?;
        Ok(self.generate_package(&request.region, &constraints))
    }
}

/// A tour of the region together with its attraction slots.
struct Candidate<'g> {
    tour: &'g Tour,
    attractions: &'g BTreeSet<usize>,
}

#[derive(Default)]
struct Best<'g> {
    tours: Vec<&'g Tour>,
    cost: f64,
    value: u64,
    days: u64,
}

/// State owned by a single search.
struct Search<'a, 'g> {
    graph: &'g RelationGraph,
    candidates: &'a [Candidate<'g>],
    constraints: &'a PackageConstraints,
    chosen: Vec<&'g Tour>,
    best: Option<Best<'g>>,
    leaves: u64,
}

impl<'g> Search<'_, 'g> {
    #[expect(
        clippy::float_arithmetic,
        reason = "package cost is the running sum of tour prices"
    )]
    fn explore(&mut self, index: usize, days: u64, cost: f64, covered: &BTreeSet<usize>) {
        let Some(candidate) = self.candidates.get(index) else {
            self.record_leaf(days, cost, covered);
            return;
        };

        self.explore(index + 1, days, cost, covered);

        if !candidate.attractions.is_disjoint(covered) {
            trace!("tour {} overlaps the chosen attractions", candidate.tour.id);
            return;
        }
        let next_days = days + u64::from(candidate.tour.duration_days);
        if !self.constraints.admits_days(next_days) {
            return;
        }
        let next_cost = cost + candidate.tour.cost;
        if !self.constraints.admits_cost(next_cost) {
            return;
        }

        let next_covered: BTreeSet<usize> = covered.union(candidate.attractions).copied().collect();
        self.chosen.push(candidate.tour);
        self.explore(index + 1, next_days, next_cost, &next_covered);
        self.chosen.pop();
    }

    fn record_leaf(&mut self, days: u64, cost: f64, covered: &BTreeSet<usize>) {
        self.leaves += 1;
        let value: u64 = covered
            .iter()
            .filter_map(|slot| self.graph.attraction_at(*slot))
            .map(|attraction| u64::from(attraction.cultural_value))
            .sum();
        // Ties keep the earlier package.
        if self.best.as_ref().is_none_or(|best| value > best.value) {
            self.best = Some(Best {
                tours: self.chosen.clone(),
                cost,
                value,
                days,
            });
        }
    }
}
