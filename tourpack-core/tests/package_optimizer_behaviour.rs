//! Behavioural tests for `PackageOptimizer` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tourpack_core::{
    GraphError, Package, PackageOptimizer, PackagePlanner, PackageRequest, PlanError, Relation,
    RelationGraph, test_support::MemoryStore,
};

/// Shared state for optimizer scenarios.
#[derive(Debug, Default)]
struct OptimizerWorld {
    store: RefCell<MemoryStore>,
    graph: RefCell<Option<Result<RelationGraph, GraphError>>>,
    outcome: RefCell<Option<Result<Package, PlanError>>>,
}

impl OptimizerWorld {
    fn load(&self, store: MemoryStore) {
        let graph = RelationGraph::new(
            store.tours.iter().cloned(),
            store.attractions.iter().cloned(),
            store.relations.iter().copied(),
        );
        self.store.replace(store);
        self.graph.replace(Some(graph));
    }

    fn request(&self, request: &PackageRequest) {
        let outcome = {
            let graph = self.graph.borrow();
            let graph = graph
                .as_ref()
                .expect("catalogue should be loaded")
                .as_ref()
                .expect("graph should build");
            PackageOptimizer::new(graph).plan(request)
        };
        self.outcome.replace(Some(outcome));
    }

    fn package(&self) -> Package {
        self.outcome
            .borrow()
            .as_ref()
            .expect("a request should have been made")
            .as_ref()
            .expect("request should succeed")
            .clone()
    }
}

#[fixture]
fn world() -> OptimizerWorld {
    OptimizerWorld::default()
}

#[given("the sample catalogue")]
fn given_sample(world: &OptimizerWorld) {
    world.load(MemoryStore::sample());
}

#[given("the sample catalogue with an overlapping tour")]
fn given_overlap(world: &OptimizerWorld) {
    world.load(MemoryStore::sample_with_overlap());
}

#[given("a catalogue whose relations reference an unknown attraction")]
fn given_dangling(world: &OptimizerWorld) {
    let mut store = MemoryStore::sample();
    store.relations.push(Relation::new(2, 404));
    world.load(store);
}

#[when("I request a package for R1 limited to 5 days and a budget of 300")]
fn request_both_limits(world: &OptimizerWorld) {
    world.request(&PackageRequest::new("R1").with_max_days("5").with_max_budget("300"));
}

#[when("I request a package for R1 limited to 2 days")]
fn request_day_limit(world: &OptimizerWorld) {
    world.request(&PackageRequest::new("R1").with_max_days("2"));
}

#[when("I request a package for R1 without limits")]
fn request_unbounded(world: &OptimizerWorld) {
    world.request(&PackageRequest::new("R1").with_max_days("").with_max_budget(""));
}

#[when("I request a package for R2 without limits")]
fn request_empty_region(world: &OptimizerWorld) {
    world.request(&PackageRequest::new("R2"));
}

#[when("I request a package for R1 with a malformed day limit")]
fn request_malformed(world: &OptimizerWorld) {
    world.request(&PackageRequest::new("R1").with_max_days("three"));
}

#[then("the package holds tours 1 and 2")]
fn holds_both(world: &OptimizerWorld) {
    let ids: Vec<_> = world.package().tour_ids().collect();
    assert_eq!(ids, vec![1, 2]);
}

#[then("the package holds only tour 1")]
fn holds_first(world: &OptimizerWorld) {
    let ids: Vec<_> = world.package().tour_ids().collect();
    assert_eq!(ids, vec![1]);
}

#[then("the package costs 250 with value 35")]
fn costs_250(world: &OptimizerWorld) {
    let package = world.package();
    assert!((package.total_cost - 250.0).abs() < f64::EPSILON);
    assert_eq!(package.total_value, 35);
}

#[then("the package costs 100 with value 15")]
fn costs_100(world: &OptimizerWorld) {
    let package = world.package();
    assert!((package.total_cost - 100.0).abs() < f64::EPSILON);
    assert_eq!(package.total_value, 15);
}

#[then("tours 1 and 3 are not both chosen")]
fn overlap_excluded(world: &OptimizerWorld) {
    let ids: Vec<_> = world.package().tour_ids().collect();
    assert!(!(ids.contains(&1) && ids.contains(&3)), "got {ids:?}");
}

#[then("the package is empty with zero cost and value")]
fn empty_package(world: &OptimizerWorld) {
    let package = world.package();
    assert!(package.is_empty());
    assert!(package.total_cost.abs() < f64::EPSILON);
    assert_eq!(package.total_value, 0);
}

#[then("the catalogue loads without error")]
fn loads_cleanly(world: &OptimizerWorld) {
    let graph = world.graph.borrow();
    assert!(matches!(graph.as_ref(), Some(Ok(_))));
}

#[then("the unknown attraction produces no link")]
fn no_dangling_link(world: &OptimizerWorld) {
    let graph = world.graph.borrow();
    let graph = graph
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .expect("graph should build");
    assert!(!graph.is_linked(2, 404));
    assert_eq!(graph.attractions_of(2).count(), 1);
    assert_eq!(graph.skipped_relations(), 1);
    assert_eq!(graph.link_count(), world.store.borrow().relations.len() - 1);
}

#[then("the request is rejected as invalid")]
fn rejected(world: &OptimizerWorld) {
    let outcome = world.outcome.borrow();
    assert!(matches!(
        outcome.as_ref(),
        Some(Err(PlanError::InvalidRequest(_)))
    ));
}

#[scenario(path = "tests/features/package_optimizer.feature", index = 0)]
fn both_tours_fit(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_optimizer.feature", index = 1)]
fn day_limit_excludes(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_optimizer.feature", index = 2)]
fn overlapping_tours(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_optimizer.feature", index = 3)]
fn empty_region(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_optimizer.feature", index = 4)]
fn dangling_relations(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_optimizer.feature", index = 5)]
fn malformed_limits(world: OptimizerWorld) {
    let _ = world;
}
