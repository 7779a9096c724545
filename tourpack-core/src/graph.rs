//! In-memory many-to-many graph between tours and attractions.
//!
//! Entities live in two arenas kept in insertion order. Links are stored as a
//! pair of index-based adjacency maps so neither side owns the other: each tour
//! slot maps to the attraction slots it visits and each attraction slot maps
//! back to the tour slots visiting it. The graph is immutable once built and can
//! be shared freely between concurrent optimizer runs.

use std::collections::{BTreeSet, HashMap, hash_map::Entry};

use log::{debug, trace};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Attraction, AttractionId, RegionId, Tour, TourId, TourStore};

/// A tour-attraction pair as supplied by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Relation {
    /// Tour side of the link.
    pub tour_id: TourId,
    /// Attraction side of the link.
    pub attraction_id: AttractionId,
}

impl Relation {
    /// Construct a relation pair.
    #[must_use]
    pub const fn new(tour_id: TourId, attraction_id: AttractionId) -> Self {
        Self {
            tour_id,
            attraction_id,
        }
    }
}

/// Errors returned by [`RelationGraph::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two tours share an identifier.
    #[error("tour id {id} appears more than once")]
    DuplicateTour {
        /// Repeated identifier.
        id: TourId,
    },
    /// Two attractions share an identifier.
    #[error("attraction id {id} appears more than once")]
    DuplicateAttraction {
        /// Repeated identifier.
        id: AttractionId,
    },
}

/// Errors returned by [`RelationGraph::from_store`].
#[derive(Debug, Error)]
pub enum LoadGraphError<E> {
    /// The store failed to produce one of the collections.
    #[error("failed to load {collection} from the tour store")]
    Store {
        /// Collection being read.
        collection: &'static str,
        /// Store-specific failure.
        #[source]
        source: E,
    },
    /// The loaded entities broke a graph invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Bipartite tour-attraction graph.
///
/// # Examples
/// ```
/// use tourpack_core::{Attraction, Relation, RelationGraph, Tour};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = RelationGraph::new(
///     [Tour::new(1, "R1", "Langhe", 2, 100.0)?],
///     [Attraction::new(10, "Castle", 7)],
///     [Relation::new(1, 10), Relation::new(1, 99)],
/// )?;
/// assert!(graph.is_linked(1, 10));
/// assert_eq!(graph.tours_of(10).count(), 1);
/// assert_eq!(graph.skipped_relations(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    tours: Vec<Tour>,
    tour_slots: HashMap<TourId, usize>,
    attractions: Vec<Attraction>,
    attraction_slots: HashMap<AttractionId, usize>,
    tour_links: Vec<BTreeSet<usize>>,
    attraction_links: Vec<BTreeSet<usize>>,
    skipped_relations: usize,
}

impl RelationGraph {
    /// Build the graph from entity collections and relation pairs.
    ///
    /// Pairs naming an unknown tour or attraction are dropped without error;
    /// relation data may reference entities outside the loaded scope.
    pub fn new<T, A, R>(tours: T, attractions: A, relations: R) -> Result<Self, GraphError>
    where
        T: IntoIterator<Item = Tour>,
        A: IntoIterator<Item = Attraction>,
        R: IntoIterator<Item = Relation>,
    {
        let mut graph = Self::default();
        for tour in tours {
            graph.insert_tour(tour)?;
        }
        for attraction in attractions {
            graph.insert_attraction(attraction)?;
        }
        for relation in relations {
            graph.link(relation);
        }
        debug!(
            "built relation graph with {} tours, {} attractions, {} links ({} relations skipped)",
            graph.tours.len(),
            graph.attractions.len(),
            graph.link_count(),
            graph.skipped_relations
        );
        Ok(graph)
    }

    /// Load every collection from `store` and build the graph.
    pub fn from_store<S>(store: &S) -> Result<Self, LoadGraphError<S::Error>>
    where
        S: TourStore + ?Sized,
    {
        let tours = store.load_tours().map_err(|source| LoadGraphError::Store {
            collection: "tours",
            source,
        })?;
        let attractions = store
            .load_attractions()
            .map_err(|source| LoadGraphError::Store {
                collection: "attractions",
                source,
            })?;
        let relations = store
            .load_relations()
            .map_err(|source| LoadGraphError::Store {
                collection: "relations",
                source,
            })?;
        Ok(Self::new(tours, attractions, relations)?)
    }

    fn insert_tour(&mut self, tour: Tour) -> Result<(), GraphError> {
        match self.tour_slots.entry(tour.id) {
            Entry::Occupied(_) => Err(GraphError::DuplicateTour { id: tour.id }),
            Entry::Vacant(slot) => {
                slot.insert(self.tours.len());
                self.tours.push(tour);
                self.tour_links.push(BTreeSet::new());
                Ok(())
            }
        }
    }

    fn insert_attraction(&mut self, attraction: Attraction) -> Result<(), GraphError> {
        match self.attraction_slots.entry(attraction.id) {
            Entry::Occupied(_) => Err(GraphError::DuplicateAttraction { id: attraction.id }),
            Entry::Vacant(slot) => {
                slot.insert(self.attractions.len());
                self.attractions.push(attraction);
                self.attraction_links.push(BTreeSet::new());
                Ok(())
            }
        }
    }

    fn link(&mut self, relation: Relation) {
        let tour_slot = self.tour_slots.get(&relation.tour_id).copied();
        let attraction_slot = self.attraction_slots.get(&relation.attraction_id).copied();
        let (Some(tour_slot), Some(attraction_slot)) = (tour_slot, attraction_slot) else {
            trace!(
                "skipping relation {} -> {}: unknown endpoint",
                relation.tour_id, relation.attraction_id
            );
            self.skipped_relations += 1;
            return;
        };
        // Both adjacency vectors are pushed alongside their arenas.
        if let Some(links) = self.tour_links.get_mut(tour_slot) {
            links.insert(attraction_slot);
        }
        if let Some(links) = self.attraction_links.get_mut(attraction_slot) {
            links.insert(tour_slot);
        }
    }

    /// Look up a tour by identifier.
    #[must_use]
    pub fn tour(&self, id: TourId) -> Option<&Tour> {
        self.tour_slots.get(&id).and_then(|slot| self.tours.get(*slot))
    }

    /// Look up an attraction by identifier.
    #[must_use]
    pub fn attraction(&self, id: AttractionId) -> Option<&Attraction> {
        self.attraction_slots
            .get(&id)
            .and_then(|slot| self.attractions.get(*slot))
    }

    /// All tours in insertion order.
    pub fn tours(&self) -> impl Iterator<Item = &Tour> {
        self.tours.iter()
    }

    /// All attractions in insertion order.
    pub fn attractions(&self) -> impl Iterator<Item = &Attraction> {
        self.attractions.iter()
    }

    /// Number of tours in the graph.
    #[must_use]
    pub fn tour_count(&self) -> usize {
        self.tours.len()
    }

    /// Number of attractions in the graph.
    #[must_use]
    pub fn attraction_count(&self) -> usize {
        self.attractions.len()
    }

    /// Number of distinct tour-attraction links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.tour_links.iter().map(BTreeSet::len).sum()
    }

    /// Number of relation pairs dropped because an endpoint was unknown.
    #[must_use]
    pub const fn skipped_relations(&self) -> usize {
        self.skipped_relations
    }

    /// Attractions visited by the given tour. Empty for unknown tours.
    pub fn attractions_of(&self, tour_id: TourId) -> impl Iterator<Item = &Attraction> {
        self.tour_slots
            .get(&tour_id)
            .and_then(|slot| self.tour_links.get(*slot))
            .into_iter()
            .flatten()
            .filter_map(|slot| self.attractions.get(*slot))
    }

    /// Tours visiting the given attraction. Empty for unknown attractions.
    pub fn tours_of(&self, attraction_id: AttractionId) -> impl Iterator<Item = &Tour> {
        self.attraction_slots
            .get(&attraction_id)
            .and_then(|slot| self.attraction_links.get(*slot))
            .into_iter()
            .flatten()
            .filter_map(|slot| self.tours.get(*slot))
    }

    /// Whether `tour_id` is linked to `attraction_id`.
    #[must_use]
    pub fn is_linked(&self, tour_id: TourId, attraction_id: AttractionId) -> bool {
        let Some(attraction_slot) = self.attraction_slots.get(&attraction_id) else {
            return false;
        };
        self.tour_slots
            .get(&tour_id)
            .and_then(|slot| self.tour_links.get(*slot))
            .is_some_and(|links| links.contains(attraction_slot))
    }

    /// Tours sold in `region`, in insertion order.
    pub fn tours_in_region<'a>(&'a self, region: &'a RegionId) -> impl Iterator<Item = &'a Tour> {
        self.tours.iter().filter(move |tour| &tour.region == region)
    }

    /// Arena slots of the tours sold in `region`, in insertion order.
    pub(crate) fn region_slots(&self, region: &RegionId) -> Vec<usize> {
        self.tours
            .iter()
            .enumerate()
            .filter(|(_, tour)| &tour.region == region)
            .map(|(slot, _)| slot)
            .collect()
    }

    pub(crate) fn tour_at(&self, slot: usize) -> Option<&Tour> {
        self.tours.get(slot)
    }

    pub(crate) fn attraction_at(&self, slot: usize) -> Option<&Attraction> {
        self.attractions.get(slot)
    }

    /// Attraction slots linked to the tour in `slot`.
    pub(crate) fn links_of_tour_slot(&self, slot: usize) -> Option<&BTreeSet<usize>> {
        self.tour_links.get(slot)
    }
}
