//! Purchasable touring offers.
//!
//! A tour belongs to exactly one region and carries the two quantities the
//! package constraints act on: its length in days and its price.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::RegionId;

/// Identifier of a [`Tour`].
pub type TourId = u64;

/// Errors returned by [`Tour::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// The cost was negative, NaN or infinite.
    #[error("tour {id} has invalid cost {cost}")]
    InvalidCost {
        /// Identifier of the rejected tour.
        id: TourId,
        /// Offending cost.
        cost: f64,
    },
}

/// A touring offer within a region.
///
/// Linked attractions are not stored on the tour itself; they live in the
/// [`RelationGraph`](crate::RelationGraph).
///
/// # Examples
/// ```
/// use tourpack_core::Tour;
///
/// # fn main() -> Result<(), tourpack_core::TourError> {
/// let tour = Tour::new(1, "R1", "Langhe", 2, 100.0)?;
/// assert_eq!(tour.duration_days, 2);
/// assert!(Tour::new(2, "R1", "Broken", 1, -5.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    /// Unique identifier.
    pub id: TourId,
    /// Region the tour is sold in.
    pub region: RegionId,
    /// Display name.
    pub name: String,
    /// Length of the tour in days.
    pub duration_days: u32,
    /// Price of the tour.
    pub cost: f64,
}

impl Tour {
    /// Validate and construct a [`Tour`].
    pub fn new(
        id: TourId,
        region: impl Into<RegionId>,
        name: impl Into<String>,
        duration_days: u32,
        cost: f64,
    ) -> Result<Self, TourError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(TourError::InvalidCost { id, cost });
        }
        Ok(Self {
            id,
            region: region.into(),
            name: name.into(),
            duration_days,
            cost,
        })
    }
}
