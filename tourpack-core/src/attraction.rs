//! Points of cultural interest visited by tours.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of an [`Attraction`].
pub type AttractionId = u64;

/// A place with a cultural value, possibly visited by several tours.
///
/// # Examples
/// ```
/// use tourpack_core::Attraction;
///
/// let attraction = Attraction::new(1, "Duomo", 10);
/// assert_eq!(attraction.cultural_value, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attraction {
    /// Unique identifier.
    pub id: AttractionId,
    /// Display name.
    pub name: String,
    /// Value credited once per package that covers this attraction.
    pub cultural_value: u32,
}

impl Attraction {
    /// Construct an attraction.
    pub fn new(id: AttractionId, name: impl Into<String>, cultural_value: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cultural_value,
        }
    }
}
