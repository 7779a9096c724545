//! Regions group tours into the candidate pool for a query.
//!
//! Region identifiers are opaque. They are held in a normalized textual form so
//! identifiers arriving as integers from one source and as strings from another
//! still compare equal.
//!
//! # Examples
//! ```
//! use tourpack_core::RegionId;
//!
//! assert_eq!(RegionId::from(7_u64), RegionId::from("7"));
//! assert_eq!(RegionId::from("PIE").as_str(), "PIE");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque region identifier compared by its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionId(String);

impl RegionId {
    /// Build an identifier from any displayable value.
    ///
    /// # Examples
    /// ```
    /// use tourpack_core::RegionId;
    ///
    /// let id = RegionId::new(12);
    /// assert_eq!(id.as_str(), "12");
    /// ```
    pub fn new(value: impl fmt::Display) -> Self {
        Self(value.to_string())
    }

    /// Borrow the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RegionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for RegionId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<i64> for RegionId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// A region callers may pick when requesting a package.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Identifier matched against [`Tour::region`](crate::Tour::region).
    pub id: RegionId,
    /// Human-readable name.
    pub name: String,
}

impl Region {
    /// Construct a region.
    pub fn new(id: impl Into<RegionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RegionId::from(3_u64), RegionId::from("3"))]
    #[case(RegionId::from(-4_i64), RegionId::from("-4"))]
    #[case(RegionId::from(String::from("LOM")), RegionId::new("LOM"))]
    fn textual_forms_compare_equal(#[case] left: RegionId, #[case] right: RegionId) {
        assert_eq!(left, right);
    }

    #[rstest]
    fn comparison_is_not_normalised_beyond_text() {
        assert_ne!(RegionId::from(" 3"), RegionId::from(3_u64));
        assert_ne!(RegionId::from("lom"), RegionId::from("LOM"));
    }

    #[rstest]
    fn region_displays_its_identifier() {
        let region = Region::new("TOS", "Toscana");
        assert_eq!(region.id.to_string(), "TOS");
        assert_eq!(region.name, "Toscana");
    }
}
