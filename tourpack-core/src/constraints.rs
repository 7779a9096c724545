//! Optional ceilings on the total length and price of a package.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while interpreting constraint input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    /// The day limit is not a non-negative integer.
    #[error("maximum days must be a non-negative integer, got {value:?}")]
    InvalidMaxDays {
        /// Text supplied by the caller.
        value: String,
    },
    /// The budget is not a non-negative finite number.
    #[error("maximum budget must be a non-negative number, got {value:?}")]
    InvalidMaxBudget {
        /// Text supplied by the caller.
        value: String,
    },
}

/// Limits applied to every candidate package. `None` means unconstrained.
///
/// # Examples
/// ```
/// use tourpack_core::PackageConstraints;
///
/// # fn main() -> Result<(), tourpack_core::ConstraintError> {
/// let limits = PackageConstraints::parse(Some("5"), Some(""))?;
/// assert_eq!(limits.max_days, Some(5));
/// assert_eq!(limits.max_budget, None);
/// assert!(PackageConstraints::parse(Some("five"), None).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageConstraints {
    /// Ceiling on the summed tour durations.
    pub max_days: Option<u32>,
    /// Ceiling on the summed tour costs.
    pub max_budget: Option<f64>,
}

impl PackageConstraints {
    /// Constraints that admit every package.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_days: None,
            max_budget: None,
        }
    }

    /// Limit the total duration.
    #[must_use]
    pub const fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = Some(days);
        self
    }

    /// Limit the total cost.
    pub fn with_max_budget(mut self, budget: f64) -> Result<Self, ConstraintError> {
        if !is_valid_budget(budget) {
            return Err(ConstraintError::InvalidMaxBudget {
                value: budget.to_string(),
            });
        }
        self.max_budget = Some(budget);
        Ok(self)
    }

    /// Interpret raw caller input.
    ///
    /// `None` and empty strings leave the corresponding limit unset. Anything
    /// else must parse completely, ignoring surrounding whitespace, or the
    /// whole call fails.
    pub fn parse(
        max_days: Option<&str>,
        max_budget: Option<&str>,
    ) -> Result<Self, ConstraintError> {
        let days = match non_empty(max_days) {
            None => None,
            Some(text) => Some(text.trim().parse::<u32>().map_err(|_| {
                ConstraintError::InvalidMaxDays {
                    value: text.to_owned(),
                }
            })?),
        };
        let budget = match non_empty(max_budget) {
            None => None,
            Some(text) => Some(
                text.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|value| is_valid_budget(*value))
                    .ok_or_else(|| ConstraintError::InvalidMaxBudget {
                        value: text.to_owned(),
                    })?,
            ),
        };
        Ok(Self {
            max_days: days,
            max_budget: budget,
        })
    }

    /// Whether a running day total stays within the limit.
    #[must_use]
    pub fn admits_days(&self, days: u64) -> bool {
        self.max_days.is_none_or(|limit| days <= u64::from(limit))
    }

    /// Whether a running cost total stays within the limit.
    #[must_use]
    pub fn admits_cost(&self, cost: f64) -> bool {
        self.max_budget.is_none_or(|limit| cost <= limit)
    }
}

fn non_empty(input: Option<&str>) -> Option<&str> {
    input.filter(|text| !text.is_empty())
}

fn is_valid_budget(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
