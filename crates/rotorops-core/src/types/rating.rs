//! Likelihood and severity ratings on the 1..=5 scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RatingError;

/// An integer rating in 1..=5.
///
/// The only way to build one is through [`Rating::new`] or `TryFrom`, so a
/// `Rating` held by a record is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// All ratings in ascending order.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    /// Build a rating, rejecting values outside 1..=5.
    pub fn new(value: u8) -> Result<Self, RatingError> {
        Self::try_from(i64::from(value))
    }

    /// The raw value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingError::OutOfRange { value })
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
