//! Review rating type.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// Ratings are 1 through 5 stars.
    #[error("rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// A review rating, 1 through 5 stars.
///
/// Range-checked on construction and on deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: u8 = 1;
    /// Highest allowed rating.
    pub const MAX: u8 = 5;

    /// Create a new rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for values outside 1..=5.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= Self::MIN && stars <= Self::MAX {
            Ok(Self(stars))
        } else {
            Err(RatingError::OutOfRange(stars))
        }
    }

    /// Get the number of stars.
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).unwrap().stars(), stars);
        }
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange(0)));
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange(6)));
    }

    #[test]
    fn test_deserialize_validates() {
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.stars(), 4);
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::new(3).unwrap().to_string(), "3/5");
    }
}
