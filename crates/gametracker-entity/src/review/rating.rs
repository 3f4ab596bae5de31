//! Star rating value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use gametracker_core::AppError;

/// Whole-star rating between [`Rating::MIN`] and [`Rating::MAX`] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Rating(i32);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: i32 = 1;
    /// Highest accepted rating.
    pub const MAX: i32 = 5;

    const OUT_OF_RANGE: &'static str = "Rating must be a whole number between 1 and 5.";

    /// The numeric value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Accept a JSON number only if it is an integer in range.
    ///
    /// `4.0` is treated as `4`; `4.5` is rejected.
    pub fn from_json(number: &serde_json::Number) -> Result<Self, AppError> {
        if let Some(n) = number.as_i64() {
            return Self::try_from(n);
        }
        match number.as_f64() {
            Some(f) if f.fract() == 0.0 && f.is_finite() => Self::try_from(f as i64),
            _ => Err(AppError::validation(Self::OUT_OF_RANGE)),
        }
    }

    /// Accept any JSON value, rejecting everything but an in-range integer.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, AppError> {
        match value {
            serde_json::Value::Number(n) => Self::from_json(n),
            _ => Err(AppError::validation(Self::OUT_OF_RANGE)),
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as i32))
        } else {
            Err(AppError::validation(Self::OUT_OF_RANGE))
        }
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> i32 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
