//! # Value Comparison
//!
//! One comparison rule per `SortValue` kind:
//!
//! - absent equals absent and orders before every present value
//! - integers and floats compare by magnitude, across kinds
//! - text compares by code point
//! - booleans order `false` before `true`
//! - opaque values use their own `Ord` when the concrete types match
//!
//! Any other pairing is a type mismatch.

use crate::types::SortValue;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Error types for comparison operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("Type mismatch in comparison: {left} vs {right}")]
    TypeMismatch { left: String, right: String },
}

impl ComparisonError {
    fn mismatch(left: &SortValue, right: &SortValue) -> Self {
        Self::TypeMismatch {
            left: left.kind_name().to_string(),
            right: right.kind_name().to_string(),
        }
    }
}

/// Compare two resolved values in ascending order
pub fn compare_values(left: &SortValue, right: &SortValue) -> Result<Ordering, ComparisonError> {
    match (left, right) {
        (SortValue::Absent, SortValue::Absent) => Ok(Ordering::Equal),
        (SortValue::Absent, _) => Ok(Ordering::Less),
        (_, SortValue::Absent) => Ok(Ordering::Greater),
        (SortValue::Boolean(a), SortValue::Boolean(b)) => Ok(a.cmp(b)),
        (SortValue::Integer(a), SortValue::Integer(b)) => Ok(a.cmp(b)),
        (SortValue::Float(a), SortValue::Float(b)) => Ok(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
        (SortValue::Integer(a), SortValue::Float(b)) => Ok(numeric::compare_mixed(*a, *b)),
        (SortValue::Float(a), SortValue::Integer(b)) => {
            Ok(numeric::compare_mixed(*b, *a).reverse())
        }
        (SortValue::Text(a), SortValue::Text(b)) => Ok(a.as_str().cmp(b.as_str())),
        (SortValue::Comparable(a), SortValue::Comparable(b)) => a
            .compare(b)
            .ok_or_else(|| ComparisonError::mismatch(left, right)),
        _ => Err(ComparisonError::mismatch(left, right)),
    }
}

/// Deterministic order between incompatible kinds.
///
/// Absent first, then booleans, numbers, text and finally opaque values
/// grouped by type name. Used only when a caller mixed kinds under one key.
/// Agrees with `compare_values` wherever absent is involved.
pub fn fallback_order(left: &SortValue, right: &SortValue) -> Ordering {
    fn rank(value: &SortValue) -> u8 {
        match value {
            SortValue::Absent => 0,
            SortValue::Boolean(_) => 1,
            SortValue::Integer(_) | SortValue::Float(_) => 2,
            SortValue::Text(_) => 3,
            SortValue::Comparable(_) => 4,
        }
    }

    rank(left)
        .cmp(&rank(right))
        .then_with(|| left.kind_name().cmp(right.kind_name()))
}

/// Integer/float promotion
pub mod numeric {
    use super::*;

    /// Compare an integer against a float by magnitude.
    ///
    /// NaN orders above every number, matching `OrderedFloat`.
    pub fn compare_mixed(integer: i128, float: f64) -> Ordering {
        if float.is_nan() {
            return Ordering::Less;
        }

        let promoted = integer as f64;
        match OrderedFloat(promoted).cmp(&OrderedFloat(float)) {
            // Promotion rounds large integers; settle ties on the integer side
            Ordering::Equal if float.fract() == 0.0 && float.abs() < 1.7e38 => {
                integer.cmp(&(float as i128))
            }
            ordering => ordering,
        }
    }

}
