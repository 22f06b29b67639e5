//! # Sort Values
//!
//! `SortValue` is the closed set of value kinds a sort key can resolve to.
//! Each kind has a single comparison rule (see `execution::comparisons`).
//! Types outside the primitive kinds travel as `Comparable`, which carries
//! any `Ord` value and only compares against values of the same concrete type.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Object-safe total ordering over a concrete value type
pub trait OrderedValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Rust type name of the concrete value, for diagnostics
    fn type_name(&self) -> &'static str;

    /// Compare against another value, `None` when the concrete types differ
    fn cmp_dyn(&self, other: &dyn OrderedValue) -> Option<Ordering>;
}

impl<T> OrderedValue for T
where
    T: Ord + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn cmp_dyn(&self, other: &dyn OrderedValue) -> Option<Ordering> {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|other| self.cmp(other))
    }
}

/// Shared handle to an `Ord` value of any type
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn OrderedValue>);

impl OpaqueValue {
    pub fn new<T>(value: T) -> Self
    where
        T: Ord + fmt::Debug + Send + Sync + 'static,
    {
        Self(Arc::new(value))
    }

    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    pub fn value_type_id(&self) -> TypeId {
        Any::type_id(self.0.as_any())
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Compare two opaque values of the same concrete type
    pub fn compare(&self, other: &OpaqueValue) -> Option<Ordering> {
        self.0.cmp_dyn(other.0.as_ref())
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

/// Value resolved from a record for one sort key
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SortValue {
    /// Field or an intermediate record along the path is missing
    #[default]
    Absent,
    Boolean(bool),
    Integer(i128),
    Float(f64),
    Text(String),
    Comparable(OpaqueValue),
}

impl SortValue {
    /// Wrap any ordered value that is not one of the primitive kinds
    pub fn comparable<T>(value: T) -> Self
    where
        T: Ord + fmt::Debug + Send + Sync + 'static,
    {
        SortValue::Comparable(OpaqueValue::new(value))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SortValue::Absent)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, SortValue::Integer(_) | SortValue::Float(_))
    }

    /// Get as text if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SortValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if possible
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            SortValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float, promoting integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SortValue::Float(f) => Some(*f),
            SortValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Short name of the value kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            SortValue::Absent => "absent",
            SortValue::Boolean(_) => "boolean",
            SortValue::Integer(_) => "integer",
            SortValue::Float(_) => "float",
            SortValue::Text(_) => "text",
            SortValue::Comparable(value) => value.type_name(),
        }
    }

    /// Whether two values can be ordered against each other.
    ///
    /// Absent is compatible with everything, integers and floats are
    /// mutually compatible, opaque values need the same concrete type.
    pub fn is_compatible_with(&self, other: &SortValue) -> bool {
        match (self, other) {
            (SortValue::Absent, _) | (_, SortValue::Absent) => true,
            (SortValue::Boolean(_), SortValue::Boolean(_)) => true,
            (SortValue::Text(_), SortValue::Text(_)) => true,
            (a, b) if a.is_numeric() && b.is_numeric() => true,
            (SortValue::Comparable(a), SortValue::Comparable(b)) => {
                a.value_type_id() == b.value_type_id()
            }
            _ => false,
        }
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortValue::Absent => write!(f, "absent"),
            SortValue::Boolean(b) => write!(f, "{}", b),
            SortValue::Integer(i) => write!(f, "{}", i),
            SortValue::Float(fl) => write!(f, "{}", fl),
            SortValue::Text(s) => write!(f, "\"{}\"", s),
            SortValue::Comparable(value) => write!(f, "{:?}", value),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Conversion from a borrowed field into a `SortValue`
///
/// Implemented for primitives, strings, chrono date/time types and `Option`
/// of any of these; `None` converts to `SortValue::Absent`.
pub trait ToSortValue {
    fn to_sort_value(&self) -> SortValue;
}

macro_rules! integer_sort_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToSortValue for $ty {
                fn to_sort_value(&self) -> SortValue {
                    SortValue::Integer(*self as i128)
                }
            }

            impl From<$ty> for SortValue {
                fn from(value: $ty) -> Self {
                    SortValue::Integer(value as i128)
                }
            }
        )*
    };
}

integer_sort_values!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

macro_rules! comparable_sort_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToSortValue for $ty {
                fn to_sort_value(&self) -> SortValue {
                    SortValue::comparable(self.clone())
                }
            }

            impl From<$ty> for SortValue {
                fn from(value: $ty) -> Self {
                    SortValue::comparable(value)
                }
            }
        )*
    };
}

comparable_sort_values!(
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
    chrono::NaiveDate,
    chrono::NaiveDateTime,
    chrono::NaiveTime,
);

impl ToSortValue for f32 {
    fn to_sort_value(&self) -> SortValue {
        SortValue::Float(f64::from(*self))
    }
}

impl ToSortValue for f64 {
    fn to_sort_value(&self) -> SortValue {
        SortValue::Float(*self)
    }
}

impl ToSortValue for bool {
    fn to_sort_value(&self) -> SortValue {
        SortValue::Boolean(*self)
    }
}

impl ToSortValue for char {
    fn to_sort_value(&self) -> SortValue {
        SortValue::Text(self.to_string())
    }
}

impl ToSortValue for str {
    fn to_sort_value(&self) -> SortValue {
        SortValue::Text(self.to_string())
    }
}

impl ToSortValue for String {
    fn to_sort_value(&self) -> SortValue {
        SortValue::Text(self.clone())
    }
}

impl<T: ToSortValue + ?Sized> ToSortValue for &T {
    fn to_sort_value(&self) -> SortValue {
        (**self).to_sort_value()
    }
}

impl<T: ToSortValue + ?Sized> ToSortValue for Box<T> {
    fn to_sort_value(&self) -> SortValue {
        (**self).to_sort_value()
    }
}

impl<T: ToSortValue> ToSortValue for Option<T> {
    fn to_sort_value(&self) -> SortValue {
        self.as_ref()
            .map(ToSortValue::to_sort_value)
            .unwrap_or(SortValue::Absent)
    }
}

impl From<f32> for SortValue {
    fn from(value: f32) -> Self {
        SortValue::Float(f64::from(value))
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Float(value)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Boolean(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Absent)
    }
}
