//! Comparison, comparator composition and the public sorting operations

pub mod comparator;
pub mod comparisons;
pub mod json;
pub mod sorter;
pub mod view;

pub use comparator::Comparator;
pub use comparisons::{compare_values, ComparisonError};
pub use json::{ordered_json_view, ordered_json_view_by_spec, sort_json_in_place, sort_json_in_place_by_spec};
pub use sorter::{ordered_view, ordered_view_by_spec, sort_in_place, sort_in_place_by_spec, MagicSortExt, Sorter};
pub use view::{OrderedIter, OrderedView};
