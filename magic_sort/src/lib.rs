//! # magic_sort
//!
//! Multi-key sorting of in-memory records by dotted property paths such as
//! `"Address.City"`, each key ascending or descending, through any depth of
//! nesting including self-referential type graphs.
//!
//! ```rust
//! use magic_sort::prelude::*;
//!
//! #[derive(Clone)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(Clone)]
//! struct Customer {
//!     name: String,
//!     address: Option<Address>,
//! }
//!
//! magic_sort::sortable_record! {
//!     Address {
//!         values { "City" => city }
//!     }
//! }
//!
//! magic_sort::sortable_record! {
//!     Customer {
//!         values { "Name" => name }
//!         nested { "Address" => address: Address }
//!     }
//! }
//!
//! let mut customers = vec![
//!     Customer { name: "b".into(), address: Some(Address { city: "Oslo".into() }) },
//!     Customer { name: "a".into(), address: Some(Address { city: "Bergen".into() }) },
//! ];
//!
//! let spec: SortSpec = "Address.City desc, Name".parse()?;
//! customers.magic_sort_by_spec(&spec)?;
//! assert_eq!(customers[0].name, "b");
//! # Ok::<(), magic_sort::SortError>(())
//! ```

#[macro_use]
pub mod logging;

pub mod config;
pub mod execution;
pub mod resolution;
pub mod types;

#[cfg(test)]
mod test_fixtures;

// Re-export key types for library consumers
pub use config::{SortSpecFile, SorterConfig};
pub use execution::{
    ordered_json_view, ordered_view, ordered_view_by_spec, sort_in_place, sort_in_place_by_spec, sort_json_in_place,
    Comparator, MagicSortExt, OrderedView, Sorter,
};
pub use resolution::{AccessorMap, Introspection, JsonRecord, JsonSchema, KeyResolver};
pub use types::{Direction, SortError, SortKey, SortSpec, SortValue, Sortable};

pub mod prelude {
    pub use crate::config::{SortSpecFile, SorterConfig};
    pub use crate::execution::{
        ordered_view, ordered_view_by_spec, sort_in_place, sort_in_place_by_spec, Comparator, MagicSortExt,
        OrderedView, Sorter,
    };
    pub use crate::resolution::{AccessorMap, Introspection, KeyResolver};
    pub use crate::types::{Direction, SortError, SortKey, SortSpec, SortValue, Sortable, ToSortValue};
}
