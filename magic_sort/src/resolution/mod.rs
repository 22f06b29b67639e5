//! Sort key resolution strategies
//!
//! A [`KeyResolver`] turns a validated [`SortKey`] into an [`Accessor`] that
//! extracts the key's value from a record. Three strategies are provided:
//!
//! - [`Introspection`] for types implementing [`Sortable`]
//! - [`AccessorMap`] for explicitly registered per-path accessors
//! - [`JsonSchema`] for schema-less JSON records

pub mod accessors;
pub mod json_record;
pub mod path_resolver;

pub use accessors::AccessorMap;
pub use json_record::{JsonRecord, JsonSchema};
pub use path_resolver::{check, resolve, validate};

use crate::types::{SortKey, SortValue, Sortable};
use std::sync::Arc;

/// Extracts the value of one sort key from a record
pub type Accessor<T> = Arc<dyn Fn(&T) -> SortValue + Send + Sync>;

/// Validates sort keys for a record type and hands out accessors for them
pub trait KeyResolver<T: ?Sized> {
    /// Record type name used in diagnostics
    fn type_name(&self) -> &str;

    /// Accessor for `key`, or `None` when the key does not exist on the type
    fn accessor(&self, key: &SortKey) -> Option<Accessor<T>>;
}

impl<T: ?Sized, R: KeyResolver<T> + ?Sized> KeyResolver<T> for &R {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn accessor(&self, key: &SortKey) -> Option<Accessor<T>> {
        (**self).accessor(key)
    }
}

/// Resolves keys through the record's own [`Sortable`] implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct Introspection;

impl<T: Sortable + 'static> KeyResolver<T> for Introspection {
    fn type_name(&self) -> &str {
        T::descriptor().name
    }

    fn accessor(&self, key: &SortKey) -> Option<Accessor<T>> {
        if !validate(T::descriptor(), key) {
            return None;
        }

        let key = key.clone();
        Some(Arc::new(move |record: &T| resolve(record, &key)))
    }
}
