pub mod error;
pub mod key;
pub mod record;
pub mod value;

pub use error::SortError;
pub use key::{Direction, SortEntry, SortKey, SortSpec, PATH_SEPARATOR};
pub use record::{FieldDescriptor, FieldKind, FieldRef, NestedField, Sortable, TypeDescriptor};
pub use value::{OpaqueValue, OrderedValue, SortValue, ToSortValue};
