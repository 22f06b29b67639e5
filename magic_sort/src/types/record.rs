//! # Record Introspection
//!
//! Records take part in path-based sorting by describing their shape once
//! (`TypeDescriptor`, type level) and answering named field lookups
//! (`Sortable::field`, value level). Nested fields point at the descriptor
//! of their type through a function pointer, so a type graph may refer back
//! to itself without recursion at definition time.
//!
//! ## Usage
//!
//! ```rust
//! use magic_sort::sortable_record;
//!
//! pub struct Address {
//!     city: String,
//! }
//!
//! pub struct Customer {
//!     name: String,
//!     address: Option<Address>,
//! }
//!
//! sortable_record! {
//!     Address {
//!         values { "City" => city }
//!     }
//! }
//!
//! sortable_record! {
//!     Customer {
//!         values { "Name" => name }
//!         nested { "Address" => address: Address }
//!     }
//! }
//! ```

use crate::types::value::SortValue;
use std::fmt;
use std::sync::Arc;

/// Declared shape of a record type
#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl TypeDescriptor {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { name, fields }
    }

    /// Look up a declared field by exact name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}

/// One declared member of a record type
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Leaf member holding an orderable value
    pub const fn value(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Value,
        }
    }

    /// Member holding another record
    pub const fn nested(name: &'static str, descriptor: fn() -> &'static TypeDescriptor) -> Self {
        Self {
            name,
            kind: FieldKind::Nested(descriptor),
        }
    }
}

/// Declared type of a member
#[derive(Clone, Copy)]
pub enum FieldKind {
    Value,
    Nested(fn() -> &'static TypeDescriptor),
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Value => write!(f, "Value"),
            // Target name only, type graphs may be recursive
            FieldKind::Nested(descriptor) => write!(f, "Nested({})", descriptor().name),
        }
    }
}

/// Runtime content of a member
pub enum FieldRef<'a> {
    Value(SortValue),
    /// `None` when the nested record is not populated
    Nested(Option<&'a dyn Sortable>),
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldRef::Nested(Some(_)) => write!(f, "Nested(Some(..))"),
            FieldRef::Nested(None) => write!(f, "Nested(None)"),
        }
    }
}

/// Record type that exposes named members for path-based sorting
pub trait Sortable {
    /// Declared shape of the type
    fn descriptor() -> &'static TypeDescriptor
    where
        Self: Sized;

    /// Read a member by name, `None` if the type has no such member
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;
}

impl<U: Sortable> Sortable for Box<U> {
    fn descriptor() -> &'static TypeDescriptor {
        U::descriptor()
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        (**self).field(name)
    }
}

impl<U: Sortable> Sortable for Arc<U> {
    fn descriptor() -> &'static TypeDescriptor {
        U::descriptor()
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        (**self).field(name)
    }
}

/// Optional nested member, used by the `nested` section of `sortable_record!`
pub trait NestedField {
    fn as_nested(&self) -> Option<&dyn Sortable>;
}

impl<U: Sortable> NestedField for Option<U> {
    fn as_nested(&self) -> Option<&dyn Sortable> {
        self.as_ref().map(|record| record as &dyn Sortable)
    }
}

/// Implement [`Sortable`] for a struct from a list of exposed members.
///
/// * `values`: leaf members, any type implementing `ToSortValue`
/// * `nested`: `Option<U>` members where `U: Sortable` (including `Box<_>`)
/// * `inline`: always present members of a `Sortable` type
///
/// Each entry maps the public member name used in sort keys to the Rust
/// field holding it. Sections are optional but must appear in this order.
#[macro_export]
macro_rules! sortable_record {
    (
        $record:ident {
            $( values { $( $vname:literal => $vfield:ident ),* $(,)? } )?
            $( nested { $( $nname:literal => $nfield:ident : $nty:ty ),* $(,)? } )?
            $( inline { $( $iname:literal => $ifield:ident : $ity:ty ),* $(,)? } )?
        }
    ) => {
        impl $crate::types::Sortable for $record {
            fn descriptor() -> &'static $crate::types::TypeDescriptor {
                static DESCRIPTOR: $crate::types::TypeDescriptor = $crate::types::TypeDescriptor::new(
                    stringify!($record),
                    &[
                        $($( $crate::types::FieldDescriptor::value($vname), )*)?
                        $($( $crate::types::FieldDescriptor::nested(
                            $nname,
                            <$nty as $crate::types::Sortable>::descriptor,
                        ), )*)?
                        $($( $crate::types::FieldDescriptor::nested(
                            $iname,
                            <$ity as $crate::types::Sortable>::descriptor,
                        ), )*)?
                    ],
                );
                &DESCRIPTOR
            }

            fn field(&self, name: &str) -> Option<$crate::types::FieldRef<'_>> {
                match name {
                    $($( $vname => Some($crate::types::FieldRef::Value(
                        $crate::types::ToSortValue::to_sort_value(&self.$vfield),
                    )), )*)?
                    $($( $nname => Some($crate::types::FieldRef::Nested(
                        $crate::types::NestedField::as_nested(&self.$nfield),
                    )), )*)?
                    $($( $iname => Some($crate::types::FieldRef::Nested(
                        Some(&self.$ifield as &dyn $crate::types::Sortable),
                    )), )*)?
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{DummyClass1, DummyClass2};

    #[test]
    fn test_descriptor_lists_declared_fields() {
        let descriptor = DummyClass1::descriptor();
        assert_eq!(descriptor.name, "DummyClass1");
        let names: Vec<_> = descriptor.field_names().collect();
        assert_eq!(names, vec!["Property1", "Property2", "Property3", "Property4"]);
        assert!(matches!(descriptor.field("Property1").unwrap().kind, FieldKind::Value));
        assert!(!descriptor.has_field("property1"));
    }

    #[test]
    fn test_nested_descriptor_follows_pointer() {
        let descriptor = DummyClass1::descriptor();
        match descriptor.field("Property4").unwrap().kind {
            FieldKind::Nested(next) => assert_eq!(next().name, "DummyClass2"),
            FieldKind::Value => panic!("Property4 should be nested"),
        }
        assert_eq!(
            format!("{:?}", descriptor.field("Property4").unwrap().kind),
            "Nested(DummyClass2)"
        );
    }

    #[test]
    fn test_field_lookup_on_value() {
        let record = DummyClass1::new(5, "five", 5.5, None);
        assert!(matches!(
            record.field("Property1"),
            Some(FieldRef::Value(SortValue::Integer(5)))
        ));
        assert!(matches!(record.field("Property4"), Some(FieldRef::Nested(None))));
        assert!(record.field("Missing").is_none());

        let boxed: Box<DummyClass2> = Box::new(DummyClass2::new(1, "y", 2.0, None));
        assert_eq!(<Box<DummyClass2> as Sortable>::descriptor().name, "DummyClass2");
        assert!(matches!(
            boxed.field("PropertyX"),
            Some(FieldRef::Value(SortValue::Integer(1)))
        ));
    }
    struct Holder {
        id: u16,
        child: DummyClass2,
    }

    crate::sortable_record!(Holder {
        values { "Id" => id }
        inline { "Child" => child: DummyClass2 }
    });

    #[test]
    fn test_inline_member_is_always_present() {
        let holder = Holder {
            id: 3,
            child: DummyClass2::new(8, "y", 0.0, None),
        };

        assert_eq!(Holder::descriptor().name, "Holder");
        assert!(matches!(
            Holder::descriptor().field("Child").map(|field| field.kind),
            Some(FieldKind::Nested(_))
        ));
        assert!(matches!(holder.field("Id"), Some(FieldRef::Value(SortValue::Integer(3)))));

        match holder.field("Child") {
            Some(FieldRef::Nested(Some(child))) => assert!(matches!(
                child.field("PropertyX"),
                Some(FieldRef::Value(SortValue::Integer(8)))
            )),
            other => panic!("unexpected {:?}", other),
        }
    }
}
