//! # Path Resolver
//!
//! Validates a dotted sort key against a record type's declared members and
//! walks it on concrete records.

use crate::types::{FieldKind, FieldRef, SortError, SortKey, SortValue, Sortable, TypeDescriptor};

/// Check that every segment of `key` names a declared member.
///
/// Each segment is looked up on the type reached by the previous one. The
/// final segment must be a value member: a path ending on a nested record
/// names nothing orderable.
pub fn validate(descriptor: &TypeDescriptor, key: &SortKey) -> bool {
    unresolved_segment(descriptor, key).is_none()
}

/// Validate `key` and build the diagnostic error on failure
pub fn check(descriptor: &TypeDescriptor, key: &SortKey) -> Result<(), SortError> {
    match unresolved_segment(descriptor, key) {
        None => {
            log_debug!(
                "Sort key validated",
                "key" => key,
                "type" => descriptor.name,
                "depth" => key.depth()
            );
            Ok(())
        }
        Some(index) => {
            log_error!(
                crate::logging::codes::validation::SORT_KEY_NOT_FOUND,
                "Sort key does not resolve on record type",
                "key" => key,
                "type" => descriptor.name,
                "segment" => key.segments().get(index).map(String::as_str).unwrap_or(""),
                "segment_index" => index
            );
            Err(SortError::key_not_found(key.to_dot_notation(), descriptor.name))
        }
    }
}

/// Index of the first segment that does not resolve, `None` if the key is valid
fn unresolved_segment(descriptor: &TypeDescriptor, key: &SortKey) -> Option<usize> {
    let segments = key.segments();
    let mut current = descriptor;

    for (index, segment) in segments.iter().enumerate() {
        let is_last = index + 1 == segments.len();
        let field = match current.field(segment) {
            Some(field) => field,
            None => return Some(index),
        };

        match field.kind {
            FieldKind::Value if is_last => return None,
            // Leaf member with segments still remaining
            FieldKind::Value => return Some(index + 1),
            FieldKind::Nested(_) if is_last => return Some(index),
            FieldKind::Nested(next) => current = next(),
        }
    }

    Some(0)
}

/// Walk `key` on a concrete record.
///
/// An unpopulated nested record anywhere along the path resolves to
/// `SortValue::Absent`. Keys are expected to be validated first; a segment
/// the record does not answer also yields `Absent`.
pub fn resolve(record: &dyn Sortable, key: &SortKey) -> SortValue {
    let Some((last, parents)) = key.segments().split_last() else {
        return SortValue::Absent;
    };

    let mut current = record;
    for segment in parents {
        match current.field(segment) {
            Some(FieldRef::Nested(Some(next))) => current = next,
            _ => return SortValue::Absent,
        }
    }

    match current.field(last) {
        Some(FieldRef::Value(value)) => value,
        _ => SortValue::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{deep_record, DummyClass1};
    use assert_matches::assert_matches;

    #[test]
    fn test_validate_simple_and_nested_keys() {
        let descriptor = DummyClass1::descriptor();
        assert!(validate(descriptor, &SortKey::parse("Property1")));
        assert!(validate(descriptor, &SortKey::parse("Property4.PropertyZ")));
        assert!(validate(descriptor, &SortKey::parse("Property4.PropertyW.PropertyD.PropertyJ")));
    }

    #[test]
    fn test_validate_rejects_unknown_segments() {
        let descriptor = DummyClass1::descriptor();
        assert!(!validate(descriptor, &SortKey::parse("NoSuchField")));
        assert!(!validate(descriptor, &SortKey::parse("Property4.Nope")));
        assert!(!validate(descriptor, &SortKey::parse("")));
        assert!(!validate(descriptor, &SortKey::parse("Property4..PropertyZ")));
    }

    #[test]
    fn test_validate_rejects_paths_through_or_ending_on_wrong_kind() {
        let descriptor = DummyClass1::descriptor();
        // Continues past a leaf
        assert!(!validate(descriptor, &SortKey::parse("Property1.Inner")));
        // Ends on a record
        assert!(!validate(descriptor, &SortKey::parse("Property4")));
        assert!(!validate(descriptor, &SortKey::parse("Property4.PropertyW")));
    }

    #[test]
    fn test_validate_recursive_type_graph() {
        let descriptor = DummyClass1::descriptor();
        let key = SortKey::parse(
            "Property4.PropertyW.PropertyD.PropertyK.Property4.PropertyW.PropertyD.PropertyK.Property4.PropertyW.PropertyD.PropertyI",
        );
        assert!(validate(descriptor, &key));
    }

    #[test]
    fn test_check_reports_key_and_root_type() {
        let err = check(DummyClass1::descriptor(), &SortKey::parse("Property4.Nope")).unwrap_err();
        assert_matches!(
            err,
            SortError::SortKeyNotFound { ref key, ref type_name }
                if key == "Property4.Nope" && type_name == "DummyClass1"
        );
    }

    #[test]
    fn test_resolve_walks_nested_values() {
        let record = deep_record(3, "c", 10);
        assert_eq!(resolve(&record, &SortKey::parse("Property1")), SortValue::Integer(3));
        assert_eq!(
            resolve(&record, &SortKey::parse("Property4.PropertyW.PropertyD.PropertyJ")),
            SortValue::Text("c".to_string())
        );
        assert_eq!(
            resolve(
                &record,
                &SortKey::parse("Property4.PropertyW.PropertyD.PropertyK.Property4.PropertyW.PropertyD.PropertyI")
            ),
            SortValue::Integer(10)
        );
    }

    #[test]
    fn test_resolve_short_circuits_on_absent_intermediate() {
        let record = DummyClass1::new(1, "a", 1.0, None);
        assert_eq!(
            resolve(&record, &SortKey::parse("Property4.PropertyW.PropertyA")),
            SortValue::Absent
        );
    }

    #[test]
    fn test_resolve_unvalidated_key_is_absent() {
        let record = DummyClass1::new(1, "a", 1.0, None);
        assert_eq!(resolve(&record, &SortKey::parse("Nope")), SortValue::Absent);
        assert_eq!(resolve(&record, &SortKey::parse("Property1.Deeper")), SortValue::Absent);
    }
}
