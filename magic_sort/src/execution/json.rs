//! Sorting for schema-less [`JsonRecord`] collections.
//!
//! Keys are validated against the records being sorted. See
//! [`JsonSchema::supports`] for the sampling rule.

use super::sorter::{reorder_by_indices, Sorter};
use super::view::OrderedView;
use crate::config::SorterConfig;
use crate::resolution::{JsonRecord, JsonSchema};
use crate::types::{Direction, SortError, SortSpec};

/// Sort JSON records in place by one dotted key
pub fn sort_json_in_place(records: &mut [JsonRecord], key: &str, direction: Direction) -> Result<(), SortError> {
    sort_json_in_place_by_spec(records, &SortSpec::single(key, direction))
}

/// Sort JSON records in place by an ordered multi-key spec
pub fn sort_json_in_place_by_spec(records: &mut [JsonRecord], spec: &SortSpec) -> Result<(), SortError> {
    let config = SorterConfig::default();
    let comparator = Sorter::new(JsonSchema::sample(records))
        .with_config(config.clone())
        .comparator(spec)?;

    if config.check_homogeneous {
        comparator.check_homogeneous(records)?;
    }
    let order = comparator.sorted_indices(records);
    reorder_by_indices(records, &order);

    log_success!(
        crate::logging::codes::success::SORT_COMPLETED,
        "JSON records sorted",
        "keys" => spec,
        "records" => records.len()
    );
    Ok(())
}

/// Lazily ordered view of JSON records by one dotted key
pub fn ordered_json_view<'a>(
    records: &'a [JsonRecord],
    key: &str,
    direction: Direction,
) -> Result<OrderedView<'a, JsonRecord>, SortError> {
    ordered_json_view_by_spec(records, &SortSpec::single(key, direction))
}

/// Lazily ordered view of JSON records by an ordered multi-key spec
pub fn ordered_json_view_by_spec<'a>(
    records: &'a [JsonRecord],
    spec: &SortSpec,
) -> Result<OrderedView<'a, JsonRecord>, SortError> {
    Sorter::new(JsonSchema::sample(records)).ordered_view_by_spec(records, spec)
}
