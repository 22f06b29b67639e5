//! Public sorting surface
//!
//! Every operation validates all keys, then runs the homogeneity pre-pass
//! when enabled, and only then reorders. A failed call leaves the input
//! untouched.

use super::comparator::Comparator;
use super::view::OrderedView;
use crate::config::SorterConfig;
use crate::logging::codes;
use crate::resolution::{AccessorMap, Introspection, KeyResolver};
use crate::types::{Direction, SortError, SortKey, SortSpec, Sortable};

/// Sorts records using a chosen key resolution strategy
#[derive(Debug, Clone)]
pub struct Sorter<R> {
    resolver: R,
    config: SorterConfig,
}

impl Sorter<Introspection> {
    /// Resolve keys through the records' [`Sortable`] implementation
    pub fn introspect() -> Self {
        Self::new(Introspection)
    }
}

impl<T: 'static> Sorter<AccessorMap<T>> {
    /// Resolve keys through explicitly registered accessors
    pub fn with_accessors(accessors: AccessorMap<T>) -> Self {
        Self::new(accessors)
    }
}

impl<R> Sorter<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            config: SorterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SorterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Build the comparator for `spec` with this sorter's settings
    pub fn comparator<T>(&self, spec: &SortSpec) -> Result<Comparator<T>, SortError>
    where
        R: KeyResolver<T>,
    {
        Ok(Comparator::build(&self.resolver, spec)?.with_comparison_logging(self.config.log_comparisons))
    }

    /// Sort `records` in place by a single key
    pub fn sort_in_place<T>(&self, records: &mut [T], key: impl Into<SortKey>, direction: Direction) -> Result<(), SortError>
    where
        R: KeyResolver<T>,
    {
        self.sort_in_place_by_spec(records, &SortSpec::single(key, direction))
    }

    /// Sort `records` in place by an ordered multi-key spec
    pub fn sort_in_place_by_spec<T>(&self, records: &mut [T], spec: &SortSpec) -> Result<(), SortError>
    where
        R: KeyResolver<T>,
    {
        let comparator = self.prepare(records, spec)?;
        let order = comparator.sorted_indices(records);
        reorder_by_indices(records, &order);

        log_success!(
            codes::success::SORT_COMPLETED,
            "Records sorted",
            "type" => comparator.type_name(),
            "keys" => spec,
            "records" => records.len()
        );
        Ok(())
    }

    /// Lazily ordered view of `records` by a single key
    pub fn ordered_view<'a, T>(
        &self,
        records: &'a [T],
        key: impl Into<SortKey>,
        direction: Direction,
    ) -> Result<OrderedView<'a, T>, SortError>
    where
        R: KeyResolver<T>,
    {
        self.ordered_view_by_spec(records, &SortSpec::single(key, direction))
    }

    /// Lazily ordered view of `records` by an ordered multi-key spec
    pub fn ordered_view_by_spec<'a, T>(&self, records: &'a [T], spec: &SortSpec) -> Result<OrderedView<'a, T>, SortError>
    where
        R: KeyResolver<T>,
    {
        let comparator = self.prepare(records, spec)?;
        Ok(OrderedView::new(records, comparator, self.config.check_homogeneous))
    }

    fn prepare<T>(&self, records: &[T], spec: &SortSpec) -> Result<Comparator<T>, SortError>
    where
        R: KeyResolver<T>,
    {
        let comparator = self.comparator(spec)?;
        if self.config.check_homogeneous {
            comparator.check_homogeneous(records)?;
        }
        Ok(comparator)
    }
}

/// Move records so position `i` holds the record previously at `order[i]`.
///
/// `order` must be a permutation of `0..records.len()`. Works by swapping,
/// so records need not be `Clone`.
pub(crate) fn reorder_by_indices<T>(records: &mut [T], order: &[usize]) {
    debug_assert_eq!(records.len(), order.len(), "Order length must match records length");

    for position in 0..order.len() {
        // Earlier positions are final; follow the cycle to where the record now sits
        let mut source = order[position];
        while source < position {
            source = order[source];
        }
        records.swap(position, source);
    }
}

impl Default for Sorter<Introspection> {
    fn default() -> Self {
        Self::introspect()
    }
}

/// Sort `records` in place by one dotted key
pub fn sort_in_place<T: Sortable + 'static>(records: &mut [T], key: &str, direction: Direction) -> Result<(), SortError> {
    Sorter::introspect().sort_in_place(records, key, direction)
}

/// Sort `records` in place by an ordered multi-key spec
pub fn sort_in_place_by_spec<T: Sortable + 'static>(records: &mut [T], spec: &SortSpec) -> Result<(), SortError> {
    Sorter::introspect().sort_in_place_by_spec(records, spec)
}

/// Lazily ordered view by one dotted key
pub fn ordered_view<'a, T: Sortable + 'static>(
    records: &'a [T],
    key: &str,
    direction: Direction,
) -> Result<OrderedView<'a, T>, SortError> {
    Sorter::introspect().ordered_view(records, key, direction)
}

/// Lazily ordered view by an ordered multi-key spec
pub fn ordered_view_by_spec<'a, T: Sortable + 'static>(
    records: &'a [T],
    spec: &SortSpec,
) -> Result<OrderedView<'a, T>, SortError> {
    Sorter::introspect().ordered_view_by_spec(records, spec)
}

/// Sorting methods on slices of [`Sortable`] records
pub trait MagicSortExt<T> {
    fn magic_sort(&mut self, key: &str, direction: Direction) -> Result<(), SortError>;

    fn magic_sort_by_spec(&mut self, spec: &SortSpec) -> Result<(), SortError>;

    fn order_by(&self, key: &str, direction: Direction) -> Result<OrderedView<'_, T>, SortError>;

    fn order_by_spec(&self, spec: &SortSpec) -> Result<OrderedView<'_, T>, SortError>;
}

impl<T: Sortable + 'static> MagicSortExt<T> for [T] {
    fn magic_sort(&mut self, key: &str, direction: Direction) -> Result<(), SortError> {
        sort_in_place(self, key, direction)
    }

    fn magic_sort_by_spec(&mut self, spec: &SortSpec) -> Result<(), SortError> {
        sort_in_place_by_spec(self, spec)
    }

    fn order_by(&self, key: &str, direction: Direction) -> Result<OrderedView<'_, T>, SortError> {
        ordered_view(self, key, direction)
    }

    fn order_by_spec(&self, spec: &SortSpec) -> Result<OrderedView<'_, T>, SortError> {
        ordered_view_by_spec(self, spec)
    }
}
