//! Lazily ordered, restartable views over a borrowed slice

use super::comparator::Comparator;
use crate::logging::codes;
use crate::resolution::{Introspection, KeyResolver};
use crate::types::{Direction, SortError, SortKey, Sortable};
use std::fmt;

/// Ordered view over `records`.
///
/// Nothing is sorted until the view is traversed. Every call to
/// [`OrderedView::iter`] evaluates the ordering again from the start, so a
/// view can be iterated any number of times.
pub struct OrderedView<'a, T> {
    records: &'a [T],
    comparator: Comparator<T>,
    check_homogeneous: bool,
}

impl<'a, T> OrderedView<'a, T> {
    pub(crate) fn new(records: &'a [T], comparator: Comparator<T>, check_homogeneous: bool) -> Self {
        Self {
            records,
            comparator,
            check_homogeneous,
        }
    }

    /// Iterate records in order
    pub fn iter(&self) -> OrderedIter<'a, '_, T> {
        OrderedIter {
            view: self,
            order: None,
            position: 0,
        }
    }

    /// Extend precedence with a key resolved through the record's
    /// [`Sortable`] implementation
    pub fn then_by(self, key: impl Into<SortKey>, direction: Direction) -> Result<Self, SortError>
    where
        T: Sortable + 'static,
    {
        self.then_by_with(&Introspection, key, direction)
    }

    /// Extend precedence with a key resolved through `resolver`
    pub fn then_by_with<R>(self, resolver: &R, key: impl Into<SortKey>, direction: Direction) -> Result<Self, SortError>
    where
        R: KeyResolver<T> + ?Sized,
    {
        let comparator = self.comparator.then_by(resolver, key, direction)?;
        if self.check_homogeneous {
            comparator.check_homogeneous(self.records)?;
        }

        Ok(Self {
            records: self.records,
            comparator,
            check_homogeneous: self.check_homogeneous,
        })
    }

    /// Ordered references into the source slice
    pub fn collect_refs(&self) -> Vec<&'a T> {
        self.iter().collect()
    }

    /// Clone records into a new vector in order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let records: Vec<T> = self.iter().cloned().collect();
        log_success!(
            codes::success::VIEW_MATERIALIZED,
            "Ordered view materialized",
            "type" => self.comparator.type_name(),
            "records" => records.len()
        );
        records
    }

    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sorted_indices(&self) -> Vec<usize> {
        self.comparator.sorted_indices(self.records)
    }
}

impl<'a, 'v, T> IntoIterator for &'v OrderedView<'a, T> {
    type Item = &'a T;
    type IntoIter = OrderedIter<'a, 'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for OrderedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedView")
            .field("records", &self.records.len())
            .field("comparator", &self.comparator)
            .finish()
    }
}

/// Iterator over an [`OrderedView`]
pub struct OrderedIter<'a, 'v, T> {
    view: &'v OrderedView<'a, T>,
    order: Option<Vec<usize>>,
    position: usize,
}

impl<'a, T> Iterator for OrderedIter<'a, '_, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.view;
        let order = self.order.get_or_insert_with(|| view.sorted_indices());
        let index = *order.get(self.position)?;
        self.position += 1;
        view.records.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.records.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for OrderedIter<'_, '_, T> {}
