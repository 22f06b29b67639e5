//! # Comparator Builder
//!
//! Composes a [`SortSpec`] into one ordering function over records. Keys
//! are validated in spec order and the build fails on the first key the
//! resolver does not know.

use super::comparisons::{compare_values, fallback_order};
use crate::logging::codes;
use crate::resolution::{Accessor, KeyResolver};
use crate::types::{Direction, SortError, SortKey, SortSpec, SortValue};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Single key comparison step
struct KeyComparer<T> {
    key: SortKey,
    direction: Direction,
    accessor: Accessor<T>,
}

impl<T> KeyComparer<T> {
    fn compare(&self, left: &T, right: &T, log_comparisons: bool) -> Ordering {
        self.compare_resolved(&(self.accessor)(left), &(self.accessor)(right), log_comparisons)
    }

    fn compare_resolved(&self, left_value: &SortValue, right_value: &SortValue, log_comparisons: bool) -> Ordering {
        let ordering = match compare_values(left_value, right_value) {
            Ok(ordering) => ordering,
            Err(e) => {
                log_warning!(
                    "Incomparable values under one sort key, using kind order",
                    "key" => self.key,
                    "error" => e
                );
                fallback_order(left_value, right_value)
            }
        };
        let ordering = self.direction.apply(ordering);

        if log_comparisons {
            log_trace!(
                "Compared sort key",
                "key" => self.key,
                "left" => left_value,
                "right" => right_value,
                "result" => format!("{:?}", ordering)
            );
        }

        ordering
    }
}

impl<T> Clone for KeyComparer<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            direction: self.direction,
            accessor: Arc::clone(&self.accessor),
        }
    }
}

/// Ordering function over records of type `T`
pub struct Comparator<T> {
    type_name: String,
    keys: Vec<KeyComparer<T>>,
    log_comparisons: bool,
}

impl<T> Comparator<T> {
    /// Build a comparator for `spec`, validating every key through `resolver`
    pub fn build<R>(resolver: &R, spec: &SortSpec) -> Result<Self, SortError>
    where
        R: KeyResolver<T> + ?Sized,
    {
        let mut comparator = Self {
            type_name: resolver.type_name().to_string(),
            keys: Vec::with_capacity(spec.len()),
            log_comparisons: false,
        };

        for entry in spec {
            comparator.push_key(resolver, entry.key.clone(), entry.direction)?;
        }

        log_success!(
            codes::success::COMPARATOR_BUILT,
            "Comparator built",
            "type" => comparator.type_name,
            "keys" => spec
        );
        Ok(comparator)
    }

    /// Build a comparator for a single primary key
    pub fn single<R>(resolver: &R, key: impl Into<SortKey>, direction: Direction) -> Result<Self, SortError>
    where
        R: KeyResolver<T> + ?Sized,
    {
        Self::build(resolver, &SortSpec::single(key, direction))
    }

    /// Append a tie-breaking key
    pub fn then_by<R>(mut self, resolver: &R, key: impl Into<SortKey>, direction: Direction) -> Result<Self, SortError>
    where
        R: KeyResolver<T> + ?Sized,
    {
        self.push_key(resolver, key.into(), direction)?;
        Ok(self)
    }

    fn push_key<R>(&mut self, resolver: &R, key: SortKey, direction: Direction) -> Result<(), SortError>
    where
        R: KeyResolver<T> + ?Sized,
    {
        match resolver.accessor(&key) {
            Some(accessor) => {
                log_debug!(
                    "Sort key accepted",
                    "key" => key,
                    "direction" => direction,
                    "type" => self.type_name,
                    "precedence" => self.keys.len() + 1
                );
                self.keys.push(KeyComparer {
                    key,
                    direction,
                    accessor,
                });
                Ok(())
            }
            None => {
                log_error!(
                    codes::validation::SORT_KEY_NOT_FOUND,
                    "Sort key not found on record type",
                    "key" => key,
                    "type" => self.type_name
                );
                Err(SortError::key_not_found(key.to_dot_notation(), self.type_name.clone()))
            }
        }
    }

    /// Emit a trace event for every key comparison
    pub fn with_comparison_logging(mut self, enabled: bool) -> Self {
        self.log_comparisons = enabled;
        self
    }

    /// Compare two records under lexicographic key precedence
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(left, right, self.log_comparisons))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Resolve every key of `record` once, in precedence order
    pub fn resolve_keys(&self, record: &T) -> Vec<SortValue> {
        self.keys.iter().map(|key| (key.accessor)(record)).collect()
    }

    /// Compare two rows produced by [`Comparator::resolve_keys`]
    pub fn compare_resolved(&self, left: &[SortValue], right: &[SortValue]) -> Ordering {
        self.keys
            .iter()
            .zip(left.iter().zip(right))
            .map(|(key, (left_value, right_value))| key.compare_resolved(left_value, right_value, self.log_comparisons))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Positions of `records` in sorted order.
    ///
    /// Keys are resolved once per record and the index permutation is
    /// sorted stably, so equal records keep their input order.
    pub fn sorted_indices(&self, records: &[T]) -> Vec<usize> {
        let rows: Vec<Vec<SortValue>> = records.iter().map(|record| self.resolve_keys(record)).collect();

        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by(|&left, &right| self.compare_resolved(&rows[left], &rows[right]));
        order
    }

    /// Borrow as a closure for `sort_by` style APIs
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |left, right| self.compare(left, right)
    }

    /// Check that every key resolves to mutually comparable values across
    /// `records`. Absent values are ignored.
    pub fn check_homogeneous(&self, records: &[T]) -> Result<(), SortError> {
        for key in &self.keys {
            let mut reference: Option<SortValue> = None;

            for record in records {
                let value = (key.accessor)(record);
                if value.is_absent() {
                    continue;
                }

                match &reference {
                    None => reference = Some(value),
                    Some(first) if first.is_compatible_with(&value) => {}
                    Some(first) => {
                        log_error!(
                            codes::comparison::INCOMPARABLE_VALUES,
                            "Sort key resolved to incomparable values",
                            "key" => key.key,
                            "left" => first.kind_name(),
                            "right" => value.kind_name()
                        );
                        return Err(SortError::incomparable(
                            key.key.to_dot_notation(),
                            first.kind_name(),
                            value.kind_name(),
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Record type name the comparator was built for
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Keys in precedence order
    pub fn keys(&self) -> impl Iterator<Item = (&SortKey, Direction)> {
        self.keys.iter().map(|key| (&key.key, key.direction))
    }

    /// Rebuild the spec this comparator implements
    pub fn spec(&self) -> SortSpec {
        self.keys
            .iter()
            .map(|key| (key.key.clone(), key.direction))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            keys: self.keys.clone(),
            log_comparisons: self.log_comparisons,
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("type_name", &self.type_name)
            .field("spec", &self.spec().to_string())
            .finish()
    }
}
