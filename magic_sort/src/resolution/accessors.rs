//! # Registered Accessors
//!
//! An [`AccessorMap`] maps dotted paths to extraction functions registered
//! up front, so no runtime inspection of the record type is needed. Paths
//! into nested records are registered by mounting the nested type's map
//! under a prefix with a projection that may return `None`.

use super::{Accessor, KeyResolver};
use crate::types::{SortKey, SortValue, PATH_SEPARATOR};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of per-path accessors for record type `T`
pub struct AccessorMap<T> {
    type_name: String,
    accessors: HashMap<String, Accessor<T>>,
}

impl<T: 'static> AccessorMap<T> {
    /// Create an empty registry named after the record type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            accessors: HashMap::new(),
        }
    }

    /// Create an empty registry named after `T`'s Rust type name
    pub fn for_type() -> Self {
        let full_name = std::any::type_name::<T>();
        let short_name = full_name.rsplit("::").next().unwrap_or(full_name);
        Self::new(short_name)
    }

    /// Register an accessor, builder style
    pub fn register<F, V>(mut self, path: &str, accessor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<SortValue>,
    {
        self.insert(path, accessor);
        self
    }

    /// Register an accessor, replacing any previous one for the path
    pub fn insert<F, V>(&mut self, path: &str, accessor: F)
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<SortValue>,
    {
        let accessor: Accessor<T> = Arc::new(move |record: &T| accessor(record).into());
        if self.accessors.insert(path.to_string(), accessor).is_some() {
            log_debug!("Replaced registered accessor", "type" => self.type_name, "path" => path);
        }
    }

    /// Mount every path of `inner` under `prefix`.
    ///
    /// `project` reads the nested record; when it returns `None` every mounted
    /// path resolves to `SortValue::Absent`.
    pub fn mount<U, P>(mut self, prefix: &str, inner: &AccessorMap<U>, project: P) -> Self
    where
        U: 'static,
        P: Fn(&T) -> Option<&U> + Send + Sync + 'static,
    {
        let project = Arc::new(project);
        for (path, inner_accessor) in &inner.accessors {
            let project = Arc::clone(&project);
            let inner_accessor = Arc::clone(inner_accessor);
            let accessor: Accessor<T> = Arc::new(move |record: &T| {
                project(record)
                    .map(|nested| inner_accessor(nested))
                    .unwrap_or(SortValue::Absent)
            });
            let full_path = format!("{}{}{}", prefix, PATH_SEPARATOR, path);
            self.accessors.insert(full_path, accessor);
        }
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.accessors.contains_key(path)
    }

    /// Registered paths in sorted order
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl<T> KeyResolver<T> for AccessorMap<T> {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn accessor(&self, key: &SortKey) -> Option<Accessor<T>> {
        self.accessors.get(&key.to_dot_notation()).cloned()
    }
}

impl<T> Clone for AccessorMap<T> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            accessors: self.accessors.clone(),
        }
    }
}

impl<T> fmt::Debug for AccessorMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<&String> = self.accessors.keys().collect();
        paths.sort();
        f.debug_struct("AccessorMap")
            .field("type_name", &self.type_name)
            .field("paths", &paths)
            .finish()
    }
}
