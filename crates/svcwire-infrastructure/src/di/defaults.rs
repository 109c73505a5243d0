//! Default-implementation table
//!
//! Maps a dependency role to the canonical catalog name used when that role
//! is needed but nobody configured it.

use std::collections::BTreeMap;

use svcwire_domain::registry::{DEFAULT_SERVICES, DefaultServiceEntry};

/// Role → canonical service name, read-only after construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultServices {
    table: BTreeMap<String, String>,
}

impl DefaultServices {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from every binding registered in [`DEFAULT_SERVICES`]
    pub fn from_registry() -> Self {
        Self::from_entries(DEFAULT_SERVICES.iter())
    }

    /// Build the table from explicit entries; the first binding of a role wins
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a DefaultServiceEntry>,
    {
        let mut table = BTreeMap::new();
        for entry in entries {
            table
                .entry(entry.role.to_string())
                .or_insert_with(|| entry.service.to_string());
        }
        Self { table }
    }

    /// Bind `role` to `service`, replacing any previous binding
    pub fn with<R: Into<String>, S: Into<String>>(mut self, role: R, service: S) -> Self {
        self.table.insert(role.into(), service.into());
        self
    }

    /// Canonical service name for `role`
    pub fn service_for(&self, role: &str) -> Option<&str> {
        self.table.get(role).map(String::as_str)
    }

    /// Iterate `(role, service)` pairs in role order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(r, s)| (r.as_str(), s.as_str()))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<R: Into<String>, S: Into<String>> FromIterator<(R, S)> for DefaultServices {
    fn from_iter<I: IntoIterator<Item = (R, S)>>(iter: I) -> Self {
        Self {
            table: iter
                .into_iter()
                .map(|(r, s)| (r.into(), s.into()))
                .collect(),
        }
    }
}
