//! The tool catalog callers look entries up in.
//!
//! An explicit registry owned by the application session and passed by
//! reference; there is deliberately no ambient global instance.

use crate::entry::CatalogEntry;
use indexmap::IndexMap;

/// Error from catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An entry with this identifier is already registered
    AlreadyRegistered {
        /// The conflicting identifier
        identifier: String,
    },
    /// No entry with this identifier
    NotFound {
        /// The missing identifier
        identifier: String,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRegistered { identifier } => {
                write!(f, "Tool already registered: {}", identifier)
            }
            Self::NotFound { identifier } => write!(f, "Tool not found: {}", identifier),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Registry of catalog entries keyed by "category/name" identifier
///
/// Registration order is preserved so tool lists render in the order the
/// definitions were loaded.
#[derive(Debug, Default)]
pub struct ToolCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl ToolCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register an entry under its identifier
    ///
    /// # Errors
    ///
    /// Returns error if the identifier is already taken.
    pub fn register(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        let identifier = entry.identifier();
        if self.entries.contains_key(&identifier) {
            return Err(CatalogError::AlreadyRegistered { identifier });
        }
        self.entries.insert(identifier, entry);
        Ok(())
    }

    /// Get an entry by identifier
    ///
    /// # Errors
    ///
    /// Returns error if no entry has this identifier.
    pub fn get(&self, identifier: &str) -> Result<&CatalogEntry, CatalogError> {
        self.entries
            .get(identifier)
            .ok_or_else(|| CatalogError::NotFound {
                identifier: identifier.to_string(),
            })
    }

    /// List identifiers in registration order
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Check if an identifier is registered
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Number of registered entries
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}
