// ============================================================================
// In-Memory Message Catalog
// Thread-safe TextLookup backed by (catalog, namespace, key) entries
// ============================================================================

use super::text_lookup::{substitute_vars, TextLookup};
use parking_lot::RwLock;
use std::collections::HashMap;

type EntryKey = (String, String, String);

/// Message catalog shared across threads.
///
/// Reads take a shared lock; entries can be added at runtime (e.g. when a
/// language pack is loaded) without rebuilding formatters that hold it.
///
/// # Example
/// ```
/// use strict_decimal::interfaces::{CatalogTextLookup, TextLookup};
/// use std::collections::HashMap;
///
/// let catalog = CatalogTextLookup::new();
/// catalog.insert("validation", "number_format", "sign_without_digits", "Vorzeichen ohne Ziffern.");
///
/// let text = catalog.lookup("sign_without_digits", "validation", "number_format", "fallback", &HashMap::new());
/// assert_eq!(text, "Vorzeichen ohne Ziffern.");
/// ```
#[derive(Debug, Default)]
pub struct CatalogTextLookup {
    entries: RwLock<HashMap<EntryKey, String>>,
}

impl CatalogTextLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one entry.
    pub fn insert(
        &self,
        catalog: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.entries
            .write()
            .insert((catalog.into(), namespace.into(), key.into()), text.into());
    }

    /// Add or replace all entries of one namespace.
    pub fn extend<I, K, T>(&self, catalog: &str, namespace: &str, entries: I)
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let mut guard = self.entries.write();
        for (key, text) in entries {
            guard.insert(
                (catalog.to_string(), namespace.to_string(), key.into()),
                text.into(),
            );
        }
    }

    /// Raw (unsubstituted) text for an entry.
    pub fn get(&self, catalog: &str, namespace: &str, key: &str) -> Option<String> {
        self.entries
            .read()
            .get(&(catalog.to_string(), namespace.to_string(), key.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Load entries from JSON shaped as `{catalog: {namespace: {key: text}}}`.
    ///
    /// Returns the number of entries loaded.
    #[cfg(feature = "serde")]
    pub fn load_json(&self, json: &str) -> Result<usize, serde_json::Error> {
        let parsed: HashMap<String, HashMap<String, HashMap<String, String>>> =
            serde_json::from_str(json)?;

        let mut loaded = 0;
        let mut guard = self.entries.write();
        for (catalog, namespaces) in parsed {
            for (namespace, keys) in namespaces {
                for (key, text) in keys {
                    guard.insert((catalog.clone(), namespace.clone(), key), text);
                    loaded += 1;
                }
            }
        }

        tracing::debug!(loaded, total = guard.len(), "Loaded message catalog");
        Ok(loaded)
    }
}

impl TextLookup for CatalogTextLookup {
    fn lookup(
        &self,
        key: &str,
        catalog: &str,
        namespace: &str,
        default_text: &str,
        vars: &HashMap<String, String>,
    ) -> String {
        match self.get(catalog, namespace, key) {
            Some(text) => substitute_vars(&text, vars),
            None => {
                tracing::trace!(key, catalog, namespace, "No catalog entry, using default text");
                substitute_vars(default_text, vars)
            }
        }
    }
}
