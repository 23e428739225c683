//! The canonical registry shape produced by validation.
//!
//! Namespaces and entries are stored as ordered vectors so every downstream
//! consumer (generators, verifier, statistics) sees the same stable order:
//! namespace insertion order, then message insertion order.

/// The merged, validated tree of all message definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    pub metadata: RegistryMetadata,
    pub namespaces: Vec<Namespace>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryMetadata {
    pub version: String,
    /// Target languages this registry is generated for.
    pub targets: Vec<String>,
    /// Locales expected to carry a full translation table.
    pub locales: Vec<String>,
}

/// One top-level grouping of message keys (e.g. `auth`, `error`, `ui`).
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub entries: Vec<MessageEntry>,
}

/// One message's full metadata record.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEntry {
    /// Globally unique, `namespace.snake_case_name`.
    pub key: String,
    pub namespace: String,
    /// The message's name within its namespace (the last key segment).
    pub name: String,
    /// Free-form classification (error/success/label/...), used for human
    /// auditing and for the schema enum role partition.
    pub category: String,
    pub description: String,
    /// Ordered interpolation parameter names; may be empty.
    pub template_params: Vec<String>,
    pub since: String,
    pub deprecated: bool,
    pub api_usage: bool,
    pub ui_usage: bool,
}

impl Registry {
    /// All message entries in stable registry order.
    pub fn entries(&self) -> impl Iterator<Item = &MessageEntry> {
        self.namespaces.iter().flat_map(|ns| ns.entries.iter())
    }

    /// All keys in stable registry order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries().map(|e| e.key.as_str()).collect()
    }

    pub fn message_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.entries.len()).sum()
    }

    /// Keys consumed by the API surface (`api_usage = true`).
    pub fn api_keys(&self) -> Vec<&str> {
        self.filtered_keys(|e| e.api_usage)
    }

    /// Keys consumed by the UI surface (`ui_usage = true`).
    pub fn ui_keys(&self) -> Vec<&str> {
        self.filtered_keys(|e| e.ui_usage)
    }

    /// Keys with at least one interpolation parameter.
    pub fn templated_keys(&self) -> Vec<&str> {
        self.filtered_keys(|e| !e.template_params.is_empty())
    }

    pub fn deprecated_keys(&self) -> Vec<&str> {
        self.filtered_keys(|e| e.deprecated)
    }

    fn filtered_keys(&self, predicate: impl Fn(&MessageEntry) -> bool) -> Vec<&str> {
        self.entries()
            .filter(|e| predicate(e))
            .map(|e| e.key.as_str())
            .collect()
    }
}
