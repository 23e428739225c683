//! Registry loading: fragment resolution, merging, and validation.
//!
//! The registry is the single source of truth for every message key. It may
//! live in one YAML document or be split across a directory tree of fragment
//! files; this module turns either layout into one validated [`Registry`].

pub mod merger;
pub mod model;
pub mod resolver;
pub mod validator;

use std::path::Path;

use anyhow::Result;
use glob::Pattern;

pub use merger::merge_fragments;
pub use model::{MessageEntry, Namespace, Registry, RegistryMetadata};
pub use resolver::{ResolvedSources, SourceType, resolve_sources};
pub use validator::validate_registry;

/// Resolves, merges, and validates the registry at `path` in one step.
pub fn load_registry(path: &Path, ignores: &[Pattern]) -> Result<Registry> {
    let sources = resolve_sources(path, ignores)?;
    let tree = merge_fragments(&sources.paths)?;
    validate_registry(&tree)
}
