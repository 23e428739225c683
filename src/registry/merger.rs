//! Fragment merging with conflict detection.
//!
//! Fragments are deep-merged in resolution order into one accumulator tree.
//! Mappings merge key-by-key; scalars and sequences are atomic and may only
//! be redefined with a structurally equal value. An origin map (dotted value
//! path to fragment path) is kept while merging so a conflict can name both
//! contributing files; it is discarded once the merge succeeds.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_yaml::mapping::Entry;
use serde_yaml::{Mapping, Value};

use crate::utils::join_key_path;

/// Parses and deep-merges the given fragments into a single tree.
///
/// Paths are merged in the order given; [`resolve_sources`] guarantees that
/// order is the sorted path order, so the result is independent of how the
/// registry happens to be split across files.
///
/// [`resolve_sources`]: crate::registry::resolve_sources
pub fn merge_fragments(paths: &[PathBuf]) -> Result<Value> {
    let mut accumulator = Value::Mapping(Mapping::new());
    let mut origins: HashMap<String, PathBuf> = HashMap::new();

    for path in paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry fragment: {}", path.display()))?;
        let fragment: Value = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse registry fragment: {}", path.display()))?;

        if !fragment.is_mapping() {
            bail!(
                "Registry fragment '{}' must be a mapping at the top level.",
                path.display()
            );
        }

        merge_value(&mut accumulator, fragment, "", path, &mut origins)?;
    }

    Ok(accumulator)
}

fn merge_value(
    accumulator: &mut Value,
    incoming: Value,
    path: &str,
    file: &Path,
    origins: &mut HashMap<String, PathBuf>,
) -> Result<()> {
    match (accumulator, incoming) {
        (Value::Mapping(existing), Value::Mapping(incoming)) => {
            for (key, value) in incoming {
                let Some(key_str) = key.as_str().map(str::to_owned) else {
                    bail!(
                        "Registry fragment '{}' has a non-string key under '{}'.",
                        file.display(),
                        if path.is_empty() { "<root>" } else { path }
                    );
                };
                let child_path = join_key_path(path, &key_str);

                match existing.entry(key) {
                    Entry::Occupied(mut slot) => {
                        merge_value(slot.get_mut(), value, &child_path, file, origins)?;
                    }
                    Entry::Vacant(slot) => {
                        record_origins(&value, &child_path, file, origins);
                        slot.insert(value);
                    }
                }
            }
            Ok(())
        }
        (existing, incoming) => {
            // Scalars and sequences are atomic: redefinition must be
            // structurally identical or it is a conflict.
            if *existing == incoming {
                return Ok(());
            }
            let earlier = origins
                .get(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unknown fragment>".to_string());
            bail!(
                "Merge conflict at '{}': '{}' and '{}' define different values.",
                path,
                earlier,
                file.display()
            );
        }
    }
}

/// Records the contributing fragment for every path in a newly adopted
/// subtree. Sequences are not descended into; they conflict as a whole.
fn record_origins(value: &Value, path: &str, file: &Path, origins: &mut HashMap<String, PathBuf>) {
    origins.insert(path.to_string(), file.to_path_buf());
    if let Value::Mapping(map) = value {
        for (key, child) in map {
            if let Some(key_str) = key.as_str() {
                record_origins(child, &join_key_path(path, key_str), file, origins);
            }
        }
    }
}
