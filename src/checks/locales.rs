//! Locale translation table checks.
//!
//! Every locale named in the registry metadata must carry a table at
//! `<localesRoot>/<locale>.json`. Nested objects are flattened to dotted
//! keys before diffing. A key that is present but maps to an empty string
//! is a warning only; a translator may have staged it deliberately.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::findings::{EmptyValueFinding, ExtraKeyFinding, Finding, MissingKeyFinding};
use crate::registry::Registry;
use crate::utils::{display_path, join_key_path};

/// Checks every supported locale's table against the registry key set.
pub fn check_locales(registry: &Registry, locales_root: &Path) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    for locale in &registry.metadata.locales {
        let path = locales_root.join(format!("{}.json", locale));
        if !path.exists() {
            bail!(
                "Locale table for '{}' not found: {}\n\
                 Hint: every locale in the registry metadata needs a translation table.",
                locale,
                path.display()
            );
        }
        findings.extend(check_locale_table(registry, locale, &path)?);
    }

    Ok(findings)
}

fn check_locale_table(registry: &Registry, locale: &str, path: &Path) -> Result<Vec<Finding>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale table: {}", path.display()))?;
    let table: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale table: {}", path.display()))?;

    let mut values = HashMap::new();
    flatten_table(&table, String::new(), &mut values);

    let path_str = display_path(path);
    let label = format!("locale '{}'", locale);
    let mut findings = Vec::new();

    for key in registry.keys() {
        match values.get(key) {
            None => findings.push(Finding::MissingKey(MissingKeyFinding {
                key: key.to_string(),
                artifact: label.clone(),
                path: path_str.clone(),
            })),
            Some(value) if value.is_empty() => {
                findings.push(Finding::EmptyValue(EmptyValueFinding {
                    key: key.to_string(),
                    locale: locale.to_string(),
                    path: path_str.clone(),
                }));
            }
            Some(_) => {}
        }
    }

    let registry_keys: std::collections::HashSet<&str> =
        registry.keys().into_iter().collect();
    let mut extra: Vec<&String> = values
        .keys()
        .filter(|k| !registry_keys.contains(k.as_str()))
        .collect();
    extra.sort();
    for key in extra {
        findings.push(Finding::ExtraKey(ExtraKeyFinding {
            key: key.clone(),
            artifact: label.clone(),
            path: path_str.clone(),
        }));
    }

    Ok(findings)
}

/// Flattens nested objects into dotted keys; only string leaves count as
/// translations.
fn flatten_table(value: &Value, prefix: String, result: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_table(child, join_key_path(&prefix, key), result);
            }
        }
        Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        _ => {}
    }
}
