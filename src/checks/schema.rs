//! OpenAPI schema enum parity check.
//!
//! Navigates a configured dot-path into the schema document to the enum
//! array serving API-facing codes and compares it against the registry keys
//! marked `api_usage`. A code missing from the schema is an error (callers
//! cannot document or validate it); a schema code the registry no longer
//! carries is a warning, since the schema may lag a key removal.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_yaml::Value;

use crate::findings::{Finding, MissingKeyFinding, SchemaLagFinding};
use crate::registry::Registry;
use crate::utils::display_path;

/// Checks the schema's code enum against the registry's API key set.
pub fn check_schema(registry: &Registry, path: &Path, enum_path: &str) -> Result<Vec<Finding>> {
    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read OpenAPI schema: {}\nHint: run 'keymint generate' first.",
            path.display()
        )
    })?;
    let doc: Value = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse OpenAPI schema: {}", path.display()))?;

    let schema_codes = extract_enum(&doc, enum_path)
        .with_context(|| format!("Failed to inspect OpenAPI schema: {}", path.display()))?;

    Ok(diff_codes(registry, &schema_codes, &display_path(path)))
}

/// Navigates a dotted path to an enum array of strings.
pub fn extract_enum(doc: &Value, enum_path: &str) -> Result<Vec<String>> {
    let mut current = doc;
    for segment in enum_path.split('.') {
        current = match current.get(segment) {
            Some(child) => child,
            None => bail!("dot-path '{}' has no '{}' element", enum_path, segment),
        };
    }

    let Some(seq) = current.as_sequence() else {
        bail!("dot-path '{}' does not point at an array", enum_path);
    };

    seq.iter()
        .map(|v| match v.as_str() {
            Some(s) => Ok(s.to_string()),
            None => bail!("dot-path '{}' contains a non-string enum value", enum_path),
        })
        .collect()
}

fn diff_codes(registry: &Registry, schema_codes: &[String], path: &str) -> Vec<Finding> {
    let expected = registry.api_keys();
    let schema_set: HashSet<&str> = schema_codes.iter().map(String::as_str).collect();
    let expected_set: HashSet<&str> = expected.iter().copied().collect();

    let mut findings = Vec::new();

    for key in &expected {
        if !schema_set.contains(key) {
            findings.push(Finding::MissingKey(MissingKeyFinding {
                key: (*key).to_string(),
                artifact: "the OpenAPI schema".to_string(),
                path: path.to_string(),
            }));
        }
    }

    for code in schema_codes {
        if !expected_set.contains(code.as_str()) {
            findings.push(Finding::SchemaLag(SchemaLagFinding {
                key: code.clone(),
                path: path.to_string(),
            }));
        }
    }

    findings
}
