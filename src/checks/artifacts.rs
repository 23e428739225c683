//! Key extraction and diffing for generated code artifacts.
//!
//! The generated flat key table has a fixed one-key-per-line shape, so keys
//! are recovered with pattern matching against the table section instead of
//! a full parser for each target language.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::findings::{ExtraKeyFinding, Finding, MissingKeyFinding};
use crate::generators;
use crate::registry::Registry;
use crate::utils::display_path;

static KEY_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"([^"]+)"\s*:"#).unwrap());

/// A code artifact target the verifier can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    TypeScript,
    Go,
}

impl ArtifactKind {
    /// The declaration line opening the flat key table.
    pub fn marker(self) -> &'static str {
        match self {
            ArtifactKind::TypeScript => generators::typescript::KEY_TABLE_MARKER,
            ArtifactKind::Go => generators::golang::KEY_TABLE_MARKER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::TypeScript => "the TypeScript artifact",
            ArtifactKind::Go => "the Go artifact",
        }
    }
}

/// Diffs the keys declared in a generated artifact against the registry.
///
/// Missing and extra keys are both errors: a missing key breaks compile-time
/// lookups, an extra key means the artifact is stale.
pub fn check_artifact(
    registry: &Registry,
    kind: ArtifactKind,
    path: &Path,
) -> Result<Vec<Finding>> {
    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read {}: {}\nHint: run 'keymint generate' first.",
            kind.label(),
            path.display()
        )
    })?;

    let artifact_keys = extract_keys(&content, kind.marker())
        .with_context(|| format!("Failed to inspect {}: {}", kind.label(), path.display()))?;

    Ok(diff_keys(
        registry,
        &artifact_keys,
        kind.label(),
        &display_path(path),
    ))
}

/// Extracts the declared keys from the flat key table section.
pub fn extract_keys(content: &str, marker: &str) -> Result<Vec<String>> {
    let Some(start) = content.find(marker) else {
        bail!("could not locate the key table declaration");
    };

    let mut keys = Vec::new();
    for line in content[start..].lines().skip(1) {
        if line.trim_start().starts_with('}') {
            return Ok(keys);
        }
        if let Some(captures) = KEY_LINE_REGEX.captures(line) {
            keys.push(captures[1].to_string());
        }
    }

    bail!("the key table declaration is not terminated");
}

/// Computes missing/extra findings for one artifact's observable key set.
pub fn diff_keys(
    registry: &Registry,
    artifact_keys: &[String],
    label: &str,
    path: &str,
) -> Vec<Finding> {
    let registry_keys: Vec<&str> = registry.keys();
    let registry_set: HashSet<&str> = registry_keys.iter().copied().collect();
    let artifact_set: HashSet<&str> = artifact_keys.iter().map(String::as_str).collect();

    let mut findings = Vec::new();

    for key in &registry_keys {
        if !artifact_set.contains(key) {
            findings.push(Finding::MissingKey(MissingKeyFinding {
                key: (*key).to_string(),
                artifact: label.to_string(),
                path: path.to_string(),
            }));
        }
    }

    for key in artifact_keys {
        if !registry_set.contains(key.as_str()) {
            findings.push(Finding::ExtraKey(ExtraKeyFinding {
                key: key.clone(),
                artifact: label.to_string(),
                path: path.to_string(),
            }));
        }
    }

    findings
}
