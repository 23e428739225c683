//! Per-target artifact generators.
//!
//! Each generator is a pure function of `(Registry, target config, GenContext)`
//! returning artifact text; no generator holds state between invocations, so
//! generating twice from an unchanged registry produces byte-identical
//! output. Writing is a separate step so dry-run can share the same path.

pub mod golang;
pub mod openapi;
pub mod typescript;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Per-run values shared by all generators.
///
/// Computed exactly once by the orchestrator so repeated generator calls in
/// one run agree on them. Only the OpenAPI metadata block uses the
/// timestamp; code artifacts carry no run-varying content.
#[derive(Debug, Clone)]
pub struct GenContext {
    /// Registry source label used in artifact headers.
    pub source: String,
    pub generated_at: DateTime<Utc>,
}

impl GenContext {
    pub fn new(source: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            generated_at,
        }
    }

    pub fn timestamp(&self) -> String {
        self.generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Machine-generated banner shared by the code artifacts.
pub(crate) fn header(ctx: &GenContext) -> String {
    format!(
        "// Code generated from the message registry by keymint. DO NOT EDIT.\n\
         // Source: {}\n",
        ctx.source
    )
}

/// Quotes a string for embedding in generated TypeScript or Go source.
///
/// JSON escaping is valid in both targets' string literals.
pub(crate) fn quoted(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Writes an artifact, creating parent directories as needed.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write artifact: {}", path.display()))
}

#[cfg(test)]
pub(crate) fn test_context() -> GenContext {
    use chrono::TimeZone;

    GenContext::new(
        "./registry/messages.yaml",
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
    )
}
