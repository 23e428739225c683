//! Verification checks comparing the registry against generated artifacts.
//!
//! Every check independently re-derives its expected key set from the
//! validated registry and diffs it against what a generated file actually
//! contains. Checks are read-only and purely diagnostic; errors fail a
//! verification run, warnings are reported but do not.

pub mod artifacts;
pub mod locales;
pub mod naming;
pub mod schema;

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::findings::{Finding, Severity};
use crate::registry::Registry;

use artifacts::ArtifactKind;

/// Transient result of one verification run.
#[derive(Debug, Default)]
pub struct VerificationReport {
    pub findings: Vec<Finding>,
    pub artifacts_checked: usize,
    pub locales_checked: usize,
    pub schema_checked: bool,
}

impl VerificationReport {
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
            .count()
    }
}

/// Runs every applicable check for the configured targets.
///
/// Disabled targets are not checked; their artifacts are not expected to be
/// in lockstep until they are enabled and generated.
pub fn run_verification(registry: &Registry, config: &Config) -> Result<VerificationReport> {
    let mut report = VerificationReport::default();

    report.findings.extend(naming::check_key_format(registry));
    report.findings.extend(naming::check_duplicates(registry));

    if config.typescript.enabled {
        report.findings.extend(artifacts::check_artifact(
            registry,
            ArtifactKind::TypeScript,
            Path::new(&config.typescript.output),
        )?);
        report.artifacts_checked += 1;
    }

    if config.golang.enabled {
        report.findings.extend(artifacts::check_artifact(
            registry,
            ArtifactKind::Go,
            Path::new(&config.golang.output),
        )?);
        report.artifacts_checked += 1;
    }

    report.findings.extend(locales::check_locales(
        registry,
        Path::new(&config.locales_root),
    )?);
    report.locales_checked = registry.metadata.locales.len();

    if config.openapi.enabled {
        report.findings.extend(schema::check_schema(
            registry,
            Path::new(&config.openapi.schema_path),
            &config.openapi.code_enum_path,
        )?);
        report.schema_checked = true;
    }

    Ok(report)
}
