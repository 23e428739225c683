use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use super::{CommandResult, CommandSummary, RegistryStats};
use crate::config::{Config, load_config};
use crate::findings::{Finding, Severity};
use crate::registry::Registry;
use crate::utils::display_path;

/// Loads configuration once, applies CLI overrides, and optionally echoes
/// the effective value. The returned config is immutable from here on and
/// passed down explicitly.
pub fn load_effective_config(common: &CommonArgs) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let mut config = load_config(&cwd)?.config;

    if let Some(registry) = &common.registry {
        config.registry_path = display_path(registry);
    }
    if let Some(locales_root) = &common.locales_root {
        config.locales_root = display_path(locales_root);
    }

    if common.verbose {
        let rendered = serde_json::to_string_pretty(&config)
            .context("Failed to render effective configuration")?;
        println!("Effective configuration:\n{}", rendered);
    }

    Ok(config)
}

pub fn registry_stats(registry: &Registry) -> RegistryStats {
    RegistryStats {
        total_messages: registry.message_count(),
        namespace_counts: registry
            .namespaces
            .iter()
            .map(|ns| (ns.name.clone(), ns.entries.len()))
            .collect(),
    }
}

pub fn finish(
    summary: CommandSummary,
    mut findings: Vec<Finding>,
    exit_on_errors: bool,
) -> CommandResult {
    findings.sort();

    let error_count = findings
        .iter()
        .filter(|f| f.severity() == Severity::Error)
        .count();
    let warning_count = findings
        .iter()
        .filter(|f| f.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        findings,
    }
}
