use std::path::Path;

use anyhow::Result;

use super::super::args::VerifyCommand;
use super::{
    CommandResult, CommandSummary, VerifySummary,
    helper::{finish, load_effective_config},
};
use crate::checks::run_verification;
use crate::registry::load_registry;

pub fn verify(cmd: VerifyCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = load_effective_config(&args.common)?;

    let registry = load_registry(Path::new(&config.registry_path), &config.ignore_patterns())?;
    let report = run_verification(&registry, &config)?;

    let summary = VerifySummary {
        registry_keys: registry.message_count(),
        artifacts_checked: report.artifacts_checked,
        locales_checked: report.locales_checked,
        schema_checked: report.schema_checked,
    };

    Ok(finish(
        CommandSummary::Verify(summary),
        report.findings,
        true,
    ))
}
