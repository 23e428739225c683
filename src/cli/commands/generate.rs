use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use super::super::args::GenerateCommand;
use super::{
    CommandResult, CommandSummary, GenerateSummary, PlannedWrite, TargetKind,
    helper::{finish, load_effective_config, registry_stats},
};
use crate::config::Config;
use crate::generators::{GenContext, golang, openapi, typescript, write_artifact};
use crate::registry::{Registry, load_registry};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = load_effective_config(&args.common)?;

    let registry = load_registry(Path::new(&config.registry_path), &config.ignore_patterns())?;
    let ctx = GenContext::new(config.registry_path.clone(), Utc::now());

    let (writes, skipped) = plan(&config);

    if !args.dry_run {
        for write in &writes {
            execute(write, &registry, &config, &ctx)?;
        }
    }

    let summary = GenerateSummary {
        dry_run: args.dry_run,
        writes,
        skipped,
        stats: registry_stats(&registry),
    };

    Ok(finish(CommandSummary::Generate(summary), Vec::new(), true))
}

/// Builds the ordered write plan plus the disabled-target skip list.
/// The same plan drives both dry-run output and actual generation.
fn plan(config: &Config) -> (Vec<PlannedWrite>, Vec<TargetKind>) {
    let mut writes = Vec::new();
    let mut skipped = Vec::new();

    let targets = [
        (
            TargetKind::TypeScript,
            config.typescript.enabled,
            config.typescript.output.clone(),
        ),
        (
            TargetKind::Go,
            config.golang.enabled,
            config.golang.output.clone(),
        ),
        (
            TargetKind::OpenApi,
            config.openapi.enabled,
            config.openapi.schema_path.clone(),
        ),
    ];

    for (kind, enabled, output) in targets {
        if enabled {
            writes.push(PlannedWrite { kind, output });
        } else {
            skipped.push(kind);
        }
    }

    (writes, skipped)
}

fn execute(
    write: &PlannedWrite,
    registry: &Registry,
    config: &Config,
    ctx: &GenContext,
) -> Result<()> {
    let output = Path::new(&write.output);
    match write.kind {
        TargetKind::TypeScript => write_artifact(output, &typescript::generate(registry, ctx)),
        TargetKind::Go => write_artifact(
            output,
            &golang::generate(registry, &config.golang.package, ctx),
        ),
        TargetKind::OpenApi => openapi::update_schema(registry, output, ctx),
    }
}
