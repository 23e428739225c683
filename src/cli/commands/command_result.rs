use crate::findings::Finding;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Verify(VerifySummary),
    Init(InitSummary),
}

/// A generation target with configured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    TypeScript,
    Go,
    OpenApi,
}

impl TargetKind {
    /// Human label used in plan lines and reports.
    pub fn label(self) -> &'static str {
        match self {
            TargetKind::TypeScript => "the TypeScript artifact",
            TargetKind::Go => "the Go artifact",
            TargetKind::OpenApi => "the OpenAPI schema",
        }
    }

    /// Config-facing target name, used in skip lines.
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::TypeScript => "typescript",
            TargetKind::Go => "go",
            TargetKind::OpenApi => "openapi",
        }
    }

    /// Infinitive verb for dry-run plan lines.
    pub fn planned_verb(self) -> &'static str {
        match self {
            TargetKind::TypeScript | TargetKind::Go => "generate",
            TargetKind::OpenApi => "update",
        }
    }

    /// Past-tense verb for completed writes.
    pub fn done_verb(self) -> &'static str {
        match self {
            TargetKind::TypeScript | TargetKind::Go => "Generated",
            TargetKind::OpenApi => "Updated",
        }
    }
}

/// What a generate run would write (dry-run) or has written.
#[derive(Debug, Clone)]
pub struct PlannedWrite {
    pub kind: TargetKind,
    pub output: String,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub dry_run: bool,
    pub writes: Vec<PlannedWrite>,
    /// Configured-but-disabled targets, skipped explicitly.
    pub skipped: Vec<TargetKind>,
    pub stats: RegistryStats,
}

/// Aggregate statistics printed after a successful generate run.
#[derive(Debug)]
pub struct RegistryStats {
    pub total_messages: usize,
    /// Per-namespace message counts in registry order.
    pub namespace_counts: Vec<(String, usize)>,
}

#[derive(Debug)]
pub struct VerifySummary {
    pub registry_keys: usize,
    pub artifacts_checked: usize,
    pub locales_checked: usize,
    pub schema_checked: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running keymint commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All findings from verification. Empty for non-verify commands.
    pub findings: Vec<Finding>,
}
