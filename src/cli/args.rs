//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all keymint
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Run the pipeline and write artifacts for enabled targets
//! - `verify`: Check artifacts, locale tables, and the API schema against
//!   the registry
//! - `init`: Initialize keymint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Registry source path (overrides config file)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Locale tables directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Enable verbose output (echo the effective configuration)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print planned actions without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct VerifyCommand {
    #[command(flatten)]
    pub args: VerifyArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate message-key artifacts and update the API schema
    Generate(GenerateCommand),
    /// Verify generated artifacts, locale tables, and the API schema against the registry
    Verify(VerifyCommand),
    /// Initialize a new .keymintrc.json configuration file
    Init,
}
