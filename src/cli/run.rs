/// Dispatches to the appropriate command handler based on parsed arguments.
use std::{fs, path::Path};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, CommandSummary, InitSummary},
    commands::{generate::generate, helper::finish, verify::verify},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Verify(cmd)) => verify(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(finish(
                CommandSummary::Init(InitSummary { created: true }),
                Vec::new(),
                true,
            ))
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
