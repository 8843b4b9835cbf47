//! Command dispatch

use std::io::{self, Write};
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use tracing::{debug, instrument};

use crate::application::Session;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::shell::Shell;
use crate::cli::{output, CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::RealFileSystem;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "effective settings");

    match &cli.command {
        None => cmd_shell(settings, None),
        Some(Commands::Shell { name, birthdate }) => {
            let root = name.as_deref().zip(birthdate.as_deref());
            cmd_shell(settings, root)
        }
        Some(Commands::Config { command }) => cmd_config(&settings, command, cli),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

#[instrument(skip(settings))]
fn cmd_shell(settings: Settings, root: Option<(&str, &str)>) -> CliResult<()> {
    let session = Session::new(Arc::new(RealFileSystem), Arc::new(settings));
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), session);
    shell.run(root)
}

fn cmd_config(settings: &Settings, command: &ConfigCommands, cli: &Cli) -> CliResult<()> {
    let mut out = io::stdout();
    let result = match command {
        ConfigCommands::Show => output::info(&mut out, &settings.to_toml()?),
        ConfigCommands::Template => output::info(&mut out, &Settings::template()),
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".into());
            let local = cli
                .config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".into());
            output::detail(&mut out, &format!("global: {global}"))
                .and_then(|_| output::detail(&mut out, &format!("local:  {local}")))
        }
    };
    result.map_err(|e| CliError::io("write config", e))
}

fn cmd_completion(shell: CompletionShell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut out = io::stdout();
    generate(shell, &mut cmd, name, &mut out);
    out.flush()
        .map_err(|e| CliError::io("write completions", e))
}
