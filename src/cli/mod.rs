//! Command-line interface.

pub mod credentials;
pub mod output;
pub mod prompt;
pub mod shell;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::Kind;
use crate::error::Result;

/// passkeep - a personal credential vault.
#[derive(Parser)]
#[command(
    name = "passkeep",
    about = "A personal credential vault for website and app logins",
    version,
    after_help = "Run without a command for the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Credentials file (default: passwords.csv)
    #[arg(short, long, global = true, env = constants::FILE_ENV)]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Interactive numbered menu (the default)
    Shell,

    /// Add a password
    Add {
        /// Email or username
        identity: String,
        /// Website or App (case-insensitive)
        #[arg(short = 't', long = "type")]
        kind: Kind,
        /// URL for a website, name for an app
        #[arg(long)]
        target: String,
        /// Password (read from stdin or prompted when omitted)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Show passwords matching an identity and URL/app name
    Search {
        /// Email or username
        identity: String,
        /// URL or app name
        target: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a stored password
    Update {
        /// Email or username
        identity: String,
        /// URL or app name
        target: String,
        /// New password (read from stdin or prompted when omitted)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Delete a stored password
    Rm {
        /// Email or username
        identity: String,
        /// URL or app name
        target: String,
    },

    /// List stored logins without passwords
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}

/// Print a completion script for `shell` to stdout.
fn completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(
        clap_complete::Shell::from(shell),
        &mut cmd,
        "passkeep",
        &mut std::io::stdout(),
    );
    Ok(())
}

/// Execute a command against the resolved credentials file.
///
/// No command means the interactive menu.
///
/// # Errors
///
/// Returns error if the config is unusable or the command fails.
pub fn execute(command: Option<Command>, file: Option<PathBuf>) -> Result<()> {
    let command = match command.unwrap_or(Command::Shell) {
        Command::Completions { shell } => return completions(shell),
        other => other,
    };

    let path = Config::load()?.vault_path(file);
    debug!(path = %path.display(), "using credentials file");

    match command {
        Command::Shell => shell::execute(&path),
        Command::Add {
            identity,
            kind,
            target,
            secret,
        } => credentials::add(&path, &identity, kind, &target, secret),
        Command::Search {
            identity,
            target,
            json,
        } => credentials::search(&path, &identity, &target, json),
        Command::Update {
            identity,
            target,
            secret,
        } => credentials::update(&path, &identity, &target, secret),
        Command::Rm { identity, target } => credentials::rm(&path, &identity, &target),
        Command::List { json } => credentials::list(&path, json),
        Command::Completions { shell } => completions(shell),
    }
}
