//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all lokal
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `init`: Initialize the lokal configuration file
//! - `import`: Load locale files / an Excel workbook / a ZIP archive
//! - `export`: Write the table as an Excel workbook or ZIP archive
//! - `key`: Add or delete a translation key
//! - `set`: Set one cell (key × locale)
//! - `locale`: Add a locale column
//! - `status`: Summarize the table
//! - `translate`: Fill untranslated cells via the AI endpoint
//! - `pull` / `push`: Sync locale files with Azure DevOps

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Import(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Key(cmd)) => cmd.common.verbose,
            Some(Command::Set(cmd)) => cmd.common.verbose,
            Some(Command::Locale(cmd)) => cmd.common.verbose,
            Some(Command::Status(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Pull(cmd)) => cmd.common.verbose,
            Some(Command::Push(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project type: react, react-native, or flutter (overrides config file)
    #[arg(long, global = true)]
    pub project_type: Option<String>,

    /// Directory holding the per-locale files (overrides config file)
    #[arg(long, global = true)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a default .lokalrc.json in the current directory
    Init,
    /// Import locale files, an Excel workbook, or a ZIP archive
    Import(ImportCommand),
    /// Export the table as an Excel workbook or ZIP archive
    Export(ExportCommand),
    /// Add or delete a translation key
    Key(KeyCommand),
    /// Set the value of one cell (key × locale)
    Set(SetCommand),
    /// Manage the supported-locale list
    Locale(LocaleCommand),
    /// Summarize locales, keys, and untranslated cells
    Status(StatusCommand),
    /// Fill untranslated cells using the configured AI endpoint
    Translate(TranslateCommand),
    /// Load locale files from the configured Azure DevOps repository
    Pull(PullCommand),
    /// Commit local locale files to the configured Azure DevOps repository
    Push(PushCommand),
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Per-locale files to import (e.g. en.json intl_vi.arb)
    pub files: Vec<PathBuf>,

    /// Import from an Excel workbook instead
    #[arg(long, conflicts_with_all = ["files", "archive"])]
    pub excel: Option<PathBuf>,

    /// Import from a ZIP archive instead
    #[arg(long, conflicts_with = "files")]
    pub archive: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Zip,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "xlsx")]
    pub format: ExportFormat,

    /// Output path (defaults to localizations.xlsx / localizations.zip)
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum KeyAction {
    /// Insert a new key with empty values for every locale
    Add { key: String },
    /// Remove a key
    Delete { key: String },
}

#[derive(Debug, Args)]
pub struct KeyCommand {
    #[command(subcommand)]
    pub action: KeyAction,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// Translation key
    pub key: String,
    /// Locale code
    pub locale: String,
    /// New value
    pub value: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum LocaleAction {
    /// Append a locale column, back-filling empty values
    Add { code: String },
}

#[derive(Debug, Args)]
pub struct LocaleCommand {
    #[command(subcommand)]
    pub action: LocaleAction,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Only count keys starting with this prefix
    #[arg(long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Translate a single key instead of every untranslated record
    #[arg(long)]
    pub key: Option<String>,

    /// Only check that the AI endpoint answers, then exit
    #[arg(long)]
    pub check_config: bool,

    /// AI API key
    #[arg(long, env = "LOKAL_AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PullCommand {
    /// List the collection's projects and exit
    #[arg(long)]
    pub list_projects: bool,

    /// List the project's repositories and exit
    #[arg(long)]
    pub list_repos: bool,

    /// Azure DevOps personal access token
    #[arg(long, env = "LOKAL_DEVOPS_PAT", hide_env_values = true)]
    pub pat: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PushCommand {
    /// Azure DevOps personal access token
    #[arg(long, env = "LOKAL_DEVOPS_PAT", hide_env_values = true)]
    pub pat: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}
