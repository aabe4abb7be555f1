use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::duration::AgeSpan;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "file-aging")]
#[command(author, version, about = "Per-folder file aging policies with inherited rules")]
#[command(long_about = "Manage per-folder file aging policies: pattern rules with expire/keep \
    durations, stored per directory and inherited from ancestor directories.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Configuration or target not found\n  \
    2 - Unexpected error")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a rule to a folder
    Add(AddArgs),

    /// List the aging rules that apply to a folder
    List(ListArgs),

    /// Remove rules from a folder
    Remove(RemoveArgs),

    /// Clear parts of a folder's aging configuration
    Clear(ClearArgs),

    /// Apply the aging rules to a folder
    Run(RunArgs),
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Folder to act on
    pub folder: PathBuf,

    /// Pattern to match file names; `*` matches any run of characters
    pub pattern: String,

    /// Position to insert the rule at
    #[arg(default_value_t = 0)]
    pub position: usize,

    /// How long matching files may live before they expire (e.g. 30d, 12h)
    #[arg(long)]
    pub expire: Option<AgeSpan>,

    /// How long expired files are kept before deletion
    #[arg(long)]
    pub keep: Option<AgeSpan>,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Folder to act on
    pub folder: PathBuf,

    /// Show only the folder's own configuration, ignoring ancestors
    #[arg(long)]
    pub no_parent: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Folder to act on
    pub folder: PathBuf,

    /// Positions of the rules to remove
    #[arg(required = true)]
    pub positions: Vec<usize>,
}

#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Folder to act on
    pub folder: PathBuf,

    /// What to clear (comma-separated)
    #[arg(value_enum, required = true, value_delimiter = ',')]
    pub levels: Vec<ClearLevel>,
}

impl ClearArgs {
    /// Whether `level` was requested, directly or via `all`.
    #[must_use]
    pub fn includes(&self, level: ClearLevel) -> bool {
        self.levels
            .iter()
            .any(|selected| *selected == ClearLevel::All || *selected == level)
    }
}

/// What `clear` removes from a folder's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClearLevel {
    /// Aging rules
    Rules,
    /// Archived files
    Archive,
    /// Sweep logs
    Log,
    /// The complete configuration
    All,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Folder to act on
    pub folder: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
