//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Greenroom - Pre-competition environment readiness checks.
#[derive(Debug, Parser)]
#[command(name = "greenroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a check plan file (overrides greenroom.yml discovery)
    #[arg(short, long, global = true, env = "GREENROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the readiness check (default if no command specified)
    Check(CheckArgs),

    /// List the capability probes the check will run
    Probes(ProbesArgs),

    /// Show the conduct rules enforced during the competition
    Rules(RulesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How the readiness results leave the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Step-by-step display with the acceptance prompt.
    #[default]
    Human,

    /// Plain-text report on stdout, no prompt.
    Text,

    /// JSON report on stdout, no prompt.
    Json,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Skip the settling pause between probes
    #[arg(long)]
    pub fast: bool,

    /// Accept the results without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,

    /// No prompts; GREENROOM_PROMPT_* variables answer them
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `probes` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Judge the rule catalog against a violation reason
    #[arg(long)]
    pub reason: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
