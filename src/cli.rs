//! CLI argument parsing for the reference host.
//!
//! The CLI only loads files and prints results; every decision lives in the
//! library so an embedding application gets the same answers.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "simready",
    version,
    about = "Simulation readiness checks for building-energy configurations",
    after_help = "Commands:\n  validate --document <file>        Cross-check references and report findings\n  status --document <file>          Evaluate the seven readiness steps\n  compact parse [--file <file>]     Compact schedule lines -> JSON rows\n  compact format [--file <file>]    JSON rows -> compact schedule lines\n\nExamples:\n  simready validate --document project.json --zones zones.json\n  simready status --document project.json --zones zones.json --can-execute --json\n  simready compact parse --file occupancy.txt\n  simready compact parse < occupancy.txt | simready compact format",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Validate(ValidateArgs),
    Status(StatusArgs),
    Compact(CompactArgs),
}

/// Inputs shared by commands that read a configuration.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Configuration document (JSON)
    #[arg(long, value_name = "FILE")]
    pub document: PathBuf,

    /// Zone list from the geometry model (JSON array); omitted means no zones
    #[arg(long, value_name = "FILE")]
    pub zones: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(about = "Cross-check document references and report findings")]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Evaluate the readiness checklist")]
pub struct StatusArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// The simulation engine can be launched from this host
    #[arg(long)]
    pub can_execute: bool,

    /// Zone count reported by a live geometry model
    #[arg(long, value_name = "N")]
    pub live_zones: Option<usize>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Convert compact schedules between lines and rows")]
pub struct CompactArgs {
    #[command(subcommand)]
    pub command: CompactCommand,
}

#[derive(Subcommand, Debug)]
pub enum CompactCommand {
    /// Parse compact lines into JSON rows (with lint findings)
    Parse(CompactIoArgs),
    /// Format JSON rows back into compact lines
    Format(CompactIoArgs),
}

#[derive(Parser, Debug)]
pub struct CompactIoArgs {
    /// Input file; stdin when omitted
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}
