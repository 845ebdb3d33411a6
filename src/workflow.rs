//! Command implementations for the reference host.
use crate::cli::{
    Command, CompactArgs, CompactCommand, CompactIoArgs, RootArgs, StatusArgs, ValidateArgs,
};
use crate::compact::{lint_compact, parse_compact, serialize_compact, CompactLintIssue, Row};
use crate::document::load_document;
use crate::host::{check_readiness, load_zones, FileHost};
use crate::output::{render_diagnostics, render_report};
use crate::readiness::RuntimeCapabilities;
use crate::validate::{validate, Diagnostics};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;

/// Dispatch a parsed command line.
pub fn run(args: RootArgs) -> Result<()> {
    match args.command {
        Command::Validate(args) => run_validate(&args),
        Command::Status(args) => run_status(&args),
        Command::Compact(args) => run_compact(&args),
    }
}

#[derive(Serialize)]
struct ValidateOutput<'a> {
    diagnostics: &'a Diagnostics,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    warnings: &'a [String],
}

/// Validate a document file; unreadable inputs are errors.
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let loaded = load_document(&args.input.document)?;
    let zones = match &args.input.zones {
        Some(path) => load_zones(path)?,
        None => Vec::new(),
    };
    let diagnostics = validate(&loaded.document, &zones);
    if args.json {
        let output = ValidateOutput {
            diagnostics: &diagnostics,
            warnings: &loaded.warnings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    println!("document: {}", args.input.document.display());
    print!("{}", render_diagnostics(&diagnostics));
    if !loaded.warnings.is_empty() {
        println!("warnings: {}", loaded.warnings.join("; "));
    }
    Ok(())
}

/// Evaluate readiness through a file-backed host.
///
/// Missing or unreadable inputs fall back to empty defaults and show up as
/// report warnings rather than failing the command.
pub fn run_status(args: &StatusArgs) -> Result<()> {
    let host = FileHost {
        document_path: args.input.document.clone(),
        zones_path: args.input.zones.clone(),
        capabilities: RuntimeCapabilities {
            can_execute: args.can_execute,
            live_zone_count: args.live_zones,
        },
    };
    let report = check_readiness(&host);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("document: {}", args.input.document.display());
    print!("{}", render_report(&report));
    Ok(())
}

fn run_compact(args: &CompactArgs) -> Result<()> {
    match &args.command {
        CompactCommand::Parse(io) => run_compact_parse(io),
        CompactCommand::Format(io) => run_compact_format(io),
    }
}

#[derive(Serialize)]
struct ParsedCompact {
    rows: Vec<Row>,
    lint: Vec<CompactLintIssue>,
}

/// Rows for `compact format`: a bare array or the `compact parse` output.
#[derive(Deserialize)]
#[serde(untagged)]
enum RowsInput {
    Parsed { rows: Vec<Row> },
    Rows(Vec<Row>),
}

fn run_compact_parse(args: &CompactIoArgs) -> Result<()> {
    let text = read_input(args)?;
    let lines: Vec<&str> = text.lines().collect();
    let rows = parse_compact(&lines);
    let lint = lint_compact(&rows);
    tracing::debug!(rows = rows.len(), lint = lint.len(), "parsed compact schedule");
    println!(
        "{}",
        serde_json::to_string_pretty(&ParsedCompact { rows, lint })?
    );
    Ok(())
}

fn run_compact_format(args: &CompactIoArgs) -> Result<()> {
    let text = read_input(args)?;
    let input: RowsInput = serde_json::from_str(&text).context("parse compact rows JSON")?;
    let rows = match input {
        RowsInput::Parsed { rows } | RowsInput::Rows(rows) => rows,
    };
    for line in serialize_compact(&rows) {
        println!("{line}");
    }
    Ok(())
}

fn read_input(args: &CompactIoArgs) -> Result<String> {
    match &args.file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read stdin")?;
            Ok(text)
        }
    }
}
