use crate::commands::{parse_input_format, print_json, read_session, Context};
use crate::error::invalid_input;
use anyhow::{anyhow, Context as _, Result};
use chrono::Utc;
use clap::{ArgAction, Args};
use phonesift_core::{export_file_name, Dataset, Entry, ExportFormat};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub file: PathBuf,
    /// Export format (txt|csv), defaults to the configured format
    #[arg(long)]
    pub format: Option<String>,
    /// Include entries without numbers
    #[arg(long, action = ArgAction::SetTrue)]
    pub all: bool,
    /// Directory for the generated file
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Override the extension-based format detection (tab|csv)
    #[arg(long)]
    pub input_format: Option<String>,
    /// Print the artifact instead of writing a file
    #[arg(long, action = ArgAction::SetTrue)]
    pub stdout: bool,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: String,
    count: usize,
    output: Option<String>,
}

pub fn export(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let input_format = parse_input_format(args.input_format.as_deref())?;
    let session = read_session(&args.file, input_format)?;

    let dataset = if args.all {
        Dataset::All
    } else {
        Dataset::NumbersOnly
    };
    let format = match args.format {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ctx.config.default_format,
    };

    let entries: Vec<Entry> = match dataset {
        Dataset::NumbersOnly => session.with_numbers().to_vec(),
        Dataset::All => session.all_entries(),
    };
    if entries.is_empty() {
        return Err(invalid_input(match dataset {
            Dataset::NumbersOnly => "no entries with phone numbers found",
            Dataset::All => "no entries found",
        }));
    }

    let data = format.render(&entries);

    if args.stdout {
        if ctx.json {
            return Err(anyhow!("--json cannot be combined with --stdout"));
        }
        print!("{}", data);
        return Ok(());
    }

    let dir = args
        .out_dir
        .or_else(|| ctx.config.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("create export directory {}", dir.display()))?;

    let path = dir.join(export_file_name(dataset, format, Utc::now()));
    fs::write(&path, &data)
        .with_context(|| format!("write export file {}", path.display()))?;
    debug!(path = %path.display(), "export written");

    let report = ExportReport {
        format: format.extension().to_string(),
        count: entries.len(),
        output: Some(path.display().to_string()),
    };
    if ctx.json {
        return print_json(&report);
    }

    println!("Exported {} entries to {}", report.count, path.display());
    Ok(())
}
