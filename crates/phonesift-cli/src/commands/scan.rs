use crate::commands::{parse_input_format, print_json, read_session, Context};
use anyhow::Result;
use clap::Args;
use phonesift_core::Entry;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScanArgs {
    pub file: PathBuf,
    /// Override the extension-based format detection (tab|csv)
    #[arg(long)]
    pub input_format: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScanReport<'a> {
    matched: usize,
    unmatched: usize,
    entries: &'a [Entry],
}

pub fn scan(ctx: &Context<'_>, args: ScanArgs) -> Result<()> {
    let format = parse_input_format(args.input_format.as_deref())?;
    let session = read_session(&args.file, format)?;

    if ctx.json {
        return print_json(&ScanReport {
            matched: session.matched(),
            unmatched: session.unmatched(),
            entries: session.with_numbers(),
        });
    }

    for entry in session.with_numbers() {
        println!("{} - {}", entry.link, entry.joined_numbers());
    }
    println!(
        "Matched {} of {} entries",
        session.matched(),
        session.total()
    );
    Ok(())
}
