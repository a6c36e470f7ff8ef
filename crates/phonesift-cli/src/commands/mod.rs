use anyhow::{Context as _, Result};
use phonesift_config::AppConfig;
use phonesift_core::{InputFormat, Session};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::error::not_found;

pub mod completions;
pub mod export;
pub mod scan;

pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn parse_input_format(raw: Option<&str>) -> Result<Option<InputFormat>> {
    match raw {
        Some(raw) => Ok(Some(raw.parse::<InputFormat>()?)),
        None => Ok(None),
    }
}

pub fn read_session(path: &Path, format: Option<InputFormat>) -> Result<Session> {
    if !path.exists() {
        return Err(not_found(format!("input file {}", path.display())));
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read input file {}", path.display()))?;
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    debug!(?format, path = %path.display(), "scanning input");
    Ok(Session::scan(&content, format))
}
