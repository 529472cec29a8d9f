//! Persisting generated points.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use weierstrass::GeneratedEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `scalar, x, y` per line
    Text,
    /// Array of `{"scalar", "x", "y"}` objects, coordinates as decimal strings
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format {other:?}, expected text or json"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct EntryRecord {
    scalar: u64,
    x: String,
    y: String,
}

impl From<&GeneratedEntry> for EntryRecord {
    fn from(entry: &GeneratedEntry) -> Self {
        Self {
            scalar: entry.scalar,
            x: entry.x.to_string(),
            y: entry.y.to_string(),
        }
    }
}

pub fn write_entries<W: Write>(entries: &[GeneratedEntry], format: OutputFormat, mut writer: W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(writer, "{}, {}, {}", entry.scalar, entry.x, entry.y)?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<EntryRecord> = entries.iter().map(EntryRecord::from).collect();
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn save_entries(entries: &[GeneratedEntry], format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_entries(entries, format, BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))
}
