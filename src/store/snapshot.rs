//! Flat-file snapshot of a frequency listing.
//!
//! One entry per line: `<name> <count>`. The file only hands data to the
//! histogram view; the purchase record stays authoritative.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub name: String,
    /// Signed so a corrupt negative count read from disk can be rejected.
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    pub fn from_counts<'a, I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let entries = counts
            .into_iter()
            .map(|(name, count)| SnapshotEntry {
                name: name.to_string(),
                count: i64::try_from(count).unwrap_or(i64::MAX),
            })
            .collect();

        Snapshot { entries }
    }

    /// Write every entry to `path`, replacing whatever was there.
    pub fn write(&self, path: &Path) -> Result<()> {
        let to_err = |source: std::io::Error| Error::SnapshotWriteError {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_err)?;
        let mut writer = BufWriter::new(file);

        for entry in &self.entries {
            writeln!(writer, "{} {}", entry.name, entry.count).map_err(to_err)?;
        }
        writer.flush().map_err(to_err)?;

        log::debug!("wrote {} snapshot entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Read a snapshot back from `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Snapshot::parse(&text))
    }

    /// Pull `(name, count)` pairs off the whitespace-split text until one
    /// is incomplete or its count is not an integer. Whatever follows the
    /// first bad pair is ignored.
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split_whitespace();
        let mut entries = Vec::new();

        while let Some(name) = tokens.next() {
            let Some(count) = tokens.next().and_then(|c| c.parse::<i64>().ok()) else {
                break;
            };
            entries.push(SnapshotEntry {
                name: name.to_string(),
                count,
            });
        }

        Snapshot { entries }
    }
}
