//! Query entry points for the shell.
//!
//! Every call re-reads the purchase record and builds a fresh
//! [`FrequencyMap`]; nothing is cached between calls.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::record;
use crate::report::histogram;
use crate::store::snapshot::Snapshot;
use crate::store::{FrequencyMap, Lookup};

#[derive(Debug, Clone)]
pub struct Engine {
    source: PathBuf,
    snapshot: PathBuf,
    marker: char,
}

impl Engine {
    pub fn new(source: impl Into<PathBuf>, snapshot: impl Into<PathBuf>) -> Self {
        Engine {
            source: source.into(),
            snapshot: snapshot.into(),
            marker: histogram::DEFAULT_MARKER,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Engine::new(&config.input, &config.snapshot).with_marker(config.marker)
    }

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    fn load(&self) -> Result<FrequencyMap> {
        record::load_record(&self.source)
    }

    pub fn list_all(&self) -> Result<Vec<(String, u64)>> {
        Ok(self.load()?.list())
    }

    pub fn lookup(&self, item: &str) -> Result<Lookup> {
        let found = self.load()?.lookup(item);
        log::debug!("lookup '{item}': {found:?}");
        Ok(found)
    }

    /// Rewrite the snapshot file from the record, then render it.
    pub fn render_histogram(&self) -> Result<Vec<String>> {
        self.load()?.write_snapshot(&self.snapshot)?;
        let snapshot = Snapshot::read(&self.snapshot)?;
        histogram::render(&snapshot, self.marker)
    }
}
