//! Star-chart rendering over a snapshot.

use crate::error::{Error, Result};
use crate::store::snapshot::Snapshot;

pub const DEFAULT_MARKER: char = '*';

/// One line per entry, in snapshot order: the name, a space, then
/// `count` markers. A zero count keeps the line with an empty run.
/// A negative count, or one too large to render, fails the whole render.
pub fn render(snapshot: &Snapshot, marker: char) -> Result<Vec<String>> {
    snapshot
        .entries
        .iter()
        .map(|entry| {
            let invalid = || Error::InvalidCount {
                name: entry.name.clone(),
                count: entry.count,
            };
            let run = usize::try_from(entry.count).map_err(|_| invalid())?;

            // a count too large to allocate can only come from a corrupt file
            let mut line = String::new();
            run.checked_mul(marker.len_utf8())
                .and_then(|bytes| bytes.checked_add(entry.name.len() + 1))
                .and_then(|bytes| line.try_reserve_exact(bytes).ok())
                .ok_or_else(invalid)?;

            line.push_str(&entry.name);
            line.push(' ');
            line.extend(std::iter::repeat(marker).take(run));
            Ok(line)
        })
        .collect()
}
