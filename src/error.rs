use std::io;
use std::path::PathBuf;

/// Failures surfaced by the frequency engine.
///
/// An item that is absent from the record is not an error; see
/// [`crate::store::Lookup::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read purchase record {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write snapshot {}: {source}", path.display())]
    SnapshotWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid count {count} for item '{name}'")]
    InvalidCount { name: String, count: i64 },

    #[error("bad config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
