use std::io;
use thiserror::Error;

use crate::variant::ArchiveVariant;

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The 4-byte magic does not match any known archive variant.
    #[error("Unknown archive version (magic {0:02x?})")]
    UnknownVersion([u8; 4]),

    /// The magic identifies a known variant that this reader cannot extract.
    #[error("Unsupported archive version: {0}")]
    UnsupportedVersion(ArchiveVariant),

    /// The on-disk file count disagrees with the supplied manifest length.
    #[error("Table mapping mismatch: archive holds {archive} entries, manifest names {manifest}")]
    TableMappingMismatch { archive: u32, manifest: usize },

    /// Any read or seek failure, including short reads and decode failures.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Post-load lookup of a filename the archive does not contain.
    #[error("File not found: {0}")]
    NotFound(String),
}
