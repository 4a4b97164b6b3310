//! The caller-supplied name table and load configuration.
//!
//! Files inside a container are identified only by their file-table index;
//! canonical names come from a game-specific manifest the caller provides.
//! The manifest is an ordered list, one entry per expected table slot, where
//! an empty string means "no known name for this slot".

use serde::Deserialize;
use std::io::Read;

/// Ordered slot-index → filename table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    names: Vec<String>,
}

/// Raw JSON form: an array of names where `null` marks an unnamed slot.
#[derive(Deserialize)]
#[serde(transparent)]
struct ManifestRaw(Vec<Option<String>>);

impl Manifest {
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Parse a manifest from a JSON array of strings.  `null` entries are
    /// accepted and treated the same as empty strings.
    pub fn from_json_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let ManifestRaw(raw) = serde_json::from_reader(reader)?;
        Ok(Self {
            names: raw.into_iter().map(Option::unwrap_or_default).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The canonical name for slot `i`.  `Some("")` means the slot exists
    /// but has no known name; `None` means `i` is out of range.
    pub fn name(&self, i: usize) -> Option<&str> {
        self.names.get(i).map(String::as_str)
    }
}

impl From<Vec<String>> for Manifest {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

/// Configuration for [`Archive::load`](crate::Archive::load).
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Retain slots with no canonical name under a synthesized index-derived
    /// name instead of dropping them.
    pub load_unsupported: bool,
}
