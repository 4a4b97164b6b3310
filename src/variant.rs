use std::fmt;
use std::io::Read;

use crate::error::{Error, Result};

pub const MAGIC_DOS_RETAIL:    [u8; 4] = [0x18, 0x00, 0x00, 0x00];
pub const MAGIC_DOS_SHAREWARE: [u8; 4] = [0x19, 0x00, 0x00, 0x00];
pub const MAGIC_MAC_RETAIL:    [u8; 4] = [0x00, 0x00, 0x00, 0x1A];
pub const MAGIC_MAC_SHAREWARE: [u8; 4] = [0x00, 0x00, 0x00, 0x19];

/// The closed set of container editions, each bound to a distinct 4-byte magic.
///
/// The Mac editions are recognised by magic but their data layout is not
/// implemented; [`detect`] rejects them with
/// [`Error::UnsupportedVersion`] carrying the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveVariant {
    DosRetail,
    DosShareware,
    MacRetail,
    MacShareware,
}

impl ArchiveVariant {
    /// Classify a 4-byte magic.  Returns `None` for anything outside the
    /// known set.
    pub fn from_magic(magic: [u8; 4]) -> Option<Self> {
        match magic {
            MAGIC_DOS_RETAIL    => Some(ArchiveVariant::DosRetail),
            MAGIC_DOS_SHAREWARE => Some(ArchiveVariant::DosShareware),
            MAGIC_MAC_RETAIL    => Some(ArchiveVariant::MacRetail),
            MAGIC_MAC_SHAREWARE => Some(ArchiveVariant::MacShareware),
            _                   => None,
        }
    }

    pub fn magic(self) -> [u8; 4] {
        match self {
            ArchiveVariant::DosRetail    => MAGIC_DOS_RETAIL,
            ArchiveVariant::DosShareware => MAGIC_DOS_SHAREWARE,
            ArchiveVariant::MacRetail    => MAGIC_MAC_RETAIL,
            ArchiveVariant::MacShareware => MAGIC_MAC_SHAREWARE,
        }
    }

    /// Human-readable edition label (for diagnostics only — never parsed).
    pub fn name(self) -> &'static str {
        match self {
            ArchiveVariant::DosRetail    => "DOS Retail",
            ArchiveVariant::DosShareware => "DOS Shareware",
            ArchiveVariant::MacRetail    => "Mac Retail",
            ArchiveVariant::MacShareware => "Mac Shareware",
        }
    }

    /// Whether this reader can extract the variant's data section.
    pub fn is_supported(self) -> bool {
        matches!(self, ArchiveVariant::DosRetail | ArchiveVariant::DosShareware)
    }
}

impl fmt::Display for ArchiveVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read the 4-byte magic and classify the container variant.
///
/// Unrecognised magics fail with [`Error::UnknownVersion`]; Mac magics are
/// recognised but extraction is unimplemented, so they fail with
/// [`Error::UnsupportedVersion`].
pub fn detect<R: Read>(reader: &mut R) -> Result<ArchiveVariant> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    match ArchiveVariant::from_magic(magic) {
        Some(v) if v.is_supported() => Ok(v),
        Some(v) => Err(Error::UnsupportedVersion(v)),
        None    => Err(Error::UnknownVersion(magic)),
    }
}
