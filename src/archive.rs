//! High-level [`Archive`] API — the primary embedding surface.
//!
//! ```no_run
//! use warpack::{Archive, LoadOptions, Manifest};
//!
//! let manifest = Manifest::from_names(vec!["TITLE.PAL".into(), "LOGO.IMG".into()]);
//! let ar = Archive::open("DATA.WAR", &manifest, LoadOptions::default())?;
//! let palette = ar.get("TITLE.PAL");
//! # Ok::<(), warpack::Error>(())
//! ```

use byteorder::{LittleEndian, ReadBytesExt};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::lz;
use crate::manifest::{LoadOptions, Manifest};
use crate::table::{is_placeholder, payload_len, read_file_table};
use crate::variant::{self, ArchiveVariant};

// ── Archive ──────────────────────────────────────────────────────────────────

/// A fully loaded container: the detected edition plus an immutable mapping
/// from filename to decoded bytes.
///
/// Built once by a successful [`load`](Archive::load); any failure during
/// loading discards the in-progress state and surfaces the error instead.
/// All accessors take `&self`, so post-construction lookups are safe from
/// multiple threads.
#[derive(Debug)]
pub struct Archive {
    variant: ArchiveVariant,
    files:   HashMap<String, Vec<u8>>,
}

impl Archive {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Open a container file and load it fully into memory.
    pub fn open<P: AsRef<Path>>(path: P, manifest: &Manifest, options: LoadOptions) -> Result<Self> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Self::load(BufReader::new(file), size, manifest, options)
    }

    /// Load a container from any seekable byte source of `container_size`
    /// total bytes.
    ///
    /// Loading is synchronous and single-threaded; the reader is held
    /// exclusively for the duration of the call and every seek is absolute.
    pub fn load<R: Read + Seek>(
        mut reader:     R,
        container_size: u64,
        manifest:       &Manifest,
        options:        LoadOptions,
    ) -> Result<Self> {
        let variant = variant::detect(&mut reader)?;
        debug!(variant = variant.name(), "archive variant detected");

        let table = read_file_table(&mut reader, manifest.len())?;
        debug!(entries = table.len(), "file table read");

        let mut files = HashMap::new();

        for (i, &offset) in table.iter().enumerate() {
            if is_placeholder(&table, i) {
                if let Some(name) = manifest.name(i).filter(|n| !n.is_empty()) {
                    warn!(slot = i, name, "incomplete archive, named slot is a placeholder");
                }
                debug!(slot = i, "skipping placeholder");
                continue;
            }

            reader.seek(SeekFrom::Start(offset as u64))?;
            let word = reader.read_u32::<LittleEndian>()?;

            let compressed = word >> 24 == 0x20;
            let size       = (word & 0x00FF_FFFF) as usize;
            let payload    = payload_len(&table, i, container_size) as usize;

            let name = match manifest.name(i) {
                Some(n) if !n.is_empty() => n.to_owned(),
                _ => {
                    if !options.load_unsupported {
                        warn!(slot = i, "name table is incomplete, dropping unnamed slot");
                        continue;
                    }
                    warn!(slot = i, "name table is incomplete, synthesizing name");
                    synthesized_name(i)
                }
            };

            let data = if compressed {
                debug!(slot = i, name = %name, size, payload, "compressed entry");
                lz::decompress(&mut reader, size, payload)?
            } else {
                debug!(slot = i, name = %name, size, "uncompressed entry");
                let mut buf = vec![0u8; size];
                reader.read_exact(&mut buf)?;
                buf
            };

            files.insert(name, data);
        }

        Ok(Self { variant, files })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The container edition detected from the magic.
    pub fn variant(&self) -> ArchiveVariant {
        self.variant
    }

    /// A readable byte stream over a stored file, or [`Error::NotFound`].
    pub fn reader(&self, name: &str) -> Result<Cursor<&[u8]>> {
        self.get(name)
            .map(Cursor::new)
            .ok_or_else(|| Error::NotFound(name.to_owned()))
    }

    /// The decoded contents of a stored file.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Stored filenames in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Number of stored files (placeholders and dropped slots excluded).
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Stand-in name for a slot the manifest leaves unnamed.
fn synthesized_name(slot: usize) -> String {
    format!("DATA.WAR.{slot}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Write;

    /// Build a minimal single-entry DOS Retail container holding one
    /// uncompressed file.
    fn tiny_container(contents: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.write_all(&crate::variant::MAGIC_DOS_RETAIL).unwrap();
        buf.write_u32::<LittleEndian>(1).unwrap();
        buf.write_u32::<LittleEndian>(12).unwrap(); // magic + count + one offset
        buf.write_u32::<LittleEndian>(contents.len() as u32).unwrap();
        buf.write_all(contents).unwrap();
        buf
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let container = tiny_container(b"pixels");
        let manifest = Manifest::from_names(vec!["A.IMG".into()]);
        let size = container.len() as u64;
        let ar = Archive::load(Cursor::new(container), size, &manifest, LoadOptions::default())
            .unwrap();

        assert!(ar.get("MISSING").is_none());
        assert!(matches!(ar.reader("MISSING").unwrap_err(), Error::NotFound(n) if n == "MISSING"));
    }

    #[test]
    fn reader_streams_stored_bytes() {
        let container = tiny_container(b"pixels");
        let manifest = Manifest::from_names(vec!["A.IMG".into()]);
        let size = container.len() as u64;
        let ar = Archive::load(Cursor::new(container), size, &manifest, LoadOptions::default())
            .unwrap();

        let mut out = Vec::new();
        ar.reader("A.IMG").unwrap().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"pixels");
    }

    #[test]
    fn short_uncompressed_read_fails_the_whole_load() {
        let mut container = tiny_container(b"pixels");
        container.truncate(container.len() - 2);
        let size = container.len() as u64;
        let manifest = Manifest::from_names(vec!["A.IMG".into()]);

        let err = Archive::load(Cursor::new(container), size, &manifest, LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn synthesized_names_are_index_derived() {
        assert_eq!(synthesized_name(3), "DATA.WAR.3");
    }
}
