//! File table decoding and placeholder classification.
//!
//! The table is an ordered array of absolute `u32` offsets, one per expected
//! file.  Index position is the only file identity inside the container;
//! names come from the caller-supplied manifest.  Stripped-down editions keep
//! the table length fixed by storing placeholder offsets for absent files.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

use crate::error::{Error, Result};

/// Sentinel placeholder offset used by the shareware/demo editions.
pub const PLACEHOLDER_SENTINEL: u32 = 0xFFFF_FFFF;

/// Read the entry count and the ordered offset array.
///
/// The little-endian `u32` count must equal `manifest_len`, else the load is
/// rejected with [`Error::TableMappingMismatch`] before any offset is read.
/// No monotonicity validation is performed here; the entry-length arithmetic
/// in [`payload_len`] and the placeholder rules are the only consumers that
/// rely on offset ordering.
pub fn read_file_table<R: Read>(reader: &mut R, manifest_len: usize) -> Result<Vec<u32>> {
    let count = reader.read_u32::<LittleEndian>()?;
    if count as usize != manifest_len {
        return Err(Error::TableMappingMismatch { archive: count, manifest: manifest_len });
    }

    let mut table = Vec::with_capacity(count as usize);
    for _ in 0..count {
        table.push(reader.read_u32::<LittleEndian>()?);
    }
    Ok(table)
}

/// Whether slot `i` denotes a file absent from this edition.
///
/// Offsets `0` and `0xFFFFFFFF` are sentinels in every edition, at any
/// position.  The retail editions instead mark a placeholder by storing an
/// offset exactly one less than the following real offset.  That rule has no
/// successor to compare against for the last slot, so the last slot is never
/// classified as a placeholder by it.
pub fn is_placeholder(table: &[u32], i: usize) -> bool {
    let offset = table[i];
    if offset == 0 || offset == PLACEHOLDER_SENTINEL {
        return true;
    }
    if i == table.len() - 1 {
        return false;
    }
    offset == table[i + 1].wrapping_sub(1)
}

/// Byte length of slot `i`'s payload inside the container, excluding the
/// 4-byte entry header.
///
/// Interior slots span to the next offset; the last slot spans to the end of
/// the container.
pub fn payload_len(table: &[u32], i: usize, container_size: u64) -> u32 {
    let end = if i == table.len() - 1 {
        container_size as u32
    } else {
        table[i + 1]
    };
    end - table[i] - 4
}
