//! Sliding-window decompressor for the DOS edition's LZ-packed entries.
//!
//! The stream is a sequence of control bytes, each governing up to eight
//! decode steps, least-significant bit first.  A set bit copies one literal
//! byte from the input; a clear bit reads a little-endian `u16` reference
//! code addressing a 4096-byte circular dictionary of recently written
//! output.  Every decoded byte is also written back into the dictionary, so
//! a reference may overlap the bytes it is producing.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};

/// Capacity of the circular dictionary.  Reference codes address positions
/// modulo this value; the code's upper bits carry the run length.
pub const DICT_SIZE: usize = 4096;

/// Decode exactly `target` bytes from an LZ-packed payload.
///
/// `budget` bounds the compressed input: decoding stops once `target` output
/// bytes exist or `budget` input bytes have been consumed, whichever comes
/// first.  The dictionary is zero-initialised and local to this call, so
/// identical input always produces identical output.
///
/// Any read failure aborts the call; no partial output is surfaced.
pub fn decompress<R: Read>(reader: &mut R, target: usize, budget: usize) -> io::Result<Vec<u8>> {
    let mut dict = [0u8; DICT_SIZE];
    let mut out = Vec::with_capacity(target);

    // Monotonic write counter; physical dictionary index is `written % DICT_SIZE`.
    let mut written  = 0usize;
    let mut consumed = 0usize;

    while consumed < budget && written < target {
        let mut control = reader.read_u8()?;
        consumed += 1;

        for _ in 0..8 {
            if written == target {
                break;
            }

            if control & 1 == 1 {
                // Literal: one input byte straight through.
                let b = reader.read_u8()?;
                consumed += 1;

                dict[written % DICT_SIZE] = b;
                out.push(b);
                written += 1;
            } else {
                // Back-reference: run length in the code's upper bits,
                // dictionary position in the lower twelve.
                let code = reader.read_u16::<LittleEndian>()? as usize;
                consumed += 2;

                let run = code / DICT_SIZE;
                let pos = code % DICT_SIZE;

                for m in 0..=run + 2 {
                    if written == target {
                        break;
                    }
                    let b = dict[(pos + m) % DICT_SIZE];
                    dict[written % DICT_SIZE] = b;
                    out.push(b);
                    written += 1;
                }
            }

            control >>= 1;
        }
    }

    Ok(out)
}
