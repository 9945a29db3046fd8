//! Adaptive run-length and match-count codes.
//!
//! Both codes are parameterized by the per-block header tables: a short
//! selector picks either a fixed value from a base table or a
//! variable-width extension read whose bit count comes from the
//! matching code-length table. A zero return from the run-length code
//! is the phase terminator in the block decode loop.

use super::bit_cursor::BitCursor;
use crate::error::Result;
use crate::parsing::block_header::BlockHeader;

/// Decode a literal (or match) run length.
///
/// One set bit selects `run_length_base[0]`. Otherwise a 2-bit
/// selector: zero selects `run_length_base[1]` (the terminator when the
/// table holds zero there), anything else reads
/// `run_length_code_bits[selector - 1]` bits and returns them verbatim.
pub fn read_literal_run_length(cursor: &mut BitCursor, header: &BlockHeader) -> Result<u32> {
    if cursor.read_bit()? {
        return Ok(u32::from(header.run_length_base[0]));
    }
    let selector = cursor.read_bits(2)?;
    if selector == 0 {
        Ok(u32::from(header.run_length_base[1]))
    } else {
        let bits = header.run_length_code_bits[(selector - 1) as usize];
        cursor.read_bits(u32::from(bits))
    }
}

/// Decode one match length.
///
/// A non-zero 2-bit selector followed by a set bit reads
/// `match_length_code_bits[selector - 1]` bits; every other shape
/// falls back to `match_length_base[0]`. The follow-up bit is only
/// consumed when the selector is non-zero.
pub fn read_match_count(cursor: &mut BitCursor, header: &BlockHeader) -> Result<u32> {
    let selector = cursor.read_bits(2)?;
    if selector != 0 && cursor.read_bit()? {
        let bits = header.match_length_code_bits[(selector - 1) as usize];
        return cursor.read_bits(u32::from(bits));
    }
    Ok(u32::from(header.match_length_base[0]))
}
