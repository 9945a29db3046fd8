//! Per-block decode loop.
//!
//! A compressed block alternates two phases until a zero run length:
//! a literal phase emitting Huffman-decoded bytes, and a match phase
//! replaying LZSS back-references against the output produced so far.
//! Match distances address the uncompressed output directly (there is
//! no separate window), and the copy runs byte by byte in
//! read-before-write order so self-overlapping matches replicate
//! periodic patterns.

use super::bit_cursor::BitCursor;
use super::huffman::HuffmanTree;
use super::run_length::{read_literal_run_length, read_match_count};
use crate::error::{Result, Yj1Error};
use crate::parsing::block_header::BlockHeader;

/// Decoder for one compressed block's bit region.
pub struct BlockDecoder<'a> {
    cursor: BitCursor<'a>,
    header: &'a BlockHeader,
    tree: &'a HuffmanTree,
}

impl<'a> BlockDecoder<'a> {
    /// Create a decoder over `region`, the block's bitstream bytes
    /// (everything after the 24-byte header).
    pub fn new(region: &'a [u8], header: &'a BlockHeader, tree: &'a HuffmanTree) -> Self {
        Self {
            cursor: BitCursor::new(region),
            header,
            tree,
        }
    }

    /// Run the literal/match loop, writing into `destination` from
    /// `start`. Returns the write position after the block.
    pub fn decode(mut self, destination: &mut [u8], start: usize) -> Result<usize> {
        let mut pos = start;
        loop {
            let literals = read_literal_run_length(&mut self.cursor, self.header)?;
            if literals == 0 {
                break;
            }
            for _ in 0..literals {
                let byte = self.tree.decode_symbol(&mut self.cursor)?;
                *destination.get_mut(pos).ok_or(Yj1Error::BufferOverflow)? = byte;
                pos += 1;
            }

            // The run-length code is reused as the match-run count.
            let matches = read_literal_run_length(&mut self.cursor, self.header)?;
            if matches == 0 {
                break;
            }
            for _ in 0..matches {
                let count = read_match_count(&mut self.cursor, self.header)?;
                let selector = self.cursor.read_bits(2)? as usize;
                let width = u32::from(self.header.offset_code_bits[selector]);
                let distance = self.cursor.read_bits(width)?;
                pos = Self::copy_match(destination, pos, distance, count)?;
            }
        }
        Ok(pos)
    }

    /// Copy `count` bytes from `distance` behind the write position.
    ///
    /// Bytes are read back one at a time as the position advances, so a
    /// distance smaller than the count re-reads freshly written output.
    /// A zero distance reads the slot about to be written; it is
    /// unusual encoder output, not an error.
    fn copy_match(
        destination: &mut [u8],
        pos: usize,
        distance: u32,
        count: u32,
    ) -> Result<usize> {
        let src = pos
            .checked_sub(distance as usize)
            .ok_or(Yj1Error::InvalidBackReference {
                distance,
                position: pos,
            })?;
        let count = count as usize;
        if count > destination.len() - pos {
            return Err(Yj1Error::BufferOverflow);
        }
        for i in 0..count {
            destination[pos + i] = destination[src + i];
        }
        Ok(pos + count)
    }
}
