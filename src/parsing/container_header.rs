//! Container header parser.
//!
//! A YJ_1 container starts with a fixed 16-byte header:
//! signature, uncompressed/compressed lengths, block count and the
//! serialized Huffman tree length. All fields are little-endian.

use crate::error::{Result, Yj1Error};

/// YJ_1 magic value (`"YJ_1"` read as a little-endian u32).
pub const YJ1_SIGNATURE: u32 = 0x315F_4A59;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    pub signature: u32,
    pub uncompressed_length: u32,
    pub compressed_length: u32,
    pub block_count: u16,
    pub reserved: u8,
    /// Half the serialized node count; the tree stores
    /// `2 * huffman_tree_length` nodes after the header.
    pub huffman_tree_length: u8,
}

impl ContainerHeader {
    /// Number of serialized tree nodes following the header.
    pub fn tree_node_count(&self) -> usize {
        self.huffman_tree_length as usize * 2
    }
}

pub struct ContainerHeaderParser;

impl ContainerHeaderParser {
    pub const HEADER_SIZE: usize = 16;

    /// Parse and validate the container header.
    ///
    /// Rejects short buffers and non-YJ_1 signatures before anything
    /// else looks at the data.
    pub fn parse(buffer: &[u8]) -> Result<ContainerHeader> {
        if buffer.len() < Self::HEADER_SIZE {
            return Err(Yj1Error::BufferTooSmall {
                needed: Self::HEADER_SIZE,
                have: buffer.len(),
            });
        }

        let signature = u32::from_le_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]);
        if signature != YJ1_SIGNATURE {
            return Err(Yj1Error::InvalidSignature);
        }

        let uncompressed_length = u32::from_le_bytes([buffer[4], buffer[5], buffer[6], buffer[7]]);
        let compressed_length = u32::from_le_bytes([buffer[8], buffer[9], buffer[10], buffer[11]]);
        let block_count = u16::from_le_bytes([buffer[12], buffer[13]]);
        let reserved = buffer[14];
        let huffman_tree_length = buffer[15];

        Ok(ContainerHeader {
            signature,
            uncompressed_length,
            compressed_length,
            block_count,
            reserved,
            huffman_tree_length,
        })
    }
}
