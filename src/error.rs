//! Error types for YJ_1 parsing and decompression.
//!
//! All failures surface as [`Yj1Error`]. The three pre-flight checks
//! (`BufferTooSmall` for the container header, `InvalidSignature`,
//! `DestinationTooSmall`) fire before a single output byte is written.
//! Everything else marks a malformed bitstream caught mid-decode: the
//! format carries no redundancy, so on such input the decoder guarantees
//! a safe synchronous failure, not a diagnosis.

use std::fmt;

/// Error type for YJ_1 operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Yj1Error {
    /// The container does not start with the `YJ_1` magic value.
    InvalidSignature,

    /// The provided buffer is too small.
    ///
    /// Returned when the source ends before a header or block region
    /// that the container declares.
    BufferTooSmall {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        have: usize,
    },

    /// The header-declared uncompressed length exceeds the destination.
    DestinationTooSmall {
        /// Bytes the container will produce.
        needed: usize,
        /// Destination capacity.
        have: usize,
    },

    /// A bit read ran past the end of the block's compressed region.
    UnexpectedEof,

    /// Huffman traversal reached a node outside the serialized tree.
    InvalidHuffmanCode,

    /// A back-reference points before the start of the output.
    InvalidBackReference {
        /// Distance behind the write position.
        distance: u32,
        /// Output position when the match was decoded.
        position: usize,
    },

    /// A per-block code table demands more than 16 bits in one read.
    InvalidCodeLength(u8),

    /// Block output ran past the destination buffer.
    BufferOverflow,
}

impl fmt::Display for Yj1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignature => write!(f, "Invalid YJ_1 signature"),
            Self::BufferTooSmall { needed, have } => {
                write!(f, "Buffer too small: need {} bytes, have {}", needed, have)
            }
            Self::DestinationTooSmall { needed, have } => {
                write!(
                    f,
                    "Destination too small: container declares {} bytes, capacity is {}",
                    needed, have
                )
            }
            Self::UnexpectedEof => write!(f, "Unexpected end of compressed data"),
            Self::InvalidHuffmanCode => write!(f, "Invalid Huffman code"),
            Self::InvalidBackReference { distance, position } => {
                write!(
                    f,
                    "Invalid back reference: distance {} exceeds output position {}",
                    distance, position
                )
            }
            Self::InvalidCodeLength(bits) => {
                write!(f, "Invalid code length: {} bits (maximum is 16)", bits)
            }
            Self::BufferOverflow => write!(f, "Decompression buffer overflow"),
        }
    }
}

impl std::error::Error for Yj1Error {}

pub type Result<T> = std::result::Result<T, Yj1Error>;
