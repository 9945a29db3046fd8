//! YJ_1 decompression pipeline.
//!
//! A YJ_1 container holds one file header, one shared Huffman tree and
//! a sequence of independently framed blocks. Each compressed block
//! mixes Huffman-coded literal runs with LZSS-style back-references;
//! stored blocks pass their payload through verbatim.
//!
//! ## Architecture
//!
//! ```text
//! Container bytes
//!       ↓
//! ┌──────────────┐
//! │ Header parse │ ← signature + length validation (parsing module)
//! └──────────────┘
//!       ↓
//! ┌──────────────┐
//! │ HuffmanTree  │ ← rebuilt once, shared read-only by every block
//! └──────────────┘
//!       ↓ per block
//! ┌──────────────┐
//! │ BlockDecoder │ ← literal/match loop
//! └──────────────┘
//!       ↓
//! ┌──────────────┐
//! │ BitCursor +  │ ← 16-bit-word MSB-first bit reads,
//! │ run codes    │   table-driven run/match/offset codes
//! └──────────────┘
//!       ↓
//! Decompressed bytes
//! ```
//!
//! The pipeline is a pure synchronous transform: no state survives a
//! call, so concurrent decodes over independent buffers need no
//! coordination.

mod bit_cursor;
mod block;
mod container;
mod huffman;
mod run_length;


pub use bit_cursor::BitCursor;
pub use block::BlockDecoder;
pub use container::{decompress, decompress_into};
pub use huffman::HuffmanTree;
pub use run_length::{read_literal_run_length, read_match_count};
