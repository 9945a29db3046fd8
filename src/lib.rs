//! Decoder for the YJ_1 block-compressed archive format.
//!
//! YJ_1 containers combine a static Huffman code for literal bytes with
//! an LZSS-style sliding back-reference scheme, packed into fixed-size
//! blocks behind a 16-byte header (magic `"YJ_1"`). This crate decodes
//! them; encoding is out of scope.
//!
//! ## Example
//!
//! ```rust,ignore
//! use yj1_decode::decompress;
//!
//! let container = std::fs::read("scene.yj1")?;
//! let payload = decompress(&container)?;
//! ```
//!
//! For caller-owned buffers, [`decompress_into`] writes into a
//! pre-sized `&mut [u8]` and validates the header-declared length
//! against its capacity before touching it.

pub mod decompress;
pub mod error;
pub mod parsing;

pub use decompress::{decompress, decompress_into};
pub use error::{Result, Yj1Error};
