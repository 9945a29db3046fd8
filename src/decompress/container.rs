//! Container-level decoding.
//!
//! Drives the whole pipeline: validate the 16-byte header, rebuild the
//! shared Huffman tree from the serialized section that follows it,
//! then walk `block_count` blocks. Compressed blocks are framed by
//! their header-declared compressed length (which includes the 24-byte
//! header) no matter how many bits the decode loop consumed; trailing
//! bits are padding. Stored blocks carry only the 4-byte length prefix
//! and their raw payload.

use super::block::BlockDecoder;
use super::huffman::HuffmanTree;
use crate::error::{Result, Yj1Error};
use crate::parsing::block_header::BlockHeaderParser;
use crate::parsing::container_header::ContainerHeaderParser;

/// Decompress a YJ_1 container into a caller-provided buffer.
///
/// The destination length is the capacity; it must hold at least the
/// header-declared uncompressed length, which is validated (together
/// with the signature) before any byte is written. Returns the declared
/// uncompressed length.
pub fn decompress_into(source: &[u8], destination: &mut [u8]) -> Result<usize> {
    let header = ContainerHeaderParser::parse(source)?;
    let declared = header.uncompressed_length as usize;
    if declared > destination.len() {
        return Err(Yj1Error::DestinationTooSmall {
            needed: declared,
            have: destination.len(),
        });
    }

    let node_count = header.tree_node_count();
    let values_end = ContainerHeaderParser::HEADER_SIZE + node_count;
    let flags_end = values_end + HuffmanTree::flag_stream_len(node_count);
    let values = source
        .get(ContainerHeaderParser::HEADER_SIZE..values_end)
        .ok_or(Yj1Error::BufferTooSmall {
            needed: values_end,
            have: source.len(),
        })?;
    let flags = source
        .get(values_end..flags_end)
        .ok_or(Yj1Error::BufferTooSmall {
            needed: flags_end,
            have: source.len(),
        })?;
    let tree = HuffmanTree::parse(values, flags)?;

    let mut src = flags_end;
    let mut pos = 0usize;
    for _ in 0..header.block_count {
        let block = source.get(src..).ok_or(Yj1Error::BufferTooSmall {
            needed: src,
            have: source.len(),
        })?;
        let (uncompressed, compressed) = BlockHeaderParser::parse_lengths(block)?;

        if compressed == 0 {
            // Stored block: raw payload right after the length prefix.
            let len = uncompressed as usize;
            let start = BlockHeaderParser::LENGTH_PREFIX_SIZE;
            let data = block
                .get(start..start + len)
                .ok_or(Yj1Error::BufferTooSmall {
                    needed: src + start + len,
                    have: source.len(),
                })?;
            destination
                .get_mut(pos..pos + len)
                .ok_or(Yj1Error::BufferOverflow)?
                .copy_from_slice(data);
            pos += len;
            src += start + len;
        } else {
            let block_header = BlockHeaderParser::parse(block)?;
            let span = compressed as usize;
            let region =
                block
                    .get(BlockHeaderParser::HEADER_SIZE..span)
                    .ok_or(Yj1Error::BufferTooSmall {
                        needed: src + span,
                        have: source.len(),
                    })?;
            pos = BlockDecoder::new(region, &block_header, &tree).decode(destination, pos)?;
            src += span;
        }
    }

    Ok(declared)
}

/// Decompress a YJ_1 container into a freshly allocated buffer sized
/// from the header's declared uncompressed length.
pub fn decompress(source: &[u8]) -> Result<Vec<u8>> {
    let header = ContainerHeaderParser::parse(source)?;
    let mut destination = vec![0u8; header.uncompressed_length as usize];
    decompress_into(source, &mut destination)?;
    Ok(destination)
}
