//! Variable-length integer encoding (LEB128).
//!
//! Seven bits per byte, least significant group first, with the high bit set
//! on every byte except the last. Small numbers such as document id gaps and
//! term frequencies take a single byte.

use std::io::{Read, Write};

use byteorder::ReadBytesExt;

use crate::error::{IrkitError, Result};

/// Encode a u32 value.
pub fn encode_u32(value: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(5);
    let mut val = value;

    loop {
        let mut byte = (val & 0x7F) as u8;
        val >>= 7;

        if val != 0 {
            byte |= 0x80;
        }

        bytes.push(byte);

        if val == 0 {
            break;
        }
    }

    bytes
}

/// Write a variable-length encoded u32. Returns the number of bytes written.
pub fn write_u32<W: Write>(writer: &mut W, value: u32) -> Result<usize> {
    let bytes = encode_u32(value);
    writer.write_all(&bytes)?;
    Ok(bytes.len())
}

/// Read a variable-length encoded u32.
pub fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut result = 0u32;
    let mut shift = 0;

    loop {
        let byte = reader.read_u8()?;

        if shift >= 32 {
            return Err(IrkitError::other("VarInt overflow"));
        }

        // The fifth byte may carry only the top four bits of a u32.
        if shift == 28 && byte & 0x70 != 0 {
            return Err(IrkitError::other("VarInt overflow"));
        }

        result |= ((byte & 0x7F) as u32) << shift;

        if (byte & 0x80) == 0 {
            return Ok(result);
        }

        shift += 7;
    }
}
