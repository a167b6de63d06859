//! Signature gate and fixed/variable header handling.
//!
//! An SWF file opens with an 8-byte fixed header: the 3-byte signature, a
//! version byte, and a 4-byte file length. After that comes the frame-size
//! RECT, a bit-packed structure whose first 5 bits give the width of each of
//! the four coordinates that follow. Nothing in the RECT matters for listing
//! tags except its total size, so only `nbits` is ever decoded.

use std::io::{Read, Seek, SeekFrom};

use byteorder::ReadBytesExt;

use crate::error::{Error, Result};

/// Signature of an uncompressed SWF file. The only variant this tool accepts.
pub const SIGNATURE_UNCOMPRESSED: [u8; 3] = *b"FWS";
/// Signature of a zlib-compressed SWF file. Rejected, but recognized so the
/// error message can point at decompression.
pub const SIGNATURE_ZLIB: [u8; 3] = *b"CWS";
/// Signature of an LZMA-compressed SWF file. Rejected like [`SIGNATURE_ZLIB`].
pub const SIGNATURE_LZMA: [u8; 3] = *b"ZWS";

/// Length of the fixed part of the header: signature, version byte, and the
/// 4-byte file length field.
pub const FIXED_HEADER_LEN: u64 = 8;

/// Read the 3-byte signature and verify it marks an uncompressed SWF file.
///
/// Any other value is a hard rejection, including the compressed variants;
/// decompressing those is an upstream transform, not this tool's job.
pub fn read_signature<R: Read>(reader: &mut R) -> Result<()> {
    let mut found = [0u8; 3];
    reader.read_exact(&mut found)?;
    if found != SIGNATURE_UNCOMPRESSED {
        return Err(Error::BadSignature { found });
    }
    Ok(())
}

/// Extract the RECT's bits-per-coordinate count from its first byte. The
/// count sits in the upper 5 bits.
pub fn nbits_of(byte: u8) -> u8 {
    (byte & 0xF8) >> 3
}

/// Total byte length of a frame-size RECT whose coordinates are `nbits` bits
/// wide: 5 bits for the count itself plus four packed coordinates, rounded up
/// to a whole byte.
pub fn rect_byte_len(nbits: u8) -> u64 {
    let bits = 5 + 4 * u64::from(nbits);
    bits.div_ceil(8)
}

/// Skip everything between the signature and the tag stream, returning the
/// absolute offset of the first tag.
///
/// Seeks to the end of the fixed header, reads one byte of the RECT to learn
/// its size, skips the rest of it, then skips the 2-byte frame rate and
/// 2-byte frame count. Assumes the signature check already passed; a stream
/// too short to contain a full header surfaces as `Error::Io` from the read.
pub fn skip_header<R: Read + Seek>(reader: &mut R) -> Result<u64> {
    reader.seek(SeekFrom::Start(FIXED_HEADER_LEN))?;
    let nbits = nbits_of(reader.read_u8()?);
    // One RECT byte is already consumed, and the frame rate + count follow.
    let skip = (rect_byte_len(nbits) - 1) + 4;
    let pos = reader.seek(SeekFrom::Current(skip as i64))?;
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn nbits_upper_five_bits() {
        assert_eq!(nbits_of(0x00), 0);
        assert_eq!(nbits_of(0x08), 1);
        assert_eq!(nbits_of(0xF8), 31);
        // Low 3 bits belong to the first coordinate and must not leak in.
        assert_eq!(nbits_of(0x07), 0);
        assert_eq!(nbits_of(0x7F), 15);
    }

    #[test]
    fn rect_len_rounds_up() {
        for nbits in 0..=31u8 {
            let bits = 5 + 4 * u64::from(nbits);
            let expected = (bits + 7) / 8;
            assert_eq!(rect_byte_len(nbits), expected, "nbits = {}", nbits);
        }
        // Spot checks against hand-computed sizes.
        assert_eq!(rect_byte_len(0), 1);
        assert_eq!(rect_byte_len(2), 2);
        assert_eq!(rect_byte_len(15), 9);
        assert_eq!(rect_byte_len(31), 17);
    }

    #[test]
    fn signature_accepts_only_fws() {
        assert!(read_signature(&mut Cursor::new(b"FWS\x06rest")).is_ok());
        let err = read_signature(&mut Cursor::new(b"CWS\x06rest")).unwrap_err();
        assert!(matches!(err, Error::BadSignature { found } if found == *b"CWS"));
        assert!(read_signature(&mut Cursor::new(b"ZWS")).is_err());
        assert!(read_signature(&mut Cursor::new(b"PNG")).is_err());
    }

    #[test]
    fn compressed_signature_message_mentions_decompression() {
        let err = read_signature(&mut Cursor::new(b"CWS")).unwrap_err();
        assert!(err.to_string().contains("decompress"));
        let err = read_signature(&mut Cursor::new(b"ELF")).unwrap_err();
        assert!(!err.to_string().contains("decompress"));
    }

    #[test]
    fn header_skip_lands_on_tag_stream() {
        // nbits = 2: RECT is ceil((5 + 8) / 8) = 2 bytes, so the tag stream
        // starts at 8 + 2 + 4 = 14.
        let mut data = Vec::new();
        data.extend_from_slice(b"FWS");
        data.push(6); // version
        data.extend_from_slice(&20u32.to_le_bytes()); // file length
        data.push(2 << 3); // RECT: nbits = 2
        data.push(0x00); // rest of the RECT
        data.extend_from_slice(&[0x00, 0x0C]); // frame rate
        data.extend_from_slice(&[0x01, 0x00]); // frame count
        let mut cursor = Cursor::new(data);
        assert_eq!(skip_header(&mut cursor).unwrap(), 14);
    }

    #[test]
    fn header_skip_widest_rect() {
        // nbits = 31: RECT is 17 bytes, tag stream at 8 + 17 + 4 = 29.
        let mut data = vec![0u8; 8];
        data[..3].copy_from_slice(b"FWS");
        data.push(31 << 3);
        data.extend_from_slice(&[0u8; 16]); // rest of the RECT
        data.extend_from_slice(&[0u8; 4]); // frame rate + count
        let mut cursor = Cursor::new(data);
        assert_eq!(skip_header(&mut cursor).unwrap(), 29);
    }
}
