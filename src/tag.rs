//! The tag stream walker.
//!
//! Every tag starts with a 2-byte little-endian header packing a 10-bit code
//! and a 6-bit length. A length of 63 is an escape: the real length follows
//! as a 4-byte little-endian field. Code 0 ends the stream. Payloads are
//! skipped over, never read.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::Result;
use crate::tag_types::TagTypes;

/// Tag code marking the end of the tag stream. The walker stops on it before
/// emitting a record, whatever its length bits say.
pub const END_TAG_CODE: u16 = 0;

/// Reserved 6-bit length value signaling that the true payload length is
/// stored in the 4 bytes after the tag header.
pub const EXTENDED_LENGTH: u8 = 0x3F;

/// Split a raw tag header into its 10-bit code and 6-bit short length.
pub fn split_tag_header(raw: u16) -> (u16, u8) {
    let code = (raw & 0xFFC0) >> 6;
    let short_length = (raw & 0x003F) as u8;
    (code, short_length)
}

/// One top-level tag record: where its header starts, what it is, and how
/// many payload bytes follow the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag {
    pub offset: u64,
    pub code: u16,
    pub name: &'static str,
    pub length: u32,
}

/// Lazy walk over a tag stream.
///
/// Expects the reader positioned at the first tag header (see
/// [`skip_header`](crate::header::skip_header)) and yields one [`Tag`] per
/// record until the end marker or the end of the stream. The walk is
/// deliberately forgiving: hitting end-of-file while reading a tag header
/// just ends the iteration, and a trailing tag whose payload is cut short is
/// still reported before the walk stops. Malformed or truncated files are
/// exactly the inputs worth inspecting.
///
/// Any I/O failure other than end-of-file is yielded once as `Err`, after
/// which the iterator is fused.
pub struct TagWalker<'a, R> {
    reader: R,
    types: &'a TagTypes,
    done: bool,
}

impl<'a, R: Read + Seek> TagWalker<'a, R> {
    pub fn new(reader: R, types: &'a TagTypes) -> Self {
        Self {
            reader,
            types,
            done: false,
        }
    }

    /// Give back the reader, positioned wherever the walk left it.
    pub fn into_inner(self) -> R {
        self.reader
    }

    // Decodes one record and skips its payload. Ok(None) means the stream
    // ended cleanly, via the end marker or end-of-file at a header boundary.
    fn next_tag(&mut self) -> Result<Option<Tag>> {
        let offset = self.reader.stream_position()?;
        let raw = match self.reader.read_u16::<LittleEndian>() {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let (code, short_length) = split_tag_header(raw);
        if code == END_TAG_CODE {
            return Ok(None);
        }
        let length = if short_length == EXTENDED_LENGTH {
            match self.reader.read_u32::<LittleEndian>() {
                Ok(length) => length,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        } else {
            u32::from(short_length)
        };
        let tag = Tag {
            offset,
            code,
            name: self.types.name_of(code),
            length,
        };
        // Seeking past end-of-file succeeds; exhaustion shows up as the next
        // header read failing instead.
        self.reader.seek(SeekFrom::Current(i64::from(length)))?;
        Ok(Some(tag))
    }
}

impl<'a, R: Read + Seek> Iterator for TagWalker<'a, R> {
    type Item = Result<Tag>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_tag() {
            Ok(Some(tag)) => Some(Ok(tag)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
