//! Inspection of uncompressed SWF (Shockwave Flash) container files.
//!
//! An SWF file is an 8-byte fixed header (3-byte signature, version byte,
//! 4-byte file length), a bit-packed frame-size rectangle, a frame rate and
//! frame count, and then a flat stream of variable-length tags. This crate
//! walks that tag stream and reports each tag's offset, code, name, and
//! payload length. It never decodes payloads; tags are skipped over, not read.
//!
//! Only the uncompressed `FWS` variant is accepted. The compressed `CWS`
//! (zlib) and `ZWS` (LZMA) variants are rejected up front; stripping their
//! compression is an orthogonal transform that belongs upstream of this tool.
//!
//! The walk is best-effort by design. A truncated file is not an error: a
//! trailing tag whose payload runs past end-of-file is still reported, and
//! the walk then stops quietly when the next header read comes up short.
//! Crafted or damaged files are precisely what one points a dump tool at, so
//! partial output beats a refusal.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use swf_dump::{read_signature, skip_header, TagTypes, TagWalker};
//!
//! # fn main() -> swf_dump::Result<()> {
//! let mut file = BufReader::new(File::open("movie.swf")?);
//! read_signature(&mut file)?;
//! skip_header(&mut file)?;
//! let types = TagTypes::new();
//! for tag in TagWalker::new(file, &types) {
//!     let tag = tag?;
//!     println!("{:#x}: {} ({} bytes)", tag.offset, tag.name, tag.length);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
pub mod header;
mod tag;
mod tag_types;

pub use self::error::{Error, Result};
pub use self::header::{read_signature, skip_header};
pub use self::tag::{split_tag_header, Tag, TagWalker, END_TAG_CODE, EXTENDED_LENGTH};
pub use self::tag_types::{TagTypes, TAG_CODE_COUNT, UNKNOWN_TAG_NAME};
