use std::fmt;
use std::io;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    /// Occurs when a read or seek on the underlying stream fails for a reason
    /// other than reaching end-of-file during the tag walk, which is handled
    /// as ordinary termination instead.
    Io(io::Error),
    /// Occurs when the first three bytes of the input are not the `FWS`
    /// uncompressed-SWF signature. Holds the bytes actually found, so the
    /// compressed variants can at least be called out by name.
    BadSignature { found: [u8; 3] },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref err) => write!(f, "I/O failure: {}", err),
            Error::BadSignature { ref found } => {
                if *found == crate::header::SIGNATURE_ZLIB
                    || *found == crate::header::SIGNATURE_LZMA
                {
                    write!(
                        f,
                        "input is a compressed SWF file; decompress it before inspection"
                    )
                } else {
                    write!(f, "input is not an uncompressed SWF file")
                }
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
