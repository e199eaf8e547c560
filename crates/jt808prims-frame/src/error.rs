/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A byte range does not fit inside the buffer it indexes.
    #[error("index out of bounds (start={start}, end={end}, bytes length={len})")]
    OutOfRange { start: usize, end: usize, len: usize },

    /// The body does not fit in the 10-bit length field and the caller asked
    /// for oversized bodies to be rejected.
    #[error("message body too long ({len} bytes, max {max})")]
    BodyTooLong { len: usize, max: usize },

    /// The terminal phone number is not a string of at most 12 decimal digits.
    #[error("invalid terminal phone number: {0:?}")]
    InvalidPhone(String),

    /// The frame does not start and end with the 0x7E delimiter.
    #[error("frame is not enclosed in 0x7E delimiters")]
    MissingDelimiter,

    /// The unescaped frame interior is shorter than header + checksum.
    #[error("frame too short ({len} bytes after unescaping)")]
    FrameTooShort { len: usize },

    /// The trailing checksum byte does not match the XOR of header and body.
    #[error("checksum mismatch (expected 0x{expected:02X}, got 0x{actual:02X})")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// The header announces a sub-packaged message, which is not supported.
    #[error("sub-packaged messages are not supported")]
    SubPackageUnsupported,

    /// More bytes were buffered than a single frame may occupy.
    #[error("frame too large ({size} bytes, max {max})")]
    FrameTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
