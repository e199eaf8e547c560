use std::fmt;

use jt808prims_frame::FrameError;

// Process exit codes.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    let code = match err {
        FrameError::InvalidPhone(_) | FrameError::OutOfRange { .. } => USAGE,
        FrameError::BodyTooLong { .. }
        | FrameError::MissingDelimiter
        | FrameError::FrameTooShort { .. }
        | FrameError::ChecksumMismatch { .. }
        | FrameError::SubPackageUnsupported
        | FrameError::FrameTooLarge { .. } => DATA_INVALID,
        FrameError::Io(_) => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn hex_error(arg: &str, err: hex::FromHexError) -> CliError {
    CliError::new(USAGE, format!("{arg} is not valid hex: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failures_map_to_data_invalid() {
        let err = frame_error(
            "decode failed",
            FrameError::ChecksumMismatch {
                expected: 0x25,
                actual: 0x26,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("decode failed: checksum mismatch"));
    }

    #[test]
    fn bad_phone_is_usage_error() {
        let err = frame_error("encode failed", FrameError::InvalidPhone("12a".into()));
        assert_eq!(err.code, USAGE);
    }
}
