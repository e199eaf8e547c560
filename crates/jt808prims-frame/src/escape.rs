//! Byte stuffing for the frame interior.
//!
//! ```text
//! send    0x7E       -> 0x7D 0x02
//!         0x7D       -> 0x7D 0x01   (Symmetric only)
//! receive 0x7D 0x01  -> 0x7D
//!         0x7D 0x02  -> 0x7E
//! ```
//!
//! Both directions work on `buf[start..end]` and copy the bytes outside that
//! range through unchanged, so a whole frame can be passed with the range
//! covering only its interior.

use crate::error::{FrameError, Result};

/// Frame delimiter.
pub const DELIMITER: u8 = 0x7E;

/// Stuffing marker.
pub const ESCAPE: u8 = 0x7D;

/// Second byte of an escaped marker (`0x7D 0x01`).
pub const ESCAPED_ESCAPE: u8 = 0x01;

/// Second byte of an escaped delimiter (`0x7D 0x02`).
pub const ESCAPED_DELIMITER: u8 = 0x02;

/// Which bytes are stuffed on the send path.
///
/// The receive path always undoes both sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Stuff the delimiter only. Byte-compatible with deployed platforms that
    /// never escape 0x7D when sending.
    #[default]
    DelimiterOnly,
    /// Stuff both the delimiter and the marker, as the standard prescribes.
    Symmetric,
}

pub(crate) fn check_range(buf: &[u8], start: usize, end: usize) -> Result<()> {
    if start > end || end > buf.len() {
        return Err(FrameError::OutOfRange {
            start,
            end,
            len: buf.len(),
        });
    }
    Ok(())
}

/// Escape `buf[start..end]`, stuffing the delimiter only.
pub fn escape(buf: &[u8], start: usize, end: usize) -> Result<Vec<u8>> {
    escape_with(buf, start, end, EscapeMode::DelimiterOnly)
}

/// Escape `buf[start..end]` using `mode`.
pub fn escape_with(buf: &[u8], start: usize, end: usize, mode: EscapeMode) -> Result<Vec<u8>> {
    check_range(buf, start, end)?;

    let mut out = Vec::with_capacity(buf.len() + 8);
    out.extend_from_slice(&buf[..start]);
    for &b in &buf[start..end] {
        match (b, mode) {
            (DELIMITER, _) => out.extend_from_slice(&[ESCAPE, ESCAPED_DELIMITER]),
            (ESCAPE, EscapeMode::Symmetric) => out.extend_from_slice(&[ESCAPE, ESCAPED_ESCAPE]),
            _ => out.push(b),
        }
    }
    out.extend_from_slice(&buf[end..]);
    Ok(out)
}

/// Undo stuffing in `buf[start..end]`.
///
/// A marker followed by anything other than `0x01`/`0x02`, or sitting on the
/// last byte of the range, is copied unchanged.
pub fn unescape(buf: &[u8], start: usize, end: usize) -> Result<Vec<u8>> {
    check_range(buf, start, end)?;

    let mut out = Vec::with_capacity(buf.len());
    out.extend_from_slice(&buf[..start]);
    let mut i = start;
    while i < end {
        let b = buf[i];
        let next = if i + 1 < end { Some(buf[i + 1]) } else { None };
        match (b, next) {
            (ESCAPE, Some(ESCAPED_ESCAPE)) => {
                out.push(ESCAPE);
                i += 2;
            }
            (ESCAPE, Some(ESCAPED_DELIMITER)) => {
                out.push(DELIMITER);
                i += 2;
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }
    out.extend_from_slice(&buf[end..]);
    Ok(out)
}
