//! Terminal phone number in packed BCD.

use std::fmt;
use std::str::FromStr;

use crate::error::{FrameError, Result};

/// Encoded width of a phone number.
pub const PHONE_LEN: usize = 6;

const PHONE_DIGITS: usize = PHONE_LEN * 2;

/// A terminal identifier as it appears in the header: 12 BCD digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TerminalPhone([u8; PHONE_LEN]);

impl TerminalPhone {
    /// Wrap already-encoded bytes verbatim.
    pub const fn from_bcd(bytes: [u8; PHONE_LEN]) -> Self {
        Self(bytes)
    }

    /// Encode a decimal string, left-padding it with zeros to 12 digits.
    pub fn from_digits(digits: &str) -> Result<Self> {
        let digits = digits.trim();
        if digits.is_empty()
            || digits.len() > PHONE_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(FrameError::InvalidPhone(digits.to_string()));
        }

        let padded = format!("{digits:0>PHONE_DIGITS$}");
        let mut bytes = [0u8; PHONE_LEN];
        for (slot, pair) in bytes.iter_mut().zip(padded.as_bytes().chunks_exact(2)) {
            *slot = ((pair[0] - b'0') << 4) | (pair[1] - b'0');
        }
        Ok(Self(bytes))
    }

    /// The six encoded bytes.
    pub fn as_bytes(&self) -> &[u8; PHONE_LEN] {
        &self.0
    }
}

impl FromStr for TerminalPhone {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_digits(s)
    }
}

/// Prints every nibble, so non-decimal nibbles show up as hex letters.
impl fmt::Display for TerminalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; PHONE_LEN]> for TerminalPhone {
    fn from(bytes: [u8; PHONE_LEN]) -> Self {
        Self::from_bcd(bytes)
    }
}
