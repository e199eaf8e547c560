//! Message body properties bitfield.
//!
//! ```text
//! ┌──────────┬─────────┬────────────┬──────────────────┐
//! │ 15 14    │ 13      │ 12 11 10   │ 9 .. 0           │
//! │ reserved │ sub-pkg │ encryption │ body length      │
//! └──────────┴─────────┴────────────┴──────────────────┘
//! ```

use crate::error::{FrameError, Result};

/// Largest body length the 10-bit length field can carry.
pub const MAX_BODY_LEN: usize = 0x03FF;

const LEN_MASK: u16 = 0x03FF;
const ENCRYPTION_MASK: u16 = 0x1C00;
const SUB_PACKAGE_MASK: u16 = 0x2000;
const RESERVED_MASK: u16 = 0xC000;

const ENCRYPTION_SHIFT: u32 = 10;
const SUB_PACKAGE_SHIFT: u32 = 13;
const RESERVED_SHIFT: u32 = 14;

/// Body is sent in clear.
pub const ENCRYPTION_NONE: u8 = 0b000;

/// Body is RSA encrypted.
pub const ENCRYPTION_RSA: u8 = 0b001;

/// What to do with bodies longer than [`MAX_BODY_LEN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Keep the low 10 bits of the length and flag the overflow.
    #[default]
    Truncate,
    /// Fail with [`FrameError::BodyTooLong`].
    Reject,
}

/// Unpacked view of the body properties word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyProps {
    pub body_len: usize,
    pub encryption: u8,
    pub sub_package: bool,
    pub reserved: u8,
}

/// Result of packing a [`BodyProps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedProps {
    /// The packed 16-bit word.
    pub bits: u16,
    /// The real body length when it did not fit and was truncated.
    pub overflow: Option<usize>,
}

impl PackedProps {
    /// True when the length field no longer matches the real body length.
    pub fn is_truncated(&self) -> bool {
        self.overflow.is_some()
    }
}

impl BodyProps {
    /// Properties for a clear, single-package body of `body_len` bytes.
    pub fn new(body_len: usize) -> Self {
        Self {
            body_len,
            ..Self::default()
        }
    }

    /// Pack into the wire word, applying `policy` to oversized bodies.
    pub fn pack(&self, policy: LengthPolicy) -> Result<PackedProps> {
        if self.body_len > MAX_BODY_LEN && policy == LengthPolicy::Reject {
            return Err(FrameError::BodyTooLong {
                len: self.body_len,
                max: MAX_BODY_LEN,
            });
        }
        Ok(pack_body_props(
            self.body_len,
            self.encryption,
            self.sub_package,
            self.reserved,
        ))
    }

    /// Split a wire word back into its fields.
    pub fn unpack(bits: u16) -> Self {
        Self {
            body_len: usize::from(bits & LEN_MASK),
            encryption: ((bits & ENCRYPTION_MASK) >> ENCRYPTION_SHIFT) as u8,
            sub_package: bits & SUB_PACKAGE_MASK != 0,
            reserved: ((bits & RESERVED_MASK) >> RESERVED_SHIFT) as u8,
        }
    }
}

/// Pack the four fields into one word.
///
/// Every field is masked to its width. A `body_len` above [`MAX_BODY_LEN`]
/// keeps only its low 10 bits and is reported through
/// [`PackedProps::overflow`].
pub fn pack_body_props(
    body_len: usize,
    encryption: u8,
    sub_package: bool,
    reserved: u8,
) -> PackedProps {
    let len_bits = (body_len & MAX_BODY_LEN) as u16;
    let bits = (len_bits & LEN_MASK)
        | ((u16::from(encryption) << ENCRYPTION_SHIFT) & ENCRYPTION_MASK)
        | ((u16::from(sub_package) << SUB_PACKAGE_SHIFT) & SUB_PACKAGE_MASK)
        | ((u16::from(reserved) << RESERVED_SHIFT) & RESERVED_MASK);

    PackedProps {
        bits,
        overflow: (body_len > MAX_BODY_LEN).then_some(body_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_plain_length() {
        let packed = pack_body_props(500, ENCRYPTION_NONE, false, 0);
        assert_eq!(packed.bits, 500);
        assert_eq!(packed.bits, 0x01F4);
        assert!(!packed.is_truncated());
    }

    #[test]
    fn oversized_length_is_truncated_and_flagged() {
        let packed = pack_body_props(2000, ENCRYPTION_NONE, false, 0);
        assert_eq!(packed.bits, 976);
        assert_eq!(packed.overflow, Some(2000));
    }

    #[test]
    fn boundary_lengths() {
        assert!(!pack_body_props(1023, 0, false, 0).is_truncated());
        let at_limit = pack_body_props(1024, 0, false, 0);
        assert_eq!(at_limit.bits, 0);
        assert_eq!(at_limit.overflow, Some(1024));
    }

    #[test]
    fn reject_policy_errors_on_overflow() {
        let err = BodyProps::new(2000).pack(LengthPolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            FrameError::BodyTooLong {
                len: 2000,
                max: MAX_BODY_LEN
            }
        ));

        let ok = BodyProps::new(1023).pack(LengthPolicy::Reject).unwrap();
        assert_eq!(ok.bits, 0x03FF);
    }

    #[test]
    fn truncate_policy_returns_flagged_value() {
        let packed = BodyProps::new(2000).pack(LengthPolicy::Truncate).unwrap();
        assert_eq!(packed.bits, 976);
        assert!(packed.is_truncated());
    }

    #[test]
    fn packs_every_field_into_its_bits() {
        let packed = pack_body_props(0, ENCRYPTION_RSA, true, 0b11);
        assert_eq!(packed.bits, 0x0400 | 0x2000 | 0xC000);
    }

    #[test]
    fn wide_inputs_are_masked() {
        let packed = pack_body_props(0, 0xFF, false, 0xFF);
        assert_eq!(packed.bits, ENCRYPTION_MASK | RESERVED_MASK);
    }

    #[test]
    fn unpack_reverses_pack() {
        let props = BodyProps {
            body_len: 37,
            encryption: ENCRYPTION_RSA,
            sub_package: true,
            reserved: 2,
        };
        let packed = props.pack(LengthPolicy::Reject).unwrap();
        assert_eq!(BodyProps::unpack(packed.bits), props);
    }
}
