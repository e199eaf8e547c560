use crate::error::Result;
use crate::escape::check_range;

/// XOR of every byte in `data`.
pub fn xor_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0, |acc, b| acc ^ b)
}

/// XOR of the bytes in `buf[start..end]`.
pub fn checksum(buf: &[u8], start: usize, end: usize) -> Result<u8> {
    check_range(buf, start, end)?;
    Ok(xor_checksum(&buf[start..end]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameError;

    #[test]
    fn xor_of_header_prefix() {
        assert_eq!(xor_checksum(&[0x80, 0x01, 0x00, 0x00]), 0x81);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(xor_checksum(&[0x00, 0x01, 0x00, 0x80]), 0x81);
        assert_eq!(xor_checksum(&[0x01, 0x80]), xor_checksum(&[0x80, 0x01]));
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(xor_checksum(&[]), 0);
        assert_eq!(checksum(&[0xAA], 1, 1).unwrap(), 0);
    }

    #[test]
    fn range_form_ignores_bytes_outside() {
        let buf = [0x7E, 0x80, 0x01, 0x00, 0x00, 0x7E];
        assert_eq!(checksum(&buf, 1, 5).unwrap(), 0x81);
    }

    #[test]
    fn range_past_end_is_rejected() {
        let err = checksum(&[1, 2, 3], 0, 4).unwrap_err();
        assert!(matches!(
            err,
            FrameError::OutOfRange {
                start: 0,
                end: 4,
                len: 3
            }
        ));
    }
}
