use bytes::Bytes;
use tracing::{debug, trace};

use crate::checksum::xor_checksum;
use crate::error::{FrameError, Result};
use crate::escape::{unescape, DELIMITER};
use crate::header::{MessageHeader, HEADER_SIZE};

/// A decoded frame: parsed header plus the opaque body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    pub body: Bytes,
}

impl Message {
    pub fn msg_id(&self) -> u16 {
        self.header.msg_id
    }

    pub fn flow_id(&self) -> u16 {
        self.header.flow_id
    }
}

/// Decode one complete frame, delimiters included.
///
/// The interior is unescaped, the checksum verified and the header parsed.
/// The body is returned as-is. A declared body length that disagrees with
/// the real one is tolerated, since senders truncate lengths above 1023.
pub fn decode_frame(frame: &[u8]) -> Result<Message> {
    if frame.len() < 2 || frame[0] != DELIMITER || frame[frame.len() - 1] != DELIMITER {
        return Err(FrameError::MissingDelimiter);
    }

    let interior = unescape(&frame[1..frame.len() - 1], 0, frame.len() - 2)?;
    if interior.len() < HEADER_SIZE + 1 {
        return Err(FrameError::FrameTooShort {
            len: interior.len(),
        });
    }

    let (payload, cs) = interior.split_at(interior.len() - 1);
    let expected = xor_checksum(payload);
    if expected != cs[0] {
        return Err(FrameError::ChecksumMismatch {
            expected,
            actual: cs[0],
        });
    }

    let header = MessageHeader::decode(payload)?;
    let props = header.props();
    if props.sub_package {
        return Err(FrameError::SubPackageUnsupported);
    }

    let body = Bytes::copy_from_slice(&payload[HEADER_SIZE..]);
    if props.body_len != body.len() {
        debug!(
            msg_id = header.msg_id,
            declared_len = props.body_len,
            body_len = body.len(),
            "declared body length differs from received body"
        );
    }
    trace!(
        msg_id = header.msg_id,
        flow_id = header.flow_id,
        body_len = body.len(),
        "decoded frame"
    );

    Ok(Message { header, body })
}
