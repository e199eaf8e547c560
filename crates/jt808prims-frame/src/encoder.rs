use bytes::{BufMut, Bytes, BytesMut};
use tracing::{trace, warn};

use crate::checksum::checksum;
use crate::config::FrameConfig;
use crate::error::Result;
use crate::escape::{escape_with, DELIMITER};
use crate::header::{MessageHeader, HEADER_SIZE};
use crate::phone::TerminalPhone;
use crate::props::{BodyProps, MAX_BODY_LEN};

/// A message to be framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub msg_id: u16,
    pub flow_id: u16,
    pub phone: TerminalPhone,
    pub body: Bytes,
}

impl OutboundMessage {
    /// Create a message with a body.
    pub fn new(msg_id: u16, flow_id: u16, phone: TerminalPhone, body: impl Into<Bytes>) -> Self {
        Self {
            msg_id,
            flow_id,
            phone,
            body: body.into(),
        }
    }

    /// Create a message that carries only a header, such as an acknowledgement.
    pub fn header_only(msg_id: u16, flow_id: u16, phone: TerminalPhone) -> Self {
        Self::new(msg_id, flow_id, phone, Bytes::new())
    }
}

/// Turns [`OutboundMessage`]s into escaped, delimited frames.
///
/// Wire format:
/// ```text
/// ┌──────┬──────────────────────────────────────────┬──────┐
/// │ 0x7E │ escape(Header ║ Body ║ XOR checksum)     │ 0x7E │
/// └──────┴──────────────────────────────────────────┴──────┘
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameEncoder {
    config: FrameConfig,
}

impl FrameEncoder {
    /// Create an encoder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit configuration.
    pub fn with_config(config: FrameConfig) -> Self {
        Self { config }
    }

    /// Current encoder configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Encode one message into a fresh buffer.
    pub fn encode(&self, msg: &OutboundMessage) -> Result<Bytes> {
        let mut dst = BytesMut::new();
        self.encode_into(msg, &mut dst)?;
        Ok(dst.freeze())
    }

    /// Encode one message and append the frame to `dst`.
    pub fn encode_into(&self, msg: &OutboundMessage, dst: &mut BytesMut) -> Result<()> {
        let packed = BodyProps::new(msg.body.len()).pack(self.config.length_policy)?;
        if let Some(len) = packed.overflow {
            warn!(
                msg_id = msg.msg_id,
                body_len = len,
                declared_len = len & MAX_BODY_LEN,
                "body longer than {MAX_BODY_LEN} bytes; declared length truncated"
            );
        }

        let header = MessageHeader::new(msg.phone, msg.msg_id, packed.bits, msg.flow_id);

        let mut raw = BytesMut::with_capacity(HEADER_SIZE + msg.body.len() + 3);
        raw.put_u8(DELIMITER);
        header.encode(&mut raw);
        raw.put_slice(&msg.body);
        let cs = checksum(&raw, 1, raw.len())?;
        raw.put_u8(cs);
        raw.put_u8(DELIMITER);

        let frame = escape_with(&raw, 1, raw.len() - 1, self.config.escape_mode)?;
        trace!(
            msg_id = msg.msg_id,
            flow_id = msg.flow_id,
            body_len = msg.body.len(),
            frame_len = frame.len(),
            "encoded frame"
        );
        dst.extend_from_slice(&frame);
        Ok(())
    }
}

/// Frame `body` with the default configuration.
pub fn encode_with_body(
    body: &[u8],
    flow_id: u16,
    phone: &TerminalPhone,
    msg_id: u16,
) -> Result<Bytes> {
    let msg = OutboundMessage::new(msg_id, flow_id, *phone, Bytes::copy_from_slice(body));
    FrameEncoder::new().encode(&msg)
}

/// Frame a header-only message with the default configuration.
pub fn encode_header_only(flow_id: u16, phone: &TerminalPhone, msg_id: u16) -> Result<Bytes> {
    FrameEncoder::new().encode(&OutboundMessage::header_only(msg_id, flow_id, *phone))
}
