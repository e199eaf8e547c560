use bytes::{Buf, BufMut};

use crate::error::{FrameError, Result};
use crate::phone::{TerminalPhone, PHONE_LEN};
use crate::props::BodyProps;

/// Header: msg id (2) + body props (2) + phone (6) + flow id (2) = 12 bytes.
pub const HEADER_SIZE: usize = 12;

/// Fixed-size message header.
///
/// Wire format (all integers big-endian):
/// ```text
/// ┌────────────┬────────────┬───────────────┬────────────┐
/// │ Msg ID     │ Body props │ Phone         │ Flow ID    │
/// │ (2B BE)    │ (2B BE)    │ (6B BCD)      │ (2B BE)    │
/// └────────────┴────────────┴───────────────┴────────────┘
/// ```
/// The sub-package item that follows when bit 13 of the body props is set
/// is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub msg_id: u16,
    pub body_props: u16,
    pub phone: TerminalPhone,
    pub flow_id: u16,
}

impl MessageHeader {
    /// Build a header from its already-encoded parts.
    pub fn new(phone: TerminalPhone, msg_id: u16, body_props: u16, flow_id: u16) -> Self {
        Self {
            msg_id,
            body_props,
            phone,
            flow_id,
        }
    }

    /// Append the 12 header bytes to `dst`.
    pub fn encode(&self, dst: &mut impl BufMut) {
        dst.put_u16(self.msg_id);
        dst.put_u16(self.body_props);
        dst.put_slice(self.phone.as_bytes());
        dst.put_u16(self.flow_id);
    }

    /// The 12 header bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let mut cursor = &mut out[..];
        self.encode(&mut cursor);
        out
    }

    /// Parse the first 12 bytes of `src`.
    pub fn decode(mut src: &[u8]) -> Result<Self> {
        if src.len() < HEADER_SIZE {
            return Err(FrameError::FrameTooShort { len: src.len() });
        }

        let msg_id = src.get_u16();
        let body_props = src.get_u16();
        let mut phone = [0u8; PHONE_LEN];
        src.copy_to_slice(&mut phone);
        let flow_id = src.get_u16();

        Ok(Self {
            msg_id,
            body_props,
            phone: TerminalPhone::from_bcd(phone),
            flow_id,
        })
    }

    /// The unpacked body properties.
    pub fn props(&self) -> BodyProps {
        BodyProps::unpack(self.body_props)
    }
}

/// Serialize a header: msg id, body props, phone, flow id.
pub fn build_header(
    phone: &TerminalPhone,
    msg_id: u16,
    body_props: u16,
    flow_id: u16,
) -> [u8; HEADER_SIZE] {
    MessageHeader::new(*phone, msg_id, body_props, flow_id).to_bytes()
}
