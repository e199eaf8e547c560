//! JT/T 808 wire framing.
//!
//! Every message travels as one delimited frame:
//! - A 0x7E delimiter on each side
//! - A 12-byte big-endian header (message ID, body properties, BCD phone, flow ID)
//! - The opaque message body
//! - A 1-byte XOR checksum over header and body
//!
//! Everything between the delimiters is byte-stuffed so 0x7E never appears
//! inside a frame. Body semantics are left to the caller.

pub mod checksum;
#[cfg(feature = "async")]
pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod header;
pub mod msg_id;
pub mod phone;
pub mod props;

pub use checksum::{checksum, xor_checksum};
#[cfg(feature = "async")]
pub use codec::Jt808Codec;
pub use config::{FrameConfig, DEFAULT_MAX_FRAME_SIZE};
pub use decoder::{decode_frame, Message};
pub use encoder::{encode_header_only, encode_with_body, FrameEncoder, OutboundMessage};
pub use error::{FrameError, Result};
pub use escape::{escape, escape_with, unescape, EscapeMode, DELIMITER, ESCAPE};
pub use header::{build_header, MessageHeader, HEADER_SIZE};
pub use msg_id::{is_platform_message, msg_id_name};
pub use phone::{TerminalPhone, PHONE_LEN};
pub use props::{pack_body_props, BodyProps, LengthPolicy, PackedProps, MAX_BODY_LEN};
