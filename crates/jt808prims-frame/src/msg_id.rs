//! Well-known message IDs.
//!
//! IDs with the high bit clear are sent by terminals; IDs with the high bit
//! set are sent by the platform.

/// Terminal general response.
pub const TERMINAL_GENERAL_RESPONSE: u16 = 0x0001;

/// Terminal heartbeat (empty body).
pub const TERMINAL_HEARTBEAT: u16 = 0x0002;

/// Terminal deregistration (empty body).
pub const TERMINAL_DEREGISTER: u16 = 0x0003;

/// Terminal registration.
pub const TERMINAL_REGISTER: u16 = 0x0100;

/// Terminal authentication.
pub const TERMINAL_AUTHENTICATION: u16 = 0x0102;

/// Location report.
pub const LOCATION_REPORT: u16 = 0x0200;

/// Platform general response.
pub const PLATFORM_GENERAL_RESPONSE: u16 = 0x8001;

/// Terminal registration response.
pub const TERMINAL_REGISTER_RESPONSE: u16 = 0x8100;

/// Returns a human-readable name for a message ID.
pub fn msg_id_name(id: u16) -> &'static str {
    match id {
        TERMINAL_GENERAL_RESPONSE => "TERMINAL_GENERAL_RESPONSE",
        TERMINAL_HEARTBEAT => "TERMINAL_HEARTBEAT",
        TERMINAL_DEREGISTER => "TERMINAL_DEREGISTER",
        TERMINAL_REGISTER => "TERMINAL_REGISTER",
        TERMINAL_AUTHENTICATION => "TERMINAL_AUTHENTICATION",
        LOCATION_REPORT => "LOCATION_REPORT",
        PLATFORM_GENERAL_RESPONSE => "PLATFORM_GENERAL_RESPONSE",
        TERMINAL_REGISTER_RESPONSE => "TERMINAL_REGISTER_RESPONSE",
        0x8000..=0xFFFF => "PLATFORM",
        _ => "TERMINAL",
    }
}

/// Returns true if the message ID belongs to the platform-to-terminal range.
pub fn is_platform_message(id: u16) -> bool {
    id & 0x8000 != 0
}
