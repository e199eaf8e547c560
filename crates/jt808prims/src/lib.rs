//! JT/T 808 frame encoding and decoding.
//!
//! jt808prims builds and parses the delimited, byte-stuffed frames that
//! carry JT/T 808 messages between vehicle terminals and platforms.
//!
//! # Crate Structure
//!
//! - [`frame`] — Header packing, checksum, byte stuffing, frame encode/decode
//! - `frame::codec` — `tokio_util` codec (behind `async` feature)
//!
//! The `jt808prims` binary (behind `cli` feature) exposes the same
//! operations over hex input.

/// Re-export frame types.
pub mod frame {
    pub use jt808prims_frame::*;
}
