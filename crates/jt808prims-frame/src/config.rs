use crate::escape::EscapeMode;
use crate::props::LengthPolicy;

/// Default maximum size of one frame on the wire, delimiters included.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 4 * 1024;

/// Configuration for the frame encoder and the stream codec.
///
/// `decode_frame` takes none: unescaping reverses both sequences and the
/// size limit is enforced by the codec before a frame reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Which bytes are stuffed when sending. Default: delimiter only.
    pub escape_mode: EscapeMode,
    /// Handling of bodies longer than the 10-bit length field. Default: truncate.
    pub length_policy: LengthPolicy,
    /// Maximum escaped frame size accepted by the stream codec. Default: 4 KiB.
    pub max_frame_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            escape_mode: EscapeMode::default(),
            length_policy: LengthPolicy::default(),
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}
