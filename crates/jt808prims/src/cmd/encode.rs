use jt808prims_frame::{
    EscapeMode, FrameConfig, FrameEncoder, LengthPolicy, OutboundMessage, TerminalPhone,
};

use crate::cmd::{parse_hex, EncodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_bytes, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let phone = TerminalPhone::from_digits(&args.phone)
        .map_err(|err| frame_error("invalid --phone", err))?;
    let body = match &args.body {
        Some(hex) => parse_hex("--body", hex)?,
        None => Vec::new(),
    };

    let encoder = FrameEncoder::with_config(config_from_args(&args));
    let msg = OutboundMessage::new(args.msg_id, args.flow_id, phone, body);
    let frame = encoder
        .encode(&msg)
        .map_err(|err| frame_error("encode failed", err))?;

    tracing::debug!(msg_id = args.msg_id, flow_id = args.flow_id, %phone, "frame encoded");
    print_bytes("encode", &frame, format);
    Ok(SUCCESS)
}

fn config_from_args(args: &EncodeArgs) -> FrameConfig {
    FrameConfig {
        escape_mode: if args.symmetric {
            EscapeMode::Symmetric
        } else {
            EscapeMode::DelimiterOnly
        },
        length_policy: if args.strict_length {
            LengthPolicy::Reject
        } else {
            LengthPolicy::Truncate
        },
        ..FrameConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(symmetric: bool, strict_length: bool) -> EncodeArgs {
        EncodeArgs {
            msg_id: 0x8001,
            flow_id: 1,
            phone: "13800138000".to_string(),
            body: None,
            symmetric,
            strict_length,
        }
    }

    #[test]
    fn defaults_to_compatible_config() {
        let config = config_from_args(&args(false, false));
        assert_eq!(config, FrameConfig::default());
    }

    #[test]
    fn flags_select_strict_symmetric_config() {
        let config = config_from_args(&args(true, true));
        assert_eq!(config.escape_mode, EscapeMode::Symmetric);
        assert_eq!(config.length_policy, LengthPolicy::Reject);
    }
}
