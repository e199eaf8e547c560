use jt808prims_frame::{escape_with, unescape, EscapeMode};

use crate::cmd::{parse_hex, EscapeArgs, UnescapeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_bytes, OutputFormat};

pub fn run_escape(args: EscapeArgs, format: OutputFormat) -> CliResult<i32> {
    let data = parse_hex("data", &args.data)?;
    let mode = if args.symmetric {
        EscapeMode::Symmetric
    } else {
        EscapeMode::DelimiterOnly
    };
    let out = escape_with(&data, 0, data.len(), mode)
        .map_err(|err| frame_error("escape failed", err))?;
    print_bytes("escape", &out, format);
    Ok(SUCCESS)
}

pub fn run_unescape(args: UnescapeArgs, format: OutputFormat) -> CliResult<i32> {
    let data = parse_hex("data", &args.data)?;
    let out =
        unescape(&data, 0, data.len()).map_err(|err| frame_error("unescape failed", err))?;
    print_bytes("unescape", &out, format);
    Ok(SUCCESS)
}
