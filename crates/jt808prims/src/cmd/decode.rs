use jt808prims_frame::decode_frame;

use crate::cmd::{parse_hex, DecodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let frame = parse_hex("frame", &args.frame)?;
    let msg = decode_frame(&frame).map_err(|err| frame_error("decode failed", err))?;
    print_message(&msg, format);
    Ok(SUCCESS)
}
