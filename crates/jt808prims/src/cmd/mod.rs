use clap::{Args, Subcommand};

use crate::exit::{hex_error, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod stuff;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a frame from a message ID, flow ID, phone and optional body.
    Encode(EncodeArgs),
    /// Verify and parse a complete frame.
    Decode(DecodeArgs),
    /// Byte-stuff a buffer (0x7E -> 0x7D 0x02).
    Escape(EscapeArgs),
    /// Undo byte stuffing in a buffer.
    Unescape(UnescapeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Escape(args) => stuff::run_escape(args, format),
        Command::Unescape(args) => stuff::run_unescape(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Message ID (decimal or 0x-prefixed hex).
    #[arg(long, short = 'm', value_parser = parse_u16)]
    pub msg_id: u16,
    /// Flow ID (decimal or 0x-prefixed hex).
    #[arg(long, short = 'f', default_value = "0", value_parser = parse_u16)]
    pub flow_id: u16,
    /// Terminal phone number, up to 12 decimal digits.
    #[arg(long, short = 'p')]
    pub phone: String,
    /// Message body as hex. Omit for a header-only frame.
    #[arg(long)]
    pub body: Option<String>,
    /// Also stuff 0x7D when escaping.
    #[arg(long)]
    pub symmetric: bool,
    /// Fail instead of truncating the length field for bodies over 1023 bytes.
    #[arg(long)]
    pub strict_length: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Complete frame as hex, delimiters included.
    pub frame: String,
}

#[derive(Args, Debug)]
pub struct EscapeArgs {
    /// Bytes to escape, as hex.
    pub data: String,
    /// Also stuff 0x7D (0x7D -> 0x7D 0x01).
    #[arg(long)]
    pub symmetric: bool,
}

#[derive(Args, Debug)]
pub struct UnescapeArgs {
    /// Bytes to unescape, as hex.
    pub data: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_u16(input: &str) -> Result<u16, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => input.parse::<u16>(),
    };
    parsed.map_err(|err| format!("invalid u16 value {input:?}: {err}"))
}

/// Decode hex input, ignoring whitespace between digits.
pub(crate) fn parse_hex(arg: &str, input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).map_err(|err| hex_error(arg, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u16_accepts_decimal_and_hex() {
        assert_eq!(parse_u16("513").unwrap(), 513);
        assert_eq!(parse_u16("0x8001").unwrap(), 0x8001);
        assert_eq!(parse_u16("0X0200").unwrap(), 0x0200);
    }

    #[test]
    fn parse_u16_rejects_out_of_range() {
        assert!(parse_u16("65536").is_err());
        assert!(parse_u16("0x10000").is_err());
        assert!(parse_u16("abc").is_err());
    }

    #[test]
    fn parse_hex_ignores_whitespace() {
        assert_eq!(
            parse_hex("--body", "7e 80\n01").unwrap(),
            vec![0x7e, 0x80, 0x01]
        );
        assert!(parse_hex("--body", "7").is_err());
    }
}
