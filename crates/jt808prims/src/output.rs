use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use jt808prims_frame::{msg_id_name, Message};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct BytesOutput<'a> {
    operation: &'a str,
    size: usize,
    hex: String,
}

#[derive(Serialize)]
struct MessageOutput<'a> {
    msg_id: String,
    msg_id_name: &'a str,
    flow_id: u16,
    phone: String,
    encryption: u8,
    declared_body_len: usize,
    body_len: usize,
    body: String,
}

/// Print the bytes produced by `operation` (encode, escape, unescape).
pub fn print_bytes(operation: &str, data: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = BytesOutput {
                operation,
                size: data.len(),
                hex: hex::encode(data),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OPERATION", "SIZE", "HEX"])
                .add_row(vec![
                    operation.to_string(),
                    data.len().to_string(),
                    spaced_hex(data),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{operation} size={} hex={}", data.len(), spaced_hex(data));
        }
        OutputFormat::Raw => print_raw(data),
    }
}

/// Print a decoded message.
pub fn print_message(msg: &Message, format: OutputFormat) {
    let props = msg.header.props();
    let msg_id = format!("0x{:04X}", msg.msg_id());
    let name = msg_id_name(msg.msg_id());

    match format {
        OutputFormat::Json => {
            let out = MessageOutput {
                msg_id,
                msg_id_name: name,
                flow_id: msg.flow_id(),
                phone: msg.header.phone.to_string(),
                encryption: props.encryption,
                declared_body_len: props.body_len,
                body_len: msg.body.len(),
                body: hex::encode(&msg.body),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MSG ID", "NAME", "FLOW", "PHONE", "SIZE", "BODY"])
                .add_row(vec![
                    msg_id,
                    name.to_string(),
                    msg.flow_id().to_string(),
                    msg.header.phone.to_string(),
                    msg.body.len().to_string(),
                    spaced_hex(&msg.body),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "msg_id={msg_id} ({name}) flow={} phone={} size={} body={}",
                msg.flow_id(),
                msg.header.phone,
                msg.body.len(),
                spaced_hex(&msg.body)
            );
        }
        OutputFormat::Raw => print_raw(&msg.body),
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn spaced_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_hex_separates_bytes() {
        assert_eq!(spaced_hex(&[0x7e, 0x80, 0x01]), "7e 80 01");
        assert_eq!(spaced_hex(&[]), "");
    }
}
