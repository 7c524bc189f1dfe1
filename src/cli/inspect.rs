//! `parse` and `decode-state` command handlers.

use crate::model::{SnmpValue, decode_state};
use crate::parsers::normalize;
use crate::pipeline::{OutputTarget, exit_codes, render_json, write_output};
use anyhow::Result;

/// Normalize one raw SNMP response and print it as JSON.
pub fn run_parse(raw: &str) -> Result<i32> {
    let value = parse_raw(raw);
    let output = render_json(&value, true)?;
    write_output(&output, &OutputTarget::Stdout, true)?;
    Ok(exit_codes::SUCCESS)
}

/// Print the description for a state code or a raw state response.
pub fn run_decode_state(code: &str) -> Result<i32> {
    write_output(&describe_state(code), &OutputTarget::Stdout, true)?;
    Ok(exit_codes::SUCCESS)
}

fn parse_raw(raw: &str) -> SnmpValue {
    normalize(&SnmpValue::from(raw))
}

fn describe_state(code: &str) -> String {
    decode_state(Some(&parse_raw(code)))
}
