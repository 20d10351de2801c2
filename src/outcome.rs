//! Turning a [`FetchResult`] into the text a tool hands back
//!
//! Payloads keep the upstream key order and are written with spaced
//! separators (`", "` and `": "`). Every non-ASCII character is escaped as
//! `\uXXXX` so the text is plain ASCII. Floats use the shortest round-trip
//! digits with a signed, two-digit exponent (`9.5367431640625e-06`, `1e+20`)
//! and stay in positional form between `1e-4` and `1e16`.
//!
//! Integers beyond the `i64`/`u64` range are decoded as floats upstream of
//! this module, so they come out in float form.

use crate::models::{FetchResult, JsonObject, ToolOutcome};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;
use tracing::error;

/// JSON formatter with spaced separators and ASCII-only output
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiSpacedFormatter;

impl Formatter for AsciiSpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_repr(&format!("{value:e}")).as_bytes())
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_repr(&format!("{value:e}")).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Rewrite Rust's shortest `{:e}` output (`-1.25e-7`) into the float form
/// used for payload text
fn float_repr(scientific: &str) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific.to_string();
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if digits.bytes().all(|b| b == b'0') {
        return format!("{sign}0.0");
    }

    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;
    if -4 < point && point <= 16 {
        let len = digits.len() as i32;
        return if point <= 0 {
            format!("{sign}0.{}{digits}", "0".repeat((-point) as usize))
        } else if point >= len {
            format!("{sign}{digits}{}.0", "0".repeat((point - len) as usize))
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{sign}{whole}.{fraction}")
        };
    }

    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.abs())
}

/// Serialize a JSON value with [`AsciiSpacedFormatter`]
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiSpacedFormatter);
    value.serialize(&mut serializer)?;
    // Every byte written is ASCII.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Map a fetch result to tool text: the serialized payload, or `failure`
///
/// An empty object carries no data and is reported as a failure too.
pub fn render(result: FetchResult, failure: impl FnOnce() -> String) -> ToolOutcome {
    match result {
        Some(data) if !data.is_empty() => payload_text(&data).unwrap_or_else(failure),
        _ => failure(),
    }
}

fn payload_text(data: &JsonObject) -> Option<String> {
    to_json_text(data)
        .map_err(|e| error!(error = %e, "Failed to serialize upstream payload"))
        .ok()
}
