//! Canonical JSON serialization: every [`Value`] has exactly one textual
//! form, with no inserted whitespace and no pretty-printing (an explicit
//! non-goal).
//!
//! Serialization never fails: Rust's exhaustive `match` over `Value`'s
//! seven variants statically rules out the "unrecognized value tag" error
//! path `cjson_stringify_value` has to carry at runtime, so this returns a
//! plain `String` rather than a `Result`.

use crate::number;
use crate::scratch::ScratchBuffer;
use crate::value::Value;

/// Serialize `value` to its canonical JSON text.
pub fn serialize(value: &Value) -> String {
    let mut out: ScratchBuffer<u8> = ScratchBuffer::with_capacity(128);
    write_value(value, &mut out);
    String::from_utf8(out.take_from(0)).expect("serializer only emits valid UTF-8")
}

fn write_value(value: &Value, out: &mut ScratchBuffer<u8>) {
    match value {
        Value::Null => out.push_slice(b"null"),
        Value::True => out.push_slice(b"true"),
        Value::False => out.push_slice(b"false"),
        Value::Number(n) => {
            let mut bytes = Vec::new();
            number::format(*n, &mut bytes);
            out.push_slice(&bytes);
        }
        Value::String(s) => write_string(s, out),
        Value::Array(elements) => {
            out.push_byte(b'[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_byte(b',');
                }
                write_value(element, out);
            }
            out.push_byte(b']');
        }
        Value::Object(members) => {
            out.push_byte(b'{');
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.push_byte(b',');
                }
                write_string(&member.key, out);
                out.push_byte(b':');
                write_value(&member.value, out);
            }
            out.push_byte(b'}');
        }
    }
}

/// Write `bytes` as a quoted JSON string, escaping the seven
/// single-character escapes and any control byte below `0x20` as
/// `\uXXXX` (uppercase hex). `/` is left unescaped — `cjson_stringify_string`
/// never escapes it, and nothing in the taxonomy requires it either
/// (`spec.md` §9).
fn write_string(bytes: &[u8], out: &mut ScratchBuffer<u8>) {
    out.push_byte(b'"');
    for &b in bytes {
        match b {
            b'"' => out.push_slice(b"\\\""),
            b'\\' => out.push_slice(b"\\\\"),
            0x08 => out.push_slice(b"\\b"),
            0x0C => out.push_slice(b"\\f"),
            0x0A => out.push_slice(b"\\n"),
            0x0D => out.push_slice(b"\\r"),
            0x09 => out.push_slice(b"\\t"),
            _ if b < 0x20 => {
                let hex = format!("\\u{:04X}", b);
                out.push_slice(hex.as_bytes());
            }
            _ => out.push_byte(b),
        }
    }
    out.push_byte(b'"');
}
