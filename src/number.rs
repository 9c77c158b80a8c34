//! Number codec: lexical validation against the JSON number grammar,
//! range-checked conversion to `f64`, and canonical formatting on the
//! serialize side.

use crate::error::ParseError;

/// Validate `input[*pos..]` against the JSON number grammar
/// (`-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`) and advance `pos`
/// past the matched span. Returns the matched span's end index, or
/// `ParseError::InvalidValue` if the bytes at `*pos` don't form a number
/// at all.
///
/// This mirrors `cjson_parse_number`'s hand-rolled grammar walk byte for
/// byte, including the `0` boundary case (`0123` stops after the leading
/// `0`, leaving `123` to be rejected by the caller as trailing garbage via
/// `RootNotSingular`/`MissCommaOrSquareBracket`/etc., not `InvalidValue`).
pub fn validate(input: &[u8], pos: &mut usize) -> Result<(), ParseError> {
    let start = *pos;
    let mut p = *pos;

    if input.get(p) == Some(&b'-') {
        p += 1;
    }

    match input.get(p) {
        Some(b'0') => p += 1,
        Some(b'1'..=b'9') => {
            p += 1;
            while matches!(input.get(p), Some(b'0'..=b'9')) {
                p += 1;
            }
        }
        _ => return Err(ParseError::InvalidValue),
    }

    if input.get(p) == Some(&b'.') {
        p += 1;
        if !matches!(input.get(p), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(input.get(p), Some(b'0'..=b'9')) {
            p += 1;
        }
    }

    if matches!(input.get(p), Some(b'e' | b'E')) {
        p += 1;
        if matches!(input.get(p), Some(b'+' | b'-')) {
            p += 1;
        }
        if !matches!(input.get(p), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(input.get(p), Some(b'0'..=b'9')) {
            p += 1;
        }
    }

    debug_assert!(p > start);
    *pos = p;
    Ok(())
}

/// Convert an already-[`validate`]d span to `f64`, failing with
/// `NumberTooBig` if the result overflows to infinity. Underflow to `0.0`
/// is accepted, not an error.
pub fn to_f64(span: &[u8]) -> Result<f64, ParseError> {
    // `span` was already grammar-checked by `validate`, so this is always
    // valid UTF-8 (it's pure ASCII) and always parses.
    let text = std::str::from_utf8(span).expect("number span is ASCII");
    let value: f64 = text.parse().expect("number span matches JSON grammar");
    if value.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(value)
}

/// Format `value` the way the serializer writes numbers: the shortest
/// decimal text that reparses to the exact same `f64` (a Grisu3-family
/// algorithm, via the `dtoa` crate), with negative zero written as `-0`
/// rather than `0` — matching what `%.17g` does for `-0.0` in the C
/// original this taxonomy was distilled from (`spec.md` §9 preserves this
/// rather than normalizing it away).
///
/// A successful parse never produces a `NaN`/infinite `Number`, but
/// `Value::Number` is a public, unvalidated variant, so a caller can still
/// hand `serialize` one directly. `dtoa::Buffer::format_finite` panics on
/// non-finite input; falling back to the slower `format` for that case
/// keeps serialization total, matching `sprintf("%.17g", ...)`'s behavior
/// for `nan`/`inf` in the C original instead of crashing.
pub fn format(value: f64, out: &mut Vec<u8>) {
    if value == 0.0 && value.is_sign_negative() {
        out.extend_from_slice(b"-0");
        return;
    }
    let mut buf = dtoa::Buffer::new();
    let text = if value.is_finite() {
        buf.format_finite(value)
    } else {
        buf.format(value)
    };
    out.extend_from_slice(text.as_bytes());
}
