//! The string decoder: reads a quoted JSON string, handling the seven
//! single-character escapes, `\uXXXX` including surrogate pairs, and
//! rejecting raw control bytes below `0x20`.

use crate::error::ParseError;
use crate::lexer::{decode_hex4, encode_utf8};
use crate::scratch::ScratchBuffer;

/// Decode a quoted JSON string starting at `input[*pos]` (which must be the
/// opening `"`). On success, advances `pos` past the closing `"` and
/// returns the byte range of the decoded bytes within `scratch` (from the
/// scratch top at entry to the new scratch top).
///
/// On failure the scratch buffer is truncated back to the top it had on
/// entry — no partially decoded string is ever observable to the caller,
/// matching `spec.md` §4.4's failure discipline.
pub fn decode(
    input: &[u8],
    pos: &mut usize,
    scratch: &mut ScratchBuffer,
) -> Result<std::ops::Range<usize>, ParseError> {
    let entry_top = scratch.top();
    match decode_inner(input, pos, scratch) {
        Ok(()) => Ok(entry_top..scratch.top()),
        Err(e) => {
            scratch.truncate(entry_top);
            Err(e)
        }
    }
}

fn decode_inner(
    input: &[u8],
    pos: &mut usize,
    scratch: &mut ScratchBuffer,
) -> Result<(), ParseError> {
    debug_assert_eq!(input.get(*pos), Some(&b'"'));
    let mut p = *pos + 1;
    let mut high_surrogate: Option<u16> = None;

    loop {
        let Some(&b) = input.get(p) else {
            return Err(ParseError::MissQuotationMark);
        };

        match b {
            b'"' => {
                if high_surrogate.is_some() {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                *pos = p + 1;
                return Ok(());
            }

            b'\\' => {
                p += 1;
                let Some(&esc) = input.get(p) else {
                    return Err(ParseError::MissQuotationMark);
                };
                match esc {
                    b'"' | b'\\' | b'/' => {
                        reject_if_pending_surrogate(high_surrogate)?;
                        scratch.push_byte(esc);
                        p += 1;
                    }
                    b'b' => {
                        reject_if_pending_surrogate(high_surrogate)?;
                        scratch.push_byte(0x08);
                        p += 1;
                    }
                    b'f' => {
                        reject_if_pending_surrogate(high_surrogate)?;
                        scratch.push_byte(0x0C);
                        p += 1;
                    }
                    b'n' => {
                        reject_if_pending_surrogate(high_surrogate)?;
                        scratch.push_byte(0x0A);
                        p += 1;
                    }
                    b'r' => {
                        reject_if_pending_surrogate(high_surrogate)?;
                        scratch.push_byte(0x0D);
                        p += 1;
                    }
                    b't' => {
                        reject_if_pending_surrogate(high_surrogate)?;
                        scratch.push_byte(0x09);
                        p += 1;
                    }
                    b'u' => {
                        p += 1;
                        let u = decode_hex4(input, &mut p).ok_or(ParseError::InvalidUnicodeHex)?;

                        if let Some(high) = high_surrogate.take() {
                            // We already saw a high surrogate; this escape
                            // must be its matching low surrogate.
                            if !(0xDC00..=0xDFFF).contains(&u) {
                                return Err(ParseError::InvalidUnicodeSurrogate);
                            }
                            let scalar = 0x10000
                                + (((high - 0xD800) as u32) << 10)
                                + (u - 0xDC00) as u32;
                            let ch = char::from_u32(scalar)
                                .ok_or(ParseError::InvalidUnicodeSurrogate)?;
                            let mut bytes = Vec::new();
                            encode_utf8(ch, &mut bytes);
                            scratch.push_slice(&bytes);
                        } else if (0xD800..=0xDBFF).contains(&u) {
                            // High surrogate: must be followed by `\u` + a
                            // matching low surrogate.
                            high_surrogate = Some(u);
                        } else if (0xDC00..=0xDFFF).contains(&u) {
                            // Low surrogate with no preceding high surrogate.
                            return Err(ParseError::InvalidUnicodeSurrogate);
                        } else {
                            let ch = char::from_u32(u as u32)
                                .expect("non-surrogate u16 is always a valid scalar");
                            let mut bytes = Vec::new();
                            encode_utf8(ch, &mut bytes);
                            scratch.push_slice(&bytes);
                        }
                    }
                    _ => return Err(ParseError::InvalidStringEscape),
                }
            }

            _ if b < 0x20 => return Err(ParseError::InvalidStringChar),

            _ => {
                reject_if_pending_surrogate(high_surrogate)?;
                scratch.push_byte(b);
                p += 1;
            }
        }
    }
}

#[inline]
fn reject_if_pending_surrogate(high_surrogate: Option<u16>) -> Result<(), ParseError> {
    if high_surrogate.is_some() {
        Err(ParseError::InvalidUnicodeSurrogate)
    } else {
        Ok(())
    }
}
