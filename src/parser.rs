//! The recursive-descent parser: turns a whole JSON document into a
//! [`Value`] tree in one pass.
//!
//! Arrays and objects are staged on a [`ScratchBuffer`] of element frames
//! rather than being pushed straight onto the Rust call stack as
//! `Vec<Value>`/`Vec<Member>` — mirroring the LIFO staging discipline
//! `cjson_parse_array`/`cjson_parse_object` use their `context->stack` for,
//! so a failure partway through a container unwinds by truncating the
//! buffer back to where the container started rather than by hand-rolled
//! cleanup.

use crate::error::ParseError;
use crate::lexer::{match_literal, skip_whitespace};
use crate::number;
use crate::options::ParserOptions;
use crate::scratch::ScratchBuffer;
use crate::string_decoder;
use crate::value::{Member, Value};

/// One staged array element or object member, held on the scratch stack
/// while a container is being parsed.
enum Frame {
    Element(Value),
    Member(Vec<u8>, Value),
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    options: ParserOptions,
    depth: usize,
    stack: ScratchBuffer<Frame>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8], options: ParserOptions) -> Self {
        Parser {
            input,
            pos: 0,
            options,
            depth: 0,
            stack: ScratchBuffer::new(),
        }
    }

    fn parse_root(&mut self) -> Result<Value, ParseError> {
        skip_whitespace(self.input, &mut self.pos);
        let value = self.parse_value()?;
        skip_whitespace(self.input, &mut self.pos);
        if self.pos != self.input.len() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.input.get(self.pos) {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => {
                if match_literal(self.input, &mut self.pos, b"null") {
                    Ok(Value::Null)
                } else {
                    Err(ParseError::InvalidValue)
                }
            }
            Some(b't') => {
                if match_literal(self.input, &mut self.pos, b"true") {
                    Ok(Value::True)
                } else {
                    Err(ParseError::InvalidValue)
                }
            }
            Some(b'f') => {
                if match_literal(self.input, &mut self.pos, b"false") {
                    Ok(Value::False)
                } else {
                    Err(ParseError::InvalidValue)
                }
            }
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(ParseError::InvalidValue),
        }
    }

    fn parse_string(&mut self) -> Result<Vec<u8>, ParseError> {
        let mut bytes: ScratchBuffer<u8> = ScratchBuffer::new();
        let range = string_decoder::decode(self.input, &mut self.pos, &mut bytes)?;
        Ok(bytes.slice_from(range.start).to_vec())
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        number::validate(self.input, &mut self.pos)?;
        let value = number::to_f64(&self.input[start..self.pos])?;
        Ok(Value::Number(value))
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth() {
            return Err(ParseError::DepthLimitExceeded);
        }
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.pos += 1; // consume '['
        let frame_start = self.stack.top();

        skip_whitespace(self.input, &mut self.pos);
        if self.input.get(self.pos) == Some(&b']') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(Vec::new()));
        }

        let result = self.parse_array_elements(frame_start);
        self.depth -= 1;
        match result {
            Ok(elements) => Ok(Value::Array(elements)),
            Err(e) => {
                self.stack.truncate(frame_start);
                Err(e)
            }
        }
    }

    fn parse_array_elements(&mut self, frame_start: usize) -> Result<Vec<Value>, ParseError> {
        loop {
            skip_whitespace(self.input, &mut self.pos);
            let value = self.parse_value()?;
            self.stack.push(Frame::Element(value));

            skip_whitespace(self.input, &mut self.pos);
            match self.input.get(self.pos) {
                Some(b',') => {
                    self.pos += 1;
                    skip_whitespace(self.input, &mut self.pos);
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(self
                        .stack
                        .take_from(frame_start)
                        .into_iter()
                        .map(|frame| match frame {
                            Frame::Element(v) => v,
                            Frame::Member(..) => unreachable!("array frame holds only elements"),
                        })
                        .collect());
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.pos += 1; // consume '{'
        let frame_start = self.stack.top();

        skip_whitespace(self.input, &mut self.pos);
        if self.input.get(self.pos) == Some(&b'}') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(Vec::new()));
        }

        let result = self.parse_object_members(frame_start);
        self.depth -= 1;
        match result {
            Ok(members) => Ok(Value::Object(members)),
            Err(e) => {
                self.stack.truncate(frame_start);
                Err(e)
            }
        }
    }

    fn parse_object_members(&mut self, frame_start: usize) -> Result<Vec<Member>, ParseError> {
        loop {
            skip_whitespace(self.input, &mut self.pos);
            if self.input.get(self.pos) != Some(&b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string()?;

            skip_whitespace(self.input, &mut self.pos);
            if self.input.get(self.pos) != Some(&b':') {
                return Err(ParseError::MissColon);
            }
            self.pos += 1;
            skip_whitespace(self.input, &mut self.pos);

            let value = self.parse_value()?;
            self.stack.push(Frame::Member(key, value));

            skip_whitespace(self.input, &mut self.pos);
            match self.input.get(self.pos) {
                Some(b',') => {
                    self.pos += 1;
                    skip_whitespace(self.input, &mut self.pos);
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(self
                        .stack
                        .take_from(frame_start)
                        .into_iter()
                        .map(|frame| match frame {
                            Frame::Member(k, v) => Member::new(k, v),
                            Frame::Element(_) => unreachable!("object frame holds only members"),
                        })
                        .collect());
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}

/// Parse a complete JSON document with default [`ParserOptions`].
///
/// The whole input must be exactly one JSON value, optionally surrounded by
/// whitespace — trailing non-whitespace bytes fail with
/// [`ParseError::RootNotSingular`].
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parse a complete JSON document, as [`parse`], with explicit
/// [`ParserOptions`].
pub fn parse_with_options(input: &[u8], options: ParserOptions) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input, options);
    parser.parse_root()
}
