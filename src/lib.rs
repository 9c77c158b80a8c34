//! # cjson
//!
//! A self-contained JSON codec: a recursive-descent parser that turns a
//! complete UTF-8 byte slice into an in-memory [`Value`] tree in one pass,
//! a serializer that turns the tree back into canonical JSON text, and a
//! handful of value-tree utilities (structural equality, member lookup,
//! destructive release).
//!
//! This crate parses one whole document at a time; it has no concept of
//! incremental/streaming input, and it has no dependency on `std::io` —
//! callers read their own bytes and hand this crate a `&[u8]`.
//!
//! ## Parsing
//!
//! ```
//! use cjson::Value;
//!
//! let value = cjson::parse(br#"{"name": "Elvis", "age": 42}"#).unwrap();
//! assert_eq!(value.find_member(b"name"), Some(&Value::string(&b"Elvis"[..])));
//! ```
//!
//! Parser behavior (notably the maximum container nesting depth) can be
//! tuned via [`ParserOptions`]:
//!
//! ```
//! use cjson::{parse_with_options, ParserOptionsBuilder};
//!
//! let options = ParserOptionsBuilder::default().with_max_depth(32).build();
//! let value = parse_with_options(b"[1, 2, 3]", options).unwrap();
//! ```
//!
//! ## Serializing
//!
//! ```
//! use cjson::{serialize, Value};
//!
//! let value = Value::Array(vec![Value::Number(1.0), Value::True, Value::Null]);
//! assert_eq!(serialize(&value), "[1,true,null]");
//! ```
//!
//! ## Error handling
//!
//! Every way a parse can fail is a variant of [`ParseError`] — there is no
//! partial or best-effort result; a failed parse returns `Err` and nothing
//! else.
mod error;
mod lexer;
mod number;
mod options;
mod parser;
mod reset;
mod scratch;
mod serializer;
mod string_decoder;
mod value;

pub use error::ParseError;
pub use options::{ParserOptions, ParserOptionsBuilder};
pub use parser::{parse, parse_with_options};
pub use reset::Reset;
pub use serializer::serialize;
pub use value::{Member, Value};
