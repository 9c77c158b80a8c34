use thiserror::Error;

/// All ways [`crate::parse`] can fail.
///
/// Every variant corresponds to exactly one rejection point in the grammar;
/// there is no variant that means "recovered from" — a parse either
/// succeeds completely or fails with one of these and leaves no partial
/// [`crate::Value`] behind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("expected a value but found none")]
    ExpectValue,

    /// The first non-whitespace byte does not begin any value, or a number
    /// violated the JSON number grammar.
    #[error("invalid value")]
    InvalidValue,

    /// Non-whitespace bytes remained after a complete top-level value.
    #[error("the root value is not the only value in the input")]
    RootNotSingular,

    /// A number's textual form converts to positive or negative infinity.
    #[error("number is too big to be represented as a 64-bit float")]
    NumberTooBig,

    /// A string was not terminated before the end of the input.
    #[error("missing closing quotation mark")]
    MissQuotationMark,

    /// A `\` inside a string was followed by an unrecognized escape letter.
    #[error("invalid string escape sequence")]
    InvalidStringEscape,

    /// A raw byte less than `0x20` occurred inside a string.
    #[error("invalid (unescaped control) character in string")]
    InvalidStringChar,

    /// `\u` was not followed by exactly four hex digits.
    #[error("invalid \\u hex escape")]
    InvalidUnicodeHex,

    /// A high surrogate was not followed by a matching low surrogate, or a
    /// low surrogate appeared without a preceding high surrogate.
    #[error("invalid UTF-16 surrogate pair")]
    InvalidUnicodeSurrogate,

    /// An array element was not followed by `,` or `]`.
    #[error("expected ',' or ']' after array element")]
    MissCommaOrSquareBracket,

    /// An object member did not start with `"`.
    #[error("expected a string key")]
    MissKey,

    /// An object member's key was not followed by `:`.
    #[error("expected ':' after object key")]
    MissColon,

    /// An object member was not followed by `,` or `}`.
    #[error("expected ',' or '}}' after object member")]
    MissCommaOrCurlyBracket,

    /// Recursion (nested arrays/objects) exceeded [`crate::ParserOptions::max_depth`].
    ///
    /// Not part of the original taxonomy this parser's error kinds were
    /// distilled from: a pure recursive-descent parser over untrusted input
    /// needs a recursion bound or it can be driven to a stack overflow by a
    /// deeply nested array/object. See DESIGN.md.
    #[error("exceeded the maximum nesting depth")]
    DepthLimitExceeded,
}
