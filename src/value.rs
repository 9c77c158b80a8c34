use crate::reset::Reset;

/// A single node of a parsed JSON tree.
///
/// Every sub-value is owned by exactly one parent (an array slot, an
/// object member's value, or a caller's root) — there are no back-pointers
/// and no shared ownership, so dropping a `Value` recursively drops its
/// entire subtree for free via Rust's ordinary `Drop`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The JSON `null` literal.
    Null,
    /// The JSON `true` literal.
    True,
    /// The JSON `false` literal.
    False,
    /// A JSON number, always a finite `f64` — a successful parse never
    /// produces NaN or infinity.
    Number(f64),
    /// A JSON string, stored as decoded UTF-8 bytes. May contain embedded
    /// NUL bytes (e.g. from the escape `\u0000`).
    String(Vec<u8>),
    /// A JSON array, in parse/construction order.
    Array(Vec<Value>),
    /// A JSON object. Members are kept in parse/construction order and are
    /// not deduplicated — see [`Object::find_member`] for lookup semantics
    /// when duplicate keys are present.
    Object(Vec<Member>),
}

/// A single `(key, value)` pair held by [`Value::Object`].
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The member's key, as decoded UTF-8 bytes.
    pub key: Vec<u8>,
    /// The member's value.
    pub value: Value,
}

impl Member {
    /// Create a new member.
    pub fn new(key: Vec<u8>, value: Value) -> Self {
        Member { key, value }
    }
}

impl Default for Value {
    /// A `Value` defaults to `Null`, matching the state a fresh out-value
    /// is born in before a parser fills it.
    fn default() -> Self {
        Value::Null
    }
}

impl Reset for Value {
    /// Release this value's subtree and reset it to `Null`. Idempotent:
    /// resetting an already-`Null` value is a no-op.
    fn reset(&mut self) {
        *self = Value::Null;
    }
}

impl Value {
    /// Convenience constructor for a string value from anything that can be
    /// turned into an owned byte vector.
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Value::String(bytes.into())
    }

    /// `true` if this value is an object and some member's value should be
    /// looked up by key; performs a linear scan comparing length first,
    /// then bytes, and returns the *first* match in member order.
    ///
    /// Duplicate keys are retained verbatim by the parser (`spec.md` §9
    /// leaves this an open question); looking a key up on the left-hand
    /// side of an equality check against a right-hand side with duplicate
    /// keys can therefore be asymmetric — see [`Value::eq_structural`].
    pub fn find_member(&self, key: &[u8]) -> Option<&Value> {
        match self {
            Value::Object(members) => members
                .iter()
                .find(|m| m.key.as_slice() == key)
                .map(|m| &m.value),
            _ => None,
        }
    }

    /// The index of the first member whose key matches `key`, or `None`.
    pub fn find_member_index(&self, key: &[u8]) -> Option<usize> {
        match self {
            Value::Object(members) => members
                .iter()
                .position(|m| m.key.as_slice() == key),
            _ => None,
        }
    }

    /// Structural equality: both values must have the same variant and
    /// equal payloads.
    ///
    /// - Numbers compare by IEEE-754 bit value (so two `NaN`s — which a
    ///   successful parse never produces in the first place — would not
    ///   compare equal, same as `==` on `f64`).
    /// - Arrays compare pairwise in order.
    /// - Objects compare order-insensitively: same member count, and for
    ///   every left-hand member there is a right-hand member with an equal
    ///   key whose value is equal, found via [`Value::find_member`] (first
    ///   match). With duplicate keys this can make equality asymmetric;
    ///   that is inherited from the lookup semantics above, not introduced
    ///   here.
    pub fn eq_structural(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::True, Value::True) => true,
            (Value::False, Value::False) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.eq_structural(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter().all(|m| {
                        other
                            .find_member(&m.key)
                            .is_some_and(|v| v.eq_structural(&m.value))
                    })
            }
            _ => false,
        }
    }

    /// `true` if this is `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
