//! Key-path model for addressing fields inside nested records.
//!
//! A [`KeyPath`] is an ordered, non-empty sequence of [`Seg`]s read from the
//! root towards the leaf. Segments resolve against both containers the way
//! property access does on plain data: an index on an object addresses the
//! entry whose key is the decimal rendering of the index, and a key on an
//! array addresses an element only when the key is a canonical decimal index.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, TransmuteError};

/// A single field identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Named field: `{"key": value}`
    Key(String),
    /// Positional field: `[index]`
    Index(usize),
}

impl Seg {
    /// Create a key segment.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }

    /// The object key this segment addresses.
    pub fn object_key(&self) -> Cow<'_, str> {
        match self {
            Seg::Key(k) => Cow::Borrowed(k),
            Seg::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// The array position this segment addresses, if any.
    pub fn array_index(&self) -> Option<usize> {
        match self {
            Seg::Index(i) => Some(*i),
            Seg::Key(k) => parse_canonical_index(k),
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, "{}", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// Decimal digits without a leading zero (except `"0"` itself).
fn parse_canonical_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse().ok()
}

/// An ordered, non-empty sequence of segments locating one nested field.
///
/// # Examples
///
/// ```
/// use transmute_core::{key_path, KeyPath, Seg};
///
/// let parsed: KeyPath = "user.tags[0]".parse().unwrap();
/// assert_eq!(parsed, key_path!("user", "tags", 0usize));
/// assert_eq!(parsed.last(), &Seg::Index(0));
/// assert_eq!(parsed.to_string(), "user.tags[0]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath(Vec<Seg>);

impl KeyPath {
    /// Build a key-path from its segments.
    ///
    /// # Errors
    ///
    /// Returns `EmptyKeyPath` if `segments` yields nothing.
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Seg>,
    {
        let segments: Vec<Seg> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(TransmuteError::EmptyKeyPath);
        }
        Ok(Self(segments))
    }

    /// Build a key-path from a first segment and the rest; cannot be empty.
    pub fn from_head(head: Seg, rest: Vec<Seg>) -> Self {
        let mut segments = Vec::with_capacity(rest.len() + 1);
        segments.push(head);
        segments.extend(rest);
        Self(segments)
    }

    /// Parse dotted text such as `a.b[0].c`.
    ///
    /// Keys are separated by `.`, positions are written `[n]`. Keys cannot
    /// contain `.`, `[` or `]`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyKeyPath` for empty text and `InvalidKeyPath` for empty
    /// segments, unbalanced brackets or non-numeric indices.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(TransmuteError::EmptyKeyPath);
        }

        let invalid = |reason: &str| TransmuteError::InvalidKeyPath {
            path: text.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut rest = text;
        loop {
            if let Some(after) = rest.strip_prefix('[') {
                let close = after.find(']').ok_or_else(|| invalid("unclosed '['"))?;
                let index = parse_canonical_index(&after[..close])
                    .ok_or_else(|| invalid("index must be a non-negative integer"))?;
                segments.push(Seg::Index(index));
                rest = &after[close + 1..];
            } else {
                let end = rest.find(['.', '[', ']']).unwrap_or(rest.len());
                if end == 0 {
                    return Err(invalid("empty segment"));
                }
                segments.push(Seg::Key(rest[..end].to_string()));
                rest = &rest[end..];
            }

            if rest.is_empty() {
                break;
            }
            if let Some(after) = rest.strip_prefix('.') {
                if after.starts_with('[') {
                    return Err(invalid("expected a key after '.'"));
                }
                rest = after;
            } else if !rest.starts_with('[') {
                return Err(invalid("unexpected ']'"));
            }
        }

        Ok(Self(segments))
    }

    /// All segments, root first.
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    /// Number of segments (always at least one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The terminal segment.
    pub fn last(&self) -> &Seg {
        &self.0[self.0.len() - 1]
    }

    /// The segments leading to the terminal one.
    pub fn parents(&self) -> &[Seg] {
        &self.0[..self.0.len() - 1]
    }

    /// True when `self` is a strict prefix of `other`.
    pub fn is_prefix_of(&self, other: &KeyPath) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    /// Follow this path from `root`, returning the addressed value if every
    /// step resolves.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.0
            .iter()
            .try_fold(root, |cursor, seg| child(cursor, seg))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            match seg {
                Seg::Key(k) if i > 0 => write!(f, ".{}", k)?,
                _ => write!(f, "{}", seg)?,
            }
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = TransmuteError;

    fn from_str(s: &str) -> Result<Self> {
        KeyPath::parse(s)
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Accepted wire forms: `"a.b[0]"` or `["a", "b", 0]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyPathRepr {
    Dotted(String),
    Segments(Vec<Seg>),
}

impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match KeyPathRepr::deserialize(deserializer)? {
            KeyPathRepr::Dotted(text) => KeyPath::parse(&text).map_err(serde::de::Error::custom),
            KeyPathRepr::Segments(segments) => {
                KeyPath::new(segments).map_err(serde::de::Error::custom)
            }
        }
    }
}

/// Build a [`KeyPath`] from one or more segments.
///
/// ```
/// use transmute_core::key_path;
///
/// let path = key_path!("a", "b");
/// assert_eq!(path.len(), 2);
/// ```
#[macro_export]
macro_rules! key_path {
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::path::KeyPath::from_head(
            $crate::path::Seg::from($head),
            vec![$($crate::path::Seg::from($rest)),*],
        )
    };
}

// ========== Container access ==========

/// Objects and arrays: the only values a segment can resolve against.
pub(crate) fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Short type name used in logs and error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn child<'a>(value: &'a Value, seg: &Seg) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(seg.object_key().as_ref()),
        Value::Array(items) => items.get(seg.array_index()?),
        _ => None,
    }
}

pub(crate) fn child_mut<'a>(value: &'a mut Value, seg: &Seg) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(seg.object_key().as_ref()),
        Value::Array(items) => items.get_mut(seg.array_index()?),
        _ => None,
    }
}

/// Remove the field `seg` from a container.
///
/// Array elements are replaced by `null` so that later positions keep their
/// indices. Returns the removed value, or `None` when nothing was there.
pub(crate) fn remove_child(value: &mut Value, seg: &Seg) -> Option<Value> {
    match value {
        Value::Object(map) => map.remove(seg.object_key().as_ref()),
        Value::Array(items) => {
            let slot = items.get_mut(seg.array_index()?)?;
            Some(std::mem::replace(slot, Value::Null))
        }
        _ => None,
    }
}

/// Write `new` into field `seg` of a container, overwriting what was there.
///
/// Writing past the end of an array pads the gap with `null`. Returns `false`
/// when `value` is not a container or `seg` cannot address it.
pub(crate) fn set_child(value: &mut Value, seg: &Seg, new: Value) -> bool {
    match value {
        Value::Object(map) => {
            map.insert(seg.object_key().into_owned(), new);
            true
        }
        Value::Array(items) => {
            let Some(index) = seg.array_index() else {
                return false;
            };
            if index < items.len() {
                items[index] = new;
            } else {
                items.resize(index, Value::Null);
                items.push(new);
            }
            true
        }
        _ => false,
    }
}

/// Own fields of a container as (segment, value) pairs, consuming it.
pub(crate) fn into_fields(value: Value) -> Vec<(Seg, Value)> {
    match value {
        Value::Object(map) => map.into_iter().map(|(k, v)| (Seg::Key(k), v)).collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Seg::Index(i), v))
            .collect(),
        _ => Vec::new(),
    }
}
