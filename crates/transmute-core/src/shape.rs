//! Shape computation for transmuted records.
//!
//! A [`Shape`] describes a value's structure without its leaf data. The
//! `omit`/`merge` operations mirror deep delete and deep merge field for field,
//! so a caller can predict the shape a transmute produces before running it:
//!
//! ```
//! use serde_json::json;
//! use transmute_core::{key_path, transmute_deep, Shape};
//!
//! let mut record = json!({"id": 1, "meta": {"draft": true, "rev": 3}});
//! let patch = json!({"meta": {"published": "2024-01-01"}});
//! let paths = [key_path!("meta", "draft")];
//!
//! let predicted = Shape::of(&record).transmuted(&paths, Shape::of(&patch));
//! transmute_deep(&mut record, &paths, patch);
//! assert_eq!(Shape::of(&record), predicted);
//! assert_eq!(predicted.to_string(), "{ id: number, meta: { published: string, rev: number } }");
//! ```

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::path::{KeyPath, Seg};

/// Structure of a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Shape {
    Null,
    Bool,
    Number,
    String,
    Array(Vec<Shape>),
    Object(BTreeMap<String, Shape>),
}

impl Shape {
    /// The shape of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::String(_) => Shape::String,
            Value::Array(items) => Shape::Array(items.iter().map(Shape::of).collect()),
            Value::Object(map) => Shape::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Shape::of(v)))
                    .collect(),
            ),
        }
    }

    fn is_container(&self) -> bool {
        matches!(self, Shape::Object(_) | Shape::Array(_))
    }

    fn child(&self, seg: &Seg) -> Option<&Shape> {
        match self {
            Shape::Object(fields) => fields.get(seg.object_key().as_ref()),
            Shape::Array(items) => items.get(seg.array_index()?),
            _ => None,
        }
    }

    fn child_mut(&mut self, seg: &Seg) -> Option<&mut Shape> {
        match self {
            Shape::Object(fields) => fields.get_mut(seg.object_key().as_ref()),
            Shape::Array(items) => items.get_mut(seg.array_index()?),
            _ => None,
        }
    }

    fn remove_child(&mut self, seg: &Seg) {
        match self {
            Shape::Object(fields) => {
                fields.remove(seg.object_key().as_ref());
            }
            Shape::Array(items) => {
                if let Some(slot) = seg.array_index().and_then(|i| items.get_mut(i)) {
                    *slot = Shape::Null;
                }
            }
            _ => {}
        }
    }

    fn set_child(&mut self, seg: &Seg, shape: Shape) {
        match self {
            Shape::Object(fields) => {
                fields.insert(seg.object_key().into_owned(), shape);
            }
            Shape::Array(items) => {
                if let Some(index) = seg.array_index() {
                    if index < items.len() {
                        items[index] = shape;
                    } else {
                        items.resize(index, Shape::Null);
                        items.push(shape);
                    }
                }
            }
            _ => {}
        }
    }

    fn into_fields(self) -> Vec<(Seg, Shape)> {
        match self {
            Shape::Object(fields) => fields.into_iter().map(|(k, s)| (Seg::Key(k), s)).collect(),
            Shape::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, s)| (Seg::Index(i), s))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Shape after deleting the field at `path`; unchanged when the path does
    /// not resolve.
    pub fn omit(mut self, path: &KeyPath) -> Self {
        if let Some(parent) = path
            .parents()
            .iter()
            .try_fold(&mut self, |cursor, seg| cursor.child_mut(seg))
        {
            parent.remove_child(path.last());
        }
        self
    }

    /// `omit` applied for each path in order.
    pub fn omit_many(self, paths: &[KeyPath]) -> Self {
        paths.iter().fold(self, |shape, path| shape.omit(path))
    }

    /// Shape after deep-merging a value of shape `patch` into this one.
    pub fn merge(mut self, patch: Shape) -> Self {
        self.merge_in(patch);
        self
    }

    fn merge_in(&mut self, patch: Shape) {
        if !self.is_container() || !patch.is_container() {
            return;
        }
        for (seg, shape) in patch.into_fields() {
            let descend =
                shape.is_container() && self.child(&seg).is_some_and(Shape::is_container);
            if !descend {
                self.set_child(&seg, shape);
            } else if let Some(current) = self.child_mut(&seg) {
                current.merge_in(shape);
            }
        }
    }

    /// `omit_many(paths)` followed by `merge(patch)`.
    pub fn transmuted(self, paths: &[KeyPath], patch: Shape) -> Self {
        self.omit_many(paths).merge(patch)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Null => write!(f, "null"),
            Shape::Bool => write!(f, "boolean"),
            Shape::Number => write!(f, "number"),
            Shape::String => write!(f, "string"),
            Shape::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Shape::Object(fields) if fields.is_empty() => write!(f, "{{}}"),
            Shape::Object(fields) => {
                write!(f, "{{ ")?;
                for (i, (key, shape)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, shape)?;
                }
                write!(f, " }}")
            }
        }
    }
}
