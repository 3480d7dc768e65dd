//! Typed transmute: reshape one Rust type into another through the deep engine.
//!
//! The record is serialized with `serde_json`, transmuted in place as a
//! `Value`, and deserialized into the target type. Deserialization is the
//! narrowing step: if the transmuted shape does not fit `U`, the call fails
//! instead of producing a mistyped value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Result;
use crate::ops::transmute_deep;
use crate::path::KeyPath;

/// Transmute `record` into a value of type `U`.
///
/// # Errors
///
/// Returns `Serialization` if `record` or `patch` cannot be serialized, or if
/// the transmuted value does not deserialize into `U`.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
/// use transmute_core::{key_path, transmute_into};
///
/// #[derive(Serialize)]
/// struct Draft { title: String, meta: Meta }
/// #[derive(Serialize)]
/// struct Meta { draft: bool, rev: u32 }
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Published { title: String, meta: PublishedMeta }
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct PublishedMeta { rev: u32, published_at: String }
///
/// let draft = Draft { title: "Hello".into(), meta: Meta { draft: true, rev: 2 } };
/// let published: Published = transmute_into(
///     &draft,
///     &[key_path!("meta", "draft")],
///     json!({"meta": {"published_at": "2024-05-01"}}),
/// )
/// .unwrap();
/// assert_eq!(published.meta.published_at, "2024-05-01");
/// assert_eq!(published.meta.rev, 2);
/// ```
pub fn transmute_into<T, P, U>(record: &T, removal_set: &[KeyPath], patch: P) -> Result<U>
where
    T: Serialize + ?Sized,
    P: Serialize,
    U: DeserializeOwned,
{
    let mut value = serde_json::to_value(record)?;
    let patch = serde_json::to_value(patch)?;
    transmute_deep(&mut value, removal_set, patch);
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransmuteError;
    use crate::key_path;
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Serialize)]
    struct Account {
        id: u32,
        secret: String,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct PublicAccount {
        id: u32,
        display: String,
    }

    #[test]
    fn test_narrows_into_target_type() {
        let account = Account {
            id: 7,
            secret: "hunter2".to_string(),
        };
        let public: PublicAccount = transmute_into(
            &account,
            &[key_path!("secret")],
            json!({"display": "user-7"}),
        )
        .unwrap();
        assert_eq!(
            public,
            PublicAccount {
                id: 7,
                display: "user-7".to_string()
            }
        );
    }

    #[test]
    fn test_leftover_field_fails_narrowing() {
        let account = Account {
            id: 7,
            secret: "hunter2".to_string(),
        };
        let result: Result<PublicAccount> =
            transmute_into(&account, &[], json!({"display": "user-7"}));
        assert!(matches!(result, Err(TransmuteError::Serialization { .. })));
    }

    #[test]
    fn test_into_value_never_fails_for_plain_data() {
        let out: Value = transmute_into(&json!({"a": 1}), &[key_path!("a")], json!({})).unwrap();
        assert_eq!(out, json!({}));
    }
}
