//! Command inventory covering every transmute operation
//!
//! Commands are plain serializable data so that a sequence of edits can be
//! stored or shipped as JSON and replayed with [`crate::apply::apply_all`]:
//!
//! ```json
//! [
//!   {"op": "transmute_deep", "remove": ["meta.draft"], "add": {"meta": {"rev": 2}}},
//!   {"op": "augment", "field": "checked", "value": true}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::{KeyPath, Seg};

/// One operation applied to a record (or, for the `*_each` and tuple
/// variants, to an array of records).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Set one top-level field
    Augment { field: Seg, value: Value },

    /// Remove one top-level field
    Prune { field: Seg },

    /// Remove top-level fields, then set the patch's top-level fields
    TransmuteShallow {
        #[serde(default)]
        remove: Vec<Seg>,
        #[serde(default)]
        add: Value,
    },

    /// Deep delete the key-paths, then deep merge the patch
    TransmuteDeep {
        #[serde(default)]
        remove: Vec<KeyPath>,
        #[serde(default)]
        add: Value,
    },

    /// `Augment` on every element of an array
    AugmentEach { field: Seg, value: Value },

    /// `Prune` on every element of an array
    PruneEach { field: Seg },

    /// `TransmuteShallow` on every element of an array
    TransmuteShallowEach {
        #[serde(default)]
        remove: Vec<Seg>,
        #[serde(default)]
        add: Value,
    },

    /// `TransmuteDeep` on every element of an array
    TransmuteDeepEach {
        #[serde(default)]
        remove: Vec<KeyPath>,
        #[serde(default)]
        add: Value,
    },

    /// Insert a value into an array at a position
    AugmentTuple { index: usize, value: Value },

    /// Remove the array element at a position
    PruneTuple { index: usize },
}

impl Command {
    /// Stable operation name, matching the serialized `op` tag
    pub fn name(&self) -> &'static str {
        match self {
            Command::Augment { .. } => "augment",
            Command::Prune { .. } => "prune",
            Command::TransmuteShallow { .. } => "transmute_shallow",
            Command::TransmuteDeep { .. } => "transmute_deep",
            Command::AugmentEach { .. } => "augment_each",
            Command::PruneEach { .. } => "prune_each",
            Command::TransmuteShallowEach { .. } => "transmute_shallow_each",
            Command::TransmuteDeepEach { .. } => "transmute_deep_each",
            Command::AugmentTuple { .. } => "augment_tuple",
            Command::PruneTuple { .. } => "prune_tuple",
        }
    }

    /// True for commands that only make sense on an array
    pub fn requires_sequence(&self) -> bool {
        matches!(
            self,
            Command::AugmentEach { .. }
                | Command::PruneEach { .. }
                | Command::TransmuteShallowEach { .. }
                | Command::TransmuteDeepEach { .. }
                | Command::AugmentTuple { .. }
                | Command::PruneTuple { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_deep_command_with_both_path_forms() {
        let cmd: Command = serde_json::from_value(json!({
            "op": "transmute_deep",
            "remove": ["a.b", ["c", 0]],
            "add": {"d": 1}
        }))
        .unwrap();

        let Command::TransmuteDeep { remove, add } = cmd else {
            panic!("expected transmute_deep");
        };
        assert_eq!(remove.len(), 2);
        assert_eq!(remove[0].to_string(), "a.b");
        assert_eq!(remove[1].to_string(), "c[0]");
        assert_eq!(add, json!({"d": 1}));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let cmd: Command = serde_json::from_value(json!({"op": "transmute_shallow"})).unwrap();
        assert_eq!(
            cmd,
            Command::TransmuteShallow {
                remove: vec![],
                add: Value::Null
            }
        );
    }

    #[test]
    fn test_name_matches_serialized_tag() {
        let commands = vec![
            Command::Augment {
                field: Seg::key("a"),
                value: json!(1),
            },
            Command::PruneEach {
                field: Seg::index(0),
            },
            Command::AugmentTuple {
                index: 0,
                value: json!(null),
            },
        ];
        for cmd in commands {
            let encoded = serde_json::to_value(&cmd).unwrap();
            assert_eq!(encoded["op"], json!(cmd.name()));
        }
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let result = serde_json::from_value::<Command>(json!({"op": "explode"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_sequence_requirement() {
        assert!(Command::PruneTuple { index: 0 }.requires_sequence());
        assert!(!Command::Prune {
            field: Seg::key("a")
        }
        .requires_sequence());
    }
}
