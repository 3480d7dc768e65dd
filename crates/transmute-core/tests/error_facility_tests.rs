use transmute_core::errors::{ExError, ExErrorKind, TransmuteError};
use transmute_core::KeyPath;

#[test]
fn test_invalid_key_path_carries_path_and_reason() {
    let err = KeyPath::parse("a..b").unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidKeyPath);
    assert_eq!(ex_err.code(), "ERR_INVALID_KEY_PATH");
    assert_eq!(ex_err.key_path(), Some("a..b"));
    assert_eq!(ex_err.op(), Some("parse_key_path"));
    assert!(ex_err.message().contains("empty segment"));
}

#[test]
fn test_empty_key_path_distinct_from_invalid() {
    let ex_err: ExError = KeyPath::parse("").unwrap_err().into();

    assert_eq!(ex_err.kind(), ExErrorKind::EmptyKeyPath);
    assert_ne!(ex_err.kind(), ExErrorKind::InvalidKeyPath);
    assert_eq!(ex_err.key_path(), None);
}

#[test]
fn test_not_a_sequence_keeps_operation() {
    let err = TransmuteError::NotASequence {
        op: "augment_each".to_string(),
        found: "object".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Operation 'augment_each' requires an array, found object"
    );

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_NOT_A_SEQUENCE");
    assert_eq!(ex_err.op(), Some("augment_each"));
    assert!(ex_err.to_string().contains("found object"));
}

#[test]
fn test_serialization_error_from_typed_transmute() {
    let result: Result<u32, _> =
        transmute_core::transmute_into(&serde_json::json!({"a": 1}), &[], serde_json::json!({}));

    let ex_err: ExError = result.unwrap_err().into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert!(!ex_err.message().is_empty());
}

#[test]
fn test_error_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidKeyPath,
        ExErrorKind::EmptyKeyPath,
        ExErrorKind::NotASequence,
        ExErrorKind::Serialization,
    ];
    let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}
