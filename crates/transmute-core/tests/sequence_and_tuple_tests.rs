#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{paths, sample_product};
use serde_json::{json, Value};
use transmute_core::ops::sequence_ops::{
    augment_each, augment_each_with, prune_each, transmute_deep_each, transmute_deep_each_with,
    transmute_shallow_each_with,
};
use transmute_core::ops::{augment_tuple, prune_tuple};
use transmute_core::Seg;

// ===== SEQUENCE VARIANTS =====

#[test]
fn test_producer_called_once_per_element_with_position() {
    let mut rows = vec![json!({"k": "a"}), json!({"k": "b"}), json!({"k": "c"})];
    let mut seen = Vec::new();

    augment_each_with(&mut rows, "rank", |item, index| {
        seen.push((item["k"].clone(), index));
        json!(index + 1)
    });

    assert_eq!(
        seen,
        vec![(json!("a"), 0), (json!("b"), 1), (json!("c"), 2)]
    );
    assert_eq!(rows[0]["rank"], json!(1));
    assert_eq!(rows[2]["rank"], json!(3));
}

#[test]
fn test_deep_variant_applies_each_produced_patch() {
    let mut rows = vec![sample_product(), sample_product()];

    transmute_deep_each_with(&mut rows, &paths(&["audit", "variants"]), |_, index| {
        json!({"price": {"slot": index}})
    });

    for (index, row) in rows.iter().enumerate() {
        assert!(row.get("audit").is_none());
        assert!(row.get("variants").is_none());
        assert_eq!(row["price"]["slot"], json!(index));
        assert_eq!(row["price"]["amount"], json!(3900));
    }
}

#[test]
fn test_sequence_variants_return_same_slice() {
    let mut rows = vec![json!({"a": 1}), json!({"a": 2})];
    let before = rows.as_ptr();

    let after = augment_each(&mut rows, "b", json!(true)).as_ptr();
    assert_eq!(before, after);

    let after = prune_each(&mut rows, "a").as_ptr();
    assert_eq!(before, after);

    let after = transmute_deep_each(&mut rows, &paths(&["b"]), json!({"c": 0})).as_ptr();
    assert_eq!(before, after);

    assert_eq!(rows, vec![json!({"c": 0}), json!({"c": 0})]);
}

#[test]
fn test_fixed_patch_is_not_shared_between_elements() {
    let mut rows = vec![json!({}), json!({})];
    transmute_deep_each(&mut rows, &[], json!({"nested": {"n": 0}}));

    rows[0]["nested"]["n"] = json!(99);

    assert_eq!(rows[1]["nested"]["n"], json!(0));
}

#[test]
fn test_shallow_variant_removes_listed_fields() {
    let mut rows = vec![json!({"a": 1, "b": 2}), json!({"a": 3, "b": 4})];
    transmute_shallow_each_with(&mut rows, &[Seg::key("b")], |item, _| {
        json!({"sum": item["a"].as_i64().unwrap() + item["b"].as_i64().unwrap()})
    });
    assert_eq!(
        rows,
        vec![json!({"a": 1, "sum": 3}), json!({"a": 3, "sum": 7})]
    );
}

// ===== TUPLES =====

#[test]
fn test_prune_tuple_positional() {
    let mut tuple = vec![json!(1), json!(2), json!(3)];
    prune_tuple(&mut tuple, 1);
    assert_eq!(tuple, vec![json!(1), json!(3)]);
}

#[test]
fn test_augment_tuple_positional() {
    let mut tuple = vec![json!(1), json!(3)];
    augment_tuple(&mut tuple, 1, json!(2));
    assert_eq!(tuple, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn test_tuple_ops_return_same_vec() {
    let mut tuple: Vec<Value> = vec![json!("x")];
    let before = &tuple as *const Vec<Value>;

    let after = augment_tuple(&mut tuple, 0, json!("w")) as *const Vec<Value>;
    assert!(std::ptr::eq(before, after));

    let after = prune_tuple(&mut tuple, 1) as *const Vec<Value>;
    assert!(std::ptr::eq(before, after));
    assert_eq!(tuple, vec![json!("w")]);
}
