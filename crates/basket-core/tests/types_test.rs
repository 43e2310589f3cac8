//! Tests for identifiers and the item interner.

use basket_core::types::{ItemId, ItemInterner, TransactionId};

#[test]
fn interner_orders_labels_lexicographically() {
    let vocab = ItemInterner::from_labels(["milk", "bread", "eggs", "bread"]);
    assert_eq!(vocab.len(), 3);
    let labels: Vec<&str> = vocab.labels().collect();
    assert_eq!(labels, vec!["bread", "eggs", "milk"]);
    assert_eq!(vocab.get("bread"), Some(ItemId(0)));
    assert_eq!(vocab.get("milk"), Some(ItemId(2)));
}

#[test]
fn interner_resolves_columns() {
    let vocab = ItemInterner::from_labels(["Coffee", "Bread", "Tea"]);
    for (i, label) in ["Bread", "Coffee", "Tea"].iter().enumerate() {
        let id = ItemId(i as u32);
        assert_eq!(vocab.resolve(id), Some(*label));
        assert_eq!(vocab.get(label), Some(id));
    }
    assert_eq!(vocab.resolve(ItemId(3)), None);
    assert_eq!(vocab.get("Cake"), None);
}

#[test]
fn interner_is_input_order_independent() {
    let a = ItemInterner::from_labels(["b", "c", "a"]);
    let b = ItemInterner::from_labels(["a", "b", "c"]);
    assert_eq!(a.labels().collect::<Vec<_>>(), b.labels().collect::<Vec<_>>());
}

#[test]
fn empty_interner() {
    let vocab = ItemInterner::from_labels(Vec::<String>::new());
    assert!(vocab.is_empty());
    assert_eq!(vocab.labels().count(), 0);
}

#[test]
fn interner_is_shareable_across_threads() {
    use rayon::prelude::*;

    let labels: Vec<String> = (0..200).map(|i| format!("item_{:03}", i)).collect();
    let vocab = ItemInterner::from_labels(&labels);
    let ids: Vec<Option<ItemId>> = labels.par_iter().map(|l| vocab.get(l)).collect();
    assert!(ids.iter().all(Option::is_some));
    assert_eq!(ids[0], Some(ItemId(0)));
}

#[test]
fn transaction_ids_order_ints_before_text() {
    let mut ids = vec![
        TransactionId::from("b"),
        TransactionId::from(10),
        TransactionId::from("a"),
        TransactionId::from(2),
    ];
    ids.sort();
    assert_eq!(
        ids,
        vec![
            TransactionId::Int(2),
            TransactionId::Int(10),
            TransactionId::Text("a".into()),
            TransactionId::Text("b".into()),
        ]
    );
    assert_eq!(TransactionId::Int(7).to_string(), "7");
}
