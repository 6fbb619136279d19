use catalog_common::fingerprint::list_fingerprint;
use catalog_common::types::ItemId;

fn ids(values: &[u64]) -> Vec<ItemId> {
    values.iter().copied().map(ItemId::Numeric).collect()
}

#[test]
fn fingerprint_deterministic() {
    let a = ids(&[1, 2, 3]);
    assert_eq!(list_fingerprint(&a), list_fingerprint(&a.clone()));
}

#[test]
fn fingerprint_sensitive_to_order_and_length() {
    let base = list_fingerprint(&ids(&[1, 2, 3]));
    assert_ne!(base, list_fingerprint(&ids(&[3, 2, 1])));
    assert_ne!(base, list_fingerprint(&ids(&[1, 2])));
    assert_ne!(base, list_fingerprint(&ids(&[1, 2, 3, 4])));
}

#[test]
fn numeric_and_text_ids_differ() {
    let numeric = vec![ItemId::Numeric(1)];
    let text = vec![ItemId::Text("1".into())];
    assert_ne!(list_fingerprint(&numeric), list_fingerprint(&text));
}

#[test]
fn text_ids_are_length_prefixed() {
    let split = vec![ItemId::Text("ab".into()), ItemId::Text("c".into())];
    let joined = vec![ItemId::Text("a".into()), ItemId::Text("bc".into())];
    assert_ne!(list_fingerprint(&split), list_fingerprint(&joined));
}

#[test]
fn empty_list_has_stable_fingerprint() {
    let empty: Vec<ItemId> = Vec::new();
    assert_eq!(list_fingerprint(&empty), list_fingerprint(std::iter::empty::<&ItemId>()));
    assert_ne!(list_fingerprint(&empty), list_fingerprint(&ids(&[0])));
}
