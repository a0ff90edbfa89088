//! Materializer tests: to_list ordering and to_dictionary key uniqueness.

mod test_data_gen;

use std::cell::Cell;

use deferq_core::Error;
use deferq_operators::Query;
use test_data_gen::{digits, words};

#[test]
fn to_list_preserves_length_and_order() {
    let source = words();
    let list = source.clone().into_iter().to_list();
    assert_eq!(list, source);
}

#[test]
fn to_list_of_lazy_chain_pulls_in_order() {
    let list = digits().into_iter().select(|x| x * 3).to_list();
    assert_eq!(list, vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 27]);
}

#[test]
fn to_dictionary_with_unique_keys_succeeds() {
    let dict = digits()
        .into_iter()
        .to_dictionary(|x| format!("{x}abc"))
        .expect("unique keys");

    assert_eq!(dict.len(), 10);
    for x in digits() {
        assert_eq!(dict[&format!("{x}abc")], x);
    }
}

#[test]
fn to_dictionary_fails_on_duplicate_key() {
    let err = digits()
        .into_iter()
        .to_dictionary(|x| x % 2)
        .expect_err("keys collide");

    match err {
        Error::DuplicateKey(message) => assert_eq!(message, "0"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_is_detected_at_the_guilty_element() {
    let keyed = Cell::new(0);
    let result = digits().into_iter().to_dictionary(|x| {
        keyed.set(keyed.get() + 1);
        x % 2
    });

    // Keys 0, 1, then 0 again: the third element triggers the failure and
    // nothing further is pulled.
    assert!(result.is_err());
    assert_eq!(keyed.get(), 3);
}

#[test]
fn to_dictionary_over_empty_source() {
    let empty: Vec<i32> = Vec::new();
    let dict = empty.into_iter().to_dictionary(|x| *x).expect("no keys at all");
    assert!(dict.is_empty());
}

#[test]
fn to_dictionary_over_filtered_chain() {
    let dict = digits()
        .into_iter()
        .filter_by(|x| x % 2 == 0)
        .to_dictionary(|x| *x)
        .expect("evens are unique");
    assert_eq!(dict.len(), 5);
    assert_eq!(dict[&8], 8);
}
