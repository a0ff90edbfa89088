//! End-to-end pipeline tests through the facade crate.

mod test_data_gen;

use deferq::prelude::*;
use test_data_gen::{digits, words};

#[test]
fn filter_select_order_chain() {
    let result = digits()
        .into_iter()
        .filter_by(|x| x % 2 == 0)
        .select(|x| x * x)
        .order_by(|x| *x, true)
        .into_vec();
    assert_eq!(result, vec![64, 36, 16, 4, 0]);
}

#[test]
fn group_then_summarize_into_dictionary() {
    let per_length = words()
        .into_iter()
        .group_by(|w| w.len())
        .select(|group| (*group.key(), group.members().count()))
        .to_dictionary(|entry| entry.0)
        .expect("group keys are distinct by construction");

    assert_eq!(per_length.len(), 4);
    assert_eq!(per_length[&7].1, 3);
    assert_eq!(per_length[&9].1, 1);
    assert_eq!(per_length[&3].1, 2);
    assert_eq!(per_length[&8].1, 1);
}

#[test]
fn order_groups_by_key() {
    let keys_sorted = words()
        .into_iter()
        .group_by(|w| w.len())
        .select(|group| *group.key())
        .order_by(|k| *k, false)
        .into_vec();
    assert_eq!(keys_sorted, vec![3, 7, 8, 9]);
}

#[test]
fn nothing_runs_until_the_materializer() {
    use std::cell::Cell;

    let touched = Cell::new(false);
    let chain = digits()
        .into_iter()
        .select(|x| {
            touched.set(true);
            x
        })
        .filter_by(|_| true);
    assert!(!touched.get());

    let _ = chain.to_list();
    assert!(touched.get());
}

#[test]
#[should_panic(expected = "selector boom")]
fn selector_panic_reaches_the_pull_site_unchanged() {
    // A failing caller-supplied closure surfaces at the moment the guilty
    // element is pulled; no wrapping adapter catches or rewraps it.
    let _ = digits()
        .into_iter()
        .select(|x| {
            if x == 3 {
                panic!("selector boom");
            }
            x
        })
        .filter_by(|x| x % 2 == 1)
        .to_list();
}

#[test]
fn early_termination_is_cancellation() {
    // Stopping iteration mid-way is the only cancellation mechanism; the
    // chain simply never pulls the rest.
    let mut chain = (0..).select(|x| x * 2).filter_by(|x| x % 3 == 0);
    assert_eq!(chain.next(), Some(0));
    assert_eq!(chain.next(), Some(6));
    // Dropping `chain` here leaves the infinite source unconsumed.
}
