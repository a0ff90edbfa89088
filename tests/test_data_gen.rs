//! Shared fixtures for operator tests.
#![allow(dead_code)]

/// The digits 0..10, the canonical integer fixture.
pub fn digits() -> Vec<i32> {
    (0..10).collect()
}

/// Word list with duplicated lengths, for grouping and ordering fixtures.
/// Lengths: 7, 9, 7, 3, 7, 3, 8.
pub fn words() -> Vec<&'static str> {
    vec![
        "testing",
        "extension",
        "methods",
        "for",
        "sorting",
        "and",
        "grouping",
    ]
}
