//! Shelf ordering of call numbers
//!
//! Two call numbers are compared through a fixed chain of stages. Each stage
//! returns an [`Ordering`] where `Equal` means "tied, ask the next stage";
//! the first stage that is not tied decides.
//!
//! | Stage          | Rule                                                      |
//! |----------------|-----------------------------------------------------------|
//! | class letters  | lexicographic (`B1` after `A9999`)                        |
//! | class number   | integer value (`A10` after `A9.99`)                       |
//! | class fraction | place value (`A4.5` after `A4.36`), none before some      |
//! | cutters        | letter, then place value; a proper prefix sorts first     |
//!
//! Place value means digit strings are read as base-10 fractions: `"5"` is
//! .5 and beats `"36"` (.36), while `"2"` and `"20"` tie.
//!
//! The chain is a total preorder: tied call numbers may still differ in text
//! and therefore not be `==`.

use crate::lcc::call_number::CallNumber;
use std::cmp::Ordering;
use std::iter;
use tracing::trace;

/// A single tie-break stage.
pub type Stage = fn(&CallNumber, &CallNumber) -> Ordering;

/// The tie-break chain, in the order it is applied.
pub const STAGES: [Stage; 4] = [
    by_class_letters,
    by_class_number,
    by_class_fraction,
    by_cutters,
];

/// Shelf order of `a` relative to `b`.
pub fn compare(a: &CallNumber, b: &CallNumber) -> Ordering {
    STAGES
        .iter()
        .map(|stage| stage(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

pub fn by_class_letters(a: &CallNumber, b: &CallNumber) -> Ordering {
    a.class_letters().cmp(b.class_letters())
}

pub fn by_class_number(a: &CallNumber, b: &CallNumber) -> Ordering {
    integer_cmp(a.class_number(), b.class_number())
}

/// A call number without a fraction shelves before one with a fraction.
pub fn by_class_fraction(a: &CallNumber, b: &CallNumber) -> Ordering {
    match (a.class_fraction(), b.class_fraction()) {
        (Some(left), Some(right)) => place_value_cmp(left, right),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Walks both cutter sequences in lock-step; the one that runs out first
/// shelves first.
pub fn by_cutters(a: &CallNumber, b: &CallNumber) -> Ordering {
    let mut left = a.cutters().iter();
    let mut right = b.cutters().iter();

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = l
                    .letter()
                    .cmp(&r.letter())
                    .then_with(|| place_value_cmp(l.decimal(), r.decimal()));
                if ordering.is_ne() {
                    return ordering;
                }
            }
        }
    }
}

/// Compare two digit strings as non-negative integers of any width.
pub fn integer_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two digit strings as base-10 fractions (`"5"` is .5).
///
/// The shorter string is padded with trailing zeros, so the comparison is
/// exact at any length.
pub fn place_value_cmp(a: &str, b: &str) -> Ordering {
    let width = a.len().max(b.len());
    let padded = |digits: &str| {
        digits
            .bytes()
            .chain(iter::repeat(b'0'))
            .take(width)
            .collect::<Vec<u8>>()
    };
    padded(a).cmp(&padded(b))
}

/// Sort into shelf order. The sort is stable: fully tied call numbers keep
/// their input order.
pub fn sort_shelf(items: &mut [CallNumber]) {
    trace!(count = items.len(), "sorting into shelf order");
    items.sort_by(compare);
}

/// The input indices of `items` in shelf order (a stable argsort).
///
/// `[A5, A4, A6]` gives `[1, 0, 2]`.
pub fn shelf_positions(items: &[CallNumber]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..items.len()).collect();
    positions.sort_by(|&a, &b| compare(&items[a], &items[b]));
    positions
}

/// Orders a borrowed call number by shelf order.
///
/// Unlike [`CallNumber`] itself, equality here agrees with the ordering:
/// `A4.B2` and `A4.B20` are equal keys. Use it for `BTreeMap`/`BTreeSet`
/// keys, `max`/`min`, or binary search.
#[derive(Debug, Clone, Copy)]
pub struct ShelfKey<'a>(pub &'a CallNumber);

impl PartialEq for ShelfKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        compare(self.0, other.0).is_eq()
    }
}

impl Eq for ShelfKey<'_> {}

impl PartialOrd for ShelfKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShelfKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.0, other.0)
    }
}
