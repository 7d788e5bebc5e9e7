//! Split recognition for first-ball leaves.
//!
//! A leave is a split when the headpin is down, at least two pins stand,
//! and the standing pins do not form one contiguous cluster on the deck.
//! Adjacency follows the physical rack: in-row neighbours plus the
//! diagonal neighbours of the row behind. This covers the classic splits
//! (7-10, 4-6, 5-7, 2-7, 6-7-10, ...) and rejects clustered leaves like
//! 4-5 or 9-10.

use std::collections::BTreeSet;

use crate::types::Pin;

/// Neighbouring pin pairs on the deck.
///
/// Rows are 1 / 2-3 / 4-5-6 / 7-8-9-10; each pair is either side-by-side
/// in a row or diagonal between rows.
const ADJACENT: &[(u8, u8)] = &[
    // diagonals
    (1, 2),
    (1, 3),
    (2, 4),
    (2, 5),
    (3, 5),
    (3, 6),
    (4, 7),
    (4, 8),
    (5, 8),
    (5, 9),
    (6, 9),
    (6, 10),
    // in-row
    (2, 3),
    (4, 5),
    (5, 6),
    (7, 8),
    (8, 9),
    (9, 10),
];

fn adjacent(a: Pin, b: Pin) -> bool {
    let pair = if a.number() < b.number() {
        (a.number(), b.number())
    } else {
        (b.number(), a.number())
    };
    ADJACENT.contains(&pair)
}

/// Whether the standing pins after a first ball form a recognized split.
#[must_use]
pub fn is_split(standing: &BTreeSet<Pin>) -> bool {
    if standing.contains(&Pin::HEADPIN) || standing.len() < 2 {
        return false;
    }

    // Flood-fill from any standing pin; a split has more than one cluster.
    let mut reached = BTreeSet::new();
    let mut queue: Vec<Pin> = standing.iter().take(1).copied().collect();
    while let Some(pin) = queue.pop() {
        if !reached.insert(pin) {
            continue;
        }
        queue.extend(
            standing
                .iter()
                .filter(|&&other| !reached.contains(&other) && adjacent(pin, other)),
        );
    }
    reached.len() < standing.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(numbers: &[u8]) -> BTreeSet<Pin> {
        numbers
            .iter()
            .map(|&n| Pin::new(n).unwrap())
            .collect()
    }

    #[test]
    fn classic_splits_recognized() {
        assert!(is_split(&standing(&[7, 10]))); // bedposts
        assert!(is_split(&standing(&[4, 6])));
        assert!(is_split(&standing(&[5, 7])));
        assert!(is_split(&standing(&[5, 10])));
        assert!(is_split(&standing(&[2, 7]))); // baby split
        assert!(is_split(&standing(&[3, 10])));
        assert!(is_split(&standing(&[8, 10])));
        assert!(is_split(&standing(&[4, 6, 7, 10]))); // big four
        assert!(is_split(&standing(&[6, 7, 10])));
        assert!(is_split(&standing(&[2, 4, 6, 7, 10]))); // Greek church-ish
    }

    #[test]
    fn clustered_leaves_are_not_splits() {
        assert!(!is_split(&standing(&[4, 5])));
        assert!(!is_split(&standing(&[9, 10])));
        assert!(!is_split(&standing(&[2, 4, 5, 8])));
        assert!(!is_split(&standing(&[6, 9, 10])));
    }

    #[test]
    fn headpin_standing_is_never_a_split() {
        assert!(!is_split(&standing(&[1, 7, 10])));
        assert!(!is_split(&standing(&[1, 2, 4, 10])));
    }

    #[test]
    fn single_pin_or_empty_leave_is_not_a_split() {
        assert!(!is_split(&standing(&[])));
        assert!(!is_split(&standing(&[10])));
    }
}
