// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::term::{Term, TermValue};
use std::collections::BTreeSet;

/// Enumerates every minterm covered by `term`, skipping members of
/// `exclude` (usually the don't-care set).
///
/// The cursor walks the term left to right, filling a buffer of concrete
/// bits. Reaching the right end yields the buffer as a minterm; the cursor
/// then backs up to the nearest wildcard that can still advance, flips it,
/// and resumes forward. Parity positions carry a running XOR of the bits
/// emitted so far: the last parity position is forced to whatever value
/// makes the total parity odd (`^`) or even (`~`), so only valid
/// assignments are ever produced. The walk ends when the cursor falls off
/// the left end while backing up.
pub fn expand(term: &Term, exclude: &BTreeSet<Term>) -> BTreeSet<Term> {
    let n_bits = term.len();
    let mut result = BTreeSet::new();
    if n_bits == 0 {
        // The zero-width term covers exactly the empty minterm.
        let minterm = Term::new(Vec::new());
        if !exclude.contains(&minterm) {
            result.insert(minterm);
        }
        return result;
    }

    let n_parity =
        (term.count(TermValue::Xor) + term.count(TermValue::Xnor)) as isize;
    let mut buffer = vec![TermValue::Zero; n_bits];
    let mut parity = false;
    let mut seen: isize = 0;
    let mut cursor: isize = 0;
    let mut direction: isize = 1;

    while cursor >= 0 {
        let ix = cursor as usize;
        match term.get(ix) {
            value @ (TermValue::Zero | TermValue::One) => {
                buffer[ix] = value;
            }
            TermValue::Dash => {
                if direction == 1 {
                    buffer[ix] = TermValue::Zero;
                } else if buffer[ix] == TermValue::Zero {
                    buffer[ix] = TermValue::One;
                    direction = 1;
                }
            }
            value @ (TermValue::Xor | TermValue::Xnor) => {
                seen += direction;
                // The final parity position closes the group: emit a one
                // exactly when that makes the overall parity come out
                // right for this wildcard kind.
                let closes = match value {
                    TermValue::Xor => !parity,
                    _ => parity,
                };
                if direction == 1 {
                    buffer[ix] = if seen == n_parity && closes {
                        TermValue::One
                    } else {
                        TermValue::Zero
                    };
                } else if buffer[ix] == TermValue::Zero && seen < n_parity - 1 {
                    buffer[ix] = TermValue::One;
                    direction = 1;
                    seen += 1;
                }
                if buffer[ix] == TermValue::One {
                    parity = !parity;
                }
            }
        }

        cursor += direction;
        if cursor == n_bits as isize {
            direction = -1;
            cursor = n_bits as isize - 1;
            let minterm = Term::new(buffer.clone());
            if !exclude.contains(&minterm) {
                result.insert(minterm);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest_helpers::{minterm_strategy, term_strategy};
    use proptest::prelude::*;

    fn expand_str(pattern: &str, exclude: &[&str]) -> BTreeSet<String> {
        let term: Term = pattern.parse().unwrap();
        let exclude: BTreeSet<Term> =
            exclude.iter().map(|s| s.parse().unwrap()).collect();
        expand(&term, &exclude)
            .iter()
            .map(Term::to_string)
            .collect()
    }

    fn to_set(minterms: &[&str]) -> BTreeSet<String> {
        minterms.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_minterm_expands_to_itself() {
        assert_eq!(expand_str("1011", &[]), to_set(&["1011"]));
        assert_eq!(expand_str("0", &[]), to_set(&["0"]));
    }

    #[test]
    fn test_dashes() {
        assert_eq!(
            expand_str("---", &[]),
            to_set(&["000", "001", "010", "011", "100", "101", "110", "111"]),
        );
        assert_eq!(expand_str("1-0", &[]), to_set(&["100", "110"]));
    }

    #[test]
    fn test_parity_enumeration() {
        assert_eq!(expand_str("^", &[]), to_set(&["1"]));
        assert_eq!(expand_str("~", &[]), to_set(&["0"]));
        assert_eq!(expand_str("^^", &[]), to_set(&["01", "10"]));
        assert_eq!(expand_str("~~", &[]), to_set(&["00", "11"]));
        assert_eq!(
            expand_str("^^^", &[]),
            to_set(&["001", "010", "100", "111"]),
        );
        assert_eq!(
            expand_str("~~~", &[]),
            to_set(&["000", "011", "101", "110"]),
        );
        assert_eq!(expand_str("1^^0", &[]), to_set(&["1010", "1100"]));
    }

    #[test]
    fn test_dash_and_parity_mix() {
        assert_eq!(
            expand_str("-^^", &[]),
            to_set(&["001", "010", "101", "110"]),
        );
        assert_eq!(
            expand_str("~-~", &[]),
            to_set(&["000", "010", "101", "111"]),
        );
    }

    #[test]
    fn test_exclusion() {
        assert_eq!(expand_str("-1", &["11"]), to_set(&["01"]));
        assert_eq!(expand_str("--", &["00", "01", "10", "11"]), to_set(&[]));
    }

    #[test]
    fn test_zero_width() {
        let empty = Term::new(Vec::new());
        let expanded = expand(&empty, &BTreeSet::new());
        assert_eq!(expanded.len(), 1);
        assert!(expanded.contains(&empty));
    }

    /// Brute-force oracle: does `term` cover `minterm`?
    fn covers(term: &Term, minterm: &Term) -> bool {
        let mut parity_kind = None;
        let mut parity = false;
        for (&value, &bit) in term.values().iter().zip(minterm.values()) {
            match value {
                TermValue::Zero | TermValue::One => {
                    if value != bit {
                        return false;
                    }
                }
                TermValue::Dash => {}
                TermValue::Xor | TermValue::Xnor => {
                    parity_kind = Some(value);
                    if bit == TermValue::One {
                        parity = !parity;
                    }
                }
            }
        }
        match parity_kind {
            Some(TermValue::Xor) => parity,
            Some(TermValue::Xnor) => !parity,
            _ => true,
        }
    }

    proptest! {
        #[test]
        fn proptest_minterm_round_trip(minterm in minterm_strategy(8)) {
            let expanded = expand(&minterm, &BTreeSet::new());
            prop_assert_eq!(expanded.len(), 1);
            prop_assert!(expanded.contains(&minterm));
        }

        #[test]
        fn proptest_expand_matches_oracle(term in term_strategy(6)) {
            let expanded = expand(&term, &BTreeSet::new());
            for index in 0..(1u64 << 6) {
                let minterm = Term::from_index(6, index);
                prop_assert_eq!(
                    expanded.contains(&minterm),
                    covers(&term, &minterm),
                    "expansion of {} agrees with the coverage oracle at {}",
                    term,
                    minterm,
                );
            }
        }

        #[test]
        fn proptest_expansion_cardinality(term in term_strategy(7)) {
            let dashes = term.count(TermValue::Dash);
            let parity =
                term.count(TermValue::Xor) + term.count(TermValue::Xnor);
            let expected = if parity > 0 {
                (1usize << dashes) * (1usize << (parity - 1))
            } else {
                1usize << dashes
            };
            let expanded = expand(&term, &BTreeSet::new());
            prop_assert_eq!(expanded.len(), expected);
        }
    }
}
