// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::term::{Term, TermValue};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for a term of `n_bits` positions.
///
/// The parity kind is drawn first so a generated term never mixes `^` and
/// `~`.
pub fn term_strategy(n_bits: usize) -> impl Strategy<Value = Term> {
    any::<bool>().prop_flat_map(move |use_xnor| {
        let parity = if use_xnor {
            TermValue::Xnor
        } else {
            TermValue::Xor
        };
        prop::collection::vec(
            prop::sample::select(vec![
                TermValue::Dash,
                TermValue::Zero,
                TermValue::One,
                parity,
            ]),
            n_bits,
        )
        .prop_map(Term::new)
    })
}

/// Strategy for a wildcard-free term of `n_bits` positions.
pub fn minterm_strategy(n_bits: usize) -> impl Strategy<Value = Term> {
    prop::collection::vec(any::<bool>(), n_bits).prop_map(|bits| {
        Term::new(
            bits.into_iter()
                .map(|bit| if bit { TermValue::One } else { TermValue::Zero })
                .collect(),
        )
    })
}

/// Strategy for disjoint ones / don't-care minterm sets over `n_bits`
/// inputs: every assignment lands in one of off, on, or don't-care.
pub fn function_strategy(
    n_bits: usize,
) -> impl Strategy<Value = (BTreeSet<Term>, BTreeSet<Term>)> {
    prop::collection::vec(0..3u8, 1 << n_bits).prop_map(move |classes| {
        let mut ones = BTreeSet::new();
        let mut dont_cares = BTreeSet::new();
        for (index, class) in classes.into_iter().enumerate() {
            let minterm = Term::from_index(n_bits, index as u64);
            match class {
                1 => {
                    ones.insert(minterm);
                }
                2 => {
                    dont_cares.insert(minterm);
                }
                _ => {}
            }
        }
        (ones, dont_cares)
    })
}
