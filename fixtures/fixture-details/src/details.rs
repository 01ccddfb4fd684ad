// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use proptest::prelude::*;
use qm_min::{
    expand::expand,
    minimize::{simplify_terms, Minimization},
    proptest_helpers::function_strategy,
    term::Term,
};
use std::collections::BTreeSet;

/// A randomly generated single-output function, with the checks run
/// against its minimized cover.
#[derive(Clone, Debug)]
pub struct FunctionDetails {
    pub num_bits: usize,
    pub ones: BTreeSet<Term>,
    pub dont_cares: BTreeSet<Term>,
}

impl FunctionDetails {
    pub fn strategy(num_bits: usize) -> impl Strategy<Value = Self> {
        function_strategy(num_bits).prop_map(move |(ones, dont_cares)| Self {
            num_bits,
            ones,
            dont_cares,
        })
    }

    pub fn minimize(&self, use_xor: bool) -> Minimization {
        simplify_terms(
            self.ones.clone(),
            self.dont_cares.clone(),
            Some(self.num_bits),
            use_xor,
        )
    }

    /// Checks a cover against the generating truth table, ignoring
    /// don't-care inputs. Returns the first disagreeing minterm on
    /// failure.
    pub fn check_cover(&self, cover: &BTreeSet<Term>) -> Result<(), Term> {
        let mut covered = BTreeSet::new();
        for term in cover {
            covered.extend(expand(term, &BTreeSet::new()));
        }
        for index in 0..(1u64 << self.num_bits) {
            let minterm = Term::from_index(self.num_bits, index);
            if self.dont_cares.contains(&minterm) {
                continue;
            }
            if covered.contains(&minterm) != self.ones.contains(&minterm) {
                return Err(minterm);
            }
        }
        Ok(())
    }
}
