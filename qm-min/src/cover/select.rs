// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{expand::expand, term::Term};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Greedy selection of essential implicants by rank.
///
/// Each prime implicant is ranked by its coverage away from the don't-care
/// set plus its per-position score; ranks are visited in descending order,
/// and within one rank terms are visited in descending lexicographic
/// order. A term joins the essential set iff it covers at least one
/// minterm the set does not cover yet. If nothing qualifies (every minterm
/// was a don't-care), the all-`-` term stands in for the whole space.
pub fn essential_implicants(
    n_bits: usize,
    primes: &BTreeSet<Term>,
    dont_cares: &BTreeSet<Term>,
) -> BTreeSet<Term> {
    let mut coverage: BTreeMap<&Term, BTreeSet<Term>> = BTreeMap::new();
    for term in primes {
        coverage.insert(term, expand(term, dont_cares));
    }

    let mut by_rank: BTreeMap<usize, BTreeSet<&Term>> = BTreeMap::new();
    for term in primes {
        let rank = term.rank(coverage[term].len());
        by_rank.entry(rank).or_default().insert(term);
    }

    let mut essential: BTreeSet<Term> = BTreeSet::new();
    let mut covered: BTreeSet<Term> = BTreeSet::new();
    for group in by_rank.values().rev() {
        for &term in group.iter().rev() {
            let perms = &coverage[term];
            if !perms.is_subset(&covered) {
                essential.insert(term.clone());
                covered.extend(perms.iter().cloned());
            }
        }
    }

    if essential.is_empty() {
        essential.insert(Term::dashes(n_bits));
    }
    debug!(
        "{} of {} primes selected as essential",
        essential.len(),
        primes.len()
    );
    essential
}
