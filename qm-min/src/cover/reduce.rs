// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::caches::ExpansionCache;
use crate::term::{Term, TermValue};
use itertools::Itertools;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Drops and rewrites redundant implicants.
///
/// First every pair is offered to [`combine`] until no pair merges; then
/// implicants whose coverage is a subset of everyone else's combined
/// coverage are removed one at a time, lowest [`Term::complexity`] first,
/// until none remain. An empty result degenerates to the all-`-` term.
pub fn reduce_implicants(
    n_bits: usize,
    implicants: &BTreeSet<Term>,
    dont_cares: &BTreeSet<Term>,
) -> BTreeSet<Term> {
    let mut cache = ExpansionCache::new(dont_cares);
    let mut working = implicants.clone();

    // Pairwise combination to fixpoint. Scanning restarts after every
    // successful merge since the survivor can enable further merges.
    loop {
        let merge = working
            .iter()
            .tuple_combinations::<(_, _)>()
            .find_map(|(a, b)| {
                combine(a, b, &mut cache)
                    .map(|merged| (a.clone(), b.clone(), merged))
            });
        match merge {
            Some((a, b, merged)) => {
                debug!("combined {} and {} into {}", a, b, merged);
                working.remove(&a);
                working.remove(&b);
                working.insert(merged);
            }
            None => break,
        }
    }

    let mut coverage: BTreeMap<Term, BTreeSet<Term>> = BTreeMap::new();
    for term in &working {
        let expansion = cache.expansion(term).clone();
        coverage.insert(term.clone(), expansion);
    }

    // Subsumption pass: a term is redundant when the rest of the cover
    // already reaches everything it covers.
    loop {
        let mut redundant: Vec<&Term> = Vec::new();
        for (term, term_coverage) in &coverage {
            let mut others: BTreeSet<&Term> = BTreeSet::new();
            for (other, other_coverage) in &coverage {
                if other != term {
                    others.extend(other_coverage.iter());
                }
            }
            if term_coverage.iter().all(|minterm| others.contains(minterm)) {
                redundant.push(term);
            }
        }
        match redundant
            .into_iter()
            .min_by_key(|term| term.complexity())
            .cloned()
        {
            Some(term) => {
                debug!("dropping redundant implicant {}", term);
                coverage.remove(&term);
            }
            None => break,
        }
    }

    if coverage.is_empty() {
        coverage.insert(Term::dashes(n_bits), BTreeSet::new());
    }
    coverage.into_keys().collect()
}

/// Tries to merge two implicants into one that covers exactly their
/// combined expansion.
///
/// Each candidate is one input with its `-` positions overwritten by the
/// other's values; a candidate that would end up holding both `^` and `~`
/// is discarded. Of the candidates whose expansion equals the union, the
/// one with the lowest complexity wins, first candidate on ties.
fn combine(a: &Term, b: &Term, cache: &mut ExpansionCache<'_>) -> Option<Term> {
    let mut union = cache.expansion(a).clone();
    let b_expansion = cache.expansion(b).clone();
    union.extend(b_expansion);

    let mut candidates = Vec::with_capacity(2);
    for (base, other) in [(a, b), (b, a)] {
        let values = base
            .values()
            .iter()
            .enumerate()
            .map(|(ix, &value)| {
                if value == TermValue::Dash {
                    other.get(ix)
                } else {
                    value
                }
            })
            .collect();
        let candidate = Term::new(values);
        if candidate.count(TermValue::Xor) > 0
            && candidate.count(TermValue::Xnor) > 0
        {
            continue;
        }
        candidates.push(candidate);
    }

    candidates
        .into_iter()
        .filter(|candidate| *cache.expansion(candidate) == union)
        .min_by_key(|candidate| candidate.complexity())
}
