// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::term::{Term, TermValue};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Counts of candidate positions examined by each merge kind, reported
/// alongside results for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeProfile {
    pub cmp: u64,
    pub xor: u64,
    pub xnor: u64,
}

/// Group index: count of `1`, `^`, and `~` positions.
type GroupKey = (usize, usize, usize);

/// Tries to combine two wildcard-free terms into an XOR term.
///
/// Succeeds iff the terms differ in exactly two positions, one flipped in
/// each direction; the differing positions become `^`.
pub fn reduce_simple_xor(t1: &Term, t2: &Term) -> Option<Term> {
    let (merged, d10, d01) = parity_merge(t1, t2, TermValue::Xor)?;
    (d10 == 1 && d01 == 1).then(|| merged)
}

/// Tries to combine two wildcard-free terms into an XNOR term.
///
/// Succeeds iff the terms differ in exactly two positions, both flipped in
/// the same direction; the differing positions become `~`.
pub fn reduce_simple_xnor(t1: &Term, t2: &Term) -> Option<Term> {
    let (merged, d10, d01) = parity_merge(t1, t2, TermValue::Xnor)?;
    ((d10 == 2 && d01 == 0) || (d10 == 0 && d01 == 2)).then(|| merged)
}

fn parity_merge(
    t1: &Term,
    t2: &Term,
    replacement: TermValue,
) -> Option<(Term, usize, usize)> {
    debug_assert_eq!(t1.len(), t2.len(), "terms share one width");
    let mut d10 = 0;
    let mut d01 = 0;
    let mut values = Vec::with_capacity(t1.len());
    for (&a, &b) in t1.values().iter().zip(t2.values()) {
        if a.is_wildcard() || b.is_wildcard() {
            return None;
        }
        if a == b {
            values.push(a);
        } else {
            values.push(replacement);
            if a == TermValue::One {
                d10 += 1;
            } else {
                d01 += 1;
            }
        }
    }
    Some((Term::new(values), d10, d01))
}

/// Generates all prime implicants from the union of minterms and
/// don't-cares.
///
/// Terms are repeatedly partitioned by [`GroupKey`] and merged against the
/// adjacent group (one more `1`) and, in XOR mode, against the group with
/// the complementary parity signature. Terms untouched by any merge in a
/// pass are prime; the merged terms form the next working set. The loop
/// ends on a pass with no merges.
pub fn prime_implicants(
    use_xor: bool,
    terms: &BTreeSet<Term>,
) -> (BTreeSet<Term>, MergeProfile) {
    let mut profile = MergeProfile::default();
    let mut working = terms.clone();

    if use_xor {
        working.extend(parity_seeds(terms));
    }

    let mut marked: BTreeSet<Term> = BTreeSet::new();
    loop {
        let groups = group_by_counts(&working);
        let mut merged: BTreeSet<Term> = BTreeSet::new();
        let mut used: BTreeSet<Term> = BTreeSet::new();

        // Adjacency merges. Rather than comparing t1 against every member
        // of the next group, flip each 0 to 1 and probe the group set.
        for (&(ones, xors, xnors), group) in &groups {
            let key_next = (ones + 1, xors, xnors);
            let Some(group_next) = groups.get(&key_next) else {
                continue;
            };
            for t1 in group {
                for ix in t1.positions(TermValue::Zero) {
                    profile.cmp += 1;
                    let t2 = t1.with_value(ix, TermValue::One);
                    if group_next.contains(&t2) {
                        used.insert(t1.clone());
                        used.insert(t2);
                        merged.insert(t1.with_value(ix, TermValue::Dash));
                    }
                }
            }
        }

        // XOR merges: absorb a 0 position into the parity group by probing
        // the group with the swapped parity signature.
        for (&(ones, xors, xnors), group) in &groups {
            if xors == 0 {
                continue;
            }
            let key_complement = (ones + 1, xnors, xors);
            let Some(group_complement) = groups.get(&key_complement) else {
                continue;
            };
            for t1 in group {
                let complement = t1.parity_complement();
                for ix in t1.positions(TermValue::Zero) {
                    profile.xor += 1;
                    let t2 = complement.with_value(ix, TermValue::One);
                    if group_complement.contains(&t2) {
                        used.insert(t1.clone());
                        merged.insert(t1.with_value(ix, TermValue::Xor));
                    }
                }
            }
        }

        // XNOR merges, symmetric to the XOR case.
        for (&(ones, xors, xnors), group) in &groups {
            if xnors == 0 {
                continue;
            }
            let key_complement = (ones + 1, xnors, xors);
            let Some(group_complement) = groups.get(&key_complement) else {
                continue;
            };
            for t1 in group {
                let complement = t1.parity_complement();
                for ix in t1.positions(TermValue::Zero) {
                    profile.xnor += 1;
                    let t2 = complement.with_value(ix, TermValue::One);
                    if group_complement.contains(&t2) {
                        used.insert(t1.clone());
                        merged.insert(t1.with_value(ix, TermValue::Xnor));
                    }
                }
            }
        }

        for term in groups.values().flatten() {
            if !used.contains(term) {
                marked.insert(term.clone());
            }
        }

        if used.is_empty() {
            break;
        }
        debug!(
            "merge pass: {} used, {} merged, {} marked prime",
            used.len(),
            merged.len(),
            marked.len()
        );
        working = merged;
    }

    (marked, profile)
}

/// Seeds the working set with every two-position XOR/XNOR term obtainable
/// from a pair of wildcard-free input terms. XOR pairs sit in the same
/// ones-count group; XNOR pairs are two ones apart.
fn parity_seeds(terms: &BTreeSet<Term>) -> BTreeSet<Term> {
    let mut by_ones: BTreeMap<usize, BTreeSet<&Term>> = BTreeMap::new();
    for term in terms {
        by_ones
            .entry(term.count(TermValue::One))
            .or_default()
            .insert(term);
    }

    let mut seeds = BTreeSet::new();
    for (&ones, group) in &by_ones {
        for &t1 in group {
            for &t2 in group {
                if let Some(seed) = reduce_simple_xor(t1, t2) {
                    seeds.insert(seed);
                }
            }
            if let Some(group_above) = by_ones.get(&(ones + 2)) {
                for &t2 in group_above {
                    if let Some(seed) = reduce_simple_xnor(t1, t2) {
                        seeds.insert(seed);
                    }
                }
            }
        }
    }
    seeds
}

fn group_by_counts(terms: &BTreeSet<Term>) -> BTreeMap<GroupKey, BTreeSet<Term>> {
    let mut groups: BTreeMap<GroupKey, BTreeSet<Term>> = BTreeMap::new();
    for term in terms {
        let ones = term.count(TermValue::One);
        let xors = term.count(TermValue::Xor);
        let xnors = term.count(TermValue::Xnor);
        debug_assert!(
            xors == 0 || xnors == 0,
            "a term never mixes XOR and XNOR positions: {}",
            term
        );
        groups
            .entry((ones, xors, xnors))
            .or_default()
            .insert(term.clone());
    }
    groups
}
