// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{essential_implicants, reduce_implicants},
    errors::ParseTermError,
    primes::{prime_implicants, MergeProfile},
    term::Term,
};
use log::debug;
use std::collections::BTreeSet;

/// Outcome of a minimization run.
///
/// `terms` is `None` for an empty input or inconsistent term widths; the
/// profile counters are populated either way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Minimization {
    pub terms: Option<BTreeSet<Term>>,
    pub profile: MergeProfile,
}

/// Minimizes the function that is 1 on `ones` and unconstrained on
/// `dont_cares`.
///
/// When `num_bits` is absent the width is inferred as
/// `ceil(log2(max + 1))`, with an input of all zeroes inferring width 1.
/// Integers wider than the chosen width are truncated to it. Returns
/// `None` when `ones` and `dont_cares` are both empty.
pub fn simplify(
    ones: &[u64],
    dont_cares: &[u64],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Option<BTreeSet<Term>> {
    simplify_with_profile(ones, dont_cares, num_bits, use_xor).terms
}

/// [`simplify`], also reporting the merge profile counters.
pub fn simplify_with_profile(
    ones: &[u64],
    dont_cares: &[u64],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Minimization {
    if ones.is_empty() && dont_cares.is_empty() {
        return Minimization::default();
    }
    let n_bits = num_bits.unwrap_or_else(|| {
        let max = ones
            .iter()
            .chain(dont_cares)
            .copied()
            .max()
            .expect("just checked the input is nonempty");
        infer_width(max)
    });

    let ones = ones
        .iter()
        .map(|&value| Term::from_index(n_bits, value))
        .collect();
    let dont_cares = dont_cares
        .iter()
        .map(|&value| Term::from_index(n_bits, value))
        .collect();
    simplify_terms(ones, dont_cares, Some(n_bits), use_xor)
}

/// Minimizes a function given as pattern strings over the
/// `{'0','1','-','^','~'}` alphabet.
///
/// Unparseable strings are hard errors; strings of differing lengths (or
/// disagreeing with a supplied `num_bits`) are the soft `None` result.
pub fn simplify_strings<S: AsRef<str>>(
    ones: &[S],
    dont_cares: &[S],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Result<Option<BTreeSet<Term>>, ParseTermError> {
    simplify_strings_with_profile(ones, dont_cares, num_bits, use_xor)
        .map(|minimization| minimization.terms)
}

/// [`simplify_strings`], also reporting the merge profile counters.
pub fn simplify_strings_with_profile<S: AsRef<str>>(
    ones: &[S],
    dont_cares: &[S],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Result<Minimization, ParseTermError> {
    let ones = ones
        .iter()
        .map(|s| s.as_ref().parse())
        .collect::<Result<BTreeSet<Term>, _>>()?;
    let dont_cares = dont_cares
        .iter()
        .map(|s| s.as_ref().parse())
        .collect::<Result<BTreeSet<Term>, _>>()?;
    Ok(simplify_terms(ones, dont_cares, num_bits, use_xor))
}

/// Minimizes a function given as parsed [`Term`]s. This is the seam the
/// other entry points funnel into.
pub fn simplify_terms(
    ones: BTreeSet<Term>,
    dont_cares: BTreeSet<Term>,
    num_bits: Option<usize>,
    use_xor: bool,
) -> Minimization {
    let terms: BTreeSet<Term> = ones.union(&dont_cares).cloned().collect();
    let Some(first) = terms.iter().next() else {
        return Minimization::default();
    };

    let n_bits = num_bits.unwrap_or_else(|| first.len());
    if terms.iter().any(|term| term.len() != n_bits) {
        debug!("inconsistent term widths; returning no result");
        return Minimization::default();
    }

    let (primes, profile) = prime_implicants(use_xor, &terms);
    let essential = essential_implicants(n_bits, &primes, &dont_cares);
    let reduced = reduce_implicants(n_bits, &essential, &dont_cares);
    Minimization {
        terms: Some(reduced),
        profile,
    }
}

/// Width of the smallest big-endian encoding that holds `max`. An input of
/// 0 still takes one bit.
fn infer_width(max: u64) -> usize {
    if max == 0 {
        1
    } else {
        (u64::BITS - max.leading_zeros()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expand::expand, proptest_helpers::function_strategy};
    use proptest::prelude::*;

    fn term_set(terms: &[&str]) -> BTreeSet<Term> {
        terms.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_two_bit_cover() {
        let minimized = simplify_with_profile(&[1, 2, 3], &[], Some(2), false);
        assert_eq!(minimized.terms, Some(term_set(&["-1", "1-"])));
        assert_eq!(minimized.profile.cmp, 2);
        assert_eq!(minimized.profile.xor, 0);
        assert_eq!(minimized.profile.xnor, 0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(simplify(&[], &[], None, false), None);
        assert_eq!(simplify(&[], &[], Some(4), true), None);
    }

    #[test]
    fn test_full_cube() {
        let result = simplify(&(0..8).collect::<Vec<_>>(), &[], Some(3), false);
        assert_eq!(result, Some(term_set(&["---"])));
    }

    #[test]
    fn test_degenerate_covers() {
        // Everything is a don't-care, everything is on, or the two halves
        // split between them: all minimize to the full space.
        let all: Vec<u64> = (0..16).collect();
        let on: Vec<u64> = (0..10).collect();
        let dc: Vec<u64> = (10..16).collect();
        let odd: Vec<u64> = (0..16).filter(|v| v % 2 == 1).collect();
        let even: Vec<u64> = (0..16).filter(|v| v % 2 == 0).collect();
        for use_xor in [false, true] {
            let expected = Some(term_set(&["----"]));
            assert_eq!(simplify(&[], &all, Some(4), use_xor), expected);
            assert_eq!(simplify(&all, &[], Some(4), use_xor), expected);
            assert_eq!(simplify(&on, &dc, Some(4), use_xor), expected);
            assert_eq!(simplify(&odd, &even, Some(4), use_xor), expected);
        }
    }

    #[test]
    fn test_width_inference() {
        // 2, 6, 10, 14 share the pattern "--10" over the inferred 4 bits.
        assert_eq!(
            simplify(&[2, 6, 10, 14], &[], None, false),
            Some(term_set(&["--10"])),
        );
        assert_eq!(simplify(&[0], &[], None, false), Some(term_set(&["0"])));
        assert_eq!(
            simplify(&[8], &[], None, false),
            Some(term_set(&["1000"])),
        );
    }

    #[test]
    fn test_xor_two_bit_tail() {
        assert_eq!(
            simplify(&[1, 2, 5, 6, 9, 10, 13, 14], &[], Some(4), true),
            Some(term_set(&["--^^"])),
        );
    }

    #[test]
    fn test_three_bit_parity() {
        // Even parity over three bits...
        assert_eq!(
            simplify(&[0, 3, 5, 6], &[], Some(3), true),
            Some(term_set(&["~~~"])),
        );
        // ...and odd parity, with its exact merge profile: no adjacency
        // group ever has a neighbor, and each of the three XOR seeds
        // offers its single 0 position.
        let minimized = simplify_with_profile(&[1, 2, 4, 7], &[], Some(3), true);
        assert_eq!(minimized.terms, Some(term_set(&["^^^"])));
        assert_eq!(minimized.profile.cmp, 0);
        assert_eq!(minimized.profile.xor, 3);
        assert_eq!(minimized.profile.xnor, 0);
    }

    #[test]
    fn test_four_bit_parity_with_fixed_head() {
        let minimized = simplify_with_profile(&[1, 2, 4, 7], &[], Some(4), true);
        assert_eq!(minimized.terms, Some(term_set(&["0^^^"])));
        assert_eq!(minimized.profile.cmp, 0);
        assert_eq!(minimized.profile.xor, 6);
        assert_eq!(minimized.profile.xnor, 0);

        let minimized = simplify_with_profile(&[0, 3, 5, 6], &[], Some(4), true);
        assert_eq!(minimized.terms, Some(term_set(&["0~~~"])));
        assert_eq!(minimized.profile.cmp, 0);
        assert_eq!(minimized.profile.xor, 0);
        assert_eq!(minimized.profile.xnor, 6);
    }

    #[test]
    fn test_dont_cares_absorb_coverage() {
        let minimized = simplify_with_profile(&[2], &[4, 5, 6, 7], None, true);
        assert_eq!(minimized.terms, Some(term_set(&["-10"])));
        assert_eq!(minimized.profile.cmp, 10);
        assert_eq!(minimized.profile.xor, 1);
        assert_eq!(minimized.profile.xnor, 0);
    }

    #[test]
    fn test_four_bit_irredundant_cover() {
        // The consensus term -1-1 survives prime generation but is covered
        // by the other four implicants and gets dropped.
        let minimized =
            simplify_with_profile(&[3, 4, 5, 7, 9, 13, 14, 15], &[], Some(4), false);
        assert_eq!(
            minimized.terms,
            Some(term_set(&["010-", "1-01", "111-", "0-11"])),
        );
        assert_eq!(minimized.profile.cmp, 18);
    }

    #[test]
    fn test_string_inputs() {
        // Wildcards are fine on the string path and pass through when
        // nothing merges.
        assert_eq!(
            simplify_strings(&["10-1"], &[], None, false),
            Ok(Some(term_set(&["10-1"]))),
        );
        assert_eq!(
            simplify_strings(&["01", "10", "11"], &[], None, false),
            Ok(Some(term_set(&["-1", "1-"]))),
        );
    }

    #[test]
    fn test_string_width_mismatch() {
        assert_eq!(
            simplify_strings(&["01", "110"], &[], None, false),
            Ok(None),
        );
        assert_eq!(simplify_strings(&["01"], &["110"], None, true), Ok(None));
        // A supplied width must agree with the strings.
        assert_eq!(simplify_strings(&["10"], &[], Some(3), false), Ok(None));
    }

    #[test]
    fn test_string_parse_error() {
        assert_eq!(
            simplify_strings(&["10", "2-"], &[], None, false),
            Err(ParseTermError::InvalidCharacter {
                character: '2',
                position: 0
            }),
        );
    }

    #[test]
    fn test_infer_width() {
        assert_eq!(infer_width(0), 1);
        assert_eq!(infer_width(1), 1);
        assert_eq!(infer_width(7), 3);
        assert_eq!(infer_width(8), 4);
        assert_eq!(infer_width(u64::MAX), 64);
    }

    proptest! {
        #[test]
        fn proptest_cover_matches_truth_table(
            (n_bits, (ones, dont_cares)) in (1usize..=6)
                .prop_flat_map(|n| (Just(n), function_strategy(n))),
            use_xor in any::<bool>(),
        ) {
            let minimized = simplify_terms(
                ones.clone(),
                dont_cares.clone(),
                Some(n_bits),
                use_xor,
            );
            if ones.is_empty() && dont_cares.is_empty() {
                prop_assert_eq!(minimized.terms, None);
                return Ok(());
            }
            let cover = minimized.terms.expect("nonempty input yields a cover");

            let mut covered = BTreeSet::new();
            for term in &cover {
                prop_assert_eq!(term.len(), n_bits);
                covered.extend(expand(term, &BTreeSet::new()));
            }
            for index in 0..(1u64 << n_bits) {
                let minterm = Term::from_index(n_bits, index);
                if dont_cares.contains(&minterm) {
                    continue;
                }
                prop_assert_eq!(
                    covered.contains(&minterm),
                    ones.contains(&minterm),
                    "cover agrees with the truth table at {}",
                    minterm,
                );
            }
        }

        #[test]
        fn proptest_cover_is_irredundant(
            (n_bits, (ones, dont_cares)) in (1usize..=5)
                .prop_flat_map(|n| (Just(n), function_strategy(n))),
            use_xor in any::<bool>(),
        ) {
            let minimized = simplify_terms(
                ones.clone(),
                dont_cares.clone(),
                Some(n_bits),
                use_xor,
            );
            let Some(cover) = minimized.terms else { return Ok(()); };
            if ones.is_empty() || cover.len() <= 1 {
                return Ok(());
            }
            for term in &cover {
                let mut others = BTreeSet::new();
                for other in &cover {
                    if other != term {
                        others.extend(expand(other, &BTreeSet::new()));
                    }
                }
                prop_assert!(
                    ones.iter().any(|minterm| !others.contains(minterm)),
                    "{} covers a minterm no other term reaches",
                    term,
                );
            }
        }

        #[test]
        fn proptest_deterministic(
            (n_bits, (ones, dont_cares)) in (1usize..=5)
                .prop_flat_map(|n| (Just(n), function_strategy(n))),
            use_xor in any::<bool>(),
        ) {
            let first = simplify_terms(
                ones.clone(),
                dont_cares.clone(),
                Some(n_bits),
                use_xor,
            );
            let second =
                simplify_terms(ones, dont_cares, Some(n_bits), use_xor);
            prop_assert_eq!(first, second);
        }
    }
}
