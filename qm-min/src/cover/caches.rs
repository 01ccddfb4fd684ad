// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{expand::expand, term::Term};
use std::collections::{BTreeMap, BTreeSet};

/// Memoized term expansions against a fixed don't-care set.
///
/// The reducer expands the same terms repeatedly while scanning pairs;
/// keying the expansions by term keeps that from dominating the runtime
/// without changing any observable output.
#[derive(Debug)]
pub(super) struct ExpansionCache<'a> {
    dont_cares: &'a BTreeSet<Term>,
    expanded: BTreeMap<Term, BTreeSet<Term>>,
}

impl<'a> ExpansionCache<'a> {
    pub(super) fn new(dont_cares: &'a BTreeSet<Term>) -> Self {
        Self {
            dont_cares,
            expanded: BTreeMap::new(),
        }
    }

    /// The expansion of `term` away from the don't-care set.
    pub(super) fn expansion(&mut self, term: &Term) -> &BTreeSet<Term> {
        if !self.expanded.contains_key(term) {
            let expansion = expand(term, self.dont_cares);
            self.expanded.insert(term.clone(), expansion);
        }
        &self.expanded[term]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_respects_dont_cares() {
        let dont_cares: BTreeSet<Term> = ["11".parse().unwrap()].into();
        let mut cache = ExpansionCache::new(&dont_cares);
        let term: Term = "-1".parse().unwrap();
        let expected: BTreeSet<Term> = ["01".parse().unwrap()].into();
        assert_eq!(cache.expansion(&term), &expected);
        // Second lookup hits the memo and stays identical.
        assert_eq!(cache.expansion(&term), &expected);
    }
}
