// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::term::{Term, TermValue};
use itertools::{Itertools, Position};
use std::{borrow::Cow, collections::BTreeSet, fmt};

/// Renders a cover as a sum of products, one product per term.
///
/// Fixed positions become literals (`a`, `b'`, ...), parity positions
/// become one XOR group (`(a ^ b)` for odd parity, `(a ^ b)'` for even),
/// and the all-`-` term renders as the constant `1`.
pub struct CoverAlgebraicDisplay<'a> {
    terms: &'a BTreeSet<Term>,
    separator: Cow<'a, str>,
}

impl<'a> CoverAlgebraicDisplay<'a> {
    pub fn new(terms: &'a BTreeSet<Term>) -> Self {
        Self {
            terms,
            separator: Cow::Borrowed(" + "),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for CoverAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "(none)");
        }
        for term in self.terms.iter().with_position() {
            match term {
                Position::First(term) | Position::Middle(term) => {
                    write_product(f, term)?;
                    write!(f, "{}", self.separator)?;
                }
                Position::Last(term) | Position::Only(term) => {
                    write_product(f, term)?;
                }
            }
        }
        Ok(())
    }
}

fn write_product(f: &mut fmt::Formatter, term: &Term) -> fmt::Result {
    let mut wrote_any = false;
    for (ix, &value) in term.values().iter().enumerate() {
        match value {
            TermValue::One => {
                write!(f, "{}", input_symbol(ix))?;
                wrote_any = true;
            }
            TermValue::Zero => {
                write!(f, "{}'", input_symbol(ix))?;
                wrote_any = true;
            }
            _ => {}
        }
    }

    let parity: Vec<usize> = term
        .values()
        .iter()
        .enumerate()
        .filter_map(|(ix, value)| value.is_parity().then(|| ix))
        .collect();
    if !parity.is_empty() {
        write!(f, "(")?;
        for ix in parity.iter().with_position() {
            match ix {
                Position::First(&ix) | Position::Middle(&ix) => {
                    write!(f, "{} ^ ", input_symbol(ix))?;
                }
                Position::Last(&ix) | Position::Only(&ix) => {
                    write!(f, "{}", input_symbol(ix))?;
                }
            }
        }
        write!(f, ")")?;
        if term.count(TermValue::Xnor) > 0 {
            write!(f, "'")?;
        }
        wrote_any = true;
    }

    if !wrote_any {
        // All dashes: the constant-true product.
        write!(f, "1")?;
    }
    Ok(())
}

fn input_symbol(ix: usize) -> String {
    if ix < 26 {
        char::from(b'a' + ix as u8).to_string()
    } else {
        format!("x{}", ix)
    }
}
