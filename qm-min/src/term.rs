// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::ParseTermError;
use std::{fmt, str::FromStr};

/// A single position of a [`Term`].
///
/// The variant order matches the ASCII order of the character encoding
/// (`'-' < '0' < '1' < '^' < '~'`), so the derived `Ord` agrees with
/// lexicographic comparison of the rendered form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TermValue {
    /// `-`: the bit ranges freely.
    Dash,
    /// `0`: the bit is fixed at zero.
    Zero,
    /// `1`: the bit is fixed at one.
    One,
    /// `^`: the XOR positions together range over every odd-parity
    /// assignment.
    Xor,
    /// `~`: the XNOR positions together range over every even-parity
    /// assignment.
    Xnor,
}

impl TermValue {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Dash),
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            '^' => Some(Self::Xor),
            '~' => Some(Self::Xnor),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Zero => '0',
            Self::One => '1',
            Self::Xor => '^',
            Self::Xnor => '~',
        }
    }

    /// Returns true for the parity wildcards `^` and `~`.
    #[inline]
    pub fn is_parity(self) -> bool {
        matches!(self, Self::Xor | Self::Xnor)
    }

    /// Returns true for any position that is not a fixed bit.
    #[inline]
    pub fn is_wildcard(self) -> bool {
        !matches!(self, Self::Zero | Self::One)
    }
}

/// A fixed-width implicant: one [`TermValue`] per input bit, most
/// significant bit first.
///
/// A term with no wildcard positions is a minterm. A term never holds `^`
/// and `~` positions at the same time.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Term {
    values: Vec<TermValue>,
}

impl Term {
    pub fn new(values: Vec<TermValue>) -> Self {
        Self { values }
    }

    /// The minterm for `index`, formatted big-endian to `n_bits`
    /// positions. Bits beyond `n_bits` are dropped.
    pub fn from_index(n_bits: usize, index: u64) -> Self {
        let values = (0..n_bits)
            .rev()
            .map(|k| {
                let set = k < u64::BITS as usize && (index >> k) & 1 == 1;
                if set {
                    TermValue::One
                } else {
                    TermValue::Zero
                }
            })
            .collect();
        Self { values }
    }

    /// The all-`-` term covering every assignment of `n_bits` bits.
    pub fn dashes(n_bits: usize) -> Self {
        Self {
            values: vec![TermValue::Dash; n_bits],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[TermValue] {
        &self.values
    }

    #[inline]
    pub fn get(&self, ix: usize) -> TermValue {
        self.values[ix]
    }

    /// Returns a copy with position `ix` replaced by `value`.
    pub fn with_value(&self, ix: usize, value: TermValue) -> Self {
        let mut values = self.values.clone();
        values[ix] = value;
        Self { values }
    }

    /// Returns a copy with every `^` turned into `~` and vice versa.
    pub fn parity_complement(&self) -> Self {
        let values = self
            .values
            .iter()
            .map(|&value| match value {
                TermValue::Xor => TermValue::Xnor,
                TermValue::Xnor => TermValue::Xor,
                other => other,
            })
            .collect();
        Self { values }
    }

    pub fn count(&self, value: TermValue) -> usize {
        self.values.iter().filter(|&&v| v == value).count()
    }

    /// Positions holding `value`, in ascending order.
    pub fn positions(&self, value: TermValue) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(move |(ix, &v)| (v == value).then(|| ix))
    }

    pub fn is_minterm(&self) -> bool {
        self.values.iter().all(|value| !value.is_wildcard())
    }

    /// Selection rank: coverage weighted 4x, plus per-position weights.
    /// The higher a term ranks, the more desirable it is to keep in the
    /// cover.
    pub fn rank(&self, coverage: usize) -> usize {
        let score: usize = self
            .values
            .iter()
            .map(|value| match value {
                TermValue::Dash => 8,
                TermValue::Xor => 4,
                TermValue::Xnor => 2,
                TermValue::One => 1,
                TermValue::Zero => 0,
            })
            .sum();
        4 * coverage + score
    }

    /// Output cost estimate. The weights are 1.00/1.50/1.25/1.75 for
    /// `1`/`0`/`^`/`~` scaled by 4 to stay in integer arithmetic, which
    /// preserves the ordering and every tie of the fractional form.
    pub fn complexity(&self) -> usize {
        self.values
            .iter()
            .map(|value| match value {
                TermValue::One => 4,
                TermValue::Zero => 6,
                TermValue::Xor => 5,
                TermValue::Xnor => 7,
                TermValue::Dash => 0,
            })
            .sum()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.values {
            write!(f, "{}", value.as_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Term")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(s.len());
        let mut parity: Option<TermValue> = None;
        for (position, character) in s.chars().enumerate() {
            let value =
                TermValue::from_char(character).ok_or(ParseTermError::InvalidCharacter {
                    character,
                    position,
                })?;
            if value.is_parity() {
                match parity {
                    Some(seen) if seen != value => {
                        return Err(ParseTermError::MixedParity { position });
                    }
                    _ => parity = Some(value),
                }
            }
            values.push(value);
        }
        Ok(Self { values })
    }
}
