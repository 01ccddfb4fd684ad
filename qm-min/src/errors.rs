// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{error, fmt};

/// Error returned when a term string cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseTermError {
    /// A character outside the `0 1 - ^ ~` alphabet.
    InvalidCharacter { character: char, position: usize },
    /// The term uses both `^` and `~` positions.
    MixedParity { position: usize },
}

impl fmt::Display for ParseTermError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid character {:?} at position {} (expected one of '0', '1', '-', '^', '~')",
                    character, position
                )
            }
            Self::MixedParity { position } => {
                write!(
                    f,
                    "term mixes '^' and '~' positions (second kind first seen at position {})",
                    position
                )
            }
        }
    }
}

impl error::Error for ParseTermError {}
