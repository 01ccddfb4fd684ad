// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cover;
pub mod errors;
pub mod expand;
pub mod minimize;
pub mod primes;
pub mod term;

#[cfg(any(test, feature = "internal-testing"))]
pub mod proptest_helpers;
