// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod caches;
mod display;
mod reduce;
mod select;

pub use display::*;
pub use reduce::*;
pub use select::*;
