// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{details::FunctionDetails, value_generator::ValueGenerator};
use color_eyre::{eyre::eyre, Result};

pub struct AllFixtures;

impl AllFixtures {
    pub fn generate_8(count: usize) -> Result<()> {
        let mut value_gen = ValueGenerator::from_seed("qm-min_8");

        let mut reduced_count = 0;
        for _ in 0..count {
            let details = value_gen.generate(FunctionDetails::strategy(8));
            let minimized = details.minimize(true);
            let Some(cover) = minimized.terms else {
                continue;
            };
            if let Err(minterm) = details.check_cover(&cover) {
                return Err(eyre!(
                    "cover disagrees with its truth table at {}",
                    minterm
                ));
            }
            if cover.len() < details.ones.len() {
                reduced_count += 1;
            }
        }

        println!("reduced count: {}", reduced_count);

        Ok(())
    }
}
