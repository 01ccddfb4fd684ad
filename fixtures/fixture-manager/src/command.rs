// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use fixture_details::AllFixtures;
use qm_min::{cover::CoverAlgebraicDisplay, minimize::simplify_with_profile};

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Parser)]
pub enum FixtureManagerCommand {
    /// Generate random 8-bit functions and verify their minimized covers.
    GenerateInputs {
        #[clap(long, short, default_value_t = 64)]
        count: usize,
    },
    /// Minimize one function given as integer minterms.
    Minimize {
        #[clap(long, short, value_delimiter = ',')]
        ones: Vec<u64>,
        #[clap(long, short, value_delimiter = ',')]
        dont_cares: Vec<u64>,
        #[clap(long, short)]
        num_bits: Option<usize>,
        #[clap(long)]
        xor: bool,
    },
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::GenerateInputs { count } => AllFixtures::generate_8(count),
            Self::Minimize {
                ones,
                dont_cares,
                num_bits,
                xor,
            } => {
                let minimized =
                    simplify_with_profile(&ones, &dont_cares, num_bits, xor);
                match &minimized.terms {
                    Some(terms) => {
                        for term in terms {
                            println!("{}", term);
                        }
                        println!("{}", CoverAlgebraicDisplay::new(terms));
                    }
                    None => println!("(no result)"),
                }
                println!(
                    "{} comparisons, {} XOR and {} XNOR comparisons",
                    minimized.profile.cmp,
                    minimized.profile.xor,
                    minimized.profile.xnor
                );
                Ok(())
            }
        }
    }
}
