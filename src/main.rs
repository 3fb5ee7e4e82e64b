//! curswap - Bulk currency rewrite for TypeScript source trees
//!
//! curswap provides:
//! - Tree traversal that skips node_modules and selects .ts/.tsx files
//! - Dollar-amount to rupee-amount and USD to INR substitution
//! - In-place rewrite of changed files only
//! - Run summary as text or json

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod rules;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
