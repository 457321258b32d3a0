//! bodyviz-cli
//!
//! Loads scene documents of shape descriptors, prints them and exports their data maps.

// Modules
pub(crate) mod cli;
pub(crate) mod color;
pub(crate) mod describe;
pub(crate) mod export;
pub(crate) mod validators;

fn main() -> anyhow::Result<()> {
    cli::init_logging();
    smol::block_on(async { cli::run().await })
}
