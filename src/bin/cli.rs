// src/bin/cli.rs
use profile_dash::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _guard = log::init(true);
    cli::run()
}
