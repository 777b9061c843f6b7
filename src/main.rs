use anyhow::Result;
use clap::Parser;

use shamir384::cli::Cli;

fn main() -> Result<()> {
    let output = Cli::parse().run()?;
    print!("{}", output.as_str());
    Ok(())
}
