//! Command-line front end rendering asset URLs and tags.

mod cli;
mod logging;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  logging::init_logging(cli.verbose)?;

  let output = cli.run()?;
  println!("{output}");
  Ok(())
}
