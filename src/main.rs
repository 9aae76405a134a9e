use anyhow::Result;
use calculator::cli::{self, Cli};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.log_level());

    let output = cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
