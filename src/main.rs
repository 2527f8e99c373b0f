use anyhow::Result;
use clap::Parser;
use stun_providers::{run, utils::setup_logging, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    println!("{}", run(args.source.as_str()));
    Ok(())
}
