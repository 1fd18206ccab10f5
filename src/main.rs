use anyhow::Result;
use clap::Parser;
use savings_ledger::{app, observability};

fn main() -> Result<()> {
    let cli = app::Cli::parse();
    observability::init(cli.verbose);
    app::run(&cli)?;
    Ok(())
}
