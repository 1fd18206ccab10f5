use std::{
    io::{stdin, stdout, BufWriter, Read, Write},
    path::PathBuf,
};

use clap::Parser;

use crate::{
    common::{command::Command, error::AppError},
    domain::ledger::Ledger,
    io::{display, menu::Menu, reader, writer},
    worker::processor::Processor,
};

/// In-memory savings account ledger with an interactive menu.
#[derive(Parser, Debug)]
#[command(name = "savings-ledger")]
#[command(version)]
pub struct Cli {
    /// Run a CSV command script (`command,account,holder,amount`) instead of the menu
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Log ledger activity to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.script {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            let stdout = stdout();
            let out = BufWriter::new(stdout.lock());
            run_script(file, out, std::io::stderr().lock())
        }
        None => {
            let mut ledger = Ledger::new();
            let stdout = stdout();
            Menu::new(stdin().lock(), stdout.lock()).run(&mut ledger)
        }
    }
}

/// Applies every command of a CSV script to a fresh ledger, then writes the
/// final account listing to `out`.
///
/// Per-command results and skipped rows go to `report`; neither a bad row nor
/// a rejected operation stops the script. An `exit` row ends it early.
pub fn run_script<R, W, E>(input: R, out: W, mut report: E) -> Result<(), AppError>
where
    R: Read,
    W: Write,
    E: Write,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut ledger = Ledger::new();
    let mut processor = Processor::new();

    for command in reader::read_commands(&mut rdr) {
        let command = match command.map_err(AppError::Parse) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(error = %e, "skipping script row");
                writeln!(report, "skipped row: {e}")?;
                continue;
            }
        };
        if command == Command::Exit {
            break;
        }
        let result = processor.process(&mut ledger, command);
        display::render(&mut report, &result)?;
    }

    writer::write_accounts(out, ledger.list_all())?;
    Ok(())
}
