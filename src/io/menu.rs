use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::{
    common::{command::Command, error::AppError, money::Money},
    domain::ledger::Ledger,
    io::display,
    worker::processor::{Outcome, Processor},
};

/// Interactive numbered menu over any line-based input and output.
///
/// Bad input is answered with a hint and asked again; only choice 6 or the
/// end of input leaves the loop.
pub struct Menu<R, W> {
    input: R,
    output: W,
    processor: Processor,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            processor: Processor::new(),
        }
    }

    pub fn run(&mut self, ledger: &mut Ledger) -> Result<(), AppError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_parsed::<u32>("Enter your choice: ", "number")? else {
                break;
            };

            if !(1..=6).contains(&choice) {
                writeln!(self.output, "Invalid choice. Try again.")?;
                continue;
            }
            let Some(command) = self.read_command(choice)? else {
                break;
            };

            let result = self.processor.process(ledger, command);
            display::render(&mut self.output, &result)?;
            if matches!(result, Ok(Outcome::Exit)) {
                return Ok(());
            }
        }

        tracing::debug!("input closed, leaving menu");
        writeln!(self.output)?;
        writeln!(self.output, "{}", display::GOODBYE)?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== BANK MANAGEMENT SYSTEM ===")?;
        writeln!(self.output, "1. Create New Account")?;
        writeln!(self.output, "2. Show Account Details")?;
        writeln!(self.output, "3. Deposit Money")?;
        writeln!(self.output, "4. Withdraw Money")?;
        writeln!(self.output, "5. Show All Accounts")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    /// Collects the arguments for a menu choice in `1..=6`. `None` means input ended.
    fn read_command(&mut self, choice: u32) -> Result<Option<Command>, AppError> {
        let command = match choice {
            1 => {
                let Some(holder) = self.read_holder()? else {
                    return Ok(None);
                };
                let Some(initial_deposit) = self.read_parsed("Enter initial deposit: ", "amount")?
                else {
                    return Ok(None);
                };
                Command::CreateAccount {
                    holder,
                    initial_deposit,
                }
            }
            2 => {
                let Some(number) = self.read_parsed("Enter account number: ", "number")? else {
                    return Ok(None);
                };
                Command::ShowAccount { number }
            }
            3 | 4 => {
                let Some(number) = self.read_parsed("Enter account number: ", "number")? else {
                    return Ok(None);
                };
                let prompt = if choice == 3 {
                    "Enter amount to deposit: "
                } else {
                    "Enter amount to withdraw: "
                };
                let Some(amount) = self.read_parsed::<Money>(prompt, "amount")? else {
                    return Ok(None);
                };
                if choice == 3 {
                    Command::Deposit { number, amount }
                } else {
                    Command::Withdraw { number, amount }
                }
            }
            5 => Command::ListAccounts,
            _ => Command::Exit,
        };
        Ok(Some(command))
    }

    fn read_holder(&mut self) -> Result<Option<String>, AppError> {
        loop {
            self.prompt("Enter account holder name: ")?;
            match self.read_line()? {
                None => return Ok(None),
                Some(name) if name.is_empty() => {
                    writeln!(self.output, "Account holder name cannot be empty.")?;
                }
                Some(name) => return Ok(Some(name)),
            }
        }
    }

    /// Prompts until the line parses as `T`.
    fn read_parsed<T: FromStr>(&mut self, prompt: &str, what: &str) -> Result<Option<T>, AppError> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected {what} input");
                    writeln!(self.output, "Please enter a valid {what}.")?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
