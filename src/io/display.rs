use std::io::{self, Write};

use crate::{
    common::error::LedgerError,
    domain::account::AccountSnapshot,
    worker::processor::Outcome,
};

pub const GOODBYE: &str = "Thank you for using our Bank Management System!";

const RULE: &str = "----------------------------";

/// Prints one account as the labelled block used by "show" and "list".
pub fn write_account<W: Write>(out: &mut W, snap: &AccountSnapshot) -> io::Result<()> {
    writeln!(out, "Account No : {}", snap.number)?;
    writeln!(out, "Name       : {}", snap.holder)?;
    writeln!(out, "Balance    : {}", snap.balance)?;
    writeln!(out, "{RULE}")
}

/// Renders the result of one command. Ledger errors become a message line;
/// they never stop the caller.
pub fn render<W: Write>(out: &mut W, result: &Result<Outcome, LedgerError>) -> io::Result<()> {
    match result {
        Ok(Outcome::Created { number }) => {
            writeln!(out, "Account created! Account Number: {number}")
        }
        Ok(Outcome::Shown(snap)) => write_account(out, snap),
        Ok(Outcome::Deposited { balance, .. }) => {
            writeln!(out, "Deposit successful. New balance: {balance}")
        }
        Ok(Outcome::Withdrawn { balance, .. }) => {
            writeln!(out, "Withdrawal successful. New balance: {balance}")
        }
        Ok(Outcome::Listed(all)) if all.is_empty() => writeln!(out, "No accounts to show."),
        Ok(Outcome::Listed(all)) => {
            for snap in all {
                write_account(out, snap)?;
            }
            Ok(())
        }
        Ok(Outcome::Exit) => writeln!(out, "{GOODBYE}"),
        Err(LedgerError::NotFound(_)) => writeln!(out, "Account not found!"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}
