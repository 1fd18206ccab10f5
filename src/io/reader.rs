use crate::common::{command::Command, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the script headers. Columns a
/// command does not use stay empty.
struct CsvRow {
    command: String,
    account: Option<u32>,
    holder: Option<String>,
    amount: Option<String>,
}

/// Reads and validates command rows from a CSV reader.
///
/// Supported headers: `command,account,holder,amount`.
/// Command names are case-insensitive. `create` needs `holder` and `amount`,
/// `show` needs `account`, `deposit`/`withdraw` need `account` and `amount`,
/// `list` and `exit` need nothing. Errors name the account when the row has one.
///
/// # Examples
///
/// ```
/// use savings_ledger::io::reader::read_commands;
/// use savings_ledger::common::command::Command;
/// use csv::ReaderBuilder;
///
/// let data = "command,account,holder,amount\n\
/// create,,Alice,100\n\
/// deposit,1001,,50\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(Command::CreateAccount { .. })));
/// assert!(matches!(commands[1], Ok(Command::Deposit { number: 1001, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Command, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let ctx = row_context(&row);
        let kind = row.command.trim().to_ascii_lowercase();

        match kind.as_str() {
            "create" => {
                let holder = row
                    .holder
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
                    .ok_or_else(|| format!("create missing holder{ctx}"))?;
                let initial_deposit = parse_amount(row.amount, "create", &ctx)?;
                Ok(Command::CreateAccount {
                    holder,
                    initial_deposit,
                })
            }
            "show" => Ok(Command::ShowAccount {
                number: require_account(row.account, "show", &ctx)?,
            }),
            "deposit" => Ok(Command::Deposit {
                number: require_account(row.account, "deposit", &ctx)?,
                amount: parse_amount(row.amount, "deposit", &ctx)?,
            }),
            "withdraw" => Ok(Command::Withdraw {
                number: require_account(row.account, "withdraw", &ctx)?,
                amount: parse_amount(row.amount, "withdraw", &ctx)?,
            }),
            "list" => Ok(Command::ListAccounts),
            "exit" => Ok(Command::Exit),
            other => Err(format!("unknown command: {other}{ctx}")),
        }
    })
}

// Malformed rows already carry their position in the csv error.
fn row_context(row: &CsvRow) -> String {
    match row.account {
        Some(n) => format!(" for account {n}"),
        None => String::new(),
    }
}

fn require_account(account: Option<u32>, command: &str, ctx: &str) -> Result<u32, String> {
    account.ok_or_else(|| format!("{command} missing account{ctx}"))
}

fn parse_amount(amount: Option<String>, command: &str, ctx: &str) -> Result<Money, String> {
    let raw = amount
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| format!("{command} missing amount{ctx}"))?;
    Money::from_str(&raw).map_err(|e| format!("{command} invalid amount '{raw}'{ctx}: {e}"))
}
