use std::io::Write;

use crate::domain::account::AccountSnapshot;

#[derive(serde::Serialize)]
/// Internal CSV output row representation.
///
/// Headers written (in this order): `account,holder,balance`.
/// The balance is formatted to 2 decimal places as a string.
struct OutputRow<'a> {
    account: u32,
    holder: &'a str,
    balance: String,
}

/// Writes account snapshots to a CSV writer in the order they are yielded.
///
/// `Ledger::list_all` already yields ascending account numbers, so passing it
/// straight through gives deterministic output.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use savings_ledger::domain::ledger::Ledger;
/// use savings_ledger::io::writer::write_accounts;
///
/// let mut ledger = Ledger::new();
/// ledger.create_account("Alice", "100".parse().unwrap()).unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, ledger.list_all()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "account,holder,balance\n1001,Alice,100.00\n");
/// ```
pub fn write_accounts<W, I>(writer: W, accounts: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = AccountSnapshot>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut written = 0usize;
    for snap in accounts {
        wtr.serialize(OutputRow {
            account: snap.number,
            holder: &snap.holder,
            balance: snap.balance.to_string_2dp(),
        })?;
        written += 1;
    }

    // serde only emits the header alongside the first record.
    if written == 0 {
        wtr.write_record(["account", "holder", "balance"])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;

    fn write_to_string(accounts: Vec<AccountSnapshot>) -> String {
        let mut out = Vec::new();
        write_accounts(&mut out, accounts).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn snap(number: u32, holder: &str, cents: i64) -> AccountSnapshot {
        AccountSnapshot {
            number,
            holder: holder.into(),
            balance: Money::from_cents(cents),
        }
    }

    #[test]
    fn writes_header_and_rows_in_given_order() {
        let s = write_to_string(vec![snap(1001, "Alice", 15000), snap(1002, "Bob", 5)]);

        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3, "expected header + 2 rows");
        assert_eq!(lines[0], "account,holder,balance");
        assert_eq!(lines[1], "1001,Alice,150.00");
        assert_eq!(lines[2], "1002,Bob,0.05");
    }

    #[test]
    fn quotes_holders_containing_commas() {
        let s = write_to_string(vec![snap(1001, "Doe, Jane", 0)]);
        assert_eq!(s.lines().nth(1), Some("1001,\"Doe, Jane\",0.00"));
    }

    #[test]
    fn empty_listing_still_has_header() {
        assert_eq!(write_to_string(Vec::new()), "account,holder,balance\n");
    }
}
