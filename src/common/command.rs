use crate::common::money::Money;

/// A single request from a front end to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateAccount { holder: String, initial_deposit: Money },
    ShowAccount { number: u32 },
    Deposit { number: u32, amount: Money },
    Withdraw { number: u32, amount: Money },
    ListAccounts,
    Exit,
}
