use crate::{
    common::{command::Command, error::LedgerError, money::Money},
    domain::{account::AccountSnapshot, ledger::Ledger},
};

/// What a successfully applied command produced, for the front end to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { number: u32 },
    Shown(AccountSnapshot),
    Deposited { number: u32, balance: Money },
    Withdrawn { number: u32, balance: Money },
    Listed(Vec<AccountSnapshot>),
    Exit,
}

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, ledger: &mut Ledger, command: Command) -> Result<Outcome, LedgerError> {
        tracing::debug!(?command, "dispatching");
        let outcome = match command {
            Command::CreateAccount {
                holder,
                initial_deposit,
            } => Outcome::Created {
                number: ledger.create_account(holder, initial_deposit)?,
            },
            Command::ShowAccount { number } => Outcome::Shown(ledger.find(number)?),
            Command::Deposit { number, amount } => Outcome::Deposited {
                number,
                balance: ledger.deposit(number, amount)?,
            },
            Command::Withdraw { number, amount } => Outcome::Withdrawn {
                number,
                balance: ledger.withdraw(number, amount)?,
            },
            Command::ListAccounts => Outcome::Listed(ledger.list_all().collect()),
            Command::Exit => Outcome::Exit,
        };
        Ok(outcome)
    }
}
