use crate::common::money::Money;

/// Recoverable failures of a single ledger operation. The ledger state is left
/// untouched whenever one of these is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{0}")]
    Validation(String),
    #[error("insufficient balance in account {number}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        number: u32,
        balance: Money,
        requested: Money,
    },
    #[error("account {0} not found")]
    NotFound(u32),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
