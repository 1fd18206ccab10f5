pub mod account;
pub mod ledger;
