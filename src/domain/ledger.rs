use std::collections::BTreeMap;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::account::{Account, AccountSnapshot},
};

/// Number handed to the first account of every new ledger.
pub const FIRST_ACCOUNT_NUMBER: u32 = 1001;

/// In-memory registry of savings accounts.
///
/// Accounts are keyed by number in a `BTreeMap`. Numbers are issued in
/// increasing order, so iteration order is also creation order.
#[derive(Debug)]
pub struct Ledger {
    accounts: BTreeMap<u32, Account>,
    next_number: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_number: FIRST_ACCOUNT_NUMBER,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Opens an account and returns its number.
    ///
    /// The deposit is validated before a number is drawn, so a rejected
    /// creation leaves the counter where it was.
    pub fn create_account(
        &mut self,
        holder: impl Into<String>,
        initial_deposit: Money,
    ) -> Result<u32, LedgerError> {
        let holder = holder.into();
        let number = self.next_number;
        let account = Account::open(number, holder, initial_deposit).inspect_err(|e| {
            tracing::warn!(error = %e, "account creation rejected");
        })?;
        self.next_number = number
            .checked_add(1)
            .ok_or_else(|| LedgerError::Validation("account numbers exhausted".into()))?;
        tracing::info!(number, holder = account.holder(), balance = %account.balance(), "account created");
        self.accounts.insert(number, account);
        Ok(number)
    }

    pub fn find(&self, number: u32) -> Result<AccountSnapshot, LedgerError> {
        self.accounts
            .get(&number)
            .map(Account::describe)
            .ok_or(LedgerError::NotFound(number))
    }

    pub fn deposit(&mut self, number: u32, amount: Money) -> Result<Money, LedgerError> {
        let balance = self.account_mut(number)?.deposit(amount).inspect_err(|e| {
            tracing::warn!(number, %amount, error = %e, "deposit rejected");
        })?;
        tracing::info!(number, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    pub fn withdraw(&mut self, number: u32, amount: Money) -> Result<Money, LedgerError> {
        let balance = self.account_mut(number)?.withdraw(amount).inspect_err(|e| {
            tracing::warn!(number, %amount, error = %e, "withdrawal rejected");
        })?;
        tracing::info!(number, %amount, %balance, "withdrawal applied");
        Ok(balance)
    }

    /// Snapshots of every account in ascending number order.
    ///
    /// The iterator is lazy; calling `list_all` again starts over.
    pub fn list_all(&self) -> impl Iterator<Item = AccountSnapshot> + Clone + '_ {
        self.accounts.values().map(Account::describe)
    }

    fn account_mut(&mut self, number: u32) -> Result<&mut Account, LedgerError> {
        self.accounts.get_mut(&number).ok_or_else(|| {
            tracing::warn!(number, "account not found");
            LedgerError::NotFound(number)
        })
    }
}
