use crate::common::{error::LedgerError, money::Money};

/// A single holder's savings balance. Only the `Ledger` creates and mutates these.
#[derive(Debug, Clone)]
pub struct Account {
    number: u32,
    holder: String,
    /// Never negative.
    balance: Money,
}

/// Read-only copy of an account's display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub number: u32,
    pub holder: String,
    pub balance: Money,
}

impl Account {
    pub fn open(number: u32, holder: String, initial_deposit: Money) -> Result<Self, LedgerError> {
        if initial_deposit.is_negative() {
            return Err(LedgerError::Validation(
                "initial deposit cannot be negative".into(),
            ));
        }
        Ok(Self {
            number,
            holder,
            balance: initial_deposit,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Money, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation(
                "deposit amount must be positive".into(),
            ));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Validation("deposit exceeds the maximum balance".into()))?;
        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Money, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation(
                "withdrawal amount must be positive".into(),
            ));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                number: self.number,
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    pub fn describe(&self) -> AccountSnapshot {
        AccountSnapshot {
            number: self.number,
            holder: self.holder.clone(),
            balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn open(initial: &str) -> Account {
        Account::open(1001, "Alice".into(), money(initial)).unwrap()
    }

    #[test]
    fn open_sets_initial_balance() {
        let acc = open("100.0");
        assert_eq!(acc.number(), 1001);
        assert_eq!(acc.holder(), "Alice");
        assert_eq!(acc.balance(), money("100.00"));
    }

    #[test]
    fn open_accepts_zero_initial_deposit() {
        assert_eq!(open("0").balance(), Money::zero());
    }

    #[test]
    fn open_rejects_negative_initial_deposit() {
        let err = Account::open(1001, "Bob".into(), money("-5.0")).unwrap_err();
        assert_eq!(
            err,
            LedgerError::Validation("initial deposit cannot be negative".into())
        );
    }

    #[test]
    fn deposit_increases_balance() {
        let mut acc = open("100");
        assert_eq!(acc.deposit(money("50")).unwrap(), money("150"));
        assert_eq!(acc.balance(), money("150"));
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut acc = open("100");
        for amount in ["0", "-1", "-0.01"] {
            let err = acc.deposit(money(amount)).unwrap_err();
            assert!(matches!(err, LedgerError::Validation(_)), "amount {amount}");
        }
        assert_eq!(acc.balance(), money("100"));
    }

    #[test]
    fn deposit_overflow_is_rejected_and_balance_kept() {
        let mut acc = Account::open(1001, "Alice".into(), Money::from_cents(i64::MAX - 1)).unwrap();
        let err = acc.deposit(Money::from_cents(2)).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(acc.balance(), Money::from_cents(i64::MAX - 1));
    }

    #[test]
    fn withdraw_decreases_balance_down_to_zero() {
        let mut acc = open("150");
        assert_eq!(acc.withdraw(money("100")).unwrap(), money("50"));
        assert_eq!(acc.withdraw(money("50")).unwrap(), Money::zero());
    }

    #[test]
    fn withdraw_more_than_balance_fails_without_change() {
        let mut acc = open("150");
        let err = acc.withdraw(money("200")).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                number: 1001,
                balance: money("150"),
                requested: money("200"),
            }
        );
        assert_eq!(acc.balance(), money("150"));
    }

    #[test]
    fn withdraw_rejects_non_positive_even_on_empty_account() {
        let mut acc = open("0");
        let err = acc.withdraw(Money::zero()).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn describe_copies_display_fields() {
        let mut acc = open("10");
        let snap = acc.describe();
        acc.deposit(money("5")).unwrap();

        assert_eq!(
            snap,
            AccountSnapshot {
                number: 1001,
                holder: "Alice".into(),
                balance: money("10"),
            }
        );
    }
}
