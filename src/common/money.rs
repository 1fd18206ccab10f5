use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Sub, SubAssign};

const SCALE: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary amount stored as an integer number of cents.
///
/// Balances never touch binary floating point: text input is parsed through
/// `BigDecimal` and must be a whole number of cents, and every display goes
/// back through `BigDecimal` with two fractional digits.
///
/// # Examples
/// ```
/// use savings_ledger::common::money::Money;
///
/// let amount: Money = "150.5".parse().unwrap();
/// assert_eq!(amount.as_cents(), 15050);
/// assert_eq!(amount.to_string(), "150.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_cents(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `None` when the sum does not fit the cent range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Sub-cent input is rejected rather than rounded, so a tiny negative
        // amount can never turn into zero.
        if bd.with_scale(2) != bd {
            return Err(ParseBigDecimalError::Other(
                "amount has more than 2 decimal places".into(),
            ));
        }

        let scaled = bd * BigDecimal::from(SCALE);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}
