use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Represents a monetary value in the account's single currency.
///
/// This is a wrapper around `rust_decimal::Decimal` so that balances, fees and
/// payments cannot be confused with rates, and so that every amount renders
/// with exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Rounds to whole cents using round-half-to-even.
    pub fn round_cents(self) -> Self {
        let rounded = self.0.round_dp(2);
        if rounded.is_zero() {
            Self::ZERO
        } else {
            Self(rounded)
        }
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns `None` if the sum does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Applies a rate to an amount, or `None` on overflow. The result is not
    /// rounded.
    pub fn checked_mul_rate(self, rate: Decimal) -> Option<Self> {
        self.0.checked_mul(rate).map(Self)
    }

    /// Adds up `amounts`, or `None` if any partial sum overflows.
    pub fn checked_total<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, m| acc.checked_add(m))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Applies a rate to an amount. The result is not rounded.
impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rate: Decimal) -> Self::Output {
        Self(self.0 * rate)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_cents().0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The fixed terms of the card account a schedule is computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountParameters {
    /// Balance owed at month zero.
    pub starting_balance: Money,
    /// Monthly interest rate as a fraction (2.08% is `0.0208`).
    pub monthly_rate: Decimal,
    /// Charged every month regardless of the balance.
    pub admin_fee: Money,
}

impl AccountParameters {
    /// Builds parameters from a user-facing monthly percentage rate.
    pub fn new(
        starting_balance: Money,
        monthly_rate_percent: Decimal,
        admin_fee: Money,
    ) -> Self {
        Self::from_fraction(
            starting_balance,
            monthly_rate_percent / dec!(100),
            admin_fee,
        )
    }

    pub fn from_fraction(
        starting_balance: Money,
        monthly_rate: Decimal,
        admin_fee: Money,
    ) -> Self {
        Self {
            starting_balance,
            monthly_rate,
            admin_fee,
        }
    }
}
