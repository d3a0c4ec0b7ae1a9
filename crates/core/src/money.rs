//! Money value object.
//!
//! Amounts are stored in the smallest currency unit (cents), so
//! `unit price x quantity` is exact and "round to two decimals" never
//! accumulates float error. Percentages round half-up at the cent.

use core::fmt;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative monetary amount in cents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a unit count.
    pub fn times(self, quantity: u32) -> DomainResult<Money> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Money)
            .ok_or_else(|| DomainError::validation("amount overflow"))
    }

    /// `pct` percent of this amount, rounded half-up at the cent.
    pub fn percent(self, pct: u8) -> Money {
        let raw = u128::from(self.0) * u128::from(pct);
        Money(((raw + 50) / 100) as u64)
    }

    /// Subtraction clamped at zero. Callers only subtract amounts derived
    /// from `self` (a discount never exceeds its gross).
    pub fn minus(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse a plain decimal amount ("12", "12.5", "12.34"), with at most
    /// two fraction digits. A leading `$` is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('$');
        if s.is_empty() {
            return Err(DomainError::validation("amount is empty"));
        }
        if s.starts_with('-') {
            return Err(DomainError::validation("amount must be non-negative"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if frac.len() > 2 {
            return Err(DomainError::validation(
                "amount supports at most two decimal places",
            ));
        }
        if whole.is_empty() && frac.is_empty() {
            return Err(DomainError::validation("amount is empty"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!("invalid amount: {s:?}")));
        }

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|e| DomainError::validation(format!("invalid amount: {e}")))?
        };
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|e| {
                DomainError::validation(format!("invalid amount: {e}"))
            })? * 10,
            _ => frac
                .parse()
                .map_err(|e| DomainError::validation(format!("invalid amount: {e}")))?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(|| DomainError::validation("amount overflow"))
    }
}
