//! Money type for representing currency amounts
//!
//! Internally stores amounts in paisa (i64, 1/100 rupee) to avoid
//! floating-point precision issues. Provides safe arithmetic operations,
//! basis-point ratios, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// One hundred percent, expressed in basis points.
pub const BPS_SCALE: i64 = 10_000;

/// Represents a monetary amount stored as paisa (hundredths of a rupee)
///
/// Using i64 paisa keeps all money arithmetic exact and supports amounts
/// far beyond any personal ledger (both positive and negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paisa
    ///
    /// # Examples
    /// ```
    /// use finsight::models::Money;
    /// let amount = Money::from_paisa(1250); // Rs 12.50
    /// ```
    pub const fn from_paisa(paisa: i64) -> Self {
        Self(paisa)
    }

    /// Create a Money amount from whole rupees
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paisa
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paisa portion (0-99)
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// This amount as a share of `whole`, in basis points.
    ///
    /// Truncating integer division; 0 when `whole` is zero, so callers
    /// never guard the denominator themselves.
    pub const fn ratio_bps(&self, whole: Money) -> i64 {
        if whole.0 == 0 {
            0
        } else {
            self.0 * BPS_SCALE / whole.0
        }
    }

    /// Scale this amount by a basis-point factor (truncating)
    pub const fn scale_bps(&self, bps: i64) -> Self {
        Self(self.0 * bps / BPS_SCALE)
    }

    /// Divide evenly, exposing the remainder for display rounding
    pub const fn div_rem(&self, divisor: i64) -> (Money, Money) {
        if divisor == 0 {
            (Money::zero(), Money::zero())
        } else {
            (Self(self.0 / divisor), Self(self.0 % divisor))
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "12.50", "-12.50", "Rs 12.50", "12"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Remove currency prefix if present
        let s = s
            .strip_prefix("Rs")
            .map(str::trim_start)
            .unwrap_or(s);

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let paisa = if s.contains('.') {
            // Decimal format: "12.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let rupees: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate paisa to 2 digits
            let paisa_str = parts[1];
            let paisa: i64 = match paisa_str.len() {
                0 => 0,
                1 => {
                    paisa_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => paisa_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            rupees * 100 + paisa
        } else {
            // Integer format - assume rupees
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -paisa } else { paisa }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "Rs -{}.{:02}", self.rupees().abs(), self.paisa_part())
        } else {
            write!(f, "Rs {}.{:02}", self.rupees(), self.paisa_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
