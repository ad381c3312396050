//! Exact rational numbers over arbitrary precision integers.
//!
//! Fee rates, slippage tolerances and prices are all kept as fractions so no
//! rounding happens until an amount is finally converted back to an integer.

use super::error::RouterError;
use super::Result;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Slippage tolerances and price impacts are plain fractions (5/100 = 5%).
pub type Percent = Fraction;

#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RouterError::DivideByZero);
        }
        // Keep the sign on the numerator so comparisons can cross multiply.
        if denominator.is_negative() {
            Ok(Self {
                numerator: -numerator,
                denominator: -denominator,
            })
        } else {
            Ok(Self {
                numerator,
                denominator,
            })
        }
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Floor of the fraction.
    pub fn quotient(&self) -> BigInt {
        let q = &self.numerator / &self.denominator;
        if self.numerator.is_negative() && !(&self.numerator % &self.denominator).is_zero() {
            q - BigInt::one()
        } else {
            q
        }
    }

    /// Floor of a fraction known to be non-negative, as an unsigned amount.
    /// Negative values clamp to zero.
    pub fn floor_unsigned(&self) -> BigUint {
        self.quotient().to_biguint().unwrap_or_default()
    }

    pub fn invert(&self) -> Result<Fraction> {
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn sub(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn mul(&self, other: &Fraction) -> Fraction {
        Fraction {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn checked_div(&self, other: &Fraction) -> Result<Fraction> {
        Fraction::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Multiplies by an unsigned integer amount.
    pub fn mul_amount(&self, amount: &BigUint) -> Fraction {
        Fraction {
            numerator: &self.numerator * BigInt::from_biguint(Sign::Plus, amount.clone()),
            denominator: self.denominator.clone(),
        }
    }

    /// Decimal rendering rounded towards negative infinity.
    pub fn to_decimal_string(&self, places: u32) -> String {
        let scale = BigInt::from(10u32).pow(places);
        let scaled = Fraction {
            numerator: &self.numerator * &scale,
            denominator: self.denominator.clone(),
        }
        .quotient();
        let negative = scaled.is_negative();
        let digits = scaled.abs().to_string();
        let places = places as usize;
        let body = if places == 0 {
            digits
        } else {
            let padded = format!("{:0>width$}", digits, width = places + 1);
            let (int_part, frac_part) = padded.split_at(padded.len() - places);
            format!("{}.{}", int_part, frac_part)
        };
        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
