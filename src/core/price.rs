use super::amount::CurrencyAmount;
use super::currency::Currency;
use super::error::RouterError;
use super::fraction::Fraction;
use super::Result;
use num_bigint::{BigInt, BigUint};
use std::fmt;

/// How much of `quote` one raw unit of `base` is worth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Price {
    pub base: Currency,
    pub quote: Currency,
    ratio: Fraction,
}

impl Price {
    /// `denominator` is the base side and `numerator` the quote side, so
    /// `Price::new(a, b, reserve_a, reserve_b)` is the pool price of `a`.
    pub fn new(
        base: impl Into<Currency>,
        quote: impl Into<Currency>,
        denominator: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
    ) -> Result<Self> {
        Ok(Self {
            base: base.into(),
            quote: quote.into(),
            ratio: Fraction::new(numerator, denominator)?,
        })
    }

    pub fn from_amounts(base: &CurrencyAmount, quote: &CurrencyAmount) -> Result<Self> {
        Price::new(
            base.currency.clone(),
            quote.currency.clone(),
            base.raw.clone(),
            quote.raw.clone(),
        )
    }

    /// Same ratio, reported against different (equivalent) currencies, e.g.
    /// the native asset in place of its wrapped token.
    pub(crate) fn relabel(self, base: Currency, quote: Currency) -> Price {
        Price {
            base,
            quote,
            ratio: self.ratio,
        }
    }

    /// Raw quote-per-base ratio, not adjusted for decimals.
    pub fn ratio(&self) -> &Fraction {
        &self.ratio
    }

    pub fn invert(&self) -> Result<Price> {
        Ok(Price {
            base: self.quote.clone(),
            quote: self.base.clone(),
            ratio: self.ratio.invert()?,
        })
    }

    /// Chains two prices: (a -> b) * (b -> c) = (a -> c).
    pub fn multiply(&self, other: &Price) -> Result<Price> {
        if self.quote.wrapped() != other.base.wrapped() {
            return Err(RouterError::CurrencyMismatch {
                expected: self.quote.to_string(),
                actual: other.base.to_string(),
            });
        }
        Ok(Price {
            base: self.base.clone(),
            quote: other.quote.clone(),
            ratio: self.ratio.mul(&other.ratio),
        })
    }

    /// Converts an amount of the base currency into the quote currency,
    /// rounding down.
    pub fn quote(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount> {
        if amount.currency.wrapped() != self.base.wrapped() {
            return Err(RouterError::CurrencyMismatch {
                expected: self.base.to_string(),
                actual: amount.currency.to_string(),
            });
        }
        Ok(CurrencyAmount {
            currency: self.quote.clone(),
            raw: self.ratio.mul_amount(&amount.raw).floor_unsigned(),
        })
    }

    /// Ratio in whole units, i.e. scaled by the decimals difference.
    pub fn adjusted_ratio(&self) -> Fraction {
        let base_scale =
            Fraction::from_integer(BigUint::from(10u32).pow(self.base.decimals() as u32));
        let quote_scale =
            Fraction::from_integer(BigUint::from(10u32).pow(self.quote.decimals() as u32));
        // quote_scale is never zero
        self.ratio
            .mul(&base_scale)
            .checked_div(&quote_scale)
            .unwrap_or_else(|_| self.ratio.clone())
    }

    pub fn to_fixed(&self, places: u32) -> String {
        self.adjusted_ratio().to_decimal_string(places)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.to_fixed(6), self.quote, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::Token;

    fn token(address: &str, decimals: u8) -> Currency {
        Token::new(1, address, decimals, None).unwrap().into()
    }

    #[test]
    fn quotes_and_inverts() {
        let price = Price::new(token("0x1", 18), token("0x2", 18), 100, 69).unwrap();
        let quoted = price.quote(&CurrencyAmount::new(token("0x1", 18), 1000u32)).unwrap();
        assert_eq!(quoted.raw, BigUint::from(690u32));
        assert_eq!(quoted.currency, token("0x2", 18));
        let inverted = price.invert().unwrap();
        assert_eq!(inverted.base, token("0x2", 18));
        assert_eq!(inverted.ratio(), &Fraction::new(100, 69).unwrap());
    }

    #[test]
    fn multiply_requires_matching_currencies() {
        let ab = Price::new(token("0x1", 18), token("0x2", 18), 1, 2).unwrap();
        let bc = Price::new(token("0x2", 18), token("0x3", 18), 1, 3).unwrap();
        let ac = ab.multiply(&bc).unwrap();
        assert_eq!(ac.ratio(), &Fraction::from_integer(6));
        assert!(bc.multiply(&ab).is_err());
    }

    #[test]
    fn adjusts_for_decimals() {
        // 1 whole unit of an 18-decimal token for 2000 whole units of a 6-decimal token
        let price = Price::new(
            token("0x1", 18),
            token("0x2", 6),
            BigInt::from(10u64).pow(18),
            BigInt::from(2_000_000_000u64),
        )
        .unwrap();
        assert_eq!(price.to_fixed(2), "2000.00");
    }
}
