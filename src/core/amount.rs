use super::currency::Currency;
use super::error::RouterError;
use super::fraction::Fraction;
use super::Result;
use num_bigint::BigUint;
use std::fmt;

/// A raw amount of a currency, in its smallest unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub raw: BigUint,
}

impl CurrencyAmount {
    pub fn new(currency: impl Into<Currency>, raw: impl Into<BigUint>) -> Self {
        Self {
            currency: currency.into(),
            raw: raw.into(),
        }
    }

    /// Same amount, denominated in the wrapped token.
    pub fn wrapped(&self) -> CurrencyAmount {
        match self.currency {
            Currency::Native(_) => CurrencyAmount {
                currency: Currency::Token(self.currency.wrapped().clone()),
                raw: self.raw.clone(),
            },
            Currency::Token(_) => self.clone(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.raw == BigUint::ZERO
    }

    pub fn add(&self, other: &CurrencyAmount) -> Result<CurrencyAmount> {
        self.ensure_same_currency(other)?;
        Ok(CurrencyAmount {
            currency: self.currency.clone(),
            raw: &self.raw + &other.raw,
        })
    }

    pub fn checked_sub(&self, other: &CurrencyAmount) -> Result<CurrencyAmount> {
        self.ensure_same_currency(other)?;
        if other.raw > self.raw {
            return Err(RouterError::InsufficientReserves);
        }
        Ok(CurrencyAmount {
            currency: self.currency.clone(),
            raw: &self.raw - &other.raw,
        })
    }

    pub fn as_fraction(&self) -> Fraction {
        Fraction::from_integer(self.raw.clone())
    }

    /// Human readable amount using the currency's decimals.
    pub fn to_exact(&self) -> String {
        let decimals = self.currency.decimals() as u32;
        match Fraction::new(self.raw.clone(), BigUint::from(10u32).pow(decimals)) {
            Ok(fraction) => fraction.to_decimal_string(decimals),
            Err(_) => self.raw.to_string(),
        }
    }

    fn ensure_same_currency(&self, other: &CurrencyAmount) -> Result<()> {
        if self.currency != other.currency {
            return Err(RouterError::CurrencyMismatch {
                expected: self.currency.to_string(),
                actual: other.currency.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.raw, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::Token;

    fn token(address: &str, decimals: u8) -> Token {
        Token::new(1, address, decimals, None).unwrap()
    }

    #[test]
    fn add_and_sub_need_the_same_currency() {
        let a = CurrencyAmount::new(token("0x1", 18), 700u32);
        let b = CurrencyAmount::new(token("0x1", 18), 300u32);
        assert_eq!(a.add(&b).unwrap().raw, BigUint::from(1000u32));
        assert_eq!(a.checked_sub(&b).unwrap().raw, BigUint::from(400u32));

        let other = CurrencyAmount::new(token("0x2", 18), 300u32);
        assert!(matches!(
            a.add(&other),
            Err(RouterError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            a.checked_sub(&other),
            Err(RouterError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn sub_below_zero_fails() {
        let a = CurrencyAmount::new(token("0x1", 18), 300u32);
        let b = CurrencyAmount::new(token("0x1", 18), 301u32);
        assert_eq!(a.checked_sub(&b).unwrap_err(), RouterError::InsufficientReserves);
        assert!(a.checked_sub(&a).unwrap().is_zero());
    }

    #[test]
    fn exact_rendering_uses_decimals() {
        let amount = CurrencyAmount::new(token("0x1", 18), 1_500_000_000_000_000_000u64);
        assert_eq!(amount.to_exact(), "1.500000000000000000");
        let usdc = CurrencyAmount::new(token("0x2", 6), 2_500_001u64);
        assert_eq!(usdc.to_exact(), "2.500001");
        let whole = CurrencyAmount::new(token("0x3", 0), 42u32);
        assert_eq!(whole.to_exact(), "42");
    }
}
