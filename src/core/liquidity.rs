//! Liquidity provider share math for constant product pairs.

use super::amount::CurrencyAmount;
use super::constants::{MINIMUM_LIQUIDITY, PROTOCOL_FEE_DIVISOR};
use super::currency::Token;
use super::error::RouterError;
use super::pair::Pair;
use super::Result;
use num_bigint::BigUint;
use num_traits::Zero;

impl Pair {
    /// Liquidity tokens minted for depositing `amount_a` and `amount_b` into
    /// a pool whose liquidity token has `total_supply` outstanding.
    pub fn liquidity_minted(
        &self,
        total_supply: &BigUint,
        amount_a: &CurrencyAmount,
        amount_b: &CurrencyAmount,
    ) -> Result<BigUint> {
        let token_a = amount_a.currency.wrapped();
        let token_b = amount_b.currency.wrapped();
        let ((token0, amount0), (token1, amount1)) = if token_a.sorts_before(token_b)? {
            ((token_a, &amount_a.raw), (token_b, &amount_b.raw))
        } else {
            ((token_b, &amount_b.raw), (token_a, &amount_a.raw))
        };
        if token0 != self.token0() {
            return Err(RouterError::InvalidToken(token0.to_string()));
        }
        if token1 != self.token1() {
            return Err(RouterError::InvalidToken(token1.to_string()));
        }

        let liquidity = if total_supply.is_zero() {
            let root = (amount0 * amount1).sqrt();
            let minimum = BigUint::from(MINIMUM_LIQUIDITY);
            if root <= minimum {
                return Err(RouterError::InsufficientInputAmount);
            }
            root - minimum
        } else {
            let reserve0 = self.reserve0().raw;
            let reserve1 = self.reserve1().raw;
            if reserve0.is_zero() || reserve1.is_zero() {
                return Err(RouterError::InsufficientLiquidity);
            }
            let share0 = amount0 * total_supply / reserve0;
            let share1 = amount1 * total_supply / reserve1;
            share0.min(share1)
        };

        if liquidity.is_zero() {
            return Err(RouterError::InsufficientInputAmount);
        }
        Ok(liquidity)
    }

    /// Amount of `token` redeemable for `liquidity` out of `total_supply`.
    ///
    /// With the protocol fee switched on, pass the pool's last recorded
    /// invariant as `k_last`; the fee liquidity the pool would mint on the
    /// next deposit is added to the supply first.
    pub fn liquidity_value(
        &self,
        token: &Token,
        total_supply: &BigUint,
        liquidity: &BigUint,
        k_last: Option<&BigUint>,
    ) -> Result<CurrencyAmount> {
        let reserve = self.reserve_of(token)?;
        if liquidity > total_supply {
            return Err(RouterError::InsufficientReserves);
        }

        let total_supply_adjusted = match k_last {
            Some(k_last) if !k_last.is_zero() => {
                let root_k = (self.reserve0().raw * self.reserve1().raw).sqrt();
                let root_k_last = k_last.sqrt();
                if root_k > root_k_last {
                    let numerator = total_supply * (&root_k - &root_k_last);
                    let denominator = &root_k * BigUint::from(PROTOCOL_FEE_DIVISOR) + &root_k_last;
                    total_supply + numerator / denominator
                } else {
                    total_supply.clone()
                }
            }
            _ => total_supply.clone(),
        };
        if total_supply_adjusted.is_zero() {
            return Err(RouterError::DivideByZero);
        }

        Ok(CurrencyAmount::new(
            token.clone(),
            liquidity * reserve.raw / total_supply_adjusted,
        ))
    }
}
