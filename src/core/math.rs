//! Constant product (x * y = k) exchange rate engine.
//!
//! All quotes are exact integer arithmetic on raw reserves. The fee rate is
//! an arbitrary fraction in [0, 1); the fee is taken from the input side of
//! every hop. Rounding is always against the trader: outputs are floored and
//! required inputs are ceiled.

use super::error::RouterError;
use super::fraction::Fraction;
use super::Result;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Splits a fee rate into `(denominator - numerator, denominator)`, the
/// multiplier applied to the input amount and its scale.
pub fn fee_multiplier(fee_rate: &Fraction) -> Result<(BigUint, BigUint)> {
    if fee_rate.is_negative() || *fee_rate >= Fraction::one() {
        return Err(RouterError::InvalidFeeRate);
    }
    // Non-negative numerator and positive denominator at this point
    let numerator = fee_rate
        .numerator()
        .to_biguint()
        .ok_or(RouterError::InvalidFeeRate)?;
    let denominator = fee_rate
        .denominator()
        .to_biguint()
        .ok_or(RouterError::InvalidFeeRate)?;
    Ok((&denominator - &numerator, denominator))
}

/// Output amount received for `amount_in`, after fee.
pub fn quote_output_given_input(
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    amount_in: &BigUint,
    fee_rate: &Fraction,
) -> Result<BigUint> {
    if amount_in.is_zero() {
        return Err(RouterError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(RouterError::InsufficientLiquidity);
    }
    let (fee_complement, fee_denominator) = fee_multiplier(fee_rate)?;

    // amount_in * (1 - fee), kept scaled by the fee denominator
    let amount_in_with_fee = amount_in * &fee_complement;
    let numerator = &amount_in_with_fee * reserve_out;
    let denominator = reserve_in * &fee_denominator + &amount_in_with_fee;

    let amount_out = numerator / denominator;
    if amount_out.is_zero() {
        return Err(RouterError::InsufficientInputAmount);
    }
    Ok(amount_out)
}

/// Input amount required to receive exactly `amount_out`, after fee.
pub fn quote_input_given_output(
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    amount_out: &BigUint,
    fee_rate: &Fraction,
) -> Result<BigUint> {
    if amount_out.is_zero() || amount_out >= reserve_out || reserve_in.is_zero() {
        return Err(RouterError::InsufficientReserves);
    }
    let (fee_complement, fee_denominator) = fee_multiplier(fee_rate)?;
    if fee_complement.is_zero() {
        return Err(RouterError::InvalidFeeRate);
    }

    let numerator = reserve_in * amount_out * &fee_denominator;
    let denominator = (reserve_out - amount_out) * &fee_complement;

    // Round up
    Ok((&numerator + &denominator - BigUint::one()) / denominator)
}
