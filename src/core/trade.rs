use super::amount::CurrencyAmount;
use super::error::RouterError;
use super::fraction::{Fraction, Percent};
use super::math::fee_multiplier;
use super::pair::Pair;
use super::price::Price;
use super::route::Route;
use super::Result;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// A route plus one fixed side; the other side is derived by walking the
/// route's pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    fee_rate: Fraction,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    execution_price: Price,
    next_mid_price: Option<Price>,
    price_impact: Percent,
}

impl Trade {
    pub fn exact_in(route: Route, amount_in: CurrencyAmount, fee_rate: Fraction) -> Result<Self> {
        Trade::new(route, amount_in, TradeType::ExactInput, fee_rate)
    }

    pub fn exact_out(route: Route, amount_out: CurrencyAmount, fee_rate: Fraction) -> Result<Self> {
        Trade::new(route, amount_out, TradeType::ExactOutput, fee_rate)
    }

    /// Quotes `amount` through every hop of `route`. Any hop that cannot be
    /// quoted fails the whole trade with that hop's error.
    pub fn new(
        route: Route,
        amount: CurrencyAmount,
        trade_type: TradeType,
        fee_rate: Fraction,
    ) -> Result<Self> {
        fee_multiplier(&fee_rate)?;
        let expected = match trade_type {
            TradeType::ExactInput => route.input(),
            TradeType::ExactOutput => route.output(),
        };
        if amount.currency != *expected {
            return Err(RouterError::CurrencyMismatch {
                expected: expected.to_string(),
                actual: amount.currency.to_string(),
            });
        }

        let mut next_pairs: Vec<Pair> = Vec::with_capacity(route.hops());
        let (input_amount, output_amount) = match trade_type {
            TradeType::ExactInput => {
                let mut current = amount.wrapped();
                for pair in route.pairs() {
                    let (amount_out, next_pair) = pair.output_amount(&current, &fee_rate)?;
                    next_pairs.push(next_pair);
                    current = amount_out;
                }
                let output = CurrencyAmount::new(route.output().clone(), current.raw);
                (amount, output)
            }
            TradeType::ExactOutput => {
                let mut current = amount.wrapped();
                for pair in route.pairs().iter().rev() {
                    let (amount_in, next_pair) = pair.input_amount(&current, &fee_rate)?;
                    next_pairs.push(next_pair);
                    current = amount_in;
                }
                next_pairs.reverse();
                let input = CurrencyAmount::new(route.input().clone(), current.raw);
                (input, amount)
            }
        };

        let execution_price = Price::from_amounts(&input_amount, &output_amount)?;
        let price_impact = compute_price_impact(route.mid_price()?, &input_amount, &output_amount)?;
        let next_mid_price = Route::new(next_pairs, route.input().clone(), route.output().clone())
            .ok()
            .and_then(|next| next.mid_price().ok().cloned());

        Ok(Self {
            route,
            trade_type,
            fee_rate,
            input_amount,
            output_amount,
            execution_price,
            next_mid_price,
            price_impact,
        })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn fee_rate(&self) -> &Fraction {
        &self.fee_rate
    }

    pub fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    /// Output per input actually achieved, before slippage.
    pub fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    /// Mid price of the route once this trade has gone through.
    pub fn next_mid_price(&self) -> Option<&Price> {
        self.next_mid_price.as_ref()
    }

    /// Relative shortfall of the output against the route's mid price.
    pub fn price_impact(&self) -> &Percent {
        &self.price_impact
    }

    /// Most input that may be spent given `slippage_tolerance`.
    pub fn maximum_amount_in(&self, slippage_tolerance: &Percent) -> Result<CurrencyAmount> {
        ensure_slippage(slippage_tolerance)?;
        if self.trade_type == TradeType::ExactInput {
            return Ok(self.input_amount.clone());
        }
        let raw = Fraction::one()
            .add(slippage_tolerance)
            .mul_amount(&self.input_amount.raw)
            .floor_unsigned();
        Ok(CurrencyAmount::new(self.input_amount.currency.clone(), raw))
    }

    /// Least output that must be received given `slippage_tolerance`.
    pub fn minimum_amount_out(&self, slippage_tolerance: &Percent) -> Result<CurrencyAmount> {
        ensure_slippage(slippage_tolerance)?;
        if self.trade_type == TradeType::ExactOutput {
            return Ok(self.output_amount.clone());
        }
        let raw = Fraction::one()
            .add(slippage_tolerance)
            .invert()?
            .mul_amount(&self.output_amount.raw)
            .floor_unsigned();
        Ok(CurrencyAmount::new(self.output_amount.currency.clone(), raw))
    }

    pub fn worst_execution_price(&self, slippage_tolerance: &Percent) -> Result<Price> {
        Price::from_amounts(
            &self.maximum_amount_in(slippage_tolerance)?,
            &self.minimum_amount_out(slippage_tolerance)?,
        )
    }
}

fn ensure_slippage(slippage_tolerance: &Percent) -> Result<()> {
    if slippage_tolerance.is_negative() {
        return Err(RouterError::InvalidSlippageTolerance);
    }
    Ok(())
}

fn compute_price_impact(
    mid_price: &Price,
    input_amount: &CurrencyAmount,
    output_amount: &CurrencyAmount,
) -> Result<Percent> {
    let quoted_output = mid_price.ratio().mul_amount(&input_amount.raw);
    quoted_output
        .sub(&output_amount.as_fraction())
        .checked_div(&quoted_output)
}

/// Ranks trades best first: more output, then less input, then fewer hops.
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    b.output_amount
        .raw
        .cmp(&a.output_amount.raw)
        .then_with(|| a.input_amount.raw.cmp(&b.input_amount.raw))
        .then_with(|| a.route.hops().cmp(&b.route.hops()))
}
