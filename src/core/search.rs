//! Best route search over a set of pair snapshots.
//!
//! Exploration is a depth-first walk where every branch owns its own list of
//! unused pairs and its own partial route, so branches never observe each
//! other. The only shared state is the bounded result set all finished
//! trades are merged into.

use super::amount::CurrencyAmount;
use super::currency::{Currency, Token};
use super::error::RouterError;
use super::fraction::Fraction;
use super::math::fee_multiplier;
use super::pair::Pair;
use super::route::Route;
use super::trade::{trade_comparator, Trade};
use super::Result;
use crate::core::constants::{DEFAULT_MAX_HOPS, DEFAULT_MAX_NUM_RESULTS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTradeOptions {
    /// How many trades to return at most
    pub max_num_results: usize,
    /// Longest route considered, in pairs
    pub max_hops: usize,
}

impl Default for BestTradeOptions {
    fn default() -> Self {
        Self {
            max_num_results: DEFAULT_MAX_NUM_RESULTS,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

/// Fixed capacity list of trades kept sorted best first.
#[derive(Debug)]
pub struct BoundedTrades {
    capacity: usize,
    trades: Vec<Trade>,
}

impl BoundedTrades {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            trades: Vec::with_capacity(capacity + 1),
        }
    }

    /// Inserts `trade` in rank order. Returns whichever trade fell off the
    /// end, which may be `trade` itself.
    pub fn insert(&mut self, trade: Trade) -> Option<Trade> {
        if self.capacity == 0 {
            return Some(trade);
        }
        let full = self.trades.len() >= self.capacity;
        if full {
            if let Some(worst) = self.trades.last() {
                if trade_comparator(worst, &trade) != Ordering::Greater {
                    return Some(trade);
                }
            }
        }
        // after every equal-ranked trade already present
        let index = self
            .trades
            .partition_point(|existing| trade_comparator(existing, &trade) != Ordering::Greater);
        self.trades.insert(index, trade);
        if self.trades.len() > self.capacity {
            self.trades.pop()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn as_slice(&self) -> &[Trade] {
        &self.trades
    }

    pub fn into_vec(self) -> Vec<Trade> {
        self.trades
    }
}

/// Best trades spending exactly `amount_in` to receive `currency_out`,
/// best first.
pub fn best_trade_exact_in(
    pairs: &[Pair],
    amount_in: &CurrencyAmount,
    currency_out: &Currency,
    fee_rate: &Fraction,
    options: BestTradeOptions,
) -> Result<Vec<Trade>> {
    validate_search(pairs, fee_rate, options)?;
    debug!(
        pairs = pairs.len(),
        max_hops = options.max_hops,
        "searching exact input {} -> {}",
        amount_in,
        currency_out
    );

    let search = ExactInSearch {
        amount_in,
        currency_out,
        fee_rate,
        max_hops: options.max_hops,
    };
    let mut best = BoundedTrades::new(options.max_num_results);
    search.explore(pairs.iter().collect(), Vec::new(), amount_in.wrapped(), &mut best)?;

    debug!(results = best.len(), "exact input search finished");
    Ok(best.into_vec())
}

/// Best trades receiving exactly `amount_out` in exchange for `currency_in`,
/// cheapest first.
pub fn best_trade_exact_out(
    pairs: &[Pair],
    currency_in: &Currency,
    amount_out: &CurrencyAmount,
    fee_rate: &Fraction,
    options: BestTradeOptions,
) -> Result<Vec<Trade>> {
    validate_search(pairs, fee_rate, options)?;
    debug!(
        pairs = pairs.len(),
        max_hops = options.max_hops,
        "searching exact output {} -> {}",
        currency_in,
        amount_out
    );

    let search = ExactOutSearch {
        currency_in,
        amount_out,
        fee_rate,
        max_hops: options.max_hops,
    };
    let mut best = BoundedTrades::new(options.max_num_results);
    search.explore(pairs.iter().collect(), Vec::new(), amount_out.wrapped(), &mut best)?;

    debug!(results = best.len(), "exact output search finished");
    Ok(best.into_vec())
}

fn validate_search(pairs: &[Pair], fee_rate: &Fraction, options: BestTradeOptions) -> Result<()> {
    if pairs.is_empty() {
        return Err(RouterError::EmptyPairSet);
    }
    if options.max_hops < 1 {
        return Err(RouterError::InvalidMaxHops);
    }
    if options.max_num_results < 1 {
        return Err(RouterError::InvalidMaxResults);
    }
    fee_multiplier(fee_rate)?;

    let mut seen: HashSet<(&Token, &Token)> = HashSet::with_capacity(pairs.len());
    for pair in pairs {
        if !seen.insert((pair.token0(), pair.token1())) {
            return Err(RouterError::DuplicatePair(
                pair.token0().to_string(),
                pair.token1().to_string(),
            ));
        }
    }
    Ok(())
}

/// `remaining` minus the pair at `index`.
fn without<'p>(remaining: &[&'p Pair], index: usize) -> Vec<&'p Pair> {
    remaining[..index]
        .iter()
        .chain(remaining[index + 1..].iter())
        .copied()
        .collect()
}

struct ExactInSearch<'a> {
    amount_in: &'a CurrencyAmount,
    currency_out: &'a Currency,
    fee_rate: &'a Fraction,
    max_hops: usize,
}

impl ExactInSearch<'_> {
    /// Extends the partial route `current` (which turns `amount_in` into
    /// `running`) by every unused pair that accepts `running`.
    fn explore(
        &self,
        remaining: Vec<&Pair>,
        current: Vec<Pair>,
        running: CurrencyAmount,
        best: &mut BoundedTrades,
    ) -> Result<()> {
        for (i, pair) in remaining.iter().enumerate() {
            if !pair.involves_currency(&running.currency) || !pair.has_liquidity() {
                continue;
            }
            let amount_out = match pair.output_amount(&running, self.fee_rate) {
                Ok((amount_out, _)) => amount_out,
                Err(err) if err.is_quote_failure() => {
                    trace!(hop = current.len() + 1, error = %err, "pruning branch");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let mut pairs = current.clone();
            pairs.push((*pair).clone());

            if amount_out.currency.wrapped() == self.currency_out.wrapped() {
                let route = Route::new(
                    pairs.clone(),
                    self.amount_in.currency.clone(),
                    self.currency_out.clone(),
                )?;
                let trade = Trade::exact_in(route, self.amount_in.clone(), self.fee_rate.clone())?;
                best.insert(trade);
            }
            if pairs.len() < self.max_hops && remaining.len() > 1 {
                self.explore(without(&remaining, i), pairs, amount_out, best)?;
            }
        }
        Ok(())
    }
}

struct ExactOutSearch<'a> {
    currency_in: &'a Currency,
    amount_out: &'a CurrencyAmount,
    fee_rate: &'a Fraction,
    max_hops: usize,
}

impl ExactOutSearch<'_> {
    /// Extends the partial route `current` backwards by every unused pair
    /// that can produce `running`.
    fn explore(
        &self,
        remaining: Vec<&Pair>,
        current: Vec<Pair>,
        running: CurrencyAmount,
        best: &mut BoundedTrades,
    ) -> Result<()> {
        for (i, pair) in remaining.iter().enumerate() {
            if !pair.involves_currency(&running.currency) || !pair.has_liquidity() {
                continue;
            }
            let amount_in = match pair.input_amount(&running, self.fee_rate) {
                Ok((amount_in, _)) => amount_in,
                Err(err) if err.is_quote_failure() => {
                    trace!(hop = current.len() + 1, error = %err, "pruning branch");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let mut pairs = Vec::with_capacity(current.len() + 1);
            pairs.push((*pair).clone());
            pairs.extend(current.iter().cloned());

            if amount_in.currency.wrapped() == self.currency_in.wrapped() {
                let route = Route::new(
                    pairs.clone(),
                    self.currency_in.clone(),
                    self.amount_out.currency.clone(),
                )?;
                let trade =
                    Trade::exact_out(route, self.amount_out.clone(), self.fee_rate.clone())?;
                best.insert(trade);
            }
            if pairs.len() < self.max_hops && remaining.len() > 1 {
                self.explore(without(&remaining, i), pairs, amount_in, best)?;
            }
        }
        Ok(())
    }
}
