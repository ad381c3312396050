use super::amount::CurrencyAmount;
use super::currency::{Currency, Token};
use super::error::RouterError;
use super::fraction::Fraction;
use super::math::{quote_input_given_output, quote_output_given_input};
use super::price::Price;
use super::Result;
use num_bigint::BigUint;

/// Reserve snapshot of a constant product pool.
///
/// Tokens are stored in canonical order (lower address first), so two
/// snapshots of the same pool always line up field by field. Quoting never
/// mutates a pair; it returns the post-trade snapshot instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    token0: Token,
    token1: Token,
    reserve0: BigUint,
    reserve1: BigUint,
}

impl Pair {
    pub fn new(amount_a: CurrencyAmount, amount_b: CurrencyAmount) -> Result<Self> {
        let token_a = amount_a.currency.wrapped().clone();
        let token_b = amount_b.currency.wrapped().clone();
        if token_a.sorts_before(&token_b)? {
            Ok(Self {
                token0: token_a,
                token1: token_b,
                reserve0: amount_a.raw,
                reserve1: amount_b.raw,
            })
        } else {
            Ok(Self {
                token0: token_b,
                token1: token_a,
                reserve0: amount_b.raw,
                reserve1: amount_a.raw,
            })
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.token0.chain_id
    }

    pub fn token0(&self) -> &Token {
        &self.token0
    }

    pub fn token1(&self) -> &Token {
        &self.token1
    }

    pub fn reserve0(&self) -> CurrencyAmount {
        CurrencyAmount::new(self.token0.clone(), self.reserve0.clone())
    }

    pub fn reserve1(&self) -> CurrencyAmount {
        CurrencyAmount::new(self.token1.clone(), self.reserve1.clone())
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        *token == self.token0 || *token == self.token1
    }

    pub fn involves_currency(&self, currency: &Currency) -> bool {
        self.involves_token(currency.wrapped())
    }

    /// Reserve held for `token`.
    pub fn reserve_of(&self, token: &Token) -> Result<CurrencyAmount> {
        if *token == self.token0 {
            Ok(self.reserve0())
        } else if *token == self.token1 {
            Ok(self.reserve1())
        } else {
            Err(RouterError::InvalidToken(token.to_string()))
        }
    }

    /// The token on the other side of the pool from `token`.
    pub fn other_token(&self, token: &Token) -> Result<&Token> {
        if *token == self.token0 {
            Ok(&self.token1)
        } else if *token == self.token1 {
            Ok(&self.token0)
        } else {
            Err(RouterError::InvalidToken(token.to_string()))
        }
    }

    pub fn has_liquidity(&self) -> bool {
        self.reserve0 != BigUint::ZERO && self.reserve1 != BigUint::ZERO
    }

    /// Price of token0 in token1. Fails if token0's reserve is empty.
    pub fn token0_price(&self) -> Result<Price> {
        Price::new(
            self.token0.clone(),
            self.token1.clone(),
            self.reserve0.clone(),
            self.reserve1.clone(),
        )
    }

    /// Price of token1 in token0. Fails if token1's reserve is empty.
    pub fn token1_price(&self) -> Result<Price> {
        Price::new(
            self.token1.clone(),
            self.token0.clone(),
            self.reserve1.clone(),
            self.reserve0.clone(),
        )
    }

    /// Spot price of `currency` in terms of the other token of the pair.
    pub fn price_of(&self, currency: &Currency) -> Result<Price> {
        let token = currency.wrapped();
        if *token == self.token0 {
            self.token0_price()
        } else if *token == self.token1 {
            self.token1_price()
        } else {
            Err(RouterError::InvalidToken(currency.to_string()))
        }
    }

    /// Quotes a swap of `input_amount` through this pool. Returns the output
    /// and the pool as it would look after the swap.
    pub fn output_amount(
        &self,
        input_amount: &CurrencyAmount,
        fee_rate: &Fraction,
    ) -> Result<(CurrencyAmount, Pair)> {
        let token_in = input_amount.currency.wrapped();
        let (reserve_in, reserve_out) = self.oriented_reserves(token_in)?;
        let token_out = self.other_token(token_in)?.clone();

        let amount_out =
            quote_output_given_input(reserve_in, reserve_out, &input_amount.raw, fee_rate)?;
        let next = self.with_reserves(
            token_in,
            reserve_in + &input_amount.raw,
            reserve_out - &amount_out,
        );
        Ok((CurrencyAmount::new(token_out, amount_out), next))
    }

    /// Quotes the input needed to take exactly `output_amount` out of this
    /// pool. Returns the input and the pool as it would look after the swap.
    pub fn input_amount(
        &self,
        output_amount: &CurrencyAmount,
        fee_rate: &Fraction,
    ) -> Result<(CurrencyAmount, Pair)> {
        let token_out = output_amount.currency.wrapped();
        let (reserve_out, reserve_in) = self.oriented_reserves(token_out)?;
        let token_in = self.other_token(token_out)?.clone();

        let amount_in =
            quote_input_given_output(reserve_in, reserve_out, &output_amount.raw, fee_rate)?;
        let next = self.with_reserves(
            &token_in,
            reserve_in + &amount_in,
            reserve_out - &output_amount.raw,
        );
        Ok((CurrencyAmount::new(token_in, amount_in), next))
    }

    /// (reserve of `token`, reserve of the other token)
    fn oriented_reserves(&self, token: &Token) -> Result<(&BigUint, &BigUint)> {
        if *token == self.token0 {
            Ok((&self.reserve0, &self.reserve1))
        } else if *token == self.token1 {
            Ok((&self.reserve1, &self.reserve0))
        } else {
            Err(RouterError::InvalidToken(token.to_string()))
        }
    }

    fn with_reserves(&self, token_in: &Token, reserve_in: BigUint, reserve_out: BigUint) -> Pair {
        let (reserve0, reserve1) = if *token_in == self.token0 {
            (reserve_in, reserve_out)
        } else {
            (reserve_out, reserve_in)
        };
        Pair {
            token0: self.token0.clone(),
            token1: self.token1.clone(),
            reserve0,
            reserve1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(address: &str) -> Token {
        Token::new(1, address, 18, None).unwrap()
    }

    fn amount(address: &str, raw: u64) -> CurrencyAmount {
        CurrencyAmount::new(token(address), raw)
    }

    fn fee() -> Fraction {
        Fraction::new(3, 1000).unwrap()
    }

    #[test]
    fn sorts_tokens_on_construction() {
        let pair = Pair::new(amount("0x2", 100), amount("0x1", 200)).unwrap();
        assert_eq!(pair.token0(), &token("0x1"));
        assert_eq!(pair.token1(), &token("0x2"));
        assert_eq!(pair.reserve0().raw, BigUint::from(200u32));
        assert_eq!(pair, Pair::new(amount("0x1", 200), amount("0x2", 100)).unwrap());
    }

    #[test]
    fn rejects_identical_or_cross_chain_tokens() {
        assert_eq!(
            Pair::new(amount("0x1", 1), amount("0x1", 1)).unwrap_err(),
            RouterError::IdenticalTokens
        );
        let other_chain = CurrencyAmount::new(Token::new(3, "0x2", 18, None).unwrap(), 1u32);
        assert_eq!(
            Pair::new(amount("0x1", 1), other_chain).unwrap_err(),
            RouterError::ChainIdMismatch(1, 3)
        );
    }

    #[test]
    fn prices() {
        let pair = Pair::new(amount("0x1", 101), amount("0x2", 100)).unwrap();
        assert_eq!(
            pair.price_of(&token("0x1").into()).unwrap(),
            Price::new(token("0x1"), token("0x2"), 101, 100).unwrap()
        );
        assert_eq!(
            pair.price_of(&token("0x2").into()).unwrap(),
            Price::new(token("0x2"), token("0x1"), 100, 101).unwrap()
        );
        assert!(matches!(
            pair.price_of(&token("0x3").into()),
            Err(RouterError::InvalidToken(_))
        ));

        let empty = Pair::new(amount("0x1", 0), amount("0x2", 100)).unwrap();
        assert_eq!(
            empty.price_of(&token("0x1").into()).unwrap_err(),
            RouterError::DivideByZero
        );
    }

    #[test]
    fn output_amount_returns_next_pair() {
        let pair = Pair::new(amount("0x1", 1000), amount("0x3", 1100)).unwrap();
        let (out, next) = pair.output_amount(&amount("0x1", 100), &fee()).unwrap();
        assert_eq!(out, amount("0x3", 99));
        assert_eq!(next.reserve0(), amount("0x1", 1100));
        assert_eq!(next.reserve1(), amount("0x3", 1001));
        // input snapshot untouched
        assert_eq!(pair.reserve0(), amount("0x1", 1000));
    }

    #[test]
    fn input_amount_returns_next_pair() {
        let pair = Pair::new(amount("0x1", 1000), amount("0x3", 1100)).unwrap();
        let (input, next) = pair.input_amount(&amount("0x3", 100), &fee()).unwrap();
        assert_eq!(input, amount("0x1", 101));
        assert_eq!(next.reserve0(), amount("0x1", 1101));
        assert_eq!(next.reserve1(), amount("0x3", 1000));
    }

    #[test]
    fn quoting_foreign_or_excessive_amounts_fails() {
        let pair = Pair::new(amount("0x1", 1000), amount("0x3", 1100)).unwrap();
        assert!(matches!(
            pair.output_amount(&amount("0x2", 100), &fee()),
            Err(RouterError::InvalidToken(_))
        ));
        assert!(matches!(
            pair.input_amount(&amount("0x2", 100), &fee()),
            Err(RouterError::InvalidToken(_))
        ));
        assert_eq!(
            pair.input_amount(&amount("0x3", 1100), &fee()).unwrap_err(),
            RouterError::InsufficientReserves
        );
    }

    #[test]
    fn empty_pair_never_quotes() {
        let pair = Pair::new(amount("0x1", 0), amount("0x2", 0)).unwrap();
        assert!(!pair.has_liquidity());
        assert_eq!(
            pair.output_amount(&amount("0x1", 100), &fee()).unwrap_err(),
            RouterError::InsufficientLiquidity
        );
        assert_eq!(
            pair.input_amount(&amount("0x2", 100), &fee()).unwrap_err(),
            RouterError::InsufficientReserves
        );
    }
}
