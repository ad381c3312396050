use super::currency::{Currency, Token};
use super::error::RouterError;
use super::pair::Pair;
use super::price::Price;
use super::Result;

/// A connected chain of pairs from `input` to `output`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pairs: Vec<Pair>,
    path: Vec<Token>, // [A, B, C] for A -> B -> C
    input: Currency,
    output: Currency,
    // None when a hop has an empty reserve and has no spot price
    mid_price: Option<Price>,
}

impl Route {
    pub fn new(pairs: Vec<Pair>, input: Currency, output: Currency) -> Result<Self> {
        let first = pairs.first().ok_or(RouterError::EmptyRoute)?;
        let chain_id = first.chain_id();
        if let Some(pair) = pairs.iter().find(|pair| pair.chain_id() != chain_id) {
            return Err(RouterError::ChainIdMismatch(chain_id, pair.chain_id()));
        }
        if input.chain_id() != chain_id {
            return Err(RouterError::ChainIdMismatch(chain_id, input.chain_id()));
        }
        if output.chain_id() != chain_id {
            return Err(RouterError::ChainIdMismatch(chain_id, output.chain_id()));
        }

        if !first.involves_currency(&input) {
            return Err(RouterError::InvalidEndpoint(input.to_string()));
        }
        if let Some(last) = pairs.last() {
            if !last.involves_currency(&output) {
                return Err(RouterError::InvalidEndpoint(output.to_string()));
            }
        }

        let mut path = Vec::with_capacity(pairs.len() + 1);
        path.push(input.wrapped().clone());
        for (i, pair) in pairs.iter().enumerate() {
            let next = pair
                .other_token(&path[i])
                .map_err(|_| RouterError::InvalidRoute(i.saturating_sub(1), i))?
                .clone();
            path.push(next);
        }
        if path.last() != Some(output.wrapped()) {
            return Err(RouterError::InvalidEndpoint(output.to_string()));
        }

        let mid_price = compute_mid_price(&pairs, &path)
            .ok()
            .map(|price| price.relabel(input.clone(), output.clone()));

        Ok(Self {
            pairs,
            path,
            input,
            output,
            mid_price,
        })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Tokens visited, starting with the wrapped input and ending with the
    /// wrapped output.
    pub fn path(&self) -> &[Token] {
        &self.path
    }

    pub fn input(&self) -> &Currency {
        &self.input
    }

    pub fn output(&self) -> &Currency {
        &self.output
    }

    pub fn chain_id(&self) -> u64 {
        self.pairs[0].chain_id()
    }

    pub fn hops(&self) -> usize {
        self.pairs.len()
    }

    /// Spot price of the whole route, input in terms of output, ignoring fees.
    pub fn mid_price(&self) -> Result<&Price> {
        self.mid_price.as_ref().ok_or(RouterError::DivideByZero)
    }
}

fn compute_mid_price(pairs: &[Pair], path: &[Token]) -> Result<Price> {
    let mut hops = pairs
        .iter()
        .zip(path)
        .map(|(pair, token)| pair.price_of(&Currency::Token(token.clone())));
    let mut price = hops.next().ok_or(RouterError::EmptyRoute)??;
    for hop in hops {
        price = price.multiply(&hop?)?;
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::amount::CurrencyAmount;
    use crate::core::currency::NativeCurrency;

    fn token(address: &str) -> Token {
        Token::new(1, address, 18, None).unwrap()
    }

    fn pair(a: &str, reserve_a: u64, b: &str, reserve_b: u64) -> Pair {
        Pair::new(
            CurrencyAmount::new(token(a), reserve_a),
            CurrencyAmount::new(token(b), reserve_b),
        )
        .unwrap()
    }

    #[test]
    fn builds_path_through_pairs() {
        let route = Route::new(
            vec![pair("0x1", 1000, "0x2", 1000), pair("0x2", 1200, "0x3", 1000)],
            token("0x1").into(),
            token("0x3").into(),
        )
        .unwrap();
        assert_eq!(route.path(), &[token("0x1"), token("0x2"), token("0x3")]);
        assert_eq!(route.hops(), 2);
        assert_eq!(route.chain_id(), 1);
    }

    #[test]
    fn path_can_run_against_token_order() {
        let route = Route::new(
            vec![pair("0x2", 1200, "0x3", 1000), pair("0x1", 1000, "0x2", 1000)],
            token("0x3").into(),
            token("0x1").into(),
        )
        .unwrap();
        assert_eq!(route.path(), &[token("0x3"), token("0x2"), token("0x1")]);
    }

    #[test]
    fn mid_price_chains_hops() {
        let route = Route::new(
            vec![pair("0x1", 1000, "0x2", 2000), pair("0x2", 1000, "0x3", 3000)],
            token("0x1").into(),
            token("0x3").into(),
        )
        .unwrap();
        let mid = route.mid_price().unwrap();
        assert_eq!(mid, &Price::new(token("0x1"), token("0x3"), 1, 6).unwrap());

        let reversed = Route::new(
            vec![pair("0x2", 1000, "0x3", 3000), pair("0x1", 1000, "0x2", 2000)],
            token("0x3").into(),
            token("0x1").into(),
        )
        .unwrap();
        assert_eq!(
            reversed.mid_price().unwrap(),
            &Price::new(token("0x3"), token("0x1"), 6, 1).unwrap()
        );
    }

    #[test]
    fn mid_price_of_empty_pair_is_an_error() {
        let route = Route::new(
            vec![pair("0x1", 0, "0x2", 0)],
            token("0x1").into(),
            token("0x2").into(),
        )
        .unwrap();
        assert_eq!(route.mid_price().unwrap_err(), RouterError::DivideByZero);
    }

    #[test]
    fn rejects_broken_routes() {
        assert_eq!(
            Route::new(vec![], token("0x1").into(), token("0x2").into()).unwrap_err(),
            RouterError::EmptyRoute
        );
        assert!(matches!(
            Route::new(
                vec![pair("0x1", 1, "0x2", 1)],
                token("0x3").into(),
                token("0x2").into()
            ),
            Err(RouterError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Route::new(
                vec![pair("0x1", 1, "0x2", 1)],
                token("0x1").into(),
                token("0x3").into()
            ),
            Err(RouterError::InvalidEndpoint(_))
        ));
        assert_eq!(
            Route::new(
                vec![pair("0x1", 1, "0x2", 1), pair("0x3", 1, "0x4", 1), pair("0x4", 1, "0x5", 1)],
                token("0x1").into(),
                token("0x5").into()
            )
            .unwrap_err(),
            RouterError::InvalidRoute(0, 1)
        );
        // output is in the last pair but the path ends elsewhere
        assert!(matches!(
            Route::new(
                vec![pair("0x1", 1, "0x2", 1), pair("0x2", 1, "0x3", 1)],
                token("0x1").into(),
                token("0x2").into()
            ),
            Err(RouterError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn native_endpoints_route_through_wrapped_token() {
        let ether: Currency = NativeCurrency::new("ETH", token("0x9")).into();
        let pairs = vec![pair("0x9", 1000, "0x1", 1000)];
        let route = Route::new(pairs, ether.clone(), token("0x1").into()).unwrap();
        assert_eq!(route.input(), &ether);
        assert_eq!(route.path()[0], token("0x9"));
        assert_eq!(route.mid_price().unwrap().base, ether);
    }
}
