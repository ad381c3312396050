use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("input amount is too small to produce any output")]
    InsufficientInputAmount,
    #[error("pair has no liquidity to quote against")]
    InsufficientLiquidity,
    #[error("requested output exceeds the available reserves")]
    InsufficientReserves,
    #[error("currency {0} is not part of this pair")]
    InvalidToken(String),
    #[error("pairs {0} and {1} of the route do not share a token")]
    InvalidRoute(usize, usize),
    #[error("route endpoint {0} is not reachable from the given pairs")]
    InvalidEndpoint(String),
    #[error("a route needs at least one pair")]
    EmptyRoute,
    #[error("chain id mismatch: {0} != {1}")]
    ChainIdMismatch(u64, u64),
    #[error("a pair needs two distinct tokens")]
    IdenticalTokens,
    #[error("more than one pair given for {0}/{1}")]
    DuplicatePair(String, String),
    #[error("currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },
    #[error("no pairs to search")]
    EmptyPairSet,
    #[error("max hops must be at least 1")]
    InvalidMaxHops,
    #[error("max number of results must be at least 1")]
    InvalidMaxResults,
    #[error("slippage tolerance must not be negative")]
    InvalidSlippageTolerance,
    #[error("fee rate must be in [0, 1)")]
    InvalidFeeRate,
    #[error("invalid token address {0}")]
    InvalidAddress(String),
    #[error("division by zero")]
    DivideByZero,
}

impl RouterError {
    /// Failures a single pool can hit while quoting. The search prunes these
    /// instead of surfacing them.
    pub fn is_quote_failure(&self) -> bool {
        matches!(
            self,
            RouterError::InsufficientInputAmount
                | RouterError::InsufficientLiquidity
                | RouterError::InsufficientReserves
                | RouterError::DivideByZero
        )
    }
}
