/// Liquidity permanently locked by the first deposit into a pool.
pub const MINIMUM_LIQUIDITY: u64 = 1000;

/// Multiplier on `sqrt(k)` in the denominator of the protocol fee mint,
/// `S * (sqrt(k) - sqrt(k_last)) / (5 * sqrt(k) + sqrt(k_last))`.
pub const PROTOCOL_FEE_DIVISOR: u64 = 5;

pub const DEFAULT_MAX_HOPS: usize = 3;
pub const DEFAULT_MAX_NUM_RESULTS: usize = 3;
