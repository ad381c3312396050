use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouterConfig {
    pub working_dir: String,
    pub snapshot_file: String,
    pub chain_id: u64,
    pub token_decimals: u8,
    pub fee_numerator: u64,
    pub fee_denominator: u64,
    pub max_hops: usize,
    pub max_num_results: usize,
    pub native_symbol: String,
    pub wrapped_native: String,
}

/// One pool in a reserve snapshot. Reserves are decimal strings since they
/// routinely exceed 64 bits. `address` is informational only: pairs are
/// identified by their token set, so it may be left empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PairRecord {
    #[serde(default)]
    pub address: Option<String>,
    pub token0: String,
    pub token1: String,
    pub reserve0: String,
    pub reserve1: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PairList {
    pub pairs: Vec<PairRecord>,
}
