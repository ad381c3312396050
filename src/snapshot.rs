//! Reading caller supplied reserve snapshots.
//!
//! CSV files carry a header row `address,token0,token1,reserve0,reserve1`;
//! JSON files hold `{ "pairs": [...] }` with the same fields. Snapshots are
//! only ever read, never written back.

use super::core::amount::CurrencyAmount;
use super::core::pair::Pair;
use super::types::{PairList, PairRecord, RouterConfig};
use anyhow::{anyhow, Context, Result};
use num_bigint::BigUint;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub fn read_pair_records_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PairRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .with_context(|| format!("Couldn't open snapshot {}", path.as_ref().display()))?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        let record: PairRecord = record.context("Malformed snapshot row")?;
        records.push(record);
    }
    Ok(records)
}

pub fn read_pair_records_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<PairRecord>> {
    let json = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Couldn't open snapshot {}", path.as_ref().display()))?;
    let pair_list: PairList = serde_json::from_str(&json).context("Malformed snapshot json")?;
    Ok(pair_list.pairs)
}

/// Builds pairs from snapshot rows, using the configured chain and decimals
/// for every token.
pub fn pairs_from_records(records: &[PairRecord], config: &RouterConfig) -> Result<Vec<Pair>> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let token0 = config.token(&record.token0)?;
            let token1 = config.token(&record.token1)?;
            let reserve0 = parse_reserve(&record.reserve0)
                .with_context(|| format!("Bad reserve0 in snapshot row {}", row + 1))?;
            let reserve1 = parse_reserve(&record.reserve1)
                .with_context(|| format!("Bad reserve1 in snapshot row {}", row + 1))?;
            Pair::new(
                CurrencyAmount::new(token0, reserve0),
                CurrencyAmount::new(token1, reserve1),
            )
            .with_context(|| format!("Invalid pair in snapshot row {}", row + 1))
        })
        .collect()
}

/// Loads the snapshot at `path`, choosing the format by file extension.
pub fn load_pairs<P: AsRef<Path>>(path: P, config: &RouterConfig) -> Result<Vec<Pair>> {
    let path = path.as_ref();
    let records = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => read_pair_records_from_json(path)?,
        _ => read_pair_records_from_csv(path)?,
    };
    let pairs = pairs_from_records(&records, config)?;
    debug!(pairs = pairs.len(), "loaded snapshot {}", path.display());
    Ok(pairs)
}

fn parse_reserve(value: &str) -> Result<BigUint> {
    BigUint::from_str(value).map_err(|_| anyhow!("'{}' is not a non-negative integer", value))
}
