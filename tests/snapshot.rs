use num_bigint::BigUint;
use std::path::{Path, PathBuf};
use swap_router::core::amount::CurrencyAmount;
use swap_router::core::search::best_trade_exact_in;
use swap_router::snapshot::{load_pairs, read_pair_records_from_csv};
use swap_router::types::RouterConfig;

const T0: &str = "0x0000000000000000000000000000000000000001";
const T2: &str = "0x0000000000000000000000000000000000000003";

fn test_config() -> RouterConfig {
    let mut config = RouterConfig::default();
    config.working_dir = working_dir().display().to_string();
    config
}

fn working_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/working_dir")
}

#[test]
fn reads_csv_records() {
    let records = read_pair_records_from_csv(working_dir().join("pairs.csv")).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records[0].address.as_deref(),
        Some("0x00000000000000000000000000000000000000a1")
    );
    assert_eq!(records[2].address, None);
    assert_eq!(records[3].reserve0, "250000000000000000000000");
}

#[test]
fn csv_pairs_are_canonically_ordered() {
    let config = test_config();
    let pairs = load_pairs(config.snapshot_path(), &config).unwrap();
    assert_eq!(pairs.len(), 4);

    // listed as (t2, t0) in the file
    let pair = &pairs[1];
    assert_eq!(pair.token0(), &config.token(T0).unwrap());
    assert_eq!(pair.reserve0().raw, BigUint::from(1000u32));
    assert_eq!(pair.reserve1().raw, BigUint::from(1100u32));
}

#[test]
fn json_snapshot_matches_csv() {
    let config = test_config();
    let from_csv = load_pairs(config.snapshot_path(), &config).unwrap();
    let from_json = load_pairs(working_dir().join("pairs.json"), &config).unwrap();
    assert_eq!(from_json.len(), 3);
    assert_eq!(&from_csv[..3], &from_json[..]);
}

#[test]
fn quotes_over_loaded_snapshot() {
    let config = test_config();
    let pairs = load_pairs(config.snapshot_path(), &config).unwrap();
    let amount_in = CurrencyAmount::new(config.currency(T0).unwrap(), 100u32);
    let trades = best_trade_exact_in(
        &pairs,
        &amount_in,
        &config.currency(T2).unwrap(),
        &config.fee_rate().unwrap(),
        config.best_trade_options(),
    )
    .unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].output_amount().raw, BigUint::from(99u32));
    assert_eq!(trades[1].output_amount().raw, BigUint::from(69u32));
}

#[test]
fn native_symbol_routes_through_wrapped_pool() {
    let config = test_config();
    let pairs = load_pairs(config.snapshot_path(), &config).unwrap();
    let ether = config.currency("ETH").unwrap();
    let amount_in = CurrencyAmount::new(ether.clone(), 100u32);
    let trades = best_trade_exact_in(
        &pairs,
        &amount_in,
        &config.currency(T2).unwrap(),
        &config.fee_rate().unwrap(),
        config.best_trade_options(),
    )
    .unwrap();

    assert!(!trades.is_empty());
    assert_eq!(trades[0].input_amount().currency, ether);
    assert_eq!(trades[0].route().path()[0], config.token(&config.wrapped_native).unwrap());
}

#[test]
fn rejects_negative_reserves() {
    let config = test_config();
    let err = load_pairs(working_dir().join("bad_reserve.csv"), &config).unwrap_err();
    assert!(format!("{:#}", err).contains("reserve0"));
}

#[test]
fn missing_snapshot_is_an_error() {
    let config = test_config();
    assert!(load_pairs(working_dir().join("missing.csv"), &config).is_err());
}
