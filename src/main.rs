use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use std::path::PathBuf;
use std::str::FromStr;
use swap_router::core::amount::CurrencyAmount;
use swap_router::core::fraction::Fraction;
use swap_router::core::search::{best_trade_exact_in, best_trade_exact_out};
use swap_router::core::trade::Trade;
use swap_router::snapshot::load_pairs;
use swap_router::types::RouterConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swap-router")]
#[command(about = "Best route quotes over constant product pair snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, value_name = "FILE", default_value = "router_config.toml")]
    config: PathBuf,

    #[arg(long, env = "SWAP_ROUTER_LOG", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the best trades between two currencies
    Quote {
        /// Token address or native symbol being sold
        #[arg(long)]
        sell: String,
        /// Token address or native symbol being bought
        #[arg(long)]
        buy: String,
        /// Exact amount sold, in raw units
        #[arg(long, conflicts_with = "buy_amount", required_unless_present = "buy_amount")]
        sell_amount: Option<String>,
        /// Exact amount bought, in raw units
        #[arg(long)]
        buy_amount: Option<String>,
        /// Slippage tolerance used for the worst case bounds
        #[arg(long, default_value_t = 50)]
        slippage_bps: u64,
    },
    /// Check that the configuration and snapshot load
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_level)?;

    let config = RouterConfig::load_from(&cli.config)?;
    match cli.command {
        Commands::Quote {
            sell,
            buy,
            sell_amount,
            buy_amount,
            slippage_bps,
        } => quote(&config, &sell, &buy, sell_amount, buy_amount, slippage_bps),
        Commands::Validate => validate(&config),
    }
}

fn setup_tracing(log_level: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

fn quote(
    config: &RouterConfig,
    sell: &str,
    buy: &str,
    sell_amount: Option<String>,
    buy_amount: Option<String>,
    slippage_bps: u64,
) -> Result<()> {
    let pairs = load_pairs(config.snapshot_path(), config)?;
    let fee_rate = config.fee_rate()?;
    let options = config.best_trade_options();
    let currency_in = config.currency(sell)?;
    let currency_out = config.currency(buy)?;
    let slippage = Fraction::new(slippage_bps, 10_000u64)?;

    let trades = match (sell_amount, buy_amount) {
        (Some(amount), _) => {
            let amount_in = CurrencyAmount::new(currency_in, parse_amount(&amount)?);
            best_trade_exact_in(&pairs, &amount_in, &currency_out, &fee_rate, options)?
        }
        (None, Some(amount)) => {
            let amount_out = CurrencyAmount::new(currency_out, parse_amount(&amount)?);
            best_trade_exact_out(&pairs, &currency_in, &amount_out, &fee_rate, options)?
        }
        (None, None) => bail!("Either --sell-amount or --buy-amount is required"),
    };

    if trades.is_empty() {
        info!("No route found between {} and {}", sell, buy);
        return Ok(());
    }
    for (rank, trade) in trades.iter().enumerate() {
        print_trade(rank + 1, trade, &slippage)?;
    }
    Ok(())
}

fn print_trade(rank: usize, trade: &Trade, slippage: &Fraction) -> Result<()> {
    let path: Vec<String> = trade
        .route()
        .path()
        .iter()
        .map(|token| token.to_string())
        .collect();
    println!("#{} {}", rank, path.join(" -> "));
    println!("  amount in:        {}", trade.input_amount());
    println!("  amount out:       {}", trade.output_amount());
    println!("  execution price:  {}", trade.execution_price());
    println!(
        "  at mid price:     {}",
        trade.route().mid_price()?.quote(trade.input_amount())?
    );
    println!(
        "  price impact:     {}%",
        trade
            .price_impact()
            .mul(&Fraction::from_integer(100))
            .to_decimal_string(2)
    );
    println!("  maximum in:       {}", trade.maximum_amount_in(slippage)?);
    println!("  minimum out:      {}", trade.minimum_amount_out(slippage)?);
    Ok(())
}

fn validate(config: &RouterConfig) -> Result<()> {
    config.fee_rate()?;
    let pairs = load_pairs(config.snapshot_path(), config)?;
    if pairs.is_empty() {
        bail!("Snapshot {} has no pairs", config.snapshot_path().display());
    }
    info!(
        "Configuration valid: {} pairs, max {} hops",
        pairs.len(),
        config.max_hops
    );
    Ok(())
}

fn parse_amount(value: &str) -> Result<BigUint> {
    BigUint::from_str(value).with_context(|| format!("'{}' is not a raw token amount", value))
}
