use super::core::currency::{Currency, NativeCurrency, Token};
use super::core::fraction::Fraction;
use super::core::search::BestTradeOptions;
use super::types::RouterConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            working_dir: "working_dir".to_string(),
            snapshot_file: "pairs.csv".to_string(),
            chain_id: 1,
            token_decimals: 18,
            fee_numerator: 3,
            fee_denominator: 1000,
            max_hops: 3,
            max_num_results: 3,
            native_symbol: "ETH".to_string(),
            wrapped_native: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
        }
    }
}

impl RouterConfig {
    /// Loads the TOML at `path`. confy writes the defaults there first if the file is missing.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = confy::load_path(path.as_ref()).with_context(|| {
            format!("Couldn't load router config from {}", path.as_ref().display())
        })?;
        Ok(config)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        Path::new(&self.working_dir).join(&self.snapshot_file)
    }

    /// Per-hop fee as an exact fraction.
    pub fn fee_rate(&self) -> Result<Fraction> {
        let fee = Fraction::new(self.fee_numerator, self.fee_denominator)
            .context("Fee denominator must not be zero")?;
        crate::core::math::fee_multiplier(&fee).context("Fee rate must be in [0, 1)")?;
        Ok(fee)
    }

    pub fn best_trade_options(&self) -> BestTradeOptions {
        BestTradeOptions {
            max_num_results: self.max_num_results,
            max_hops: self.max_hops,
        }
    }

    pub fn token(&self, address: &str) -> Result<Token> {
        Token::new(self.chain_id, address, self.token_decimals, None)
            .with_context(|| format!("Invalid token address {}", address))
    }

    /// Resolves a command line currency: the native symbol or a token address.
    pub fn currency(&self, name: &str) -> Result<Currency> {
        if name.eq_ignore_ascii_case(&self.native_symbol) {
            let wrapped = self.token(&self.wrapped_native)?;
            return Ok(NativeCurrency::new(&self.native_symbol, wrapped).into());
        }
        Ok(self.token(name)?.into())
    }
}
