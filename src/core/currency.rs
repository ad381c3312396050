use super::error::RouterError;
use super::Result;
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ERC20-style token on a specific chain.
#[derive(Clone, Debug)]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub decimals: u8,
    pub symbol: Option<String>,
    // Numeric address value; identity and ordering use this, not the string
    key: BigUint,
}

impl Token {
    pub fn new(
        chain_id: u64,
        address: &str,
        decimals: u8,
        symbol: Option<&str>,
    ) -> Result<Self> {
        let key = parse_address(address)?;
        Ok(Self {
            chain_id,
            address: address.to_lowercase(),
            decimals,
            symbol: symbol.map(|s| s.to_string()),
            key,
        })
    }

    /// Whether this token comes first in a pair's canonical order.
    pub fn sorts_before(&self, other: &Token) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(RouterError::ChainIdMismatch(self.chain_id, other.chain_id));
        }
        match self.key.cmp(&other.key) {
            Ordering::Less => Ok(true),
            Ordering::Greater => Ok(false),
            Ordering::Equal => Err(RouterError::IdenticalTokens),
        }
    }
}

fn parse_address(address: &str) -> Result<BigUint> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| RouterError::InvalidAddress(address.to_string()))?;
    if digits.is_empty() {
        return Err(RouterError::InvalidAddress(address.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| RouterError::InvalidAddress(address.to_string()))
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.key == other.key
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.key.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{}", self.address),
        }
    }
}

/// The chain's native asset. It is never traded directly; routing goes
/// through `wrapped`.
#[derive(Clone, Debug)]
pub struct NativeCurrency {
    pub chain_id: u64,
    pub decimals: u8,
    pub symbol: String,
    pub wrapped: Token,
}

impl NativeCurrency {
    pub fn new(symbol: &str, wrapped: Token) -> Self {
        Self {
            chain_id: wrapped.chain_id,
            decimals: wrapped.decimals,
            symbol: symbol.to_string(),
            wrapped,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    /// The token used for pair lookups and path connectivity.
    pub fn wrapped(&self) -> &Token {
        match self {
            Currency::Native(native) => &native.wrapped,
            Currency::Token(token) => token,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.chain_id,
            Currency::Token(token) => token.chain_id,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native(native) => native.decimals,
            Currency::Token(token) => token.decimals,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => Some(native.symbol.as_str()),
            Currency::Token(token) => token.symbol.as_deref(),
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Currency::Native(a), Currency::Native(b)) => a.chain_id == b.chain_id,
            (Currency::Token(a), Currency::Token(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Currency {}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Native(native) => write!(f, "{}", native.symbol),
            Currency::Token(token) => write!(f, "{}", token),
        }
    }
}
