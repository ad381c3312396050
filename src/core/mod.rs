pub mod amount;
pub mod constants;
pub mod currency;
pub mod error;
pub mod fraction;
pub mod liquidity;
pub mod math;
pub mod pair;
pub mod price;
pub mod route;
pub mod search;
pub mod trade;

pub use error::RouterError;

pub type Result<T> = std::result::Result<T, RouterError>;
