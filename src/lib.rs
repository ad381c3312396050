pub mod config;
pub mod core;
pub mod snapshot;
pub mod types;
