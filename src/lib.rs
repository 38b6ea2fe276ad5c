pub mod cli;
pub mod config;
pub mod observability;

pub use config::Config;
