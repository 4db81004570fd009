//! `stockledger` binary support: configuration and the demonstration run.

pub mod config;
pub mod demo;

pub use config::{Config, ConfigError};
