/// TOML/environment configuration.
pub mod config;
