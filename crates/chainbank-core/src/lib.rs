//! # chainbank-core
//!
//! Core types and configuration for **chainbank** — a typed client for a
//! fungible token plus a bank contract implementing deposits and loans.
//!
//! This crate is chain-library agnostic: it defines the application-level
//! data model and the deployment configuration, while `chainbank-evm`
//! supplies the provider plumbing.

pub mod chain;
pub mod config;
pub mod models;

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!version().is_empty());
    }
}
