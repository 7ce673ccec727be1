//! # chainbank-evm
//!
//! EVM-side client for the chainbank contracts: provider plumbing, contract
//! ABIs, unit conversion, and the typed operations mirroring the bank's
//! on-chain entry points (balance queries, deposits, withdrawals, loans).

pub mod abi;
pub mod client;
pub mod session;
pub mod units;

pub use client::{BankClient, ClientError};
pub use session::{ConnectionStatus, Session};
