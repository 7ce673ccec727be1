//! Network identifiers.
//!
//! The bank and token contracts are deployed per network; the client looks
//! the addresses up by the chain ID reported by the connected node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric EVM chain identifier.
///
/// Unlike a closed enum of mainnets, any ID is accepted here: the contracts
/// are routinely deployed to throwaway development chains (Ganache defaults
/// to 1337/5777, Anvil and Hardhat to 31337), so the set of valid networks
/// is whatever the deployment table in the configuration says it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u64);

impl NetworkId {
    /// Returns the numeric chain ID.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Human-readable name for well-known networks, if any.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("Ethereum"),
            11155111 => Some("Sepolia"),
            1337 | 5777 => Some("Ganache"),
            31337 => Some("Anvil"),
            _ => None,
        }
    }
}

impl From<u64> for NetworkId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "chain {}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_name_and_id() {
        let s = format!("{}", NetworkId(1));
        assert!(s.contains("Ethereum"));
        assert!(s.contains('1'));
    }

    #[test]
    fn display_unknown_network() {
        let s = format!("{}", NetworkId(424242));
        assert_eq!(s, "chain 424242");
    }

    #[test]
    fn serde_is_transparent() {
        let id = NetworkId(31337);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "31337");
        let back: NetworkId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
