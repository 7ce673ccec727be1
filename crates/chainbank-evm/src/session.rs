//! Explicit connection lifecycle.
//!
//! A [`Session`] owns the connection state machine
//! `Disconnected → Connecting → Ready / Failed` and surfaces it to callers
//! as a status value, instead of a client whose "not initialized" state is
//! inferred from missing fields. Reconnecting after a failure is allowed;
//! a successful reconnect simply replaces the previous client.

use alloy::signers::local::PrivateKeySigner;
use tracing::warn;

use chainbank_core::config::Config;

use crate::client::{BankClient, ClientError, Result};

/// Where the session is in its lifecycle.
enum ConnectionState {
    Disconnected,
    Connecting,
    Ready(BankClient),
    Failed(String),
}

/// Externally visible connection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Ready,
    Failed,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Ready => "ready",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A configured session that may or may not hold a connected client.
pub struct Session {
    config: Config,
    state: ConnectionState,
}

impl Session {
    /// Creates a disconnected session around the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: ConnectionState::Disconnected,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> ConnectionStatus {
        match self.state {
            ConnectionState::Disconnected => ConnectionStatus::Disconnected,
            ConnectionState::Connecting => ConnectionStatus::Connecting,
            ConnectionState::Ready(_) => ConnectionStatus::Ready,
            ConnectionState::Failed(_) => ConnectionStatus::Failed,
        }
    }

    /// The failure message, when the last connect attempt failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            ConnectionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Attempts to connect, moving the session to `Ready` or `Failed`.
    pub async fn connect(&mut self, signer: PrivateKeySigner) -> Result<()> {
        self.state = ConnectionState::Connecting;
        match BankClient::connect(&self.config, signer).await {
            Ok(client) => {
                self.state = ConnectionState::Ready(client);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "connect failed");
                self.state = ConnectionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// The connected client, or [`ClientError::NotConnected`].
    pub fn client(&self) -> Result<&BankClient> {
        match &self.state {
            ConnectionState::Ready(client) => Ok(client),
            _ => Err(ClientError::NotConnected),
        }
    }

    /// Per-deposit value lookup with the session's one deliberate guard:
    /// when no client is connected this returns an empty string rather
    /// than an error.
    pub async fn deposit_value(&self, id: usize) -> Result<String> {
        match &self.state {
            ConnectionState::Ready(client) => client.deposit_value(id).await,
            _ => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(rpc_url: &str) -> Config {
        Config::from_yaml(&format!("rpc_url: \"{rpc_url}\"\n")).unwrap()
    }

    #[test]
    fn new_session_is_disconnected() {
        let session = Session::new(test_config("http://localhost:8545"));
        assert_eq!(session.status(), ConnectionStatus::Disconnected);
        assert!(session.failure().is_none());
    }

    #[test]
    fn client_before_connect_is_not_connected() {
        let session = Session::new(test_config("http://localhost:8545"));
        assert!(matches!(session.client(), Err(ClientError::NotConnected)));
    }

    #[tokio::test]
    async fn deposit_value_before_connect_is_empty() {
        let session = Session::new(test_config("http://localhost:8545"));
        let value = session.deposit_value(0).await.unwrap();
        assert_eq!(value, "");
    }

    #[tokio::test]
    async fn failed_connect_lands_in_failed_state() {
        let mut session = Session::new(test_config("::not a url::"));
        let result = session.connect(PrivateKeySigner::random()).await;
        assert!(matches!(result, Err(ClientError::UrlParse(_))));
        assert_eq!(session.status(), ConnectionStatus::Failed);
        assert!(session.failure().is_some());

        // the guard still applies after a failed connect
        assert_eq!(session.deposit_value(3).await.unwrap(), "");
    }

    #[test]
    fn status_display() {
        assert_eq!(ConnectionStatus::Ready.to_string(), "ready");
        assert_eq!(ConnectionStatus::Disconnected.to_string(), "disconnected");
    }
}
