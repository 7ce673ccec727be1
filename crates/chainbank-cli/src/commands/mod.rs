//! CLI subcommand implementations.

pub mod deposits;
pub mod loans;
pub mod status;

use std::path::PathBuf;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use chainbank_core::config::Config;
use chainbank_evm::Session;

/// Environment variable holding the hex-encoded signing key.
const PRIVATE_KEY_ENV: &str = "CHAINBANK_PRIVATE_KEY";

pub(crate) type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve the config path (default: ./chainbank.yaml).
fn resolve_config_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(|| PathBuf::from("chainbank.yaml"))
}

pub(crate) fn load_config(config: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = resolve_config_path(config);
    tracing::info!("loading config from {}", path.display());
    Ok(Config::from_file(&path)?)
}

pub(crate) fn signer_from_env() -> Result<PrivateKeySigner, Box<dyn std::error::Error>> {
    let key = std::env::var(PRIVATE_KEY_ENV)
        .map_err(|_| format!("{PRIVATE_KEY_ENV} is not set — export the signing key first"))?;
    let signer: PrivateKeySigner = key
        .trim()
        .parse()
        .map_err(|_| format!("{PRIVATE_KEY_ENV} did not contain a valid hex encoded secret"))?;
    Ok(signer)
}

/// Load config, read the signing key, and connect a session.
pub(crate) async fn connect(
    config: Option<PathBuf>,
) -> Result<Session, Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    let signer = signer_from_env()?;
    let mut session = Session::new(config);
    session.connect(signer).await?;
    Ok(session)
}

pub(crate) fn parse_account(
    account: Option<String>,
) -> Result<Option<Address>, Box<dyn std::error::Error>> {
    match account {
        Some(s) => {
            let addr = s
                .parse::<Address>()
                .map_err(|e| format!("invalid account address `{s}`: {e}"))?;
            Ok(Some(addr))
        }
        None => Ok(None),
    }
}
