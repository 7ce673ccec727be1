//! `chainbank status` — connection and balance overview.

use std::path::PathBuf;

use chainbank_evm::Session;

use super::CmdResult;

/// Run the `status` subcommand.
pub async fn run(config: Option<PathBuf>) -> CmdResult {
    let config = super::load_config(config)?;
    let signer = super::signer_from_env()?;

    let mut session = Session::new(config);
    if let Err(e) = session.connect(signer).await {
        println!("status:  {}", session.status());
        if let Some(reason) = session.failure() {
            println!("reason:  {reason}");
        }
        return Err(e.into());
    }

    let client = session.client()?;
    println!("status:  {}", session.status());
    println!("network: {}", client.network());
    println!("account: {}", client.account());
    println!("bank total: {} ETH", client.total_balance().await?);
    Ok(())
}

/// Run the `token-balance` subcommand.
pub async fn token_balance(config: Option<PathBuf>, account: Option<String>) -> CmdResult {
    let session = super::connect(config).await?;
    let client = session.client()?;
    let balance = client
        .token_balance_of(super::parse_account(account)?)
        .await?;
    println!("{balance}");
    Ok(())
}
