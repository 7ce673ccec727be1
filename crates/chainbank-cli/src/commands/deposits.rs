//! Deposit subcommands: list, open, withdraw, and per-id value.

use std::path::PathBuf;

use super::CmdResult;

/// Run the `deposits` subcommand.
pub async fn list(config: Option<PathBuf>, account: Option<String>) -> CmdResult {
    let session = super::connect(config).await?;
    let client = session.client()?;
    let deposits = client
        .deposits_by_account(super::parse_account(account)?)
        .await?;
    println!("{}", serde_json::to_string_pretty(&deposits)?);
    Ok(())
}

/// Run the `deposit` subcommand. Prints the refreshed deposit list once
/// the transaction is confirmed.
pub async fn open(config: Option<PathBuf>, amount: String) -> CmdResult {
    let session = super::connect(config).await?;
    let client = session.client()?;
    let deposits = client.deposit(&amount).await?;
    println!("{}", serde_json::to_string_pretty(&deposits)?);
    Ok(())
}

/// Run the `withdraw` subcommand.
pub async fn withdraw(config: Option<PathBuf>, id: usize) -> CmdResult {
    let session = super::connect(config).await?;
    let client = session.client()?;
    let deposits = client.withdraw(id).await?;
    println!("{}", serde_json::to_string_pretty(&deposits)?);
    Ok(())
}

/// Run the `balance` subcommand: value of a single deposit by id.
///
/// Goes through the session guard, so a session without a connected
/// client prints an empty line instead of failing.
pub async fn value(config: Option<PathBuf>, id: usize) -> CmdResult {
    let session = super::connect(config).await?;
    let balance = session.deposit_value(id).await?;
    println!("{balance}");
    Ok(())
}
