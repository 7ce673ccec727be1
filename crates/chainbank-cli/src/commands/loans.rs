//! Loan subcommands: list, borrow, repay.

use std::path::PathBuf;

use super::CmdResult;

/// Run the `loans` subcommand.
pub async fn list(config: Option<PathBuf>, account: Option<String>) -> CmdResult {
    let session = super::connect(config).await?;
    let client = session.client()?;
    let loans = client
        .loans_by_account(super::parse_account(account)?)
        .await?;
    println!("{}", serde_json::to_string_pretty(&loans)?);
    Ok(())
}

/// Run the `borrow` subcommand. Prints the refreshed loan list once the
/// loan request is confirmed.
pub async fn borrow(config: Option<PathBuf>, amount: String) -> CmdResult {
    let session = super::connect(config).await?;
    let client = session.client()?;
    let loans = client.request_loan(&amount).await?;
    println!("{}", serde_json::to_string_pretty(&loans)?);
    Ok(())
}

/// Run the `repay` subcommand. The repayment amount travels as the
/// transaction value; the printed list reflects confirmed state.
pub async fn repay(config: Option<PathBuf>, id: usize, amount: String) -> CmdResult {
    let session = super::connect(config).await?;
    let client = session.client()?;
    let loans = client.repay_loan(id, &amount).await?;
    println!("{}", serde_json::to_string_pretty(&loans)?);
    Ok(())
}
