//! Bank contract client.
//!
//! Connects a signing account to an EVM JSON-RPC endpoint, resolves the
//! contract deployment for the node's chain ID, and exposes typed methods
//! mirroring the bank's on-chain entry points.
//!
//! Every state-mutating call waits for its transaction receipt and then
//! re-fetches the affected position list, so callers always get back
//! confirmed state.

use alloy::network::{Ethereum, EthereumWallet};
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

use chainbank_core::chain::NetworkId;
use chainbank_core::config::Config;
use chainbank_core::models::{Deposit, Loan};

use crate::abi::{IBank, IBankToken};
use crate::units;

/// Errors from client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no deployment configured for {0}")]
    UnsupportedNetwork(NetworkId),
    #[error("URL parse error: {0}")]
    UrlParse(String),
    #[error("invalid contract address `{0}`: {1}")]
    BadAddress(String, String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("contract call error: {0}")]
    Contract(String),
    #[error("unit conversion error: {0}")]
    Units(String),
    #[error("malformed contract response: {0}")]
    Decode(String),
    #[error("client is not connected")]
    NotConnected,
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// A connected bank client: provider, signing account, and both contract
/// handles bound to the deployment for the node's network.
pub struct BankClient {
    provider: DynProvider<Ethereum>,
    account: Address,
    network: NetworkId,
    bank: IBank::IBankInstance<DynProvider<Ethereum>>,
    token: IBankToken::IBankTokenInstance<DynProvider<Ethereum>>,
}

impl std::fmt::Debug for BankClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankClient")
            .field("account", &self.account)
            .field("network", &self.network)
            .field("bank", &self.bank.address())
            .field("token", &self.token.address())
            .finish()
    }
}

impl BankClient {
    /// Connects to the configured endpoint and binds both contracts.
    ///
    /// Resolves the chain ID from the node, then looks up the bank and
    /// token addresses for that network in the deployment table. Fails
    /// with [`ClientError::UnsupportedNetwork`] when the table has no
    /// entry for the node's chain.
    pub async fn connect(config: &Config, signer: PrivateKeySigner) -> Result<Self> {
        let url: alloy::transports::http::reqwest::Url = config
            .rpc_url
            .parse()
            .map_err(|e| ClientError::UrlParse(format!("{e}")))?;

        let account = signer.address();
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url).erased();

        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        let network = NetworkId(chain_id);

        let deployment = config
            .deployment(network)
            .ok_or(ClientError::UnsupportedNetwork(network))?;
        let bank_address = parse_address(&deployment.bank)?;
        let token_address = parse_address(&deployment.token)?;

        info!(
            network = %network,
            account = %account,
            bank = %bank_address,
            token = %token_address,
            "connected to bank deployment"
        );

        Ok(Self {
            bank: IBank::new(bank_address, provider.clone()),
            token: IBankToken::new(token_address, provider.clone()),
            provider,
            account,
            network,
        })
    }

    /// The signing account this client acts as.
    pub fn account(&self) -> Address {
        self.account
    }

    /// The network the client resolved at connect time.
    pub fn network(&self) -> NetworkId {
        self.network
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Total balance held by the bank contract, as an ether string.
    pub async fn total_balance(&self) -> Result<String> {
        let wei = self
            .bank
            .getTotalBalance()
            .call()
            .await
            .map_err(contract_err)?;
        Ok(units::from_wei(wei))
    }

    /// Current value of one of the account's deposits, by positional id.
    pub async fn deposit_value(&self, id: usize) -> Result<String> {
        let wei = self
            .bank
            .getDepositValueById(self.account, U256::from(id))
            .call()
            .await
            .map_err(contract_err)?;
        Ok(units::from_wei(wei))
    }

    /// Token balance of an account (default: the active account), as an
    /// ether string.
    pub async fn token_balance_of(&self, account: Option<Address>) -> Result<String> {
        let owner = account.unwrap_or(self.account);
        let wei = self
            .token
            .balanceOf(owner)
            .call()
            .await
            .map_err(contract_err)?;
        Ok(units::from_wei(wei))
    }

    /// All deposits of an account (default: the active account).
    pub async fn deposits_by_account(&self, account: Option<Address>) -> Result<Vec<Deposit>> {
        let account = account.unwrap_or(self.account);
        let ret = self
            .bank
            .getDepositsByAccount(account)
            .call()
            .await
            .map_err(contract_err)?;
        let rows = decode_rows(&ret.amounts, &ret.withInterest, &ret.dates, &ret.closed)?;
        Ok(to_deposits(rows))
    }

    /// All loans of an account (default: the active account).
    pub async fn loans_by_account(&self, account: Option<Address>) -> Result<Vec<Loan>> {
        let account = account.unwrap_or(self.account);
        let ret = self
            .bank
            .getLoansByAccount(account)
            .call()
            .await
            .map_err(contract_err)?;
        let rows = decode_rows(&ret.amounts, &ret.withInterest, &ret.dates, &ret.closed)?;
        Ok(to_loans(rows))
    }

    /// Opens a deposit, carrying `amount` ether as transaction value.
    ///
    /// Waits for the receipt, then returns the refreshed deposit list.
    pub async fn deposit(&self, amount: &str) -> Result<Vec<Deposit>> {
        let value = units::to_wei(amount).map_err(units_err)?;
        let receipt = self
            .bank
            .deposit(now_seconds())
            .value(value)
            .send()
            .await
            .map_err(contract_err)?
            .get_receipt()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        debug!(tx = %receipt.transaction_hash, "deposit confirmed");
        self.deposits_by_account(None).await
    }

    /// Withdraws a deposit by its positional id.
    ///
    /// Waits for the receipt, then returns the refreshed deposit list.
    pub async fn withdraw(&self, deposit_id: usize) -> Result<Vec<Deposit>> {
        let receipt = self
            .bank
            .withdraw(U256::from(deposit_id))
            .send()
            .await
            .map_err(contract_err)?
            .get_receipt()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        debug!(tx = %receipt.transaction_hash, "withdrawal confirmed");
        self.deposits_by_account(None).await
    }

    /// Requests a loan of `amount` ether.
    ///
    /// Waits for the receipt, then returns the refreshed loan list. There
    /// is no double-submission protection: two concurrent calls may open
    /// two loans.
    pub async fn request_loan(&self, amount: &str) -> Result<Vec<Loan>> {
        let amount_wei = units::to_wei(amount).map_err(units_err)?;
        let receipt = self
            .bank
            .requestLoan(amount_wei, now_seconds())
            .send()
            .await
            .map_err(contract_err)?
            .get_receipt()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        debug!(tx = %receipt.transaction_hash, "loan request confirmed");
        self.loans_by_account(None).await
    }

    /// Repays a loan, sending `amount` ether as transaction value.
    ///
    /// Waits for the receipt before re-fetching, same as every other
    /// state-mutating call, so the returned list reflects the repayment.
    pub async fn repay_loan(&self, loan_id: usize, amount: &str) -> Result<Vec<Loan>> {
        let value = units::to_wei(amount).map_err(units_err)?;
        let receipt = self
            .bank
            .repayLoan(U256::from(loan_id), now_seconds())
            .value(value)
            .send()
            .await
            .map_err(contract_err)?
            .get_receipt()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        debug!(tx = %receipt.transaction_hash, "repayment confirmed");
        self.loans_by_account(None).await
    }
}

fn contract_err(e: alloy::contract::Error) -> ClientError {
    ClientError::Contract(e.to_string())
}

fn units_err(e: crate::units::AmountError) -> ClientError {
    ClientError::Units(e.to_string())
}

fn parse_address(s: &str) -> Result<Address> {
    s.parse::<Address>()
        .map_err(|e| ClientError::BadAddress(s.to_string(), e.to_string()))
}

/// Current wall-clock time in whole seconds, as the contracts expect it.
fn now_seconds() -> U256 {
    U256::from(Utc::now().timestamp().max(0) as u64)
}

/// One decoded position, before it is tagged with its index.
struct Row {
    amount: String,
    amount_with_interest: String,
    date: DateTime<Utc>,
    is_closed: bool,
}

/// Zip the contract's four parallel arrays into rows.
///
/// The arrays correlate by index only; a length disagreement means the
/// response is malformed and is rejected rather than truncated.
fn decode_rows(
    amounts: &[U256],
    with_interest: &[U256],
    dates: &[U256],
    closed: &[bool],
) -> Result<Vec<Row>> {
    let len = amounts.len();
    if with_interest.len() != len || dates.len() != len || closed.len() != len {
        return Err(ClientError::Decode(format!(
            "parallel arrays disagree on length: {len}/{}/{}/{}",
            with_interest.len(),
            dates.len(),
            closed.len()
        )));
    }

    let mut rows = Vec::with_capacity(len);
    for i in 0..len {
        let secs = i64::try_from(dates[i])
            .map_err(|_| ClientError::Decode(format!("date out of range: {}", dates[i])))?;
        let date = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| ClientError::Decode(format!("date out of range: {secs}")))?;
        rows.push(Row {
            amount: units::from_wei(amounts[i]),
            amount_with_interest: units::from_wei(with_interest[i]),
            date,
            is_closed: closed[i],
        });
    }
    Ok(rows)
}

fn to_deposits(rows: Vec<Row>) -> Vec<Deposit> {
    rows.into_iter()
        .enumerate()
        .map(|(id, row)| Deposit {
            id,
            amount: row.amount,
            amount_with_interest: row.amount_with_interest,
            date: row.date,
            is_closed: row.is_closed,
        })
        .collect()
}

fn to_loans(rows: Vec<Row>) -> Vec<Loan> {
    rows.into_iter()
        .enumerate()
        .map(|(id, row)| Loan {
            id,
            amount: row.amount,
            amount_with_interest: row.amount_with_interest,
            date: row.date,
            is_closed: row.is_closed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_arrays(n: usize) -> (Vec<U256>, Vec<U256>, Vec<U256>, Vec<bool>) {
        let amounts = (0..n)
            .map(|i| U256::from(1_000_000_000_000_000_000u128 * (i as u128 + 1)))
            .collect();
        let with_interest = (0..n)
            .map(|i| U256::from(1_030_000_000_000_000_000u128 * (i as u128 + 1)))
            .collect();
        let dates = (0..n)
            .map(|i| U256::from(1_700_000_000u64 + i as u64))
            .collect();
        let closed = (0..n).map(|i| i % 2 == 1).collect();
        (amounts, with_interest, dates, closed)
    }

    #[test]
    fn decode_assigns_positional_ids() {
        let (amounts, with_interest, dates, closed) = sample_arrays(4);
        let rows = decode_rows(&amounts, &with_interest, &dates, &closed).unwrap();
        let deposits = to_deposits(rows);

        assert_eq!(deposits.len(), 4);
        for (i, deposit) in deposits.iter().enumerate() {
            assert_eq!(deposit.id, i);
        }
        assert_eq!(deposits[0].amount, "1.000000000000000000");
        assert_eq!(deposits[1].amount, "2.000000000000000000");
        assert!(!deposits[0].is_closed);
        assert!(deposits[1].is_closed);
    }

    #[test]
    fn decode_converts_dates_from_seconds() {
        let (amounts, with_interest, dates, closed) = sample_arrays(1);
        let rows = decode_rows(&amounts, &with_interest, &dates, &closed).unwrap();
        assert_eq!(rows[0].date.timestamp(), 1_700_000_000);
    }

    #[test]
    fn decode_empty_response() {
        let rows = decode_rows(&[], &[], &[], &[]).unwrap();
        assert!(rows.is_empty());
        assert!(to_loans(rows).is_empty());
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        let (amounts, with_interest, dates, _) = sample_arrays(3);
        let result = decode_rows(&amounts, &with_interest, &dates, &[false]);
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn decode_rejects_absurd_date() {
        let result = decode_rows(&[U256::ZERO], &[U256::ZERO], &[U256::MAX], &[false]);
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn loans_and_deposits_share_row_shape() {
        let (amounts, with_interest, dates, closed) = sample_arrays(2);
        let rows = decode_rows(&amounts, &with_interest, &dates, &closed).unwrap();
        let loans = to_loans(rows);
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[1].id, 1);
        assert_eq!(loans[0].amount_with_interest, "1.030000000000000000");
    }

    #[test]
    fn bad_address_is_reported_with_input() {
        let err = parse_address("0xnothex").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("0xnothex"));
    }

    #[test]
    fn unsupported_network_error_names_chain() {
        let err = ClientError::UnsupportedNetwork(NetworkId(4242));
        assert!(err.to_string().contains("4242"));
    }

    #[test]
    fn now_seconds_is_after_2024() {
        assert!(now_seconds() > U256::from(1_704_067_200u64));
    }
}
