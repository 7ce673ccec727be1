//! # chainbank CLI
//!
//! Entry point for the `chainbank` binary.
//!
//! Subcommands:
//! - `chainbank status`   — Connection status, account, and bank totals
//! - `chainbank deposits` / `chainbank loans` — List positions
//! - `chainbank deposit` / `chainbank withdraw` — Move funds in and out
//! - `chainbank borrow` / `chainbank repay` — Loan lifecycle
//!
//! The signing key is read from `CHAINBANK_PRIVATE_KEY` (a `.env` file is
//! honored); everything else comes from `chainbank.yaml`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// chainbank — command-line client for the token + bank contracts.
#[derive(Parser)]
#[command(name = "chainbank", version, about)]
struct Cli {
    /// Path to chainbank.yaml (default: ./chainbank.yaml).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show connection status, active account, and bank totals.
    Status,

    /// Print the current value of one deposit by its positional id.
    Balance {
        /// Position of the deposit in the account's list.
        id: usize,
    },

    /// List deposits for an account.
    Deposits {
        /// Account to query (default: the active account).
        #[arg(long)]
        account: Option<String>,
    },

    /// List loans for an account.
    Loans {
        /// Account to query (default: the active account).
        #[arg(long)]
        account: Option<String>,
    },

    /// Open a deposit of AMOUNT ether.
    Deposit {
        /// Amount in ether, e.g. "1.5".
        amount: String,
    },

    /// Withdraw a deposit by its positional id.
    Withdraw {
        /// Position of the deposit in the account's list.
        id: usize,
    },

    /// Request a loan of AMOUNT ether.
    Borrow {
        /// Amount in ether, e.g. "1.5".
        amount: String,
    },

    /// Repay a loan, sending AMOUNT ether as transaction value.
    Repay {
        /// Position of the loan in the account's list.
        id: usize,
        /// Amount in ether, e.g. "1.5".
        amount: String,
    },

    /// Print the token balance of an account.
    TokenBalance {
        /// Account to query (default: the active account).
        #[arg(long)]
        account: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status => commands::status::run(cli.config).await,
        Commands::Balance { id } => commands::deposits::value(cli.config, id).await,
        Commands::Deposits { account } => commands::deposits::list(cli.config, account).await,
        Commands::Loans { account } => commands::loans::list(cli.config, account).await,
        Commands::Deposit { amount } => commands::deposits::open(cli.config, amount).await,
        Commands::Withdraw { id } => commands::deposits::withdraw(cli.config, id).await,
        Commands::Borrow { amount } => commands::loans::borrow(cli.config, amount).await,
        Commands::Repay { id, amount } => commands::loans::repay(cli.config, id, amount).await,
        Commands::TokenBalance { account } => {
            commands::status::token_balance(cli.config, account).await
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
