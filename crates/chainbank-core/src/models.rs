//! Application-level records decoded from contract responses.
//!
//! The bank contract returns positions as four parallel arrays (amount,
//! amount with interest, date in seconds, closed flag); the client zips
//! them into these records. They are built fresh on every query and never
//! persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single deposit position held at the bank contract.
///
/// `id` is the position of the entry in the contract's response arrays,
/// not a chain-assigned identifier. If the contract ever reorders entries
/// between calls, ids shift with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    /// Index of this entry in the contract response.
    pub id: usize,
    /// Principal, as a decimal ether-denominated string.
    pub amount: String,
    /// Principal plus accrued interest, decimal ether string.
    pub amount_with_interest: String,
    /// When the deposit was made.
    pub date: DateTime<Utc>,
    /// Whether the deposit has been withdrawn.
    pub is_closed: bool,
}

/// A single loan position held at the bank contract.
///
/// Same shape as [`Deposit`], kept as a distinct type: the fields mean
/// loan principal, repayment amount and closure state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Index of this entry in the contract response.
    pub id: usize,
    /// Principal, as a decimal ether-denominated string.
    pub amount: String,
    /// Principal plus interest owed, decimal ether string.
    pub amount_with_interest: String,
    /// When the loan was taken out.
    pub date: DateTime<Utc>,
    /// Whether the loan has been repaid.
    pub is_closed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_serde_roundtrip() {
        let deposit = Deposit {
            id: 2,
            amount: "1.500000000000000000".into(),
            amount_with_interest: "1.530000000000000000".into(),
            date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            is_closed: false,
        };
        let json = serde_json::to_string(&deposit).unwrap();
        let back: Deposit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deposit);
    }

    #[test]
    fn loan_serializes_snake_case_fields() {
        let loan = Loan {
            id: 0,
            amount: "2".into(),
            amount_with_interest: "2.1".into(),
            date: DateTime::from_timestamp(0, 0).unwrap(),
            is_closed: true,
        };
        let json = serde_json::to_string(&loan).unwrap();
        assert!(json.contains("amount_with_interest"));
        assert!(json.contains("is_closed"));
    }
}
