//! Contract ABI definitions using alloy's `sol!` macro.

use alloy::sol;

sol! {
    /// Bank contract interface: deposits, withdrawals, and loans.
    ///
    /// The two list accessors return positions as four parallel arrays;
    /// entries correlate by index only.
    #[sol(rpc)]
    interface IBank {
        function getTotalBalance() external view returns (uint256);
        function getDepositValueById(address account, uint256 id) external view returns (uint256);
        function getDepositsByAccount(address account) external view
            returns (uint256[] amounts, uint256[] withInterest, uint256[] dates, bool[] closed);
        function getLoansByAccount(address account) external view
            returns (uint256[] amounts, uint256[] withInterest, uint256[] dates, bool[] closed);
        function requestLoan(uint256 amount, uint256 date) external;
        function repayLoan(uint256 loanId, uint256 date) external payable;
        function deposit(uint256 date) external payable;
        function withdraw(uint256 depositId) external;
    }

    /// Minimal interface of the bank's fungible token.
    #[sol(rpc)]
    interface IBankToken {
        function balanceOf(address owner) external view returns (uint256);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}
