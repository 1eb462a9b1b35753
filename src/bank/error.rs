use crate::bank::Decimal;

/// The account operation that rejected an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    Deposit,
    Withdraw,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Open => write!(f, "open"),
            Operation::Deposit => write!(f, "deposit"),
            Operation::Withdraw => write!(f, "withdraw"),
        }
    }
}

/// Errors raised by account operations.
/// Every kind is returned to the direct caller; only `Account::transfer` turns them into `false`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountError {
    #[error("Invalid argument: {operation} amount must be positive, got {amount}")]
    InvalidArgument { operation: Operation, amount: Decimal },

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        balance: Decimal,
        requested: Decimal,
    },

    /// The result would overflow or be rounded to fit 28 significant digits.
    #[error("Unrepresentable: {operation} of {amount} on balance {balance} cannot be applied exactly")]
    Unrepresentable {
        operation: Operation,
        balance: Decimal,
        amount: Decimal,
    },
}

/// Errors during `AccountRecord` -> `Account` conversion when loading a snapshot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Invalid snapshot: balance {balance} is negative")]
    NegativeBalance { balance: Decimal },
}
