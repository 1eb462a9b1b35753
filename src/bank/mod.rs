//! Bank account module.
//!
//! This module contains the account entity and its supporting types:
//! - `Account` - Balance state with validated deposit, withdraw and transfer
//! - `PositiveAmount` - The validated form of a caller-supplied amount, with exact arithmetic
//! - `Error` types - `AccountError`, the `Operation` that raised it, and `SnapshotError`

mod account;
mod amount;
mod error;

pub use rust_decimal::Decimal;

pub use account::Account;
pub use error::{AccountError, Operation};
