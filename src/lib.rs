//! A single bank account entity.
//!
//! [`Account`] holds an account number, a holder name and a [`Decimal`] balance.
//! Deposits and withdrawals validate their amount and return an [`AccountError`]
//! to the caller; [`Account::transfer`] combines the two and reports a plain
//! `bool` instead.
//!
//! ```
//! use bank_account::{Account, Decimal};
//!
//! let mut origin = Account::new("12345-6", "Alice", Decimal::from(100)).unwrap();
//! let mut destination = Account::new("77777-7", "Bob", Decimal::from(50)).unwrap();
//!
//! assert!(origin.transfer(Some(&mut destination), Decimal::from(25)));
//! assert_eq!(origin.balance(), Decimal::from(75));
//! assert_eq!(destination.balance(), Decimal::from(75));
//! ```

mod bank;

pub use bank::{Account, AccountError, Decimal, Operation};
