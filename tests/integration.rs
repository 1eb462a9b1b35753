//! Integration tests for `Account` through the public API.
//!
//! These tests walk the documented scenarios end to end and check that an
//! account snapshot survives a serde round trip.
use bank_account::{Account, AccountError, Decimal, Operation};
use rust_decimal_macros::dec;

/// Helper to open the account most scenarios start from
fn default_account() -> Account {
    Account::new("12345-6", "Alice", dec!(100.0)).unwrap()
}

#[test]
fn test_open_account_with_initial_balance() {
    let account = default_account();

    assert_eq!(account.account_number(), Some("12345-6"));
    assert_eq!(account.holder_name(), Some("Alice"));
    assert_eq!(account.balance(), dec!(100.0));
}

#[test]
fn test_withdraw_returns_withdrawn_amount() {
    let mut account = default_account();

    assert_eq!(account.withdraw(dec!(30.0)), Ok(dec!(30.0)));
    assert_eq!(account.balance(), dec!(70.0));
}

#[test]
fn test_negative_deposit_is_invalid_argument() {
    let mut account = default_account();

    assert_eq!(
        account.deposit(dec!(-5.0)),
        Err(AccountError::InvalidArgument {
            operation: Operation::Deposit,
            amount: dec!(-5.0),
        })
    );
    assert_eq!(account.balance(), dec!(100.0));
}

#[test]
fn test_overdraw_is_insufficient_funds() {
    let mut account = default_account();

    assert!(matches!(
        account.withdraw(dec!(150.0)),
        Err(AccountError::InsufficientFunds { .. })
    ));
    assert_eq!(account.balance(), dec!(100.0));
}

#[test]
fn test_successful_transfer() {
    let mut origin = default_account();
    let mut destination = Account::new("77777-7", "Bob", dec!(50.0)).unwrap();

    assert!(origin.transfer(Some(&mut destination), dec!(25.0)));
    assert_eq!(origin.balance(), dec!(75.0));
    assert_eq!(destination.balance(), dec!(75.0));
}

#[test]
fn test_transfer_over_balance_fails() {
    let mut origin = default_account();
    let mut destination = Account::new("88888-8", "Bob", dec!(50.0)).unwrap();

    assert!(!origin.transfer(Some(&mut destination), dec!(101.0)));
    assert_eq!(origin.balance(), dec!(100.0));
    assert_eq!(destination.balance(), dec!(50.0));
}

#[test]
fn test_transfer_negative_amount_fails() {
    let mut origin = default_account();
    let mut destination = Account::new("99999-9", "Bob", dec!(50.0)).unwrap();

    assert!(!origin.transfer(Some(&mut destination), dec!(-10.0)));
    assert_eq!(origin.balance(), dec!(100.0));
    assert_eq!(destination.balance(), dec!(50.0));
}

#[test]
fn test_transfer_without_destination_fails() {
    let mut origin = default_account();

    assert!(!origin.transfer(None, dec!(10.0)));
    assert_eq!(origin.balance(), dec!(100.0));
}

#[test]
fn test_accounts_are_independent() {
    let mut first = default_account();
    let second = default_account();

    first.withdraw(dec!(40)).unwrap();

    assert_eq!(first.balance(), dec!(60));
    assert_eq!(second.balance(), dec!(100.0));
}

#[test]
fn test_chained_transfers() {
    let mut a = default_account();
    let mut b = Account::new("2", "Bob", dec!(10)).unwrap();
    let mut c = Account::default();

    assert!(a.transfer(Some(&mut b), dec!(40)));
    assert!(b.transfer(Some(&mut c), dec!(50)));
    assert!(!c.transfer(Some(&mut a), dec!(50.01)));
    assert!(c.transfer(Some(&mut a), dec!(50)));

    assert_eq!(a.balance(), dec!(110));
    assert_eq!(b.balance(), Decimal::ZERO);
    assert_eq!(c.balance(), Decimal::ZERO);
}

// ============================================================================
// Snapshot Tests
// ============================================================================

#[test]
fn test_snapshot_to_csv() {
    let mut origin = default_account();
    let mut destination = Account::default();
    assert!(origin.transfer(Some(&mut destination), dec!(25.00)));

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.serialize(&origin).unwrap();
    wtr.serialize(&destination).unwrap();
    let output = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

    // Unassigned identifiers are written as empty fields
    assert_eq!(
        output,
        "account_number,holder_name,balance\n12345-6,Alice,75\n,,25\n"
    );

    let mut rdr = csv::Reader::from_reader(output.as_bytes());
    let accounts: Vec<Account> = rdr.deserialize().map(|r| r.unwrap()).collect();

    assert_eq!(accounts, vec![origin, destination]);
    assert_eq!(accounts[1].account_number(), None);
}

#[test]
fn test_snapshot_with_negative_balance_is_rejected() {
    let input = "account_number,holder_name,balance
1,A,-5";

    let mut rdr = csv::Reader::from_reader(input.as_bytes());
    let result: Option<Result<Account, csv::Error>> = rdr.deserialize().next();

    // The balance rule is checked on load, not on the next deposit
    assert!(result.unwrap().is_err());
}

#[test]
fn test_snapshot_with_zero_balance_loads() {
    let input = "account_number,holder_name,balance
1,A,0";

    let mut rdr = csv::Reader::from_reader(input.as_bytes());
    let mut account: Account = rdr.deserialize().next().unwrap().unwrap();

    account.deposit(dec!(1)).unwrap();
    assert_eq!(account.balance(), dec!(1));
    assert_eq!(account.holder_name(), Some("A"));
}
