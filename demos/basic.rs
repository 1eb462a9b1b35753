//! Basic example of using `Account`.
//!
//! Run with: `cargo run --example basic`

use bank_account::{Account, AccountError, Decimal};
use rust_decimal_macros::dec;

fn main() -> Result<(), AccountError> {
    // Initialize logger (optional, but shows what's happening). Try RUST_LOG=trace.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut alice = Account::new("12345-6", "Alice", dec!(100.0))?;
    let mut bob = Account::new("77777-7", "Bob", dec!(50.0))?;

    let withdrawn = alice.withdraw(dec!(30.0))?;
    println!("Alice withdrew {withdrawn}, balance {}", alice.balance());

    if let Err(e) = alice.deposit(dec!(-5.0)) {
        println!("Deposit refused: {e}");
    }
    if let Err(e) = alice.withdraw(dec!(150.0)) {
        println!("Withdrawal refused: {e}");
    }

    // Transfers report a bool; the reason for a refusal is logged at warn
    println!("Transfer 25 -> {}", alice.transfer(Some(&mut bob), dec!(25.0)));
    println!("Transfer 101 -> {}", alice.transfer(Some(&mut bob), dec!(101.0)));
    println!("Transfer to nobody -> {}", alice.transfer(None, dec!(10.0)));

    let empty = Account::default();
    println!("\n=== Final Account State ===");
    for account in [&alice, &bob, &empty] {
        println!(
            "{:<10} {:<8} {}",
            account.account_number().unwrap_or("-"),
            account.holder_name().unwrap_or("-"),
            account.balance()
        );
    }
    assert_eq!(empty.balance(), Decimal::ZERO);

    Ok(())
}
