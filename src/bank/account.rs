use super::amount::PositiveAmount;
use super::error::{AccountError, Operation, SnapshotError};
use super::Decimal;
use serde::{Deserialize, Serialize};

/// A single bank account: an identifier, a holder name and a balance.
///
/// The balance only changes through [`Account::deposit`] and [`Account::withdraw`]
/// (transfer is a withdraw on the origin followed by a deposit on the destination),
/// and both validate before mutating, so a failed call leaves the balance untouched.
///
/// `Account::default()` is the empty account: zero balance and no identifier or
/// holder assigned yet. `None` is distinct from an assigned empty string.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    account_number: Option<String>,
    holder_name: Option<String>,
    balance: Decimal,
}

/// Raw account snapshot as parsed by serde.
/// This is the unvalidated form that needs conversion to an `Account`.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    account_number: Option<String>,
    holder_name: Option<String>,
    balance: Decimal,
}

impl TryFrom<AccountRecord> for Account {
    type Error = SnapshotError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        match record {
            AccountRecord {
                account_number,
                holder_name,
                balance,
            } if balance >= Decimal::ZERO => Ok(Account {
                account_number,
                holder_name,
                balance: balance.normalize(),
            }),
            AccountRecord { balance, .. } => Err(SnapshotError::NegativeBalance { balance }),
        }
    }
}

impl Account {
    /// Open an account with a strictly positive initial balance.
    pub fn new(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, AccountError> {
        let initial_balance = PositiveAmount::new(initial_balance, Operation::Open)?;
        let account = Self {
            account_number: Some(account_number.into()),
            holder_name: Some(holder_name.into()),
            balance: initial_balance.value().normalize(),
        };
        log::debug!(
            "[open] account={} holder={} balance={}",
            account.label(),
            account.holder_name.as_deref().unwrap_or_default(),
            account.balance
        );
        Ok(account)
    }

    /// Returns the account number, if one was assigned
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    /// Returns the holder name, if one was assigned
    pub fn holder_name(&self) -> Option<&str> {
        self.holder_name.as_deref()
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit the account.
    ///
    /// Fails with `InvalidArgument` when `amount <= 0`, and with `Unrepresentable`
    /// when the new balance would overflow or lose digits.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let amount = PositiveAmount::new(amount, Operation::Deposit)?;
        let balance = self.credited(amount)?;
        self.apply(Operation::Deposit, amount, balance);
        Ok(())
    }

    /// Debit the account and return the withdrawn amount, which is always `amount` itself.
    ///
    /// Fails with `InvalidArgument` when `amount <= 0`, then with `InsufficientFunds`
    /// when `amount` exceeds the balance, then with `Unrepresentable` when the new
    /// balance would lose digits.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let amount = PositiveAmount::new(amount, Operation::Withdraw)?;
        let balance = self.debited(amount)?;
        self.apply(Operation::Withdraw, amount, balance);
        Ok(amount.value())
    }

    /// Move `amount` from this account into `destination`.
    ///
    /// Best effort: returns `false` instead of an error when there is no destination,
    /// when the amount is not positive, when this account cannot cover it, or when
    /// either new balance cannot be represented exactly.
    /// Neither balance changes on failure.
    pub fn transfer(&mut self, destination: Option<&mut Account>, amount: Decimal) -> bool {
        let Some(destination) = destination else {
            log::warn!(
                "[transfer] from={} amount={amount} - Rejected: no destination account",
                self.label()
            );
            return false;
        };

        // Both sides are checked before either balance moves
        let planned = PositiveAmount::new(amount, Operation::Withdraw).and_then(|amount| {
            let origin_balance = self.debited(amount)?;
            let destination_balance = destination.credited(amount)?;
            Ok((amount, origin_balance, destination_balance))
        });

        match planned {
            Ok((amount, origin_balance, destination_balance)) => {
                self.apply(Operation::Withdraw, amount, origin_balance);
                destination.apply(Operation::Deposit, amount, destination_balance);
                log::trace!(
                    "[transfer] from={} to={} amount={amount} -> balances {} / {}",
                    self.label(),
                    destination.label(),
                    self.balance,
                    destination.balance
                );
                true
            }
            Err(
                e @ (AccountError::InvalidArgument { .. }
                | AccountError::InsufficientFunds { .. }
                | AccountError::Unrepresentable { .. }),
            ) => {
                log::warn!(
                    "[transfer] from={} to={} - Rejected: {e}",
                    self.label(),
                    destination.label()
                );
                false
            }
        }
    }

    /// The balance after crediting `amount`, without applying it.
    fn credited(&self, amount: PositiveAmount) -> Result<Decimal, AccountError> {
        amount
            .added_to(self.balance)
            .ok_or(AccountError::Unrepresentable {
                operation: Operation::Deposit,
                balance: self.balance,
                amount: amount.value(),
            })
    }

    /// The balance after debiting `amount`, without applying it.
    fn debited(&self, amount: PositiveAmount) -> Result<Decimal, AccountError> {
        if amount.value() > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount.value(),
            });
        }

        amount
            .subtracted_from(self.balance)
            .ok_or(AccountError::Unrepresentable {
                operation: Operation::Withdraw,
                balance: self.balance,
                amount: amount.value(),
            })
    }

    fn apply(&mut self, operation: Operation, amount: PositiveAmount, balance: Decimal) {
        self.balance = balance;
        self.normalize();
        #[cfg(debug_assertions)]
        self.assert_invariant();

        log::trace!(
            "[{operation}] account={} amount={amount} -> new_balance={}",
            self.label(),
            self.balance
        );
    }

    fn label(&self) -> &str {
        self.account_number.as_deref().unwrap_or("<unassigned>")
    }

    /// Debits are checked against the balance and snapshots are checked on load,
    /// so it can never go negative.
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance ({}) of account {} is negative",
            self.balance,
            self.label()
        );
    }

    /// Trim trailing zeros so equal balances print the same.
    fn normalize(&mut self) {
        self.balance = self.balance.normalize();
    }
}
