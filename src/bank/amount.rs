use crate::bank::{
    error::{AccountError, Operation},
    Decimal,
};

/// A validated, strictly positive amount.
///
/// Every balance mutation goes through one of these, so an `Account` never
/// sees a zero or negative amount past its validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct PositiveAmount(Decimal);

impl PositiveAmount {
    /// Validate `amount` on behalf of `operation`.
    pub(crate) fn new(amount: Decimal, operation: Operation) -> Result<Self, AccountError> {
        match amount {
            amount if amount > Decimal::ZERO => Ok(PositiveAmount(amount)),
            _ => Err(AccountError::InvalidArgument { operation, amount }),
        }
    }

    pub(crate) fn value(self) -> Decimal {
        self.0
    }

    /// `balance + self`, or `None` when the sum overflows or had to be rounded.
    ///
    /// A rounded sum fails to give back both operands when subtracted.
    pub(crate) fn added_to(self, balance: Decimal) -> Option<Decimal> {
        let sum = balance.checked_add(self.0)?;
        let exact =
            sum.checked_sub(balance) == Some(self.0) && sum.checked_sub(self.0) == Some(balance);
        exact.then_some(sum)
    }

    /// `balance - self`, or `None` when the difference had to be rounded.
    pub(crate) fn subtracted_from(self, balance: Decimal) -> Option<Decimal> {
        let difference = balance.checked_sub(self.0)?;
        let exact = difference.checked_add(self.0) == Some(balance)
            && balance.checked_sub(difference) == Some(self.0);
        exact.then_some(difference)
    }
}

impl std::fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
