//! Transfer Error Types
//!
//! One taxonomy shared by the account store and the transfer engine.
//! Error codes are stable strings for consistent API responses; the
//! offending account id is always embedded in the message.

use thiserror::Error;

use crate::core_types::AccountId;

/// Transfer error types
///
/// `DuplicateAccount` and `SameAccount` are one kind with two contexts:
/// an identifier was used twice, either at creation or on both sides of a
/// transfer. They share the `DUPLICATE_ACCOUNT` code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    // === Validation Errors ===
    #[error("Account id {0} already exists!")]
    DuplicateAccount(AccountId),

    #[error("Cannot transfer money to the same account: {0}")]
    SameAccount(AccountId),

    #[error("Transfer amount must be positive.")]
    InvalidAmount,

    // === Account Errors ===
    #[error("Account {0} not found")]
    AccountNotFound(AccountId),

    #[error("Account {0} has insufficient funds")]
    InsufficientFunds(AccountId),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::DuplicateAccount(_) | TransferError::SameAccount(_) => {
                "DUPLICATE_ACCOUNT"
            }
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::InsufficientFunds(_) => "INSUFFICIENT_FUNDS",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::DuplicateAccount(_)
            | TransferError::SameAccount(_)
            | TransferError::InvalidAmount
            | TransferError::InsufficientFunds(_) => 400,
            TransferError::AccountNotFound(_) => 404,
        }
    }

    /// The account id named by this error, if it names one.
    pub fn account_id(&self) -> Option<&str> {
        match self {
            TransferError::DuplicateAccount(id)
            | TransferError::SameAccount(id)
            | TransferError::AccountNotFound(id)
            | TransferError::InsufficientFunds(id) => Some(id),
            TransferError::InvalidAmount => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TransferError::DuplicateAccount("Id-001".into()).code(),
            "DUPLICATE_ACCOUNT"
        );
        assert_eq!(
            TransferError::SameAccount("Id-001".into()).code(),
            "DUPLICATE_ACCOUNT"
        );
        assert_eq!(
            TransferError::InsufficientFunds("Id-001".into()).code(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(TransferError::InvalidAmount.code(), "INVALID_AMOUNT");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            TransferError::AccountNotFound("Id-001".into()).http_status(),
            404
        );
        assert_eq!(
            TransferError::SameAccount("Id-001".into()).http_status(),
            400
        );
        assert_eq!(
            TransferError::InsufficientFunds("Id-001".into()).http_status(),
            400
        );
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TransferError::SameAccount("Id-001".into()).to_string(),
            "Cannot transfer money to the same account: Id-001"
        );
        assert_eq!(
            TransferError::AccountNotFound("Id-001".into()).to_string(),
            "Account Id-001 not found"
        );
        assert_eq!(
            TransferError::InsufficientFunds("Id-001".into()).to_string(),
            "Account Id-001 has insufficient funds"
        );
        assert_eq!(
            TransferError::DuplicateAccount("Id-001".into()).to_string(),
            "Account id Id-001 already exists!"
        );
    }

    #[test]
    fn test_account_id() {
        assert_eq!(
            TransferError::AccountNotFound("Id-007".into()).account_id(),
            Some("Id-007")
        );
        assert_eq!(TransferError::InvalidAmount.account_id(), None);
    }
}
