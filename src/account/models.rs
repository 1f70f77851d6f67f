//! Account data model

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core_types::AccountId;

/// A single account: an immutable identifier plus a balance cell.
///
/// # Invariants (ENFORCED by visibility):
/// - `id` never changes after construction
/// - `balance` is committed only by the transfer engine (`set_balance` is
///   crate-private) and only while both per-account primitives are held
/// - the cell's own `RwLock` exists so a concurrent lookup reads a whole
///   `Decimal`, never a torn one; it is NOT the transfer exclusion primitive
///   (that lives in the lock registry)
pub struct Account {
    id: AccountId,
    balance: RwLock<Decimal>,
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance: RwLock::new(balance),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Current balance, read atomically.
    pub fn balance(&self) -> Decimal {
        *self
            .balance
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Commit a new balance. Caller must hold this account's exclusion
    /// primitive from the lock registry.
    pub(crate) fn set_balance(&self, new_balance: Decimal) {
        *self
            .balance
            .write()
            .unwrap_or_else(PoisonError::into_inner) = new_balance;
    }

    /// Serializable snapshot for the lookup boundary.
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id.clone(),
            balance: self.balance(),
            created_at: self.created_at,
        }
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("balance", &self.balance())
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Point-in-time view of an account, as handed to external layers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccountView {
    pub id: AccountId,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}
