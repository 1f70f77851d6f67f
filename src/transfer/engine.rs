//! Transfer Engine
//!
//! The central component: validates a transfer request, resolves both
//! accounts, takes both per-account primitives in the registry's fixed
//! order, commits the two balance mutations together and tells the
//! notification collaborator. Every failure is deterministic, names the
//! offending account and leaves both balances exactly as they were.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::account::{Account, AccountStore};
use crate::core_types::AccountId;
use crate::error::TransferError;
use crate::locks::LockRegistry;
use crate::notify::Notifier;
use crate::transfer::types::TransferRequest;

/// Executes money transfers between two accounts.
pub struct TransferEngine {
    store: Arc<AccountStore>,
    locks: LockRegistry,
    notifier: Arc<dyn Notifier>,
}

impl TransferEngine {
    /// Create a new engine over a store and a notification collaborator.
    ///
    /// The engine owns its lock registry: one primitive per account id for
    /// the engine's lifetime, shared by every transfer that touches the id.
    pub fn new(store: Arc<AccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            locks: LockRegistry::new(),
            notifier,
        }
    }

    /// Execute a transfer.
    ///
    /// Either both balances change together or neither does. Validation
    /// failures are reported to the caller and never retried:
    /// - `SameAccount` if source and destination ids are equal
    /// - `InvalidAmount` if the amount is not strictly positive
    /// - `AccountNotFound` naming whichever side is absent
    /// - `InsufficientFunds` naming the source, with no mutation and no
    ///   notification
    pub fn transfer(&self, request: &TransferRequest) -> Result<(), TransferError> {
        if request.from_account_id == request.to_account_id {
            return Err(TransferError::SameAccount(request.from_account_id.clone()));
        }
        if request.amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }

        // Both lookups happen before any locking: ids and existence are
        // stable once created, only balances are contended.
        let from = self.resolve(&request.from_account_id)?;
        let to = self.resolve(&request.to_account_id)?;

        let amount = request.amount;
        self.locks.with_pair(from.id(), to.id(), || {
            let from_balance = from.balance() - amount;
            if from_balance < Decimal::ZERO {
                warn!(
                    account_id = %from.id(),
                    %amount,
                    "transfer rejected: insufficient funds"
                );
                return Err(TransferError::InsufficientFunds(from.id().clone()));
            }

            // Commit: both cells change while both primitives are held, so
            // no other transfer on these accounts can observe one side
            // updated without the other.
            from.set_balance(from_balance);
            to.set_balance(to.balance() + amount);

            // Notify under lock, keeping per-account update-then-notify
            // order aligned with commit serialization.
            self.notifier
                .notify(&from, &format!("sent {} to {}", amount, to.id()));
            self.notifier
                .notify(&to, &format!("received {} from {}", amount, from.id()));

            info!(
                from = %from.id(),
                to = %to.id(),
                %amount,
                "transfer committed"
            );
            Ok(())
        })
    }

    /// The account store this engine operates on.
    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }

    fn resolve(&self, id: &AccountId) -> Result<Arc<Account>, TransferError> {
        self.store
            .get(id)
            .ok_or_else(|| TransferError::AccountNotFound(id.clone()))
    }
}
