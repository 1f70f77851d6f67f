//! In-memory account store
//!
//! Holds every account keyed by id. Concurrency safety for insertion and
//! lookup comes from the map itself; balance mutation is the transfer
//! engine's business, not the store's.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;

use crate::account::Account;
use crate::core_types::AccountId;
use crate::error::TransferError;

/// Thread-safe account registry.
///
/// Creation uses the map's entry API, so two concurrent `create` calls for
/// the same id race on one slot and exactly one wins.
pub struct AccountStore {
    accounts: DashMap<AccountId, Arc<Account>>,
}

impl AccountStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Insert a new account.
    ///
    /// Fails with `DuplicateAccount` if the id is already taken. On success
    /// the account is immediately visible to `get`.
    pub fn create(&self, account: Account) -> Result<Arc<Account>, TransferError> {
        match self.accounts.entry(account.id().clone()) {
            Entry::Occupied(_) => Err(TransferError::DuplicateAccount(account.id().clone())),
            Entry::Vacant(slot) => {
                let account = Arc::new(account);
                slot.insert(Arc::clone(&account));
                Ok(account)
            }
        }
    }

    /// Look up an account by id.
    pub fn get(&self, id: &str) -> Option<Arc<Account>> {
        self.accounts.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Number of accounts in the store.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of all balances.
    ///
    /// Only meaningful at quiescence: while transfers are in flight the sum
    /// may include one side of a commit and not the other.
    pub fn total_balance(&self) -> Decimal {
        self.accounts
            .iter()
            .map(|entry| entry.value().balance())
            .sum()
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
