//! FundCore - Concurrent Account Balance and Transfer Core
//!
//! An in-memory account store plus a transfer engine that moves money
//! between two accounts with strict consistency under concurrent access.
//! Deadlock freedom comes from one rule: both per-account primitives are
//! always taken in the same fixed order over account ids, never ordered by
//! transfer direction.
//!
//! # Modules
//!
//! - [`core_types`] - Core type definitions (AccountId)
//! - [`account`] - Account model and in-memory store
//! - [`locks`] - Per-account exclusion primitives, fixed-order pairing
//! - [`transfer`] - Transfer engine
//! - [`notify`] - Post-commit notification contract
//! - [`error`] - Error taxonomy with API code / HTTP status mapping
//! - [`config`] - YAML application configuration
//! - [`logging`] - Tracing subscriber setup

// Core types - must be first!
pub mod core_types;

pub mod account;
pub mod config;
pub mod error;
pub mod locks;
pub mod logging;
pub mod notify;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountStore, AccountView};
pub use core_types::AccountId;
pub use error::TransferError;
pub use locks::LockRegistry;
pub use notify::{LogNotifier, Notifier};
pub use transfer::{TransferEngine, TransferRequest};
