//! Account model and in-memory store

pub mod models;
pub mod store;

pub use models::{Account, AccountView};
pub use store::AccountStore;
