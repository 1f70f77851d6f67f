//! Transfer request type

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core_types::AccountId;

/// A single transfer order: move `amount` from one account to another.
///
/// Constructed per call and dropped afterwards; nothing here is persisted.
/// Field names deserialize from the external camelCase wire shape.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(
        from_account_id: impl Into<AccountId>,
        to_account_id: impl Into<AccountId>,
        amount: Decimal,
    ) -> Self {
        Self {
            from_account_id: from_account_id.into(),
            to_account_id: to_account_id.into(),
            amount,
        }
    }
}
