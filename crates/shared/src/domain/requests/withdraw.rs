use crate::model::account::WalletWithdrawalEntry;
use crate::utils::deserialize_lenient_amount;
use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateWithdrawRequest {
    #[serde(default, rename = "accountId")]
    #[validate(length(min = 1, message = "accountId is required"))]
    pub account_id: String,

    /// Coerced to a number; non-numeric input becomes 0.0 and is then
    /// rejected by the minimum-amount rule rather than a type error.
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub amount: f64,

    pub phone: Option<String>,

    #[serde(rename = "mpesaNumber")]
    pub mpesa_number: Option<String>,
}

impl CreateWithdrawRequest {
    /// First non-empty of the two caller-supplied aliases, trimmed.
    pub fn resolve_payout_number(&self) -> Option<String> {
        [self.phone.as_deref(), self.mpesa_number.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams, Clone)]
pub struct HistoryQuery {
    #[serde(rename = "accountId")]
    #[validate(length(min = 1, message = "accountId is required"))]
    pub account_id: String,
}

/// Validated payload handed to the withdrawal-record store.
#[derive(Debug, Clone)]
pub struct NewWithdrawRecord {
    pub account_id: String,
    pub amount: f64,
    pub net_amount: f64,
    pub payout_number: String,
    pub created_at: NaiveDateTime,
}

/// Account-side mutation: debit the gross amount, bump the cashout total
/// and append the net-valued summary to the embedded list when one exists.
#[derive(Debug, Clone)]
pub struct DebitWalletRequest {
    pub account_id: String,
    pub amount: f64,
    pub summary: WalletWithdrawalEntry,
}
