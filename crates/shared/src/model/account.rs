use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// One net-valued withdrawal summary kept on the account itself. The ledger
/// row in `withdrawals` stores the gross amount; this embedded entry stores
/// the net payout only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletWithdrawalEntry {
    pub amount: f64,
    pub payout_number: String,
    pub status: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccountModel {
    pub account_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub wallet: f64,
    pub total_cashouts: f64,
    pub withdrawals: Option<Json<Vec<WalletWithdrawalEntry>>>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
