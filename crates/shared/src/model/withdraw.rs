use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WithdrawModel {
    pub withdraw_id: i32,
    pub withdraw_no: Uuid,
    pub account_id: String,
    pub amount: f64,
    /// Nullable: rows created before net amounts were computed carry no
    /// value, so readers fall back to the gross amount.
    pub net_amount: Option<f64>,
    pub payout_number: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Withdrawal row joined with the owning account, for the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WithdrawWithOwnerModel {
    pub withdraw_id: i32,
    pub withdraw_no: Uuid,
    pub account_id: String,
    pub amount: f64,
    pub net_amount: Option<f64>,
    pub payout_number: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub phone: String,
    pub email: String,
}
