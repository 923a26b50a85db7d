use crate::model::{
    account::WalletWithdrawalEntry,
    withdraw::{WithdrawModel, WithdrawWithOwnerModel},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitWithdrawResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "netAmount")]
    pub net_amount: f64,
}

/// One history line. Entries read from the withdrawals table carry the row
/// id; entries taken from the account's embedded summary list do not.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WithdrawHistoryEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub amount: f64,
    pub status: String,
    pub date: String,
    #[serde(rename = "payoutNumber")]
    pub payout_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<WithdrawHistoryEntry>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminWithdrawResponse {
    pub id: i32,
    #[serde(rename = "withdrawNo")]
    pub withdraw_no: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub amount: f64,
    #[serde(rename = "netAmount")]
    pub net_amount: Option<f64>,
    #[serde(rename = "payoutNumber")]
    pub payout_number: String,
    pub status: String,
    pub date: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WithdrawListResponse {
    pub success: bool,
    pub withdrawals: Vec<AdminWithdrawResponse>,
}

impl From<WithdrawModel> for WithdrawHistoryEntry {
    fn from(model: WithdrawModel) -> Self {
        Self {
            id: Some(model.withdraw_id),
            // net when computed, gross for legacy rows
            amount: model.net_amount.unwrap_or(model.amount),
            status: model.status,
            date: model.created_at.to_string(),
            payout_number: model.payout_number,
        }
    }
}

impl From<WalletWithdrawalEntry> for WithdrawHistoryEntry {
    fn from(entry: WalletWithdrawalEntry) -> Self {
        Self {
            id: None,
            amount: entry.amount,
            status: entry.status,
            date: entry.date.to_string(),
            payout_number: entry.payout_number,
        }
    }
}

impl From<WithdrawWithOwnerModel> for AdminWithdrawResponse {
    fn from(model: WithdrawWithOwnerModel) -> Self {
        Self {
            id: model.withdraw_id,
            withdraw_no: model.withdraw_no.to_string(),
            account_id: model.account_id,
            amount: model.amount,
            net_amount: model.net_amount,
            payout_number: model.payout_number,
            status: model.status,
            date: model.created_at.to_string(),
            name: model.name,
            phone: model.phone,
            email: model.email,
        }
    }
}
