use crate::{
    domain::responses::{BalanceResponse, HistoryResponse, WithdrawListResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynWithdrawQueryService = Arc<dyn WithdrawQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait WithdrawQueryServiceTrait {
    async fn find_by_account(&self, account_id: &str) -> Result<HistoryResponse, ServiceError>;

    async fn balance_of(&self, account_id: &str) -> Result<BalanceResponse, ServiceError>;

    async fn find_all(&self) -> Result<WithdrawListResponse, ServiceError>;
}
