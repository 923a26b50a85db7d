use crate::{
    errors::RepositoryError,
    model::withdraw::{WithdrawModel, WithdrawWithOwnerModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynWithdrawQueryRepository = Arc<dyn WithdrawQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait WithdrawQueryRepositoryTrait {
    /// Records for one account, newest first.
    async fn find_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<WithdrawModel>, RepositoryError>;

    /// All records across accounts, newest first, joined with owner details.
    async fn find_all_with_owner(&self) -> Result<Vec<WithdrawWithOwnerModel>, RepositoryError>;
}
