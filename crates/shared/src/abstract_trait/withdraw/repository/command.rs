use crate::{
    domain::requests::NewWithdrawRecord, errors::RepositoryError, model::withdraw::WithdrawModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynWithdrawCommandRepository = Arc<dyn WithdrawCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait WithdrawCommandRepositoryTrait {
    async fn create(&self, req: &NewWithdrawRecord) -> Result<WithdrawModel, RepositoryError>;
}
