use crate::{errors::RepositoryError, model::account::AccountModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAccountQueryRepository = Arc<dyn AccountQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AccountQueryRepositoryTrait {
    async fn find_by_id(&self, account_id: &str) -> Result<AccountModel, RepositoryError>;
}
