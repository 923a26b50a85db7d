use crate::{
    domain::requests::DebitWalletRequest, errors::RepositoryError, model::account::AccountModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAccountCommandRepository = Arc<dyn AccountCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AccountCommandRepositoryTrait {
    async fn apply_withdrawal(
        &self,
        req: &DebitWalletRequest,
    ) -> Result<AccountModel, RepositoryError>;
}
