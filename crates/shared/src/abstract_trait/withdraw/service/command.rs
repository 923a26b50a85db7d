use crate::{
    domain::{requests::CreateWithdrawRequest, responses::SubmitWithdrawResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynWithdrawCommandService = Arc<dyn WithdrawCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait WithdrawCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateWithdrawRequest,
    ) -> Result<SubmitWithdrawResponse, ServiceError>;
}
