use crate::{
    abstract_trait::{
        account::repository::query::DynAccountQueryRepository,
        withdraw::{
            repository::query::DynWithdrawQueryRepository,
            service::query::WithdrawQueryServiceTrait,
        },
    },
    domain::responses::{
        BalanceResponse, HistoryResponse, WithdrawHistoryEntry, WithdrawListResponse,
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

pub struct WithdrawQueryService {
    pub query: DynWithdrawQueryRepository,
    pub account_query: DynAccountQueryRepository,
}

impl WithdrawQueryService {
    pub fn new(query: DynWithdrawQueryRepository, account_query: DynAccountQueryRepository) -> Self {
        Self {
            query,
            account_query,
        }
    }
}

fn account_not_found(e: RepositoryError) -> ServiceError {
    match e {
        RepositoryError::NotFound => ServiceError::NotFound("Account not found".into()),
        other => ServiceError::Repo(other),
    }
}

#[async_trait]
impl WithdrawQueryServiceTrait for WithdrawQueryService {
    async fn find_by_account(&self, account_id: &str) -> Result<HistoryResponse, ServiceError> {
        let records = self.query.find_by_account(account_id).await?;

        // The ledger table is authoritative. Only when it has nothing for
        // this account do we fall back to the summaries embedded on the
        // account record, which also confirms the account exists at all.
        let history: Vec<WithdrawHistoryEntry> = if records.is_empty() {
            let account = self
                .account_query
                .find_by_id(account_id)
                .await
                .map_err(account_not_found)?;

            account
                .withdrawals
                .map(|json| json.0.into_iter().map(Into::into).collect())
                .unwrap_or_default()
        } else {
            records.into_iter().map(Into::into).collect()
        };

        info!("history for {account_id}: {} entries", history.len());

        Ok(HistoryResponse {
            success: true,
            history,
        })
    }

    async fn balance_of(&self, account_id: &str) -> Result<BalanceResponse, ServiceError> {
        let account = self
            .account_query
            .find_by_id(account_id)
            .await
            .map_err(account_not_found)?;

        Ok(BalanceResponse {
            success: true,
            wallet: account.wallet,
        })
    }

    async fn find_all(&self) -> Result<WithdrawListResponse, ServiceError> {
        let records = self.query.find_all_with_owner().await?;

        info!("admin listing: {} withdrawals", records.len());

        Ok(WithdrawListResponse {
            success: true,
            withdrawals: records.into_iter().map(Into::into).collect(),
        })
    }
}
