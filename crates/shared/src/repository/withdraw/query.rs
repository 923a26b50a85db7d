use crate::{
    abstract_trait::withdraw::repository::query::WithdrawQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::withdraw::{WithdrawModel, WithdrawWithOwnerModel},
};
use async_trait::async_trait;
use tracing::error;

pub struct WithdrawQueryRepository {
    db: ConnectionPool,
}

impl WithdrawQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WithdrawQueryRepositoryTrait for WithdrawQueryRepository {
    async fn find_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<WithdrawModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let records = sqlx::query_as::<_, WithdrawModel>(
            r#"
            SELECT
                withdraw_id,
                withdraw_no,
                account_id,
                amount,
                net_amount,
                payout_number,
                status,
                created_at
            FROM withdrawals
            WHERE account_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("Database error in find_by_account withdrawals: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(records)
    }

    async fn find_all_with_owner(&self) -> Result<Vec<WithdrawWithOwnerModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let records = sqlx::query_as::<_, WithdrawWithOwnerModel>(
            r#"
            SELECT
                w.withdraw_id,
                w.withdraw_no,
                w.account_id,
                w.amount,
                w.net_amount,
                w.payout_number,
                w.status,
                w.created_at,
                a.name,
                a.phone,
                a.email
            FROM withdrawals w
            JOIN accounts a ON a.account_id = w.account_id
            ORDER BY w.created_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("Database error in find_all_with_owner withdrawals: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(records)
    }
}
