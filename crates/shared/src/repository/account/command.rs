use crate::{
    abstract_trait::account::repository::command::AccountCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::DebitWalletRequest, errors::RepositoryError,
    model::account::AccountModel,
};
use async_trait::async_trait;
use sqlx::types::Json;
use tracing::error;

pub struct AccountCommandRepository {
    db: ConnectionPool,
}

impl AccountCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountCommandRepositoryTrait for AccountCommandRepository {
    async fn apply_withdrawal(
        &self,
        req: &DebitWalletRequest,
    ) -> Result<AccountModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        // The embedded summary list is only appended to when it already
        // exists; a NULL column stays NULL.
        let record = sqlx::query_as::<_, AccountModel>(
            r#"
            UPDATE accounts
            SET
                wallet = wallet - $2,
                total_cashouts = total_cashouts + $2,
                withdrawals = CASE
                    WHEN withdrawals IS NULL THEN NULL
                    ELSE withdrawals || $3
                END,
                updated_at = current_timestamp
            WHERE account_id = $1
            RETURNING
                account_id,
                name,
                phone,
                email,
                wallet,
                total_cashouts,
                withdrawals,
                created_at,
                updated_at
            "#,
        )
        .bind(&req.account_id)
        .bind(req.amount)
        .bind(Json(&req.summary))
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("Database error in apply_withdrawal: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        record.ok_or(RepositoryError::NotFound)
    }
}
