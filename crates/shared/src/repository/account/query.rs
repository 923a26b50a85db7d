use crate::{
    abstract_trait::account::repository::query::AccountQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::account::AccountModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct AccountQueryRepository {
    db: ConnectionPool,
}

impl AccountQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountQueryRepositoryTrait for AccountQueryRepository {
    async fn find_by_id(&self, account_id: &str) -> Result<AccountModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let record = sqlx::query_as::<_, AccountModel>(
            r#"
            SELECT
                account_id,
                name,
                phone,
                email,
                wallet,
                total_cashouts,
                withdrawals,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("Database error in find_by_id account: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        record.ok_or(RepositoryError::NotFound)
    }
}
