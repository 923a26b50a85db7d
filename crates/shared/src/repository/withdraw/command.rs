use crate::{
    abstract_trait::withdraw::repository::command::WithdrawCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::NewWithdrawRecord, errors::RepositoryError,
    model::withdraw::WithdrawModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct WithdrawCommandRepository {
    db: ConnectionPool,
}

impl WithdrawCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WithdrawCommandRepositoryTrait for WithdrawCommandRepository {
    async fn create(&self, req: &NewWithdrawRecord) -> Result<WithdrawModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let record = sqlx::query_as::<_, WithdrawModel>(
            r#"
            INSERT INTO withdrawals (
                withdraw_no,
                account_id,
                amount,
                net_amount,
                payout_number,
                status,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, 'pending', $6)
            RETURNING
                withdraw_id,
                withdraw_no,
                account_id,
                amount,
                net_amount,
                payout_number,
                status,
                created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.account_id)
        .bind(req.amount)
        .bind(req.net_amount)
        .bind(&req.payout_number)
        .bind(req.created_at)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("Database error in create withdrawal: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(record)
    }
}
