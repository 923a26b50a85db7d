use crate::{
    abstract_trait::{
        account::repository::{
            command::DynAccountCommandRepository, query::DynAccountQueryRepository,
        },
        clock::DynClock,
        withdraw::{
            repository::command::DynWithdrawCommandRepository,
            service::command::WithdrawCommandServiceTrait,
        },
    },
    domain::{
        requests::{CreateWithdrawRequest, DebitWalletRequest, NewWithdrawRecord},
        responses::SubmitWithdrawResponse,
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::account::WalletWithdrawalEntry,
    utils::{MIN_WITHDRAWAL, east_africa_offset, net_after_tax, within_business_hours},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

const MISSING_FIELDS: &str = "accountId, amount and payoutNumber are required";
const PENDING: &str = "pending";

pub struct WithdrawCommandService {
    pub account_query: DynAccountQueryRepository,
    pub account_command: DynAccountCommandRepository,
    pub command: DynWithdrawCommandRepository,
    pub clock: DynClock,
}

pub struct WithdrawCommandServiceDeps {
    pub account_query: DynAccountQueryRepository,
    pub account_command: DynAccountCommandRepository,
    pub command: DynWithdrawCommandRepository,
    pub clock: DynClock,
}

impl WithdrawCommandService {
    pub fn new(deps: WithdrawCommandServiceDeps) -> Self {
        let WithdrawCommandServiceDeps {
            account_query,
            account_command,
            command,
            clock,
        } = deps;

        Self {
            account_query,
            account_command,
            command,
            clock,
        }
    }
}

#[async_trait]
impl WithdrawCommandServiceTrait for WithdrawCommandService {
    async fn create(
        &self,
        req: &CreateWithdrawRequest,
    ) -> Result<SubmitWithdrawResponse, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(MISSING_FIELDS.into()));
        }

        let payout_number = match req.resolve_payout_number() {
            Some(p) => p,
            None => {
                error!("Validation failed: no payout number supplied");
                return Err(ServiceError::Validation(MISSING_FIELDS.into()));
            }
        };

        if req.amount == 0.0 {
            return Err(ServiceError::Validation(MISSING_FIELDS.into()));
        }

        if req.amount < MIN_WITHDRAWAL {
            return Err(ServiceError::Validation(format!(
                "Minimum withdrawal amount is {MIN_WITHDRAWAL}"
            )));
        }

        // The same captured instant drives the business-hours gate and the
        // record timestamp.
        let now = self.clock.now();
        if !within_business_hours(now, east_africa_offset()) {
            return Err(ServiceError::Validation(
                "Withdrawals are only processed between 09:00 and 17:00 EAT".into(),
            ));
        }

        let account = self
            .account_query
            .find_by_id(&req.account_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::NotFound("Account not found".into()),
                other => ServiceError::Repo(other),
            })?;

        if account.wallet < req.amount {
            info!(
                "rejecting withdrawal for {}: requested {}, available {}",
                req.account_id, req.amount, account.wallet
            );
            return Err(ServiceError::InsufficientBalance(
                "Insufficient wallet balance".into(),
            ));
        }

        let net_amount = net_after_tax(req.amount);

        let record = self
            .command
            .create(&NewWithdrawRecord {
                account_id: req.account_id.clone(),
                amount: req.amount,
                net_amount,
                payout_number: payout_number.clone(),
                created_at: now.naive_utc(),
            })
            .await?;

        info!(
            "created withdrawal record {} ({})",
            record.withdraw_id, record.withdraw_no
        );

        // Two separate writes with no transaction spanning them; a failure
        // here leaves the withdrawal record without a matching debit.
        self.account_command
            .apply_withdrawal(&DebitWalletRequest {
                account_id: req.account_id.clone(),
                amount: req.amount,
                summary: WalletWithdrawalEntry {
                    amount: net_amount,
                    payout_number,
                    status: PENDING.into(),
                    date: now.naive_utc(),
                },
            })
            .await?;

        info!(
            "✅ withdrawal accepted for {}: gross {}, net {}",
            req.account_id, req.amount, net_amount
        );

        Ok(SubmitWithdrawResponse {
            success: true,
            message: format!("Withdrawal request accepted. You will receive {net_amount:.2} after tax."),
            net_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::withdraw::mocks::{
        FixedClock, MockAccountRepository, MockWithdrawRepository, account_with, open_hours,
        outside_hours,
    };
    use serde_json::json;
    use std::sync::Arc;

    fn request(amount: serde_json::Value) -> CreateWithdrawRequest {
        serde_json::from_value(json!({
            "accountId": "acc-1",
            "amount": amount,
            "phone": "0712345678"
        }))
        .unwrap()
    }

    fn service_with(
        accounts: Arc<MockAccountRepository>,
        withdrawals: Arc<MockWithdrawRepository>,
        clock: FixedClock,
    ) -> WithdrawCommandService {
        WithdrawCommandService::new(WithdrawCommandServiceDeps {
            account_query: accounts.clone(),
            account_command: accounts,
            command: withdrawals,
            clock: Arc::new(clock),
        })
    }

    #[tokio::test]
    async fn missing_fields_rejected_before_anything_else() {
        let accounts = Arc::new(MockAccountRepository::default());
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts, withdrawals, FixedClock(open_hours()));

        let req: CreateWithdrawRequest =
            serde_json::from_value(json!({ "amount": 500, "phone": "0712345678" })).unwrap();
        let err = service.create(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m == MISSING_FIELDS));

        let req: CreateWithdrawRequest =
            serde_json::from_value(json!({ "accountId": "acc-1", "amount": 500 })).unwrap();
        let err = service.create(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m == MISSING_FIELDS));
    }

    #[tokio::test]
    async fn non_numeric_amount_is_treated_as_missing() {
        let accounts = Arc::new(MockAccountRepository::default());
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts, withdrawals, FixedClock(open_hours()));

        let err = service.create(&request(json!("plenty"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m == MISSING_FIELDS));
    }

    #[tokio::test]
    async fn nan_amount_is_rejected_and_touches_nothing() {
        let accounts = Arc::new(MockAccountRepository::default());
        accounts.insert(account_with("acc-1", 5_000.0, None));
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts.clone(), withdrawals.clone(), FixedClock(open_hours()));

        let err = service.create(&request(json!("NaN"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m == MISSING_FIELDS));
        assert_eq!(withdrawals.len(), 0);
        assert_eq!(accounts.wallet_of("acc-1"), 5_000.0);
    }

    #[tokio::test]
    async fn below_minimum_rejected_regardless_of_balance() {
        let accounts = Arc::new(MockAccountRepository::default());
        accounts.insert(account_with("acc-1", 1_000_000.0, None));
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts.clone(), withdrawals.clone(), FixedClock(open_hours()));

        let err = service.create(&request(json!(199))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m.contains("Minimum withdrawal")));
        assert_eq!(withdrawals.len(), 0);
        assert_eq!(accounts.wallet_of("acc-1"), 1_000_000.0);
    }

    #[tokio::test]
    async fn outside_business_hours_rejected_even_when_valid() {
        let accounts = Arc::new(MockAccountRepository::default());
        accounts.insert(account_with("acc-1", 10_000.0, None));
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts, withdrawals, FixedClock(outside_hours()));

        let err = service.create(&request(json!(500))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m.contains("09:00 and 17:00")));
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let accounts = Arc::new(MockAccountRepository::default());
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts, withdrawals, FixedClock(open_hours()));

        let err = service.create(&request(json!(500))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn insufficient_balance_leaves_no_trace() {
        let accounts = Arc::new(MockAccountRepository::default());
        accounts.insert(account_with("acc-1", 100.0, Some(vec![])));
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts.clone(), withdrawals.clone(), FixedClock(open_hours()));

        let err = service.create(&request(json!(500))).await.unwrap_err();
        assert!(matches!(err, ServiceError::InsufficientBalance(_)));
        assert_eq!(withdrawals.len(), 0);
        assert_eq!(accounts.wallet_of("acc-1"), 100.0);
        assert_eq!(accounts.summaries_of("acc-1").unwrap().len(), 0);
    }

    #[tokio::test]
    async fn tax_is_flat_eighteen_percent_floored() {
        let accounts = Arc::new(MockAccountRepository::default());
        accounts.insert(account_with("acc-1", 10_000.0, None));
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts, withdrawals.clone(), FixedClock(open_hours()));

        let resp = service.create(&request(json!(1000))).await.unwrap();
        assert_eq!(resp.net_amount, 820.0);
        assert!(resp.message.contains("820.00"));

        let resp = service.create(&request(json!(201))).await.unwrap();
        assert_eq!(resp.net_amount, 164.0); // floor(164.82)

        let records = withdrawals.all();
        assert_eq!(records[0].amount, 1000.0);
        assert_eq!(records[0].net_amount, Some(820.0));
    }

    #[tokio::test]
    async fn success_debits_gross_and_counts_cashouts() {
        let accounts = Arc::new(MockAccountRepository::default());
        accounts.insert(account_with("acc-1", 5_000.0, None));
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts.clone(), withdrawals.clone(), FixedClock(open_hours()));

        service.create(&request(json!(1000))).await.unwrap();

        // gross is debited, not the net 820
        assert_eq!(accounts.wallet_of("acc-1"), 4_000.0);
        assert_eq!(accounts.cashouts_of("acc-1"), 1_000.0);

        let records = withdrawals.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, "pending");
        assert_eq!(records[0].created_at, open_hours().naive_utc());
    }

    #[tokio::test]
    async fn embedded_summary_appends_net_only_when_list_exists() {
        let accounts = Arc::new(MockAccountRepository::default());
        accounts.insert(account_with("with-list", 5_000.0, Some(vec![])));
        accounts.insert(account_with("without-list", 5_000.0, None));
        let withdrawals = Arc::new(MockWithdrawRepository::default());
        let service = service_with(accounts.clone(), withdrawals, FixedClock(open_hours()));

        let mut req = request(json!(1000));
        req.account_id = "with-list".into();
        service.create(&req).await.unwrap();

        let summaries = accounts.summaries_of("with-list").unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].amount, 820.0); // net, not gross
        assert_eq!(summaries[0].status, "pending");

        let mut req = request(json!(1000));
        req.account_id = "without-list".into();
        service.create(&req).await.unwrap();
        assert!(accounts.summaries_of("without-list").is_none());
    }
}
