use crate::{
    abstract_trait::{
        account::repository::{
            command::AccountCommandRepositoryTrait, query::AccountQueryRepositoryTrait,
        },
        clock::Clock,
        withdraw::repository::{
            command::WithdrawCommandRepositoryTrait, query::WithdrawQueryRepositoryTrait,
        },
    },
    domain::requests::{DebitWalletRequest, NewWithdrawRecord},
    errors::RepositoryError,
    model::{
        account::{AccountModel, WalletWithdrawalEntry},
        withdraw::{WithdrawModel, WithdrawWithOwnerModel},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::types::Json;
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicI32, Ordering},
    },
};
use uuid::Uuid;

/// In-memory account store mirroring the SQL semantics of the real
/// repositories, including the append-only-when-present summary list.
#[derive(Default)]
pub struct MockAccountRepository {
    accounts: Mutex<HashMap<String, AccountModel>>,
}

impl MockAccountRepository {
    pub fn insert(&self, account: AccountModel) {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.account_id.clone(), account);
    }

    pub fn wallet_of(&self, account_id: &str) -> f64 {
        self.accounts.lock().unwrap()[account_id].wallet
    }

    pub fn cashouts_of(&self, account_id: &str) -> f64 {
        self.accounts.lock().unwrap()[account_id].total_cashouts
    }

    pub fn summaries_of(&self, account_id: &str) -> Option<Vec<WalletWithdrawalEntry>> {
        self.accounts.lock().unwrap()[account_id]
            .withdrawals
            .as_ref()
            .map(|json| json.0.clone())
    }
}

#[async_trait]
impl AccountQueryRepositoryTrait for MockAccountRepository {
    async fn find_by_id(&self, account_id: &str) -> Result<AccountModel, RepositoryError> {
        self.accounts
            .lock()
            .unwrap()
            .get(account_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl AccountCommandRepositoryTrait for MockAccountRepository {
    async fn apply_withdrawal(
        &self,
        req: &DebitWalletRequest,
    ) -> Result<AccountModel, RepositoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&req.account_id)
            .ok_or(RepositoryError::NotFound)?;

        account.wallet -= req.amount;
        account.total_cashouts += req.amount;
        if let Some(list) = account.withdrawals.as_mut() {
            list.0.push(req.summary.clone());
        }
        account.updated_at = Some(Utc::now().naive_utc());

        Ok(account.clone())
    }
}

#[derive(Default)]
pub struct MockWithdrawRepository {
    records: Mutex<Vec<WithdrawModel>>,
    with_owner: Mutex<Vec<WithdrawWithOwnerModel>>,
    next_id: AtomicI32,
}

impl MockWithdrawRepository {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<WithdrawModel> {
        self.records.lock().unwrap().clone()
    }

    pub fn push(&self, record: WithdrawModel) {
        self.records.lock().unwrap().push(record);
    }

    pub fn push_with_owner(&self, record: WithdrawWithOwnerModel) {
        self.with_owner.lock().unwrap().push(record);
    }
}

#[async_trait]
impl WithdrawCommandRepositoryTrait for MockWithdrawRepository {
    async fn create(&self, req: &NewWithdrawRecord) -> Result<WithdrawModel, RepositoryError> {
        let record = WithdrawModel {
            withdraw_id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            withdraw_no: Uuid::new_v4(),
            account_id: req.account_id.clone(),
            amount: req.amount,
            net_amount: Some(req.net_amount),
            payout_number: req.payout_number.clone(),
            status: "pending".into(),
            created_at: req.created_at,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl WithdrawQueryRepositoryTrait for MockWithdrawRepository {
    async fn find_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<WithdrawModel>, RepositoryError> {
        let mut records: Vec<WithdrawModel> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn find_all_with_owner(&self) -> Result<Vec<WithdrawWithOwnerModel>, RepositoryError> {
        let mut records = self.with_owner.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 13:30 UTC is 16:30 in East Africa, inside the processing window.
pub fn open_hours() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 13, 30, 0).unwrap()
}

/// 20:00 UTC is 23:00 in East Africa, well outside the window.
pub fn outside_hours() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 20, 0, 0).unwrap()
}

pub fn account_with(
    account_id: &str,
    wallet: f64,
    withdrawals: Option<Vec<WalletWithdrawalEntry>>,
) -> AccountModel {
    AccountModel {
        account_id: account_id.into(),
        name: "Wanjiku Kamau".into(),
        phone: "0712345678".into(),
        email: "wanjiku@example.com".into(),
        wallet,
        total_cashouts: 0.0,
        withdrawals: withdrawals.map(Json),
        created_at: Some(open_hours().naive_utc()),
        updated_at: None,
    }
}
