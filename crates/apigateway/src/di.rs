use shared::{
    abstract_trait::{
        account::repository::{
            command::DynAccountCommandRepository, query::DynAccountQueryRepository,
        },
        clock::DynClock,
        withdraw::{
            repository::{
                command::DynWithdrawCommandRepository, query::DynWithdrawQueryRepository,
            },
            service::{command::DynWithdrawCommandService, query::DynWithdrawQueryService},
        },
    },
    config::ConnectionPool,
    repository::{
        account::{AccountCommandRepository, AccountQueryRepository},
        withdraw::{WithdrawCommandRepository, WithdrawQueryRepository},
    },
    service::withdraw::{WithdrawCommandService, WithdrawCommandServiceDeps, WithdrawQueryService},
    utils::SystemClock,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub withdraw_command: DynWithdrawCommandService,
    pub withdraw_query: DynWithdrawQueryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("withdraw_command", &"WithdrawCommandService")
            .field("withdraw_query", &"WithdrawQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool) -> Self {
        let account_query =
            Arc::new(AccountQueryRepository::new(db.clone())) as DynAccountQueryRepository;
        let account_command =
            Arc::new(AccountCommandRepository::new(db.clone())) as DynAccountCommandRepository;
        let withdraw_query_repo =
            Arc::new(WithdrawQueryRepository::new(db.clone())) as DynWithdrawQueryRepository;
        let withdraw_command_repo =
            Arc::new(WithdrawCommandRepository::new(db)) as DynWithdrawCommandRepository;

        let clock = Arc::new(SystemClock) as DynClock;

        let withdraw_command =
            Arc::new(WithdrawCommandService::new(WithdrawCommandServiceDeps {
                account_query: account_query.clone(),
                account_command,
                command: withdraw_command_repo,
                clock,
            })) as DynWithdrawCommandService;

        let withdraw_query = Arc::new(WithdrawQueryService::new(withdraw_query_repo, account_query))
            as DynWithdrawQueryService;

        Self {
            withdraw_command,
            withdraw_query,
        }
    }
}
