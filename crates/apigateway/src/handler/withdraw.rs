use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::withdraw::service::{
        command::DynWithdrawCommandService, query::DynWithdrawQueryService,
    },
    domain::{
        requests::{CreateWithdrawRequest, HistoryQuery},
        responses::{
            BalanceResponse, HistoryResponse, SubmitWithdrawResponse, WithdrawListResponse,
        },
    },
    errors::{AppErrorHttp, ServiceError, format_validation_errors},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/withdraw",
    tag = "Withdraw",
    request_body = CreateWithdrawRequest,
    responses(
        (status = 201, description = "Withdrawal accepted", body = SubmitWithdrawResponse),
        (status = 400, description = "Invalid request, below minimum, outside business hours or insufficient balance"),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_withdraw(
    Extension(service): Extension<DynWithdrawCommandService>,
    Json(body): Json<CreateWithdrawRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/withdraw",
    tag = "Withdraw",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Withdrawal history for one account", body = HistoryResponse),
        (status = 400, description = "Missing or empty accountId"),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_history(
    Extension(service): Extension<DynWithdrawQueryService>,
    Query(params): Query<HistoryQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    params
        .validate()
        .map_err(|e| AppErrorHttp(ServiceError::Validation(format_validation_errors(&e))))?;

    let response = service.find_by_account(&params.account_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/withdraw/balance/{account_id}",
    tag = "Withdraw",
    params(("account_id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Current wallet balance", body = BalanceResponse),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_balance(
    Extension(service): Extension<DynWithdrawQueryService>,
    Path(account_id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.balance_of(&account_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/withdraw/all",
    tag = "Withdraw",
    responses(
        (status = 200, description = "All withdrawals with owner details, newest first", body = WithdrawListResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_withdraws(
    Extension(service): Extension<DynWithdrawQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

pub fn withdraw_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/withdraw", post(create_withdraw).get(get_history))
        .route("/withdraw/balance/{account_id}", get(get_balance))
        .route("/withdraw/all", get(get_all_withdraws))
        .layer(Extension(app_state.di_container.withdraw_command.clone()))
        .layer(Extension(app_state.di_container.withdraw_query.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        abstract_trait::withdraw::service::query::WithdrawQueryServiceTrait,
        domain::responses::{BalanceResponse, HistoryResponse, WithdrawListResponse},
    };

    struct UnreachableQueryService;

    #[async_trait::async_trait]
    impl WithdrawQueryServiceTrait for UnreachableQueryService {
        async fn find_by_account(&self, _: &str) -> Result<HistoryResponse, ServiceError> {
            unreachable!("query service must not be reached")
        }

        async fn balance_of(&self, _: &str) -> Result<BalanceResponse, ServiceError> {
            unreachable!("query service must not be reached")
        }

        async fn find_all(&self) -> Result<WithdrawListResponse, ServiceError> {
            unreachable!("query service must not be reached")
        }
    }

    #[tokio::test]
    async fn empty_account_id_in_history_query_is_a_bad_request() {
        let service: DynWithdrawQueryService = Arc::new(UnreachableQueryService);
        let params = HistoryQuery {
            account_id: String::new(),
        };

        let Err(err) = get_history(Extension(service), Query(params)).await else {
            panic!("empty accountId must be rejected");
        };

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
