use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::inventory::TransactionRow;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

/// Create the transactions router
pub fn transactions_router() -> Router<AppState> {
    Router::new().route("/", get(list_transactions))
}

/// List the full transaction ledger, newest first
#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "Transactions returned", body = [TransactionRow]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "transactions"
)]
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let transactions = state.services.inventory.list_transactions().await?;
    Ok((StatusCode::OK, Json(transactions)))
}
