use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::inventory::{BalanceRow, LocationBalanceRow};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddStockRequest {
    pub location_id: Option<i32>,
    pub material_id: Option<i32>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RemoveStockRequest {
    pub location_id: Option<i32>,
    pub material_id: Option<i32>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferStockRequest {
    pub from_location_id: Option<i32>,
    pub to_location_id: Option<i32>,
    pub material_id: Option<i32>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

/// Create the inventory router
pub fn inventory_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_stock))
        .route("/remove", post(remove_stock))
        .route("/transfer", post(transfer_stock))
        .route("/all", get(list_all_balances))
        .route("/:location_id", get(balances_for_location))
}

// Request fields are validated before any store access: ids must be present
// and positive, quantity a positive integer.
fn require_id(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v > 0)
}

fn require_quantity(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v > 0)
}

/// Add stock to a location
#[utoipa::path(
    post,
    path = "/api/inventory/add",
    request_body = AddStockRequest,
    responses(
        (status = 200, description = "Stock added", body = OkResponse),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn add_stock(
    State(state): State<AppState>,
    Json(payload): Json<AddStockRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let (location_id, material_id, quantity) = match (
        require_id(payload.location_id),
        require_id(payload.material_id),
        require_quantity(payload.quantity),
    ) {
        (Some(l), Some(m), Some(q)) => (l, m, q),
        _ => {
            return Err(ServiceError::ValidationError(
                "location_id, material_id and positive integer quantity required".into(),
            ))
        }
    };

    state
        .services
        .inventory
        .add_stock(location_id, material_id, quantity)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "ok": true }))))
}

/// Remove stock from a location
#[utoipa::path(
    post,
    path = "/api/inventory/remove",
    request_body = RemoveStockRequest,
    responses(
        (status = 200, description = "Stock removed", body = OkResponse),
        (status = 400, description = "Invalid request or insufficient stock", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn remove_stock(
    State(state): State<AppState>,
    Json(payload): Json<RemoveStockRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let (location_id, material_id, quantity) = match (
        require_id(payload.location_id),
        require_id(payload.material_id),
        require_quantity(payload.quantity),
    ) {
        (Some(l), Some(m), Some(q)) => (l, m, q),
        _ => {
            return Err(ServiceError::ValidationError(
                "location_id, material_id and positive integer quantity required".into(),
            ))
        }
    };

    state
        .services
        .inventory
        .remove_stock(location_id, material_id, quantity)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "ok": true }))))
}

/// Transfer stock between two locations
#[utoipa::path(
    post,
    path = "/api/inventory/transfer",
    request_body = TransferStockRequest,
    responses(
        (status = 200, description = "Stock transferred", body = OkResponse),
        (status = 400, description = "Invalid request or insufficient stock", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn transfer_stock(
    State(state): State<AppState>,
    Json(payload): Json<TransferStockRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let (from_location_id, to_location_id, material_id, quantity) = match (
        require_id(payload.from_location_id),
        require_id(payload.to_location_id),
        require_id(payload.material_id),
        require_quantity(payload.quantity),
    ) {
        (Some(f), Some(t), Some(m), Some(q)) => (f, t, m, q),
        _ => {
            return Err(ServiceError::ValidationError(
                "from_location_id, to_location_id, material_id and positive integer quantity required"
                    .into(),
            ))
        }
    };

    state
        .services
        .inventory
        .transfer_stock(from_location_id, to_location_id, material_id, quantity)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "ok": true }))))
}

/// List every balance row across all locations
#[utoipa::path(
    get,
    path = "/api/inventory/all",
    responses(
        (status = 200, description = "Balances returned", body = [BalanceRow]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn list_all_balances(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let balances = state.services.inventory.list_all_balances().await?;
    Ok((StatusCode::OK, Json(balances)))
}

/// List balances held at one location
#[utoipa::path(
    get,
    path = "/api/inventory/{location_id}",
    params(
        ("location_id" = i32, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Balances returned", body = [LocationBalanceRow]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn balances_for_location(
    State(state): State<AppState>,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let balances = state
        .services
        .inventory
        .balances_for_location(location_id)
        .await?;
    Ok((StatusCode::OK, Json(balances)))
}
