use crate::errors::ServiceError;
use crate::handlers::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLocationRequest {
    pub name: Option<String>,
}

/// Create the locations router
pub fn locations_router() -> Router<AppState> {
    Router::new().route("/", get(list_locations).post(create_location))
}

/// List all locations, newest first
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "Locations returned", body = [LocationResponse]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let locations = state.services.locations.list_locations().await?;

    let body: Vec<LocationResponse> = locations
        .into_iter()
        .map(|l| LocationResponse {
            id: l.id,
            name: l.name,
        })
        .collect();

    Ok((StatusCode::OK, Json(body)))
}

/// Create a new uniquely named location
#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 200, description = "Location created", body = LocationResponse),
        (status = 400, description = "Invalid or duplicate name", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let name = payload
        .name
        .ok_or_else(|| ServiceError::ValidationError("name is required".into()))?;

    let created = state.services.locations.create_location(&name).await?;

    Ok((
        StatusCode::OK,
        Json(LocationResponse {
            id: created.id,
            name: created.name,
        }),
    ))
}
