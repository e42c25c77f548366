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
pub struct MaterialResponse {
    pub id: i32,
    pub name: String,
    pub unit: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMaterialRequest {
    pub name: Option<String>,
    pub unit: Option<String>,
}

/// Create the materials router
pub fn materials_router() -> Router<AppState> {
    Router::new().route("/", get(list_materials).post(create_material))
}

/// List all materials, newest first
#[utoipa::path(
    get,
    path = "/api/materials",
    responses(
        (status = 200, description = "Materials returned", body = [MaterialResponse]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn list_materials(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let materials = state.services.materials.list_materials().await?;

    let body: Vec<MaterialResponse> = materials
        .into_iter()
        .map(|m| MaterialResponse {
            id: m.id,
            name: m.name,
            unit: m.unit,
        })
        .collect();

    Ok((StatusCode::OK, Json(body)))
}

/// Create a new uniquely named material with an optional unit
#[utoipa::path(
    post,
    path = "/api/materials",
    request_body = CreateMaterialRequest,
    responses(
        (status = 200, description = "Material created", body = MaterialResponse),
        (status = 400, description = "Invalid or duplicate name", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn create_material(
    State(state): State<AppState>,
    Json(payload): Json<CreateMaterialRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let name = payload
        .name
        .ok_or_else(|| ServiceError::ValidationError("name is required".into()))?;

    let created = state
        .services
        .materials
        .create_material(&name, payload.unit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MaterialResponse {
            id: created.id,
            name: created.name,
            unit: created.unit,
        }),
    ))
}
