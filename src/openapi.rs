use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "StockLedger API",
        version = "1.0.0",
        description = r#"
Inventory tracking across named storage locations.

Locations and materials are create-only reference data. Stock moves through
three ledger operations (add, remove, transfer); every committed operation
appends one row to an append-only transaction ledger, and per-location
balances can never go negative.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "locations", description = "Storage location endpoints"),
        (name = "materials", description = "Material catalog endpoints"),
        (name = "inventory", description = "Stock movement and balance endpoints"),
        (name = "transactions", description = "Transaction ledger endpoints")
    ),
    paths(
        crate::handlers::locations::list_locations,
        crate::handlers::locations::create_location,
        crate::handlers::materials::list_materials,
        crate::handlers::materials::create_material,
        crate::handlers::inventory::add_stock,
        crate::handlers::inventory::remove_stock,
        crate::handlers::inventory::transfer_stock,
        crate::handlers::inventory::list_all_balances,
        crate::handlers::inventory::balances_for_location,
        crate::handlers::transactions::list_transactions,
    ),
    components(
        schemas(
            crate::errors::ErrorResponse,
            crate::handlers::locations::LocationResponse,
            crate::handlers::locations::CreateLocationRequest,
            crate::handlers::materials::MaterialResponse,
            crate::handlers::materials::CreateMaterialRequest,
            crate::handlers::inventory::AddStockRequest,
            crate::handlers::inventory::RemoveStockRequest,
            crate::handlers::inventory::TransferStockRequest,
            crate::handlers::inventory::OkResponse,
            crate::services::inventory::BalanceRow,
            crate::services::inventory::LocationBalanceRow,
            crate::services::inventory::TransactionRow,
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_all_endpoints() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&openapi).unwrap();
        assert!(json.contains("StockLedger API"));
        assert!(json.contains("/api/locations"));
        assert!(json.contains("/api/materials"));
        assert!(json.contains("/api/inventory/add"));
        assert!(json.contains("/api/inventory/remove"));
        assert!(json.contains("/api/inventory/transfer"));
        assert!(json.contains("/api/transactions"));
    }
}
