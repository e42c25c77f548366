mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_and_list_locations_newest_first() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/locations", json!({ "name": "Warehouse A" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    assert_eq!(created["name"], "Warehouse A");
    let first_id = created["id"].as_i64().expect("id");

    let response = app
        .post("/api/locations", json!({ "name": "Warehouse B" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/api/locations").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = response_json(response).await;
    let listed = listed.as_array().expect("array");
    assert_eq!(listed.len(), 2);
    // Newest first
    assert_eq!(listed[0]["name"], "Warehouse B");
    assert_eq!(listed[1]["name"], "Warehouse A");
    assert_eq!(listed[1]["id"].as_i64(), Some(first_id));
}

#[tokio::test]
async fn duplicate_location_name_is_rejected() {
    let app = TestApp::new().await;

    let response = app.post("/api/locations", json!({ "name": "Depot" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.post("/api/locations", json!({ "name": "Depot" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["message"]
        .as_str()
        .expect("message")
        .contains("already exists"));
}

#[tokio::test]
async fn create_material_defaults_missing_unit_to_empty_string() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/materials", json!({ "name": "Steel", "unit": "kg" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    assert_eq!(created["unit"], "kg");

    let response = app.post("/api/materials", json!({ "name": "Widgets" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    assert_eq!(created["unit"], "");

    let response = app.get("/api/materials").await;
    let listed = response_json(response).await;
    let listed = listed.as_array().expect("array");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "Widgets");
}

async fn seed_location(app: &TestApp, name: &str) -> i64 {
    let response = app.post("/api/locations", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await["id"].as_i64().expect("id")
}

async fn seed_material(app: &TestApp, name: &str, unit: &str) -> i64 {
    let response = app
        .post("/api/materials", json!({ "name": name, "unit": unit }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await["id"].as_i64().expect("id")
}

#[tokio::test]
async fn add_and_transfer_flow_updates_balances_and_ledger() {
    let app = TestApp::new().await;

    let warehouse_a = seed_location(&app, "Warehouse A").await;
    let warehouse_b = seed_location(&app, "Warehouse B").await;
    let steel = seed_material(&app, "Steel", "kg").await;

    // Two additions at A accumulate into a single balance row.
    for qty in [60, 40] {
        let response = app
            .post(
                "/api/inventory/add",
                json!({ "location_id": warehouse_a, "material_id": steel, "quantity": qty }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["ok"], true);
    }

    // Move 30 from A to B.
    let response = app
        .post(
            "/api/inventory/transfer",
            json!({
                "from_location_id": warehouse_a,
                "to_location_id": warehouse_b,
                "material_id": steel,
                "quantity": 30
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Per-location balances.
    let response = app.get(&format!("/api/inventory/{warehouse_a}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let balances = response_json(response).await;
    let balances = balances.as_array().expect("array");
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0]["material_name"], "Steel");
    assert_eq!(balances[0]["quantity"], 70);
    assert_eq!(balances[0]["unit"], "kg");

    let response = app.get(&format!("/api/inventory/{warehouse_b}")).await;
    let balances = response_json(response).await;
    assert_eq!(balances.as_array().expect("array")[0]["quantity"], 30);

    // Full balance listing carries material info for both rows.
    let response = app.get("/api/inventory/all").await;
    let all = response_json(response).await;
    let all = all.as_array().expect("array");
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|row| row["material_name"] == "Steel"));

    // Ledger lists newest first with joined names.
    let response = app.get("/api/transactions").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ledger = response_json(response).await;
    let ledger = ledger.as_array().expect("array");
    assert_eq!(ledger.len(), 3);

    assert_eq!(ledger[0]["type"], "transfer");
    assert_eq!(ledger[0]["from_location"], "Warehouse A");
    assert_eq!(ledger[0]["to_location"], "Warehouse B");
    assert_eq!(ledger[0]["quantity"], 30);

    assert_eq!(ledger[1]["type"], "add");
    assert_eq!(ledger[1]["quantity"], 40);
    assert!(ledger[1]["from_location"].is_null());
    assert_eq!(ledger[1]["to_location"], "Warehouse A");

    assert_eq!(ledger[2]["quantity"], 60);
}

#[tokio::test]
async fn transfer_with_insufficient_stock_returns_400_and_changes_nothing() {
    let app = TestApp::new().await;

    let source = seed_location(&app, "Source").await;
    let dest = seed_location(&app, "Dest").await;
    let bolts = seed_material(&app, "Bolts", "pcs").await;

    let response = app
        .post(
            "/api/inventory/add",
            json!({ "location_id": source, "material_id": bolts, "quantity": 10 }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post(
            "/api/inventory/transfer",
            json!({
                "from_location_id": source,
                "to_location_id": dest,
                "material_id": bolts,
                "quantity": 11
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "insufficient quantity at source location");

    // Nothing moved, no ledger row appended.
    let response = app.get(&format!("/api/inventory/{source}")).await;
    let balances = response_json(response).await;
    assert_eq!(balances.as_array().expect("array")[0]["quantity"], 10);

    let response = app.get(&format!("/api/inventory/{dest}")).await;
    let balances = response_json(response).await;
    assert!(balances.as_array().expect("array").is_empty());

    let response = app.get("/api/transactions").await;
    let ledger = response_json(response).await;
    assert_eq!(ledger.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn remove_stock_appends_remove_ledger_entry() {
    let app = TestApp::new().await;

    let depot = seed_location(&app, "Depot").await;
    let sand = seed_material(&app, "Sand", "t").await;

    let response = app
        .post(
            "/api/inventory/add",
            json!({ "location_id": depot, "material_id": sand, "quantity": 8 }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post(
            "/api/inventory/remove",
            json!({ "location_id": depot, "material_id": sand, "quantity": 3 }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get(&format!("/api/inventory/{depot}")).await;
    let balances = response_json(response).await;
    assert_eq!(balances.as_array().expect("array")[0]["quantity"], 5);

    let response = app.get("/api/transactions").await;
    let ledger = response_json(response).await;
    let ledger = ledger.as_array().expect("array").clone();
    assert_eq!(ledger[0]["type"], "remove");
    assert_eq!(ledger[0]["from_location"], "Depot");
    assert!(ledger[0]["to_location"].is_null());

    // Removing more than on hand fails.
    let response = app
        .post(
            "/api/inventory/remove",
            json!({ "location_id": depot, "material_id": sand, "quantity": 6 }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mutations_validate_before_touching_the_store() {
    let app = TestApp::new().await;

    // Missing material_id
    let response = app
        .post("/api/inventory/add", json!({ "location_id": 1, "quantity": 5 }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "location_id, material_id and positive integer quantity required"
    );

    // Zero and negative quantities
    for qty in [0, -4] {
        let response = app
            .post(
                "/api/inventory/add",
                json!({ "location_id": 1, "material_id": 1, "quantity": qty }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Zero-valued (falsy) location id on transfer
    let response = app
        .post(
            "/api/inventory/transfer",
            json!({
                "from_location_id": 0,
                "to_location_id": 2,
                "material_id": 1,
                "quantity": 5
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "from_location_id, to_location_id, material_id and positive integer quantity required"
    );

    // No ledger rows were written by any rejected request.
    let response = app.get("/api/transactions").await;
    let ledger = response_json(response).await;
    assert!(ledger.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn status_and_health_endpoints_respond() {
    let app = TestApp::new().await;

    let response = app.get("/api/status").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["service"], "stockledger-api");

    let response = app.get("/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["checks"]["database"], "healthy");
}

#[tokio::test]
async fn unknown_method_on_collection_routes_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::DELETE, "/api/locations", None)
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
