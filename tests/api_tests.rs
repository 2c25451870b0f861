//! API integration tests
//!
//! Each test starts an in-process stub backend on an ephemeral port and
//! drives the real client, services and console against it. The stub
//! records every request so tests can assert on what actually went over
//! the wire.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use assetdesk::api::ApiClient;
use assetdesk::console::Console;
use assetdesk::services::loans::LoanForm;
use assetdesk::services::inventory::AssignmentDraft;
use assetdesk::services::Services;
use assetdesk::{AppConfig, AppState};

/// Requests seen by the stub backend: (method, path, body)
#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(String, String, Value)>>>,
}

impl Recorded {
    fn push(&self, method: &str, path: String, body: Value) {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), path, body));
    }

    fn all(&self) -> Vec<(String, String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn services_for(addr: SocketAddr) -> Services {
    Services::new(ApiClient::from_base_url(format!("http://{}/api", addr)))
}

fn console_for(addr: SocketAddr) -> Console {
    let mut config = AppConfig::default();
    config.api.base_url = format!("http://{}/api", addr);
    Console::new(AppState::new(config))
}

// -- departments -------------------------------------------------------

#[tokio::test]
async fn departments_page_renders_rows_with_employee_links() {
    let router = Router::new().route(
        "/api/departments",
        get(|| async {
            Json(json!({"departments": [{"department_id": 1, "name": "IT"}]}))
        }),
    );
    let console = console_for(serve(router).await);

    let page = console.departments().await;
    assert!(page.contains("IT"), "{page}");
    assert!(page.contains("/departments/1"), "{page}");
}

#[tokio::test]
async fn blank_department_name_never_reaches_the_backend() {
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let router = Router::new().route(
        "/api/departments",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push("POST", "/api/departments".into(), body);
                Json(json!({"department": {"department_id": 9, "name": "x"}}))
            }
        }),
    );
    let services = services_for(serve(router).await);

    let err = services.departments.create("   ").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Department name cannot be empty.");
    assert!(recorded.all().is_empty(), "no request should have been sent");
}

#[tokio::test]
async fn department_create_trims_and_parses_the_envelope() {
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let router = Router::new().route(
        "/api/departments",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push("POST", "/api/departments".into(), body.clone());
                (
                    StatusCode::CREATED,
                    Json(json!({"department": {"department_id": 3, "name": body["name"]}})),
                )
            }
        }),
    );
    let services = services_for(serve(router).await);

    let created = services.departments.create("  Facilities  ").await.unwrap();
    assert_eq!(created.department_id, 3);
    assert_eq!(created.name, "Facilities");

    let sent = recorded.all();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].2, json!({"name": "Facilities"}));
}

// -- hardware ----------------------------------------------------------

#[tokio::test]
async fn hardware_views_filter_the_unified_collection() {
    // Bare-array response shape, mixed types
    let router = Router::new().route(
        "/api/hardware",
        get(|| async {
            Json(json!([
                {"id": 1, "name": "ThinkPad", "model": "T14", "type": "computer"},
                {"id": 2, "name": "Projector", "model": "EB-X06", "type": "video"}
            ]))
        }),
    );
    let console = console_for(serve(router).await);

    let page = console
        .hardware(Some(assetdesk::models::HardwareType::Computer))
        .await;
    assert!(page.contains("ThinkPad"), "{page}");
    assert!(!page.contains("Projector"), "{page}");
}

#[tokio::test]
async fn empty_hardware_list_shows_the_placeholder() {
    let router = Router::new().route(
        "/api/hardware",
        get(|| async { Json(json!({"hardware": []})) }),
    );
    let console = console_for(serve(router).await);

    let page = console.hardware(None).await;
    assert!(page.contains("No hardware found."), "{page}");
}

#[tokio::test]
async fn backend_error_message_wins_over_the_generic_context() {
    let router = Router::new().route(
        "/api/hardware",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch hardware: disk on fire"})),
            )
        }),
    );
    let services = services_for(serve(router).await);

    let err = services.hardware.list().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch hardware: disk on fire");
}

#[tokio::test]
async fn bodyless_failures_collapse_to_the_generic_context() {
    let router = Router::new().route(
        "/api/hardware",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let services = services_for(serve(router).await);

    let err = services.hardware.list().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch hardware");
}

// -- loans -------------------------------------------------------------

#[tokio::test]
async fn returning_a_loan_always_writes_a_null_borrower() {
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let router = Router::new().route(
        "/api/hardware/:id",
        put(move |Path(id): Path<i64>, Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push("PUT", format!("/api/hardware/{}", id), body.clone());
                let mut updated = json!({"id": id, "name": "MacBook", "model": "Air"});
                updated
                    .as_object_mut()
                    .unwrap()
                    .extend(body.as_object().unwrap().clone());
                Json(updated)
            }
        }),
    );
    let services = services_for(serve(router).await);

    // An employee is still selected in the form; the status is not
    // "Loaned Out", so the borrower must be cleared anyway.
    let form = LoanForm {
        loan_status: assetdesk::models::LoanStatus::ReturnedToStock,
        selected_employee_id: Some(3),
    };
    let updated = services.loans.update_loan(9, &form).await.unwrap();
    assert_eq!(updated.loaned_to_employee_id, None);

    let sent = recorded.all();
    assert_eq!(sent.len(), 1);
    let body = &sent[0].2;
    assert_eq!(body["loan_status"], "Returned to Stock");
    assert!(
        body.as_object().unwrap().contains_key("loaned_to_employee_id"),
        "the null must be sent explicitly, not omitted"
    );
    assert!(body["loaned_to_employee_id"].is_null());
}

#[tokio::test]
async fn decommissioning_clears_an_active_loan_in_the_same_put() {
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let router = Router::new().route(
        "/api/hardware/:id",
        put(move |Path(id): Path<i64>, Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push("PUT", format!("/api/hardware/{}", id), body);
                Json(json!({
                    "id": id, "name": "MacBook", "model": "Air",
                    "assignment_status": "Decommissioned",
                    "loan_status": "Returned to Stock"
                }))
            }
        }),
    );
    let services = services_for(serve(router).await);

    let update = assetdesk::models::AssignmentUpdate {
        employee_id: None,
        assignment_status: assetdesk::models::AssignmentStatus::Decommissioned,
    };
    services.hardware.update_assignment(9, &update).await.unwrap();

    let body = &recorded.all()[0].2;
    assert_eq!(body["assignment_status"], "Decommissioned");
    assert_eq!(body["loan_status"], "Returned to Stock");
    assert!(body["loaned_to_employee_id"].is_null());
}

// -- inventory ---------------------------------------------------------

fn inventory_fixture() -> Value {
    json!({"inventory_assignments": [{
        "inventory_id": 1, "device_id": 42, "employee_id": 7,
        "device_name": "Laptop1", "employee_name": "Jane",
        "status": "assigned", "notes": null
    }]})
}

#[tokio::test]
async fn duplicate_device_id_is_rejected_before_the_post() {
    let recorded = Recorded::default();
    let seen = recorded.clone();
    let router = Router::new().route(
        "/api/inventory_assignments",
        get(|| async { Json(inventory_fixture()) }).post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push("POST", "/api/inventory_assignments".into(), body);
                Json(json!({}))
            }
        }),
    );
    let services = services_for(serve(router).await);

    let draft = AssignmentDraft {
        device_id: "42".into(),
        employee_id: "8".into(),
        assigned_date: String::new(),
        status: "assigned".into(),
        notes: String::new(),
    };
    let err = services.inventory.create(&draft).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Device ID must be unique.");
    assert!(recorded.all().is_empty(), "the POST must never go out");
}

#[tokio::test]
async fn failed_delete_keeps_the_row_and_surfaces_the_error() {
    let router = Router::new()
        .route(
            "/api/inventory_assignments",
            get(|| async { Json(inventory_fixture()) }),
        )
        .route(
            "/api/inventory_assignments/:id",
            delete(|Path(_id): Path<i64>| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to delete inventory assignment"})),
                )
            }),
        );
    let console = console_for(serve(router).await);

    let page = console.delete_assignment(1).await;
    assert!(page.contains("Laptop1"), "row must survive: {page}");
    assert!(
        page.contains("Error: Failed to delete inventory assignment"),
        "{page}"
    );
}

#[tokio::test]
async fn successful_delete_removes_the_row() {
    let router = Router::new()
        .route(
            "/api/inventory_assignments",
            get(|| async { Json(inventory_fixture()) }),
        )
        .route(
            "/api/inventory_assignments/:id",
            delete(|Path(_id): Path<i64>| async {
                Json(json!({"message": "Inventory assignment deleted"}))
            }),
        );
    let console = console_for(serve(router).await);

    let page = console.delete_assignment(1).await;
    assert!(page.contains("deleted successfully"), "{page}");
    assert!(page.contains("No inventory assignments found."), "{page}");
}

#[tokio::test]
async fn inventory_csv_export_round_trip() {
    let router = Router::new().route(
        "/api/inventory_assignments",
        get(|| async { Json(inventory_fixture()) }),
    );
    let services = services_for(serve(router).await);

    let csv = services.export.inventory_csv().await.unwrap();
    assert_eq!(
        csv,
        "Device Name,Assigned To,Status,Notes\nLaptop1,Jane,assigned,-"
    );
}

// -- auth --------------------------------------------------------------

#[tokio::test]
async fn invalid_credentials_keep_the_failure_body() {
    let router = Router::new().route(
        "/api/login",
        post(|Json(body): Json<Value>| async move {
            if body["username"] == "admin" && body["password"] == "admin" {
                (
                    StatusCode::OK,
                    Json(json!({"success": true, "role": "admin"})),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"success": false, "error": "Invalid credentials"})),
                )
            }
        }),
    );
    let services = services_for(serve(router).await);

    let ok = services.auth.login("admin", "admin").await.unwrap();
    assert!(ok.success);
    assert_eq!(ok.role.as_deref(), Some("admin"));

    let denied = services.auth.login("admin", "wrong").await.unwrap();
    assert!(!denied.success);
    assert_eq!(denied.error.as_deref(), Some("Invalid credentials"));
}

// -- export preview ----------------------------------------------------

#[tokio::test]
async fn export_preview_passes_arbitrary_json_through() {
    let router = Router::new().route(
        "/api/export-preview",
        get(|| async { Json(json!({"anything": [1, 2, 3], "nested": {"ok": true}})) }),
    );
    let services = services_for(serve(router).await);

    let value = services.export.preview().await.unwrap();
    assert_eq!(value["anything"][2], 3);
    assert_eq!(value["nested"]["ok"], true);
}
