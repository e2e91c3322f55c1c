//! HTTP-level integration tests for the project resource: CRUD, defaults,
//! listing order, and amenity attachments.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// CRUD and defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "title": "Green Meadows",
            "pin_code": "208001",
            "coordinates": "26.44,80.33",
            "start_date": "2024-01-15",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["slug"], "green-meadows");
    assert_eq!(json["category"], "Residential");
    assert_eq!(json["city"], "Kanpur");
    assert_eq!(json["state"], "Uttar Pradesh");
    assert_eq!(json["visibility"], "Private");
    assert!(json["completed_on"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_explicit_choices(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "title": "City Centre Mall",
            "category": "Retail",
            "city": "Lucknow",
            "state": "Delhi",
            "visibility": "Public",
            "pin_code": "226001",
            "coordinates": "26.85,80.95",
            "start_date": "2023-06-01",
            "est_completion_date": "2026-12-31",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["category"], "Retail");
    assert_eq!(json["city"], "Lucknow");
    assert_eq!(json["state"], "Delhi");
    assert_eq!(json["visibility"], "Public");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_unknown_city_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "title": "Nowhere",
            "city": "Mumbai",
            "pin_code": "400001",
            "coordinates": "19.07,72.87",
            "start_date": "2024-01-01",
        }),
    )
    .await;

    // Serde rejects the out-of-enum value before the handler runs.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_project_slug_returns_409(pool: PgPool) {
    create_project(&pool, "Green Meadows").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "title": "Different Title",
            "slug": "green-meadows",
            "pin_code": "208001",
            "coordinates": "26.44,80.33",
            "start_date": "2024-02-01",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_project_marks_completion(pool: PgPool) {
    let id = create_project(&pool, "Green Meadows").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({"completed_on": "2025-03-31", "visibility": "Public"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["completed_on"], "2025-03-31");
    assert_eq!(json["visibility"], "Public");
    // Untouched fields survive the partial update.
    assert_eq!(json["title"], "Green Meadows");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_project_returns_204_then_404(pool: PgPool) {
    let id = create_project(&pool, "Short Lived").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_incomplete_first_then_latest_completion(pool: PgPool) {
    // Two completed projects and one still in progress.
    let in_progress = create_project(&pool, "Still Building").await;

    let early = create_project(&pool, "Finished Early").await;
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/projects/{early}"),
        serde_json::json!({"completed_on": "2023-01-01"}),
    )
    .await;

    let late = create_project(&pool, "Finished Late").await;
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/projects/{late}"),
        serde_json::json!({"completed_on": "2024-06-30"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();

    // Null completion sorts ahead of any date; then later completions first.
    assert_eq!(ids, vec![in_progress, late, early]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_breaks_completion_ties_by_creation_then_title(pool: PgPool) {
    let apple = create_project(&pool, "Apple Court").await;
    let zebra = create_project(&pool, "Zebra Court").await;

    for id in [apple, zebra] {
        let app = common::build_test_app(pool.clone());
        let response = put_json(
            app,
            &format!("/api/v1/projects/{id}"),
            serde_json::json!({"completed_on": "2024-05-01"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let list_ids = |json: serde_json::Value| -> Vec<i64> {
        json.as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect()
    };

    // Same completion date: the newer project wins.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(list_ids(json), vec![zebra, apple]);

    // Same creation time too: titles decide, ascending.
    sqlx::query("UPDATE projects SET created_at = '2024-01-01 00:00:00+00'")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(list_ids(json), vec![apple, zebra]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_respects_limit_and_offset(pool: PgPool) {
    for i in 0..5 {
        create_project(&pool, &format!("Project {i}")).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects?limit=2&offset=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Amenity attachments
// ---------------------------------------------------------------------------

async fn create_amenity(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/amenities",
        serde_json::json!({"title": title, "description": "On site"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_amenities_replaces_attachment_set(pool: PgPool) {
    let project = create_project(&pool, "Green Meadows").await;
    let gym = create_amenity(&pool, "Gym").await;
    let pool_amenity = create_amenity(&pool, "Swimming Pool").await;
    let park = create_amenity(&pool, "Park").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/projects/{project}/amenities"),
        serde_json::json!({"amenity_ids": [gym, pool_amenity]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    // Replacing the set drops the old attachments.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/projects/{project}/amenities"),
        serde_json::json!({"amenity_ids": [park]}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["title"], "Park");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_amenity_detaches_it_from_projects(pool: PgPool) {
    let project = create_project(&pool, "Green Meadows").await;
    let gym = create_amenity(&pool, "Gym").await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/projects/{project}/amenities"),
        serde_json::json!({"amenity_ids": [gym]}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/amenities/{gym}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The project survives with an empty amenity list.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project}/amenities")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);
}
