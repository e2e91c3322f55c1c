//! HTTP-level integration tests for investors and their project attachments.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_investor(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/investors",
        serde_json::json!({
            "name": name,
            "profile_image": "investors/placeholder.png",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn investors_list_alphabetically(pool: PgPool) {
    create_investor(&pool, "Zenith Capital").await;
    create_investor(&pool, "Anchor Holdings").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/investors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anchor Holdings", "Zenith Capital"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_projects_replaces_attachment_set(pool: PgPool) {
    let investor = create_investor(&pool, "Anchor Holdings").await;
    let first = create_project(&pool, "First Project").await;
    let second = create_project(&pool, "Second Project").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/investors/{investor}/projects"),
        serde_json::json!({"project_ids": [first, second]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/investors/{investor}/projects"),
        serde_json::json!({"project_ids": [second]}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"].as_i64().unwrap(), second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_projects_with_dangling_id_leaves_previous_set(pool: PgPool) {
    let investor = create_investor(&pool, "Anchor Holdings").await;
    let project = create_project(&pool, "Real Project").await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/investors/{investor}/projects"),
        serde_json::json!({"project_ids": [project]}),
    )
    .await;

    // A dangling ID fails the whole replacement transactionally.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/investors/{investor}/projects"),
        serde_json::json!({"project_ids": [999999]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/investors/{investor}/projects")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"].as_i64().unwrap(), project);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_investor_detaches_but_keeps_projects(pool: PgPool) {
    let investor = create_investor(&pool, "Anchor Holdings").await;
    let project = create_project(&pool, "Survivor").await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/investors/{investor}/projects"),
        serde_json::json!({"project_ids": [project]}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/investors/{investor}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
