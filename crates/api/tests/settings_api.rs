//! HTTP-level integration tests for setting groups and settings.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Setting group CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_group_prepopulates_slug_from_title(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/settings/groups",
        serde_json::json!({"title": "Contact Details"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Contact Details");
    assert_eq!(json["slug"], "contact-details");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_group_with_explicit_slug(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/settings/groups",
        serde_json::json!({"title": "Contact Details", "slug": "contact"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["slug"], "contact");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_group_slug_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = post_json(
        app,
        "/api/v1/settings/groups",
        serde_json::json!({"title": "Social Links"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = post_json(
        app,
        "/api/v1/settings/groups",
        serde_json::json!({"title": "Social links"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_slug_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/settings/groups",
        serde_json::json!({"title": "Bad", "slug": "Not A Slug!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_group_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings/groups/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_group_title(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/settings/groups",
            serde_json::json!({"title": "Footer"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/settings/groups/{id}"),
        serde_json::json!({"title": "Footer Links"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Footer Links");
    // Slug is stable across title edits.
    assert_eq!(json["slug"], "footer");
}

// ---------------------------------------------------------------------------
// Suggest (autocomplete)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn suggest_matches_title_prefix_case_insensitively(pool: PgPool) {
    for title in ["Contact Details", "Contact Hours", "Social Links"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/settings/groups",
            serde_json::json!({"title": title}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings/groups/suggest?q=cont").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let suggestions = json.as_array().unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["title"], "Contact Details");
    assert_eq!(suggestions[1]["title"], "Contact Hours");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn suggest_with_empty_query_returns_all_groups(pool: PgPool) {
    for title in ["Alpha", "Beta"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/settings/groups",
            serde_json::json!({"title": title}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings/groups/suggest").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Settings and the group reference
// ---------------------------------------------------------------------------

async fn create_group_and_setting(pool: &PgPool) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    let group = body_json(
        post_json(
            app,
            "/api/v1/settings/groups",
            serde_json::json!({"title": "Contact"}),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let setting = body_json(
        post_json(
            app,
            "/api/v1/settings",
            serde_json::json!({
                "name": "Office Phone",
                "value": "+91 12345 67890",
                "group_slug": "contact",
            }),
        )
        .await,
    )
    .await;

    (
        group["id"].as_i64().unwrap(),
        setting["id"].as_i64().unwrap(),
    )
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_setting_in_group(pool: PgPool) {
    let (_, setting_id) = create_group_and_setting(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/settings/{setting_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Office Phone");
    assert_eq!(json["group_slug"], "contact");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_setting_with_unknown_group_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/settings",
        serde_json::json!({
            "name": "Orphan",
            "value": "nothing",
            "group_slug": "no-such-group",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_setting_in_same_group_returns_409(pool: PgPool) {
    create_group_and_setting(&pool).await;

    // One setting per group.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/settings",
        serde_json::json!({
            "name": "Office Fax",
            "value": "+91 00000 00000",
            "group_slug": "contact",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_settings_filtered_by_group_slug(pool: PgPool) {
    create_group_and_setting(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/settings?group_slug=contact").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings?group_slug=other").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Group deletion is blocked while referenced
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_referenced_group_returns_409_and_keeps_both_rows(pool: PgPool) {
    let (group_id, setting_id) = create_group_and_setting(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/settings/groups/{group_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Both the group and the setting survive the failed delete.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/settings/groups/{group_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/settings/{setting_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_group_succeeds_after_setting_removed(pool: PgPool) {
    let (group_id, setting_id) = create_group_and_setting(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/settings/{setting_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/settings/groups/{group_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
