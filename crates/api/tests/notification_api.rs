//! HTTP-level integration tests for the notification endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, send, trusted_request};
use campus_db::models::notification::CreateNotification;
use campus_db::repositories::NotificationRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed `unread` unread and `read` read notifications for a user, oldest
/// first, returning the created ids in insertion order.
async fn seed_notifications(pool: &PgPool, user_id: &str, unread: usize, read: usize) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..(unread + read) {
        let input = CreateNotification {
            user_id: user_id.to_string(),
            kind: "system".to_string(),
            title: format!("Notification {i}"),
            content: format!("Content {i}"),
            priority: "medium".to_string(),
            expires_at: None,
        };
        let n = NotificationRepo::create(pool, &input)
            .await
            .expect("notification insert");
        if i < read {
            NotificationRepo::mark_read(pool, n.id, user_id)
                .await
                .expect("mark read");
        }
        ids.push(n.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// 12 unread + 3 read with page=1&limit=10: ten items newest first, and
/// unreadCount counts all 12 regardless of the page window.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination_and_unread_count(pool: PgPool) {
    seed_notifications(&pool, "S2024001", 12, 3).await;
    let app = common::build_test_app(pool);

    let response = send(
        app,
        trusted_request("GET", "/api/v1/notifications?page=1&limit=10", "S2024001", "student"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["unreadCount"], 12);
    assert_eq!(data["pagination"]["total"], 15);
    assert_eq!(data["pagination"]["pages"], 2);

    let items = data["notifications"].as_array().expect("notifications array");
    assert_eq!(items.len(), 10);
    // Newest first: the last-created notification leads the page.
    assert_eq!(items[0]["title"], "Notification 14");
    assert_eq!(items[9]["title"], "Notification 5");
}

/// The second page returns the remainder.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_second_page(pool: PgPool) {
    seed_notifications(&pool, "S2024001", 12, 3).await;
    let app = common::build_test_app(pool);

    let response = send(
        app,
        trusted_request("GET", "/api/v1/notifications?page=2&limit=10", "S2024001", "student"),
    )
    .await;

    let json = body_json(response).await;
    let items = json["data"]["notifications"].as_array().expect("array");
    assert_eq!(items.len(), 5);
    assert_eq!(json["data"]["unreadCount"], 12);
}

/// Listing requires an identity: no headers and no cookies is 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_requires_identity(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/notifications").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A session cookie resolves to the same identity surface as trusted
/// headers.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_via_session_cookie(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "S2024001", "student").await;
    seed_notifications(&pool, "S2024001", 2, 0).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "id": "S2024001", "password": password });
    let login = common::post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(login.status(), StatusCode::OK);
    let cookies = common::extract_cookies(&login);

    let response = common::get_with_cookies(app, "/api/v1/notifications", &cookies).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["unreadCount"], 2);
}

// ---------------------------------------------------------------------------
// Mark read
// ---------------------------------------------------------------------------

/// Marking an own notification sets the read flag and timestamp.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read(pool: PgPool) {
    let ids = seed_notifications(&pool, "S2024001", 1, 0).await;
    let app = common::build_test_app(pool.clone());

    let response = send(
        app,
        trusted_request(
            "PUT",
            &format!("/api/v1/notifications/{}/read", ids[0]),
            "S2024001",
            "student",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_read"], true);
    assert!(!json["data"]["read_at"].is_null());

    assert_eq!(
        NotificationRepo::unread_count(&pool, "S2024001").await.unwrap(),
        0
    );
}

/// Marking another user's notification is 404 and leaves it unread.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_cross_user_is_not_found(pool: PgPool) {
    let ids = seed_notifications(&pool, "S2024001", 1, 0).await;
    let app = common::build_test_app(pool.clone());

    let response = send(
        app,
        trusted_request(
            "PUT",
            &format!("/api/v1/notifications/{}/read", ids[0]),
            "S2024999",
            "student",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        NotificationRepo::unread_count(&pool, "S2024001").await.unwrap(),
        1,
        "the notification must remain unread"
    );
}

/// Marking a nonexistent notification is 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_missing_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(
        app,
        trusted_request("PUT", "/api/v1/notifications/999999/read", "S2024001", "student"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Marking an already-read notification keeps its original read
/// timestamp (the transition is one-way).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_is_monotonic(pool: PgPool) {
    let ids = seed_notifications(&pool, "S2024001", 1, 0).await;

    let first = NotificationRepo::mark_read(&pool, ids[0], "S2024001")
        .await
        .expect("mark read")
        .expect("row");
    let second = NotificationRepo::mark_read(&pool, ids[0], "S2024001")
        .await
        .expect("mark read")
        .expect("row");

    assert_eq!(first.read_at, second.read_at, "read_at must not move");
}
