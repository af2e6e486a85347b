//! Integration tests for the notifications context.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use orbit_test_support::FailingDeliveryClient;

fn new_message_request() -> serde_json::Value {
    serde_json::json!({
        "message": { "title": "New message", "body": "You have a new message" },
        "userIds": ["u2"],
        "data": {
            "type": "newMessage",
            "newMessage": {
                "id": "m1",
                "sentByUserId": "u1",
                "receiverUserId": "u2",
                "chatId": "c1"
            }
        }
    })
}

#[tokio::test]
async fn test_send_push_returns_receipt_and_forwards_payload() {
    let (app, delivery) = common::build_test_app();

    let (status, json) =
        common::post_json(app, "/api/v1/notifications/push", &new_message_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "New message");
    assert_eq!(json["userIds"], serde_json::json!(["u2"]));
    assert!(json["messageId"].is_string());

    let pushes = delivery.pushes();
    assert_eq!(pushes.len(), 1);
    assert_eq!(
        pushes[0].payload.clone().into_value(),
        serde_json::json!({
            "newMessage": {
                "id": "m1",
                "sentByUserId": "u1",
                "receiverUserId": "u2",
                "chatId": "c1"
            },
            "type": "newMessage"
        })
    );
}

#[tokio::test]
async fn test_missing_variant_returns_400_without_delivery_call() {
    let (app, delivery) = common::build_test_app();
    let body = serde_json::json!({
        "message": { "title": "Meetup", "body": "Approved" },
        "userIds": ["u1"],
        "data": { "type": "meetupApproved", "meetupRequest": null }
    });

    let (status, json) = common::post_json(app, "/api/v1/notifications/push", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "missing_variant_payload");
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("meetupRequest")
    );
    assert!(delivery.pushes().is_empty());
}

#[tokio::test]
async fn test_unknown_kind_returns_400() {
    let (app, delivery) = common::build_test_app();
    let body = serde_json::json!({
        "message": { "title": "t", "body": "b" },
        "userIds": ["u1"],
        "data": { "type": "bogusKind" }
    });

    let (status, json) = common::post_json(app, "/api/v1/notifications/push", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unknown_kind");
    assert!(delivery.pushes().is_empty());
}

#[tokio::test]
async fn test_empty_user_ids_returns_400() {
    let (app, delivery) = common::build_test_app();
    let mut body = new_message_request();
    body["userIds"] = serde_json::json!([]);

    let (status, json) = common::post_json(app, "/api/v1/notifications/push", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert!(delivery.pushes().is_empty());
}

#[tokio::test]
async fn test_malformed_body_returns_400_decode_error() {
    let (app, _delivery) = common::build_test_app();

    let (status, json) =
        common::post_raw(app, "/api/v1/notifications/push", "{not json at all").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "decode_error");
}

#[tokio::test]
async fn test_delivery_failure_returns_500() {
    let app = common::build_test_app_with_client(Arc::new(FailingDeliveryClient));

    let (status, json) =
        common::post_json(app, "/api/v1/notifications/push", &new_message_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "delivery_error");
}
