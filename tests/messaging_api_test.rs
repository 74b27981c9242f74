//! Messaging API integration tests
//!
//! End-to-end tests over the HTTP surface with `axum_test::TestServer`:
//! validation failures, the send/history scenario, conversation listing
//! with counterpart resolution, and the admin roster.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::database::TestDatabase;
use common::fixtures::{object_id, seed_admin, seed_employee, seed_superadmin};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use stafflink::backend::routes::create_router;
use stafflink::backend::server::state::AppState;
use stafflink::shared::messaging::{ConversationView, MessageView};

fn test_server(db: &TestDatabase) -> TestServer {
    let state = AppState::new(Some(db.pool().clone()));
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn test_send_message_created() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .post("/api/messages")
        .json(&json!({
            "senderId": "emp1",
            "receiverId": "adm1",
            "content": "hello"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Message sent successfully");
}

#[tokio::test]
async fn test_send_message_accepts_legacy_field_names() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .post("/api/messages")
        .json(&json!({
            "sender_id": "emp1",
            "receiver_id": "adm1",
            "message": "hello from the old client"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_send_message_missing_field_is_400() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    for body in [
        json!({ "receiverId": "adm1", "content": "hello" }),
        json!({ "senderId": "emp1", "content": "hello" }),
        json!({ "senderId": "emp1", "receiverId": "adm1" }),
        json!({ "senderId": "", "receiverId": "adm1", "content": "hello" }),
    ] {
        let response = server.post("/api/messages").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["message"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_history_requires_both_participants() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .get("/api/messages")
        .add_query_param("user1", "emp1")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .get("/api/messages")
        .add_query_param("user2", "adm1")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_then_history_scenario() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    for (sender, receiver, content) in [
        ("emp1", "adm1", "hello"),
        ("adm1", "emp1", "hi back"),
    ] {
        let response = server
            .post("/api/messages")
            .json(&json!({
                "senderId": sender,
                "receiverId": receiver,
                "content": content
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = server
        .get("/api/messages")
        .add_query_param("user1", "emp1")
        .add_query_param("user2", "adm1")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let messages: Vec<MessageView> = response.json();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "hello");
    assert_eq!(messages[0].sender_id, "emp1");
    assert_eq!(messages[1].content, "hi back");
    assert_eq!(messages[1].sender_id, "adm1");

    // history is symmetric in its arguments
    let reversed: Vec<MessageView> = server
        .get("/api/messages")
        .add_query_param("user1", "adm1")
        .add_query_param("user2", "emp1")
        .await
        .json();
    assert_eq!(messages, reversed);
}

#[tokio::test]
async fn test_history_of_unknown_pair_is_empty() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .get("/api/messages")
        .add_query_param("user1", "nobody1")
        .add_query_param("user2", "nobody2")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let messages: Vec<MessageView> = response.json();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_conversations_without_identifier_is_empty_200() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server.get("/api/conversations").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let conversations: Vec<ConversationView> = response.json();
    assert!(conversations.is_empty());
}

#[tokio::test]
async fn test_conversations_with_resolved_counterpart() {
    let db = TestDatabase::new().await;
    seed_employee(db.pool(), &object_id(1), "emp1", "Oussama", "Trabelsi", "loc1", "dep1").await;
    let admin_id = object_id(2);
    seed_admin(db.pool(), &admin_id, "A100", "Karim", "Haddad", "loc1", "dep2").await;
    let server = test_server(&db);

    server
        .post("/api/messages")
        .json(&json!({
            "senderId": "emp1",
            "receiverId": admin_id,
            "content": "hello"
        }))
        .await;

    let response = server
        .get("/api/conversations")
        .add_query_param("participantId", "emp1")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let conversations: Vec<ConversationView> = response.json();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].counterpart.id, admin_id);
    assert_eq!(conversations[0].counterpart.name, "Karim");
    assert_eq!(conversations[0].last_message, "hello");
}

#[tokio::test]
async fn test_counterpart_resolved_via_superadmin_business_key() {
    let db = TestDatabase::new().await;
    // adm1 exists only in the superadmin collection, under its business key
    seed_superadmin(db.pool(), &object_id(3), "adm1", "Sami", "Baccar", "loc1", "dep3").await;
    let server = test_server(&db);

    server
        .post("/api/messages")
        .json(&json!({
            "senderId": "emp1",
            "receiverId": "adm1",
            "content": "hello"
        }))
        .await;

    let conversations: Vec<ConversationView> = server
        .get("/api/conversations")
        .add_query_param("participantId", "emp1")
        .await
        .json();

    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].counterpart.name, "Sami");
    assert_eq!(conversations[0].counterpart.surname, "Baccar");
}

#[tokio::test]
async fn test_unresolved_counterpart_degrades_to_empty_fields() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    server
        .post("/api/messages")
        .json(&json!({
            "senderId": "emp1",
            "receiverId": "ghost",
            "content": "anyone there?"
        }))
        .await;

    let conversations: Vec<ConversationView> = server
        .get("/api/conversations")
        .add_query_param("participantId", "emp1")
        .await
        .json();

    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].counterpart.id, "ghost");
    assert_eq!(conversations[0].counterpart.name, "");
    assert_eq!(conversations[0].counterpart.surname, "");
}

#[tokio::test]
async fn test_conversations_accepts_legacy_employee_id_param() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    server
        .post("/api/messages")
        .json(&json!({
            "senderId": "emp1",
            "receiverId": "adm1",
            "content": "hello"
        }))
        .await;

    let conversations: Vec<ConversationView> = server
        .get("/api/conversations")
        .add_query_param("employeeId", "emp1")
        .await
        .json();
    assert_eq!(conversations.len(), 1);
}

#[tokio::test]
async fn test_conversations_never_include_non_participants() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    server
        .post("/api/messages")
        .json(&json!({
            "senderId": "emp1",
            "receiverId": "adm1",
            "content": "hello"
        }))
        .await;

    let conversations: Vec<ConversationView> = server
        .get("/api/conversations")
        .add_query_param("participantId", "emp2")
        .await
        .json();
    assert!(conversations.is_empty());
}

#[tokio::test]
async fn test_admin_roster_with_filters() {
    let db = TestDatabase::new().await;
    seed_admin(db.pool(), &object_id(1), "A1", "Karim", "Haddad", "loc1", "dep1").await;
    seed_admin(db.pool(), &object_id(2), "A2", "Leila", "Maalej", "loc2", "dep1").await;
    seed_superadmin(db.pool(), &object_id(3), "S1", "Sami", "Baccar", "loc1", "dep2").await;
    let server = test_server(&db);

    let all: Vec<Value> = server.get("/api/admins").await.json();
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|a| a["role"] == "superadmin"));
    // the deployed client reads the historic field spellings
    assert!(all.iter().all(|a| a.get("_id").is_some()));
    assert!(all.iter().all(|a| a.get("nom").is_some() && a.get("prenom").is_some()));

    let loc1: Vec<Value> = server
        .get("/api/admins")
        .add_query_param("locationId", "loc1")
        .await
        .json();
    assert_eq!(loc1.len(), 2);

    let filtered: Vec<Value> = server
        .get("/api/admins")
        .add_query_param("locationId", "loc1")
        .add_query_param("departementId", "dep2")
        .await
        .json();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["prenom"], "Sami");
    assert_eq!(filtered[0]["nom"], "Baccar");
}
