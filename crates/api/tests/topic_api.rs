//! HTTP-level integration tests for the topic endpoints.
//!
//! Requests go through the full router over an in-memory store.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, create_topic, get, patch_json, post_json, send};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_version_one() {
    let app = build_test_app();
    let topic = create_topic(&app, json!({ "name": "Test", "content": "Body" })).await;

    assert_eq!(topic["version"], 1);
    assert_eq!(topic["name"], "Test");
    assert_eq!(topic["content"], "Body");
    assert_eq!(topic["createdAt"], topic["updatedAt"]);
    assert!(topic["parentTopicId"].is_null());
    assert_eq!(topic["resources"], json!([]));
    assert!(topic["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn create_with_blank_name_returns_400() {
    let app = build_test_app();
    let response = post_json(&app, "/api/v1/topics", json!({ "name": " ", "content": "Body" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Topic name cannot be empty");
}

#[tokio::test]
async fn create_with_blank_content_returns_400() {
    let app = build_test_app();
    let response = post_json(&app, "/api/v1/topics", json!({ "name": "Test", "content": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_with_missing_name_returns_400_envelope() {
    let app = build_test_app();
    let response = post_json(&app, "/api/v1/topics", json!({ "content": "Body" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn create_with_malformed_json_returns_400_envelope() {
    let app = build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/topics")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_without_content_type_returns_400_envelope() {
    let app = build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/topics")
        .body(Body::from(json!({ "name": "Test", "content": "Body" }).to_string()))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn update_with_wrong_field_type_returns_400_envelope() {
    let app = build_test_app();
    let v1 = create_topic(&app, json!({ "name": "Test", "content": "Body" })).await;
    let id = v1["id"].as_str().unwrap();

    let response = patch_json(&app, &format!("/api/v1/topics/{id}"), json!({ "content": 42 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let current = body_json(get(&app, &format!("/api/v1/topics/{id}")).await).await;
    assert_eq!(current["data"]["version"], 1);
}

#[tokio::test]
async fn create_with_unknown_parent_returns_404() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/topics",
        json!({ "name": "Child", "content": "Body", "parentTopicId": "ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Parent topic with id ghost not found");
}

#[tokio::test]
async fn create_with_resources_attaches_them() {
    let app = build_test_app();
    let topic = create_topic(
        &app,
        json!({
            "name": "Traits",
            "content": "Static and dynamic dispatch",
            "resources": [
                { "url": "https://doc.rust-lang.org/book/ch17-02-trait-objects.html",
                  "description": "Book chapter", "type": "article" }
            ]
        }),
    )
    .await;

    let resources = topic["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["type"], "article");
    assert_eq!(resources[0]["topicId"], topic["id"]);
    assert_eq!(resources[0]["topicVersion"], 1);
}

#[tokio::test]
async fn create_with_unknown_resource_type_returns_400() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/topics",
        json!({
            "name": "Traits",
            "content": "Body",
            "resources": [{ "url": "https://a.example", "type": "podcast" }]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update and version reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_scenario_keeps_old_version_readable() {
    let app = build_test_app();
    let v1 = create_topic(&app, json!({ "name": "Test", "content": "Body" })).await;
    let id = v1["id"].as_str().unwrap();

    let response = patch_json(&app, &format!("/api/v1/topics/{id}"), json!({ "content": "Body2" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let v2 = body_json(response).await["data"].clone();
    assert_eq!(v2["version"], 2);
    assert_eq!(v2["content"], "Body2");
    assert_eq!(v2["createdAt"], v1["createdAt"]);

    let response = get(&app, &format!("/api/v1/topics/{id}/versions/1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let old = body_json(response).await["data"].clone();
    assert_eq!(old["version"], 1);
    assert_eq!(old["content"], "Body");

    let current = body_json(get(&app, &format!("/api/v1/topics/{id}")).await).await;
    assert_eq!(current["data"]["version"], 2);
}

#[tokio::test]
async fn update_without_content_carries_it_forward() {
    let app = build_test_app();
    let v1 = create_topic(&app, json!({ "name": "Test", "content": "Body" })).await;
    let id = v1["id"].as_str().unwrap();

    let response = patch_json(&app, &format!("/api/v1/topics/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let v2 = body_json(response).await["data"].clone();
    assert_eq!(v2["version"], 2);
    assert_eq!(v2["content"], "Body");
}

#[tokio::test]
async fn update_resources_are_scoped_to_new_version() {
    let app = build_test_app();
    let v1 = create_topic(&app, json!({ "name": "Test", "content": "Body" })).await;
    let id = v1["id"].as_str().unwrap();

    let response = patch_json(
        &app,
        &format!("/api/v1/topics/{id}"),
        json!({
            "resources": [
                { "url": "https://a.example/talk", "type": "video" },
                { "url": "https://a.example/paper.pdf", "description": "Paper", "type": "pdf" }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let v2 = body_json(response).await["data"].clone();
    let resources = v2["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 2);
    assert!(resources.iter().all(|r| r["topicVersion"] == 2));

    let response = patch_json(&app, &format!("/api/v1/topics/{id}"), json!({ "content": "Body3" })).await;
    let v3 = body_json(response).await["data"].clone();
    assert_eq!(v3["resources"], json!([]));

    let fetched = body_json(get(&app, &format!("/api/v1/topics/{id}/versions/2")).await).await;
    assert_eq!(fetched["data"]["resources"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_unknown_topic_returns_404() {
    let app = build_test_app();
    let response = patch_json(&app, "/api/v1/topics/ghost", json!({ "content": "x" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn missing_version_returns_404_even_if_topic_exists() {
    let app = build_test_app();
    let v1 = create_topic(&app, json!({ "name": "Test", "content": "Body" })).await;
    let id = v1["id"].as_str().unwrap();

    let response = get(&app, &format!("/api/v1/topics/{id}/versions/5")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], format!("Topic with id {id} (version 5) not found"));
}

#[tokio::test]
async fn non_numeric_version_is_rejected() {
    let app = build_test_app();
    let response = get(&app, "/api/v1/topics/abc/versions/latest").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn list_versions_returns_history() {
    let app = build_test_app();
    let v1 = create_topic(&app, json!({ "name": "Test", "content": "c1" })).await;
    let id = v1["id"].as_str().unwrap();
    for content in ["c2", "c3"] {
        patch_json(&app, &format!("/api/v1/topics/{id}"), json!({ "content": content })).await;
    }

    let response = get(&app, &format!("/api/v1/topics/{id}/versions")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let versions = body_json(response).await["data"].clone();
    let summary: Vec<(i64, String)> = versions
        .as_array()
        .unwrap()
        .iter()
        .map(|v| (v["version"].as_i64().unwrap(), v["content"].as_str().unwrap().to_string()))
        .collect();
    assert_eq!(
        summary,
        [(1, "c1".to_string()), (2, "c2".to_string()), (3, "c3".to_string())]
    );

    let response = get(&app, "/api/v1/topics/ghost/versions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Subtree
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subtopics_returns_nested_tree() {
    let app = build_test_app();
    let a = create_topic(&app, json!({ "name": "A", "content": "a" })).await;
    let b = create_topic(&app, json!({ "name": "B", "content": "b", "parentTopicId": a["id"] })).await;
    create_topic(&app, json!({ "name": "C", "content": "c", "parentTopicId": a["id"] })).await;
    let d = create_topic(&app, json!({ "name": "D", "content": "d", "parentTopicId": b["id"] })).await;
    create_topic(&app, json!({ "name": "E", "content": "e", "parentTopicId": d["id"] })).await;

    let a_id = a["id"].as_str().unwrap();
    let response = get(&app, &format!("/api/v1/topics/{a_id}/subtopics")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let tree = body_json(response).await["data"].clone();

    let names = |node: &serde_json::Value| -> Vec<String> {
        node["subtopics"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(tree["name"], "A");
    assert_eq!(names(&tree), ["B", "C"]);
    assert_eq!(names(&tree["subtopics"][0]), ["D"]);
    assert!(names(&tree["subtopics"][1]).is_empty());
    assert_eq!(names(&tree["subtopics"][0]["subtopics"][0]), ["E"]);
}

#[tokio::test]
async fn subtopics_of_unknown_topic_returns_404() {
    let app = build_test_app();
    let response = get(&app, "/api/v1/topics/ghost/subtopics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
