//! API integration tests against a running server
//!
//! Start the server with its default configuration, then run
//! `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8888";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/Livros", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_book() {
    let client = Client::new();

    // Create book
    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&json!({
            "titulo": "Memórias Póstumas de Brás Cubas",
            "autor": "Machado de Assis"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");

    // Replace book
    let response = client
        .put(format!("{}/livros/{}", BASE_URL, book_id))
        .json(&json!({
            "id": book_id,
            "titulo": "Quincas Borba",
            "autor": "Machado de Assis"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/livros/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["titulo"], "Quincas Borba");

    // Delete book
    let response = client
        .delete(format!("{}/livros/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_book() {
    let client = Client::new();

    let response = client
        .get(format!("{}/livros/999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_with_invalid_id() {
    let client = Client::new();

    let response = client
        .put(format!("{}/livros/abc", BASE_URL))
        .json(&json!({"titulo": "X", "autor": "Y"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
