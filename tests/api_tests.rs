//! API integration tests
//!
//! These run against a live server (with its database migrated):
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Unique suffix so test data never collides across runs
fn unique_tag() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

/// 13-digit ISBN derived from a tag; `salt` distinguishes books within a run
fn unique_isbn(tag: u128, salt: u128) -> String {
    format!("{:013}", (tag + salt) % 10_000_000_000_000)
}

async fn create_library(client: &Client, name: &str, dept: &str) -> i64 {
    let response = client
        .post(format!("{}/libraries", BASE_URL))
        .json(&json!({ "name": name, "dept": dept }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No library ID")
}

async fn create_book(client: &Client, title: &str, isbn: &str) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": "John Smith",
            "price": 550.00,
            "isbn": isbn
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No book ID")
}

async fn create_mapping(client: &Client, lib_id: i64, book_id: i64) -> i64 {
    let response = client
        .post(format!("{}/library-books", BASE_URL))
        .json(&json!({ "lib_id": lib_id, "book_id": book_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Active");
    body["id"].as_i64().expect("No mapping ID")
}

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
async fn test_library_crud() {
    let client = Client::new();
    let tag = unique_tag();
    let name = format!("Main {}", tag);

    // Create with defaults
    let response = client
        .post(format!("{}/libraries", BASE_URL))
        .json(&json!({ "name": name, "dept": "CSE" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let lib_id = body["id"].as_i64().expect("No library ID");
    assert_eq!(body["count"], 0);
    assert_eq!(body["status"], "Active");

    // Partial update: only status changes
    let response = client
        .put(format!("{}/libraries/{}", BASE_URL, lib_id))
        .json(&json!({ "status": "Inactive" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Inactive");
    assert_eq!(body["name"], name.as_str());
    assert_eq!(body["dept"], "CSE");

    // Delete
    let response = client
        .delete(format!("{}/libraries/{}", BASE_URL, lib_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/libraries/{}", BASE_URL, lib_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_library_rejects_empty_name() {
    let client = Client::new();

    let response = client
        .post(format!("{}/libraries", BASE_URL))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    let response = client
        .post(format!("{}/libraries", BASE_URL))
        .json(&json!({ "name": "Annex", "count": -1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_isbn_rejected() {
    let client = Client::new();
    let tag = unique_tag();
    let isbn = unique_isbn(tag, 0);

    let book_id = create_book(&client, "AI Fundamentals", &isbn).await;

    // Second create with the same ISBN must fail and leave the original alone
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Another Title",
            "author": "Jane Doe",
            "price": 100.00,
            "isbn": isbn
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "duplicate_isbn");

    let response = client
        .get(format!("{}/books/isbn/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(book_id));
    assert_eq!(body["title"], "AI Fundamentals");
}

#[tokio::test]
#[ignore]
async fn test_book_partial_update() {
    let client = Client::new();
    let tag = unique_tag();
    let isbn = unique_isbn(tag, 0);
    let book_id = create_book(&client, "AI Fundamentals", &isbn).await;

    // Only price changes
    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({ "price": 600.00 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["price"], 600.0);
    assert_eq!(body["title"], "AI Fundamentals");
    assert_eq!(body["author"], "John Smith");
    assert_eq!(body["isbn"], isbn.as_str());
    assert!(body["category"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_book_validation() {
    let client = Client::new();
    let tag = unique_tag();

    // Non-positive price
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Freebie",
            "author": "Nobody",
            "price": 0,
            "isbn": unique_isbn(tag, 0)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Malformed ISBN
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Bad ISBN",
            "author": "Nobody",
            "price": 10.0,
            "isbn": "not-an-isbn"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_book_pagination() {
    let client = Client::new();
    let tag = unique_tag();
    let category = format!("pagetest-{}", tag);

    let mut ids = Vec::new();
    for i in 0..25u128 {
        let response = client
            .post(format!("{}/books", BASE_URL))
            .json(&json!({
                "title": format!("Book {}", i),
                "author": "Paginator",
                "category": category,
                "price": 10.00,
                "isbn": unique_isbn(tag, i)
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
        let body: Value = response.json().await.expect("Failed to parse response");
        ids.push(body["id"].as_i64().expect("No book ID"));
    }

    let response = client
        .get(format!(
            "{}/books?category={}&page=2&limit=10",
            BASE_URL, category
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 25);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["pages"], 3);

    // Page 2 is exactly rows 11-20 in id order
    let rows = body["rows"].as_array().expect("rows not an array");
    assert_eq!(rows.len(), 10);
    let expected: Vec<i64> = ids[10..20].to_vec();
    let got: Vec<i64> = rows
        .iter()
        .map(|r| r["id"].as_i64().expect("No id"))
        .collect();
    assert_eq!(got, expected);

    // Out-of-range pagination parameters
    let response = client
        .get(format!("{}/books?page=0", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    let response = client
        .get(format!("{}/books?limit=101", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_mapping_lifecycle() {
    let client = Client::new();
    let tag = unique_tag();

    let lib_id = create_library(&client, &format!("Main {}", tag), "CSE").await;
    let book_id = create_book(&client, "AI Fundamentals", &unique_isbn(tag, 0)).await;
    let mapping_id = create_mapping(&client, lib_id, book_id).await;

    // Repeating the same pair fails whatever the requested status
    let response = client
        .post(format!("{}/library-books", BASE_URL))
        .json(&json!({ "lib_id": lib_id, "book_id": book_id, "status": "Inactive" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "duplicate_mapping");

    // Active -> Inactive
    let response = client
        .put(format!("{}/library-books/{}", BASE_URL, mapping_id))
        .json(&json!({ "status": "Inactive" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Inactive");

    // Deleting the book cascades to the mapping
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/library-books/{}", BASE_URL, mapping_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // The library survives
    let response = client
        .get(format!("{}/libraries/{}", BASE_URL, lib_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_mapping_requires_existing_entities() {
    let client = Client::new();

    let response = client
        .post(format!("{}/library-books", BASE_URL))
        .json(&json!({ "lib_id": 999999999, "book_id": 999999999 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_library_delete_cascades_but_books_remain() {
    let client = Client::new();
    let tag = unique_tag();

    let lib_id = create_library(&client, &format!("Branch {}", tag), "EEE").await;
    let mut book_ids = Vec::new();
    let mut mapping_ids = Vec::new();
    for i in 0..3u128 {
        let book_id = create_book(&client, &format!("Title {}", i), &unique_isbn(tag, i)).await;
        mapping_ids.push(create_mapping(&client, lib_id, book_id).await);
        book_ids.push(book_id);
    }

    let response = client
        .delete(format!("{}/libraries/{}", BASE_URL, lib_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // No mapping referencing the library survives
    for mapping_id in mapping_ids {
        let response = client
            .get(format!("{}/library-books/{}", BASE_URL, mapping_id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404);
    }

    // The mapped books are unaffected
    for book_id in book_ids {
        let response = client
            .get(format!("{}/books/{}", BASE_URL, book_id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);
    }
}

#[tokio::test]
#[ignore]
async fn test_joined_views_and_status_filter() {
    let client = Client::new();
    let tag = unique_tag();

    let lib_id = create_library(&client, &format!("Joined {}", tag), "CSE").await;
    let active_book = create_book(&client, "Active Book", &unique_isbn(tag, 0)).await;
    let inactive_book = create_book(&client, "Inactive Book", &unique_isbn(tag, 1)).await;

    create_mapping(&client, lib_id, active_book).await;
    let inactive_mapping = create_mapping(&client, lib_id, inactive_book).await;
    let response = client
        .put(format!("{}/library-books/{}", BASE_URL, inactive_mapping))
        .json(&json!({ "status": "Inactive" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Default: all statuses
    let response = client
        .get(format!("{}/libraries/{}/books", BASE_URL, lib_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 2);

    // Active only
    let response = client
        .get(format!(
            "{}/libraries/{}/books?status=Active",
            BASE_URL, lib_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 1);
    let rows = body["rows"].as_array().expect("rows not an array");
    assert_eq!(rows[0]["id"].as_i64(), Some(active_book));
    assert_eq!(rows[0]["mapping_status"], "Active");

    // Reverse view
    let response = client
        .get(format!("{}/books/{}/libraries", BASE_URL, active_book))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 1);
    let rows = body["rows"].as_array().expect("rows not an array");
    assert_eq!(rows[0]["id"].as_i64(), Some(lib_id));

    // Unknown root entity
    let response = client
        .get(format!("{}/libraries/999999999/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_refresh_count() {
    let client = Client::new();
    let tag = unique_tag();

    let lib_id = create_library(&client, &format!("Counted {}", tag), "CSE").await;
    for i in 0..2u128 {
        let book_id = create_book(&client, &format!("Counted {}", i), &unique_isbn(tag, i)).await;
        create_mapping(&client, lib_id, book_id).await;
    }

    // Count is client-set, so still 0 after the mapping writes
    let response = client
        .get(format!("{}/libraries/{}", BASE_URL, lib_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["count"], 0);

    let response = client
        .post(format!("{}/libraries/{}/refresh-count", BASE_URL, lib_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["count"], 2);
}
