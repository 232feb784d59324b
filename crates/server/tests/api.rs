use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::Engine;
use migration::MigratorTrait;
use server::types::{expense::ExpenseView, stats::Totals};

async fn test_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    server::app(engine)
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };
    let res = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body.map(|b| b.to_string())).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, body: Value) -> ExpenseView {
    let (status, value) = send(app, Method::POST, "/api/expenses", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{value}");
    serde_json::from_value(value).unwrap()
}

async fn totals(app: &Router) -> Totals {
    let (status, value) = send(app, Method::GET, "/api/expenses/stats/total", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(value).unwrap()
}

async fn list_titles(app: &Router, uri: &str) -> Vec<String> {
    let (status, value) = send(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "{value}");
    let items: Vec<ExpenseView> = serde_json::from_value(value).unwrap();
    items.into_iter().map(|e| e.title).collect()
}

#[tokio::test]
async fn liveness_probe_returns_plain_ok() {
    let app = test_app().await;

    let (status, body) = send_raw(&app, Method::GET, "/ok", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn create_list_stats_delete_round() {
    let app = test_app().await;
    let before = totals(&app).await;
    assert_eq!(before, Totals { total: 0.0, count: 0 });

    let coffee = create(
        &app,
        json!({"title": "Coffee", "amount": 4.50, "category": "Food", "date": "2024-01-01"}),
    )
    .await;
    assert_eq!(coffee.title, "Coffee");
    assert_eq!(coffee.amount, 4.5);
    assert_eq!(coffee.date.to_string(), "2024-01-01");

    assert!(list_titles(&app, "/api/expenses").await.contains(&"Coffee".to_string()));
    let after_create = totals(&app).await;
    assert_eq!(after_create.total, before.total + 4.5);
    assert_eq!(after_create.count, before.count + 1);

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/expenses/{}", coffee.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Expense deleted successfully"}));

    assert!(!list_titles(&app, "/api/expenses").await.contains(&"Coffee".to_string()));
    assert_eq!(totals(&app).await, before);
}

#[tokio::test]
async fn get_returns_created_record() {
    let app = test_app().await;
    let created = create(
        &app,
        json!({"title": "Book", "amount": "19.99", "category": "Education", "description": "Rust in Action"}),
    )
    .await;

    let (status, value) = send(&app, Method::GET, &format!("/api/expenses/{}", created.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["description"], "Rust in Action");
    assert!(value.get("createdAt").is_some());
    let fetched: ExpenseView = serde_json::from_value(value).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn invalid_payloads_are_rejected_with_400() {
    let app = test_app().await;

    for body in [
        json!({"amount": 1, "category": "Food"}),
        json!({"title": "   ", "amount": 1, "category": "Food"}),
        json!({"title": "Lunch", "amount": -3, "category": "Food"}),
        json!({"title": "Lunch", "amount": 1.005, "category": "Food"}),
        json!({"title": "Lunch", "amount": "lots", "category": "Food"}),
        json!({"title": "Lunch", "amount": 1, "category": "Yachts"}),
        json!({"title": "Lunch", "amount": 1, "category": "Food", "date": "yesterday"}),
    ] {
        let (status, value) = send(&app, Method::POST, "/api/expenses", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(value["error"].is_string(), "{body}");
    }

    let (status, _) = send_raw(&app, Method::POST, "/api/expenses", Some("{not json".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(totals(&app).await.count, 0);
}

#[tokio::test]
async fn missing_ids_are_404_never_500() {
    let app = test_app().await;

    for id in ["5f0c9c6e-2b7e-4d7e-9a61-2f9f6f1c0000", "507f1f77bcf86cd799439011"] {
        let uri = format!("/api/expenses/{id}");
        let (status, value) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, json!({"error": "Expense not found"}));

        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn put_applies_partial_update() {
    let app = test_app().await;
    let created = create(
        &app,
        json!({"title": "Cinema", "amount": 12, "category": "Entertainment", "date": "2024-02-10"}),
    )
    .await;
    let uri = format!("/api/expenses/{}", created.id);

    let (status, value) = send(&app, Method::PUT, &uri, Some(json!({"amount": 15.5}))).await;
    assert_eq!(status, StatusCode::OK);
    let updated: ExpenseView = serde_json::from_value(value).unwrap();
    assert_eq!(updated.amount, 15.5);
    assert_eq!(updated.title, "Cinema");
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.date, created.date);

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"category": "Nope"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"title": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_is_sorted_by_date_desc() {
    let app = test_app().await;
    for (title, date) in [("b", "2024-05-02"), ("c", "2024-05-01"), ("a", "2024-05-03")] {
        create(&app, json!({"title": title, "amount": 1, "category": "Other", "date": date})).await;
    }

    assert_eq!(list_titles(&app, "/api/expenses").await, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn category_filter_matches_and_rejects_unknown_names() {
    let app = test_app().await;
    create(&app, json!({"title": "Rent", "amount": 900, "category": "Bills", "date": "2024-01-01"})).await;
    create(&app, json!({"title": "Water", "amount": 30, "category": "Bills", "date": "2024-01-09"})).await;
    create(&app, json!({"title": "Taxi", "amount": 18, "category": "Transportation"})).await;

    assert_eq!(
        list_titles(&app, "/api/expenses/category/Bills").await,
        vec!["Water", "Rent"]
    );
    assert_eq!(
        list_titles(&app, "/api/expenses/category/bills").await,
        vec!["Water", "Rent"]
    );
    assert!(list_titles(&app, "/api/expenses/category/Healthcare").await.is_empty());

    let (status, value) = send(&app, Method::GET, "/api/expenses/category/Yachts", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("Yachts"));
}

#[tokio::test]
async fn totals_sum_decimal_amounts() {
    let app = test_app().await;
    create(&app, json!({"title": "one", "amount": 10.50, "category": "Shopping"})).await;
    create(&app, json!({"title": "two", "amount": 5.25, "category": "Shopping"})).await;

    assert_eq!(totals(&app).await, Totals { total: 15.75, count: 2 });
}

#[tokio::test]
async fn huge_amounts_are_400_and_totals_keep_working() {
    let app = test_app().await;
    let big = create(
        &app,
        json!({"title": "House", "amount": 1234567890.12, "category": "Bills"}),
    )
    .await;
    assert_eq!(big.amount, 1_234_567_890.12);

    for _ in 0..2 {
        let (status, value) = send(
            &app,
            Method::POST,
            "/api/expenses",
            Some(json!({"title": "Planet", "amount": 50000000000000000_u64, "category": "Other"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{value}");
    }

    assert_eq!(
        totals(&app).await,
        Totals { total: 1_234_567_890.12, count: 1 }
    );
}

#[tokio::test]
async fn spawned_server_answers_over_tcp() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = server::spawn_with_listener(engine, listener).unwrap();

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /ok HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.ends_with("ok"), "{response}");
}
