//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};
use tower::ServiceExt;

const FRUIT_NAMES: &[&str] = &[
    "apple", "banana", "cherry", "grape", "guava", "kiwi", "lemon", "mango", "papaya", "pear",
];

/// Random fruit payload. Names carry a random suffix so two calls never
/// collide unless `name` is given.
pub fn create_fruit(name: Option<&str>) -> Value {
    let mut rng = rand::thread_rng();

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let base = FRUIT_NAMES.choose(&mut rng).copied().unwrap_or("fruit");
            format!("{base}-{}", rng.gen::<u32>())
        }
    };
    let price = rng.gen_range(1..=10_000) as f64 / 100.0;

    json!({ "name": name, "price": price })
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
