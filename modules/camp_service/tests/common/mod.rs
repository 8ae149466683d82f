//! Common test utilities: in-memory database app and HTTP helpers
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use camp_service::{domain::Service, CampServiceModule, NewActivity};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Open a fresh in-memory SQLite database with all migrations applied
pub async fn migrated_db() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    CampServiceModule::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

/// Router and service backed by a fresh, migrated in-memory SQLite database
pub struct TestApp {
    pub router: Router,
    pub service: Arc<Service>,
}

impl TestApp {
    pub async fn new() -> Self {
        let module = CampServiceModule::init(migrated_db().await);
        Self {
            router: module.register_rest(Router::new()),
            service: module.service(),
        }
    }

    /// Seed an activity directly through the service (there is no POST route)
    pub async fn activity(&self, name: &str, difficulty: i32) -> i32 {
        self.service
            .create_activity(NewActivity {
                name: name.to_string(),
                difficulty,
            })
            .await
            .expect("Failed to seed activity")
            .id
    }

    pub async fn camper(&self, name: &str, age: i32) -> i32 {
        let (status, body) = self
            .send(
                Method::POST,
                "/campers",
                Some(serde_json::json!({"name": name, "age": age})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "camper seed failed: {:?}", body);
        body["id"].as_i64().expect("camper id") as i32
    }

    pub async fn signup(&self, camper_id: i32, activity_id: i32, time: i32) -> StatusCode {
        let (status, _) = self
            .send(
                Method::POST,
                "/signups",
                Some(serde_json::json!({
                    "time": time,
                    "camper_id": camper_id,
                    "activity_id": activity_id
                })),
            )
            .await;
        status
    }

    /// Send a request with an optional JSON body; returns status and parsed body
    /// (`Value::Null` for empty bodies, a string for non-JSON bodies)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.dispatch(request).await
    }

    /// Send a raw body with a JSON content type
    pub async fn send_raw(&self, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .expect("Failed to build request");

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }
}
