#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use filmstore_api::config::{LogFormat, ServerConfig};
use filmstore_api::router::build_app_router;
use filmstore_api::state::AppState;
use filmstore_core::types::DbId;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router (same middleware stack as production)
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Build the router over a pool that never connects. For requests that are
/// rejected before any query runs.
pub fn build_offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://filmstore@localhost/filmstore")
        .unwrap();
    build_test_app(pool)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn put_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// GET `uri`, assert the status and return the JSON body.
pub async fn get_json(app: Router, uri: &str, status: StatusCode) -> serde_json::Value {
    expect_status(get(app, uri).await, status).await
}

/// Assert the status and return the JSON body.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A store with one active staff member, plus a language for films.
pub struct Seed {
    pub store_id: DbId,
    pub staff_id: DbId,
    pub language_id: DbId,
}

pub async fn seed(pool: &PgPool) -> Seed {
    let address_id: DbId = sqlx::query_scalar(
        "INSERT INTO address (address, district, city, postal_code, phone) \
         VALUES ('47 MySakila Drive', 'Alberta', 'Lethbridge', 'T1H', '555-0100') \
         RETURNING address_id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    let store_id: DbId =
        sqlx::query_scalar("INSERT INTO store (address_id) VALUES ($1) RETURNING store_id")
            .bind(address_id)
            .fetch_one(pool)
            .await
            .unwrap();
    let staff_id: DbId = sqlx::query_scalar(
        "INSERT INTO staff (first_name, last_name, store_id) VALUES ('Mike', 'Hillyer', $1) \
         RETURNING staff_id",
    )
    .bind(store_id)
    .fetch_one(pool)
    .await
    .unwrap();
    let language_id: DbId =
        sqlx::query_scalar("INSERT INTO language (name) VALUES ('English') RETURNING language_id")
            .fetch_one(pool)
            .await
            .unwrap();
    Seed {
        store_id,
        staff_id,
        language_id,
    }
}

pub async fn insert_address(pool: &PgPool, line: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO address (address, city, phone) VALUES ($1, 'Woodridge', '555-0199') \
         RETURNING address_id",
    )
    .bind(line)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_film(pool: &PgPool, language_id: DbId, title: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO film \
            (title, description, release_year, language_id, rental_duration, rental_rate, rating) \
         VALUES ($1, 'A test film', 2006, $2, 3, 2.99, 'PG') RETURNING film_id",
    )
    .bind(title)
    .bind(language_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_category(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO category (name) VALUES ($1) RETURNING category_id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn tag_film(pool: &PgPool, film_id: DbId, category_id: DbId) {
    sqlx::query("INSERT INTO film_category (film_id, category_id) VALUES ($1, $2)")
        .bind(film_id)
        .bind(category_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_actor(pool: &PgPool, first_name: &str, last_name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO actor (first_name, last_name) VALUES ($1, $2) RETURNING actor_id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn cast_actor(pool: &PgPool, actor_id: DbId, film_id: DbId) {
    sqlx::query("INSERT INTO film_actor (actor_id, film_id) VALUES ($1, $2)")
        .bind(actor_id)
        .bind(film_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_inventory(pool: &PgPool, film_id: DbId, store_id: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO inventory (film_id, store_id) VALUES ($1, $2) RETURNING inventory_id",
    )
    .bind(film_id)
    .bind(store_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_customer(
    pool: &PgPool,
    store_id: DbId,
    first: &str,
    last: &str,
    email: &str,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO customer (store_id, first_name, last_name, email) \
         VALUES ($1, $2, $3, $4) RETURNING customer_id",
    )
    .bind(store_id)
    .bind(first)
    .bind(last)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a rental dated `days_ago` days back, optionally already returned
/// one day after it started.
pub async fn insert_rental(
    pool: &PgPool,
    inventory_id: DbId,
    customer_id: DbId,
    days_ago: i32,
    returned: bool,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO rental (rental_date, inventory_id, customer_id, return_date) \
         VALUES (now() - make_interval(days => $3), $1, $2, \
                 CASE WHEN $4 THEN now() - make_interval(days => $3) + interval '1 day' END) \
         RETURNING rental_id",
    )
    .bind(inventory_id)
    .bind(customer_id)
    .bind(days_ago)
    .bind(returned)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_payment(pool: &PgPool, customer_id: DbId, rental_id: DbId, amount: f64) {
    sqlx::query(
        "INSERT INTO payment (customer_id, rental_id, amount) VALUES ($1, $2, $3::numeric)",
    )
    .bind(customer_id)
    .bind(rental_id)
    .bind(amount)
    .execute(pool)
    .await
    .unwrap();
}
