//! Route definitions for the `/customers` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// ```text
/// GET    /customers-simple          -> list_simple
/// GET    /customers                 -> list_customers (?page=&limit=&search=&type=)
/// POST   /customers                 -> create_customer
/// PUT    /customers/{id}            -> update_customer
/// DELETE /customers/{id}            -> delete_customer
/// GET    /customers/{id}/details    -> customer_details
/// GET    /customers/{id}/rentals    -> customer_rentals (?status=&limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers-simple", get(customers::list_simple))
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/{id}",
            put(customers::update_customer).delete(customers::delete_customer),
        )
        .route("/customers/{id}/details", get(customers::customer_details))
        .route("/customers/{id}/rentals", get(customers::customer_rentals))
}
