//! Shared response shapes for mutation endpoints.

use serde::Serialize;

/// Confirmation payload: a human-readable `message` with the write's
/// result fields flattened alongside it.
///
/// ```ignore
/// Ok(Json(Confirmation::new("Customer created successfully", CreatedCustomer { customer_id })))
/// // => { "message": "Customer created successfully", "customer_id": 600 }
/// ```
#[derive(Debug, Serialize)]
pub struct Confirmation<T: Serialize> {
    pub message: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Confirmation<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}
