use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A business-rule check failed before a write (duplicate email,
    /// inventory already rented, customer still holding rentals).
    #[error("Precondition failed: {0}")]
    Precondition(String),
}
