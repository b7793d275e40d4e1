//! Handlers for opening and returning rentals.

use axum::extract::State;
use axum::Json;
use filmstore_core::types::{DbId, Timestamp};
use filmstore_db::models::rental::CreateRental;
use filmstore_db::repositories::{CustomerRepo, InventoryRepo, RentalRepo, StoreRepo};
use serde::{Deserialize, Serialize};

use super::required;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::Confirmation;
use crate::state::AppState;

/// Body of `POST /api/rentals`.
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub inventory_id: Option<DbId>,
    pub customer_id: Option<DbId>,
    /// Staff member handling the rental; optional.
    pub staff_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct CreatedRental {
    pub rental_id: DbId,
    pub rental_date: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct ReturnedRental {
    pub rental_id: DbId,
    pub return_date: Option<Timestamp>,
}

/// POST /api/rentals
///
/// Checks, in order: the inventory item exists (404), the customer exists
/// (404) and is active (400), the staff member exists if given (400), and
/// the item has no open rental (400).
pub async fn create_rental(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRentalRequest>,
) -> AppResult<Json<Confirmation<CreatedRental>>> {
    let inventory_id = required(input.inventory_id, "inventory_id")?;
    let customer_id = required(input.customer_id, "customer_id")?;

    if InventoryRepo::find_by_id(&state.pool, inventory_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Inventory", inventory_id));
    }

    let customer = CustomerRepo::find_by_id(&state.pool, customer_id)
        .await?
        .ok_or(AppError::not_found("Customer", customer_id))?;
    if !customer.active {
        return Err(AppError::precondition(format!(
            "Customer {customer_id} is inactive"
        )));
    }

    if let Some(staff_id) = input.staff_id {
        if !StoreRepo::staff_exists(&state.pool, staff_id).await? {
            return Err(AppError::validation(format!(
                "Staff with id {staff_id} does not exist"
            )));
        }
    }

    if let Some(open) = RentalRepo::find_open_for_inventory(&state.pool, inventory_id).await? {
        tracing::debug!(inventory_id, open_rental_id = open.rental_id, "Inventory unavailable");
        return Err(AppError::precondition(format!(
            "Inventory item {inventory_id} is not available"
        )));
    }

    let rental = RentalRepo::create(
        &state.pool,
        &CreateRental {
            inventory_id,
            customer_id,
            staff_id: input.staff_id,
        },
    )
    .await?;

    tracing::info!(
        rental_id = rental.rental_id,
        inventory_id,
        customer_id,
        "Rental created"
    );

    Ok(Json(Confirmation::new(
        "Rental created successfully",
        CreatedRental {
            rental_id: rental.rental_id,
            rental_date: rental.rental_date,
        },
    )))
}

/// PUT /api/rentals/{rental_id}/return
pub async fn return_rental(
    State(state): State<AppState>,
    AppPath(rental_id): AppPath<DbId>,
) -> AppResult<Json<Confirmation<ReturnedRental>>> {
    let rental = RentalRepo::find_by_id(&state.pool, rental_id)
        .await?
        .ok_or(AppError::not_found("Rental", rental_id))?;
    if rental.return_date.is_some() {
        return Err(already_returned(rental_id));
    }

    // A concurrent return between the check and the update leaves nothing to stamp.
    let returned = RentalRepo::mark_returned(&state.pool, rental_id)
        .await?
        .ok_or_else(|| already_returned(rental_id))?;

    tracing::info!(rental_id, "Rental returned");

    Ok(Json(Confirmation::new(
        "Rental returned successfully",
        ReturnedRental {
            rental_id,
            return_date: returned.return_date,
        },
    )))
}

fn already_returned(rental_id: DbId) -> AppError {
    AppError::precondition(format!("Rental {rental_id} has already been returned"))
}
