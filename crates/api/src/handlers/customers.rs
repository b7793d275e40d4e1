//! Handlers for the `/customers` resource.
//!
//! Writes follow a read-check-write sequence: existence, email uniqueness
//! among active customers, and open-rental count before soft delete. The
//! sequence is not wrapped in a transaction.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use filmstore_core::customer::{normalize_email, normalize_name, validate_email, validate_name};
use filmstore_core::rental::{
    due_date, is_overdue, RentalStatus, RentalStatusFilter, DEFAULT_HISTORY_LIMIT,
    MAX_HISTORY_LIMIT,
};
use filmstore_core::search::{
    clamp_limit, clamp_page, normalize_query, page_offset, total_pages, CustomerSearchField,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use filmstore_core::types::{DbId, Timestamp};
use filmstore_db::models::customer::{
    CreateCustomer, Customer, CustomerDetail, CustomerFilter, CustomerListItem, CustomerSummary,
    UpdateCustomer,
};
use filmstore_db::models::rental::CustomerRental;
use filmstore_db::repositories::{CustomerRepo, RentalRepo, StoreRepo};
use serde::{Deserialize, Serialize};

use super::required;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::response::Confirmation;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/customers`.
#[derive(Debug, Deserialize)]
pub struct CustomerListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    /// Field the search term applies to: `all` (default), `name`, `email`, `id`.
    #[serde(rename = "type")]
    pub field: Option<String>,
}

/// One page of the customer list.
#[derive(Debug, Serialize)]
pub struct CustomerPage {
    pub customers: Vec<CustomerListItem>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// Body of `POST /api/customers`. Presence is checked by the handler so a
/// missing field yields a 400 naming it.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub store_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_id: Option<DbId>,
}

/// Body of `PUT /api/customers/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub store_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct CustomerId {
    pub customer_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct UpdatedCustomer {
    pub customer: Customer,
}

/// Query parameters for `GET /api/customers/{id}/rentals`.
#[derive(Debug, Deserialize)]
pub struct CustomerRentalsParams {
    /// `all` (default), `active` or `returned`.
    pub status: Option<String>,
    pub limit: Option<i64>,
}

/// A rental in a customer's history with its derived due date and status.
#[derive(Debug, Serialize)]
pub struct CustomerRentalEntry {
    pub rental_id: DbId,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
    pub due_date: Timestamp,
    pub inventory_id: DbId,
    pub film_id: DbId,
    pub title: String,
    pub rental_rate: f64,
    pub status: RentalStatus,
    pub overdue: bool,
}

impl CustomerRentalEntry {
    fn from_row(row: CustomerRental, now: Timestamp) -> Self {
        Self {
            due_date: due_date(row.rental_date, row.rental_duration),
            status: RentalStatus::from_return_date(row.return_date),
            overdue: is_overdue(row.rental_date, row.rental_duration, row.return_date, now),
            rental_id: row.rental_id,
            rental_date: row.rental_date,
            return_date: row.return_date,
            inventory_id: row.inventory_id,
            film_id: row.film_id,
            title: row.title,
            rental_rate: row.rental_rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/customers-simple
///
/// Active customers in name order, for pickers.
pub async fn list_simple(State(state): State<AppState>) -> AppResult<Json<Vec<CustomerSummary>>> {
    let customers = CustomerRepo::list_simple(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /api/customers?page=&limit=&search=&type=
pub async fn list_customers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CustomerListParams>,
) -> AppResult<Json<CustomerPage>> {
    let field = CustomerSearchField::from_param(params.field.as_deref())?;
    let search = params.search.as_deref().and_then(normalize_query);
    if let Some(term) = search.as_deref() {
        field.check_term(term)?;
    }
    let filter = CustomerFilter { search, field };
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

    let customers =
        CustomerRepo::list(&state.pool, &filter, limit, page_offset(page, limit)).await?;
    let total = CustomerRepo::count(&state.pool, &filter).await?;

    Ok(Json(CustomerPage {
        customers,
        total,
        page,
        limit,
        total_pages: total_pages(total, limit),
    }))
}

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCustomerRequest>,
) -> AppResult<Json<Confirmation<CustomerId>>> {
    let store_id = required(input.store_id, "store_id")?;
    let first_name = required(input.first_name, "first_name")?;
    let last_name = required(input.last_name, "last_name")?;
    let email = required(input.email, "email")?;

    validate_name("first_name", &first_name)?;
    validate_name("last_name", &last_name)?;
    validate_email(&email)?;
    let email = normalize_email(&email);

    ensure_store_exists(&state, store_id).await?;
    ensure_email_available(&state, &email, None).await?;

    let customer = CustomerRepo::create(
        &state.pool,
        &CreateCustomer {
            store_id,
            first_name: normalize_name(&first_name),
            last_name: normalize_name(&last_name),
            email,
            address_id: input.address_id,
        },
    )
    .await?;

    tracing::info!(customer_id = customer.customer_id, store_id, "Customer created");

    Ok(Json(Confirmation::new(
        "Customer created successfully",
        CustomerId {
            customer_id: customer.customer_id,
        },
    )))
}

/// PUT /api/customers/{id}
///
/// 404 for missing or soft-deleted customers.
pub async fn update_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCustomerRequest>,
) -> AppResult<Json<Confirmation<UpdatedCustomer>>> {
    if CustomerRepo::find_active(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Customer", id));
    }

    let update = build_update(input)?;
    if update.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }
    if let Some(store_id) = update.store_id {
        ensure_store_exists(&state, store_id).await?;
    }
    if let Some(email) = update.email.as_deref() {
        ensure_email_available(&state, email, Some(id)).await?;
    }

    let customer = CustomerRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::not_found("Customer", id))?;

    tracing::info!(customer_id = id, "Customer updated");

    Ok(Json(Confirmation::new(
        "Customer updated successfully",
        UpdatedCustomer { customer },
    )))
}

/// DELETE /api/customers/{id}
///
/// Soft delete: clears `active`. Refused while the customer holds any open
/// rental.
pub async fn delete_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Confirmation<CustomerId>>> {
    if CustomerRepo::find_active(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Customer", id));
    }

    let open = RentalRepo::count_open_for_customer(&state.pool, id).await?;
    if open > 0 {
        tracing::debug!(customer_id = id, open, "Refusing to delete customer with open rentals");
        return Err(AppError::precondition(format!(
            "Cannot delete customer with {open} active rental(s)"
        )));
    }

    if !CustomerRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found("Customer", id));
    }

    tracing::info!(customer_id = id, "Customer deactivated");

    Ok(Json(Confirmation::new(
        "Customer deleted successfully",
        CustomerId { customer_id: id },
    )))
}

/// GET /api/customers/{id}/details
pub async fn customer_details(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<CustomerDetail>> {
    let detail = CustomerRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Customer", id))?;
    Ok(Json(detail))
}

/// GET /api/customers/{id}/rentals?status=&limit=
///
/// Newest first. Readable for soft-deleted customers too.
pub async fn customer_rentals(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<CustomerRentalsParams>,
) -> AppResult<Json<Vec<CustomerRentalEntry>>> {
    let status = RentalStatusFilter::from_param(params.status.as_deref())?;
    let limit = clamp_limit(params.limit, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT);

    if CustomerRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Customer", id));
    }

    let now = Utc::now();
    let rentals = RentalRepo::list_for_customer(&state.pool, id, status, limit)
        .await?
        .into_iter()
        .map(|row| CustomerRentalEntry::from_row(row, now))
        .collect();
    Ok(Json(rentals))
}

// ── Private helpers ──────────────────────────────────────────────────────

/// Validate and normalize the fields present in an update body.
fn build_update(input: UpdateCustomerRequest) -> AppResult<UpdateCustomer> {
    let first_name = input
        .first_name
        .map(|v| validate_name("first_name", &v).map(|()| normalize_name(&v)))
        .transpose()?;
    let last_name = input
        .last_name
        .map(|v| validate_name("last_name", &v).map(|()| normalize_name(&v)))
        .transpose()?;
    let email = input
        .email
        .map(|v| validate_email(&v).map(|()| normalize_email(&v)))
        .transpose()?;

    Ok(UpdateCustomer {
        store_id: input.store_id,
        first_name,
        last_name,
        email,
        address_id: input.address_id,
    })
}

async fn ensure_store_exists(state: &AppState, store_id: DbId) -> AppResult<()> {
    if StoreRepo::exists(&state.pool, store_id).await? {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Store with id {store_id} does not exist"
        )))
    }
}

/// Reject an email already used by another active customer.
async fn ensure_email_available(
    state: &AppState,
    email: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if CustomerRepo::email_in_use(&state.pool, email, exclude_id).await? {
        tracing::debug!(email, "Rejecting duplicate customer email");
        return Err(AppError::precondition(format!(
            "A customer with email {email} already exists"
        )));
    }
    Ok(())
}
