//! Integration tests for customer persistence and soft delete.
//!
//! Verifies that:
//! - Soft-deleted customers drop out of `find_active`, lists and counts
//! - `soft_delete` is idempotent (second call returns `false`)
//! - Email uniqueness only considers active customers, case-insensitively
//! - `update` applies only the fields that are present

mod common;

use common::*;
use filmstore_core::search::CustomerSearchField;
use filmstore_db::models::customer::{CreateCustomer, CustomerFilter, UpdateCustomer};
use filmstore_db::repositories::CustomerRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_customer(store_id: i32, first: &str, last: &str, email: &str) -> CreateCustomer {
    CreateCustomer {
        store_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        address_id: None,
    }
}

fn search(term: &str, field: CustomerSearchField) -> CustomerFilter {
    CustomerFilter {
        search: Some(term.to_string()),
        field,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_sets_defaults(pool: PgPool) {
    let shop = shop(&pool).await;

    let created = CustomerRepo::create(
        &pool,
        &new_customer(shop.store_id, "Susan", "Wilson", "sw@example.com"),
    )
    .await
    .unwrap();

    assert!(created.active);
    assert_eq!(created.email.as_deref(), Some("sw@example.com"));
    assert_eq!(created.address_id, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn soft_delete_hides_customer(pool: PgPool) {
    let shop = shop(&pool).await;
    let c = CustomerRepo::create(
        &pool,
        &new_customer(shop.store_id, "Susan", "Wilson", "sw@example.com"),
    )
    .await
    .unwrap();

    assert!(CustomerRepo::soft_delete(&pool, c.customer_id).await.unwrap());
    assert!(!CustomerRepo::soft_delete(&pool, c.customer_id).await.unwrap());

    assert!(CustomerRepo::find_active(&pool, c.customer_id)
        .await
        .unwrap()
        .is_none());
    let raw = CustomerRepo::find_by_id(&pool, c.customer_id)
        .await
        .unwrap()
        .expect("row still exists");
    assert!(!raw.active);

    let filter = CustomerFilter::default();
    assert_eq!(CustomerRepo::count(&pool, &filter).await.unwrap(), 0);
    assert!(CustomerRepo::list(&pool, &filter, 10, 0).await.unwrap().is_empty());
    assert!(CustomerRepo::list_simple(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn email_in_use_ignores_case_self_and_inactive(pool: PgPool) {
    let shop = shop(&pool).await;
    let c = CustomerRepo::create(
        &pool,
        &new_customer(shop.store_id, "Susan", "Wilson", "sw@example.com"),
    )
    .await
    .unwrap();

    assert!(CustomerRepo::email_in_use(&pool, "SW@Example.com", None).await.unwrap());
    assert!(!CustomerRepo::email_in_use(&pool, "sw@example.com", Some(c.customer_id))
        .await
        .unwrap());

    CustomerRepo::soft_delete(&pool, c.customer_id).await.unwrap();
    assert!(!CustomerRepo::email_in_use(&pool, "sw@example.com", None).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_only_present_fields(pool: PgPool) {
    let shop = shop(&pool).await;
    let c = CustomerRepo::create(
        &pool,
        &new_customer(shop.store_id, "Susan", "Wilson", "sw@example.com"),
    )
    .await
    .unwrap();

    let update = UpdateCustomer {
        last_name: Some("Wilson-Hart".to_string()),
        ..Default::default()
    };
    let updated = CustomerRepo::update(&pool, c.customer_id, &update)
        .await
        .unwrap()
        .expect("active customer should update");

    assert_eq!(updated.first_name, "Susan");
    assert_eq!(updated.last_name, "Wilson-Hart");
    assert_eq!(updated.email.as_deref(), Some("sw@example.com"));
    assert!(updated.last_update >= c.last_update);

    CustomerRepo::soft_delete(&pool, c.customer_id).await.unwrap();
    let after_delete = CustomerRepo::update(&pool, c.customer_id, &update).await.unwrap();
    assert!(after_delete.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_search_and_pagination(pool: PgPool) {
    let shop = shop(&pool).await;
    for (first, last, email) in [
        ("Dorothy", "Taylor", "dt@example.com"),
        ("Lisa", "Anderson", "la@sakila.org"),
        ("Nancy", "Thomas", "nt@example.com"),
    ] {
        CustomerRepo::create(&pool, &new_customer(shop.store_id, first, last, email))
            .await
            .unwrap();
    }

    let all = CustomerFilter::default();
    let page: Vec<String> = CustomerRepo::list(&pool, &all, 2, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.last_name)
        .collect();
    assert_eq!(page, vec!["Anderson", "Taylor"]);
    let next = CustomerRepo::list(&pool, &all, 2, 2).await.unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].last_name, "Thomas");

    let by_email = search("example.com", CustomerSearchField::Email);
    assert_eq!(CustomerRepo::count(&pool, &by_email).await.unwrap(), 2);

    let by_name = search("lisa and", CustomerSearchField::Name);
    let found = CustomerRepo::list(&pool, &by_name, 10, 0).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Lisa");
    assert_eq!(found[0].active_rentals, 0);

    // Underscore matches literally, not as a wildcard.
    let literal = search("l_", CustomerSearchField::All);
    assert_eq!(CustomerRepo::count(&pool, &literal).await.unwrap(), 0);
}
