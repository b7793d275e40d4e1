//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod customer_repo;
pub mod film_repo;
pub mod inventory_repo;
pub mod rental_repo;
pub mod store_repo;

pub use actor_repo::ActorRepo;
pub use customer_repo::CustomerRepo;
pub use film_repo::FilmRepo;
pub use inventory_repo::InventoryRepo;
pub use rental_repo::RentalRepo;
pub use store_repo::StoreRepo;

/// Comma-joined category names of the film aliased `f`.
pub(crate) const FILM_CATEGORIES: &str = "(SELECT string_agg(c.name, ', ' ORDER BY c.name) \
     FROM film_category fc \
     JOIN category c ON c.category_id = fc.category_id \
     WHERE fc.film_id = f.film_id)";

/// Comma-joined "First Last" cast of the film aliased `f`.
pub(crate) const FILM_ACTORS: &str =
    "(SELECT string_agg(a.first_name || ' ' || a.last_name, ', ' \
                        ORDER BY a.last_name, a.first_name) \
     FROM film_actor fa \
     JOIN actor a ON a.actor_id = fa.actor_id \
     WHERE fa.film_id = f.film_id)";
