//! Search dispatch and pagination rules.
//!
//! Lives in `core` so the query-parameter parsing used by the API and the
//! bounds applied by the repositories stay in one place.

use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows for "top N" report endpoints.
pub const DEFAULT_TOP_LIMIT: i64 = 10;

/// Maximum number of rows for "top N" report endpoints.
pub const MAX_TOP_LIMIT: i64 = 100;

/// Default number of film search results.
pub const DEFAULT_SEARCH_LIMIT: i64 = 50;

/// Maximum number of film search results.
pub const MAX_SEARCH_LIMIT: i64 = 200;

/// Default page size for the paginated customer list.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size for the paginated customer list.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Film search
// ---------------------------------------------------------------------------

/// Which column set a film search matches against (`?type=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilmSearchKind {
    /// Film title.
    #[default]
    Title,
    /// Actor full name ("first last").
    Actor,
    /// Category name.
    Genre,
}

impl FilmSearchKind {
    pub const ACCEPTED: &'static str = "title, actor, genre";

    /// Parse an optional `type` parameter, falling back to [`FilmSearchKind::Title`].
    pub fn from_param(value: Option<&str>) -> Result<Self, CoreError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse(),
            None => Ok(Self::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Actor => "actor",
            Self::Genre => "genre",
        }
    }
}

impl FromStr for FilmSearchKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "actor" => Ok(Self::Actor),
            "genre" => Ok(Self::Genre),
            other => Err(CoreError::Validation(format!(
                "Invalid search type '{other}'. Must be one of: {}",
                Self::ACCEPTED
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Customer search
// ---------------------------------------------------------------------------

/// Which customer field the `search` term applies to (`?type=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSearchField {
    /// Name or email.
    #[default]
    All,
    Name,
    Email,
    /// Exact customer id; the term must be numeric.
    Id,
}

impl CustomerSearchField {
    pub const ACCEPTED: &'static str = "all, name, email, id";

    pub fn from_param(value: Option<&str>) -> Result<Self, CoreError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse(),
            None => Ok(Self::default()),
        }
    }

    /// Reject a term the field cannot match, such as a non-numeric id.
    pub fn check_term(self, term: &str) -> Result<(), CoreError> {
        if self == Self::Id && term.parse::<crate::types::DbId>().is_err() {
            return Err(CoreError::Validation(format!(
                "Customer id search term '{term}' must be numeric"
            )));
        }
        Ok(())
    }
}

impl FromStr for CustomerSearchField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "id" => Ok(Self::Id),
            other => Err(CoreError::Validation(format!(
                "Invalid search type '{other}'. Must be one of: {}",
                Self::ACCEPTED
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

/// Trim a user-supplied search term. Blank input yields `None`.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build an `ILIKE` substring pattern, escaping the LIKE metacharacters so
/// user input is matched literally.
///
/// # Examples
///
/// ```
/// use filmstore_core::search::like_pattern;
/// assert_eq!(like_pattern("Action"), "%Action%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a 1-based page number.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset for a 1-based page.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(limit)
}

/// Number of pages needed to show `total` rows at `limit` per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
