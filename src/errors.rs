//! Error taxonomy for catalog reads

use thiserror::Error;

use crate::models::EntityKind;

/// Errors surfaced by the catalog core
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No entity of `kind` carries this slug. Terminal, never retried.
    #[error("{kind} not found: {slug}")]
    NotFound { kind: EntityKind, slug: String },

    /// The store could not be reached, timed out, or failed mid-resolution
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Caller bug, e.g. an unknown entity kind
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, slug: &str) -> Self {
        Self::NotFound {
            kind,
            slug: slug.to_string(),
        }
    }

    /// A required relation row is missing, so the entity cannot be built whole
    pub fn broken_relation(what: &str, id: i64) -> Self {
        Self::StoreUnavailable(format!("missing {} row {}", what, id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for CatalogError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::StoreUnavailable("request timed out".to_string())
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
