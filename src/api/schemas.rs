// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::PageMeta;

/// List response envelope
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct RecordsResponse<T> {
    /// Always "ok" for successful responses
    #[schema(example = "ok")]
    pub status: String,
    /// Page of records, never null
    pub records: Vec<T>,
    /// Pagination metadata
    pub meta: PageMeta,
}

/// Single-record response envelope
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct RecordResponse<T> {
    #[schema(example = "ok")]
    pub status: String,
    pub record: T,
}

/// Error response envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error label
    #[schema(example = "Internal server error")]
    pub status: String,

    /// Human-readable error message
    #[schema(example = "Database error: connection refused")]
    pub error: String,
}

/// Returned when the identity provider gave no usable profile
#[derive(Serialize, ToSchema)]
pub struct ProviderErrorResponse {
    #[schema(example = "unauthorized")]
    pub status: String,

    #[serde(rename = "type")]
    #[schema(example = "facebook")]
    pub provider: String,

    #[schema(example = "Cannot get user data from Facebook.")]
    pub description: String,
}
