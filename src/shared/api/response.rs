// src/shared/api/response.rs
use actix_web::{http::header, http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

pub const STATUS_OK: &str = "ok";
pub const STATUS_NOT_FOUND: &str = "Record Not Found";
pub const STATUS_INTERNAL_ERROR: &str = "Internal server error";
pub const STATUS_UNAUTHORIZED: &str = "unauthorized";

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageMeta {
    #[schema(example = 42)]
    pub total: u64,
    #[schema(example = 0)]
    pub offset: u64,
    #[schema(example = 10)]
    pub limit: u64,
}

/// Response envelope shared by the read endpoints.
///
/// A list response always carries `records` (possibly empty) and `meta`;
/// a single-record response carries `record`; an error carries `error`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body returned when an identity provider did not hand back a usable profile.
#[derive(Serialize)]
pub struct ProviderErrorBody {
    pub status: String,
    #[serde(rename = "type")]
    pub provider: String,
    pub description: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn records(records: Vec<T>, meta: PageMeta) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: STATUS_OK.to_string(),
            record: None,
            records: Some(records),
            meta: Some(meta),
            error: None,
        })
    }

    pub fn record(record: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: STATUS_OK.to_string(),
            record: Some(record),
            records: None,
            meta: None,
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, label: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            status: label.to_string(),
            record: None,
            records: None,
            meta: None,
            error: Some(message.to_string()),
        })
    }

    pub fn not_found() -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, STATUS_NOT_FOUND, STATUS_NOT_FOUND)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            STATUS_INTERNAL_ERROR,
            message,
        )
    }

    pub fn provider_unauthorized(provider: &str, description: &str) -> HttpResponse {
        HttpResponse::Unauthorized().json(ProviderErrorBody {
            status: STATUS_UNAUTHORIZED.to_string(),
            provider: provider.to_string(),
            description: description.to_string(),
        })
    }

    pub fn temporary_redirect(location: &str) -> HttpResponse {
        HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, location))
            .finish()
    }
}
