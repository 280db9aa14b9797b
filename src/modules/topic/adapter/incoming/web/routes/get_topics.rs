use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::{debug, error};

use crate::{
    api::schemas::{ErrorResponse, RecordsResponse},
    shared::api::{ApiResponse, PageMeta},
    topic::{
        adapter::incoming::web::query_params::parse_topic_list_query,
        application::{
            domain::entities::{TopicMeta, TopicRecord},
            ports::incoming::use_cases::GetTopicsError,
        },
    },
    AppState,
};

/// List topics
///
/// Returns one page of topics. Unparseable query parameters yield an empty page
/// rather than an error.
#[utoipa::path(
    get,
    path = "/v1/topics",
    tag = "topics",
    params(
        ("q" = Option<String>, Query, description = "JSON filter with optional `slug`, `state`, `title` (alias: `where`)"),
        ("limit" = Option<u64>, Query, description = "Page size, default 10"),
        ("offset" = Option<u64>, Query, description = "Records to skip"),
        ("sort" = Option<String>, Query, description = "Sort field, `-` prefix for descending; default `-publishedDate`"),
        ("full" = Option<bool>, Query, description = "Return the full projection"),
    ),
    responses(
        (
            status = 200,
            description = "A page of topics",
            body = inline(RecordsResponse<TopicMeta>),
            example = json!({
                "status": "ok",
                "records": [],
                "meta": {"total": 0, "offset": 0, "limit": 10}
            })
        ),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/v1/topics")]
pub async fn get_topics_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let request = match parse_topic_list_query(req.query_string()) {
        Ok(request) => request,
        Err(invalid) => {
            debug!(reason = %invalid.reason, "Serving empty topic page for unparseable query");
            return ApiResponse::<TopicRecord>::records(
                Vec::new(),
                PageMeta {
                    total: 0,
                    offset: invalid.offset,
                    limit: invalid.limit,
                },
            );
        }
    };

    match data.get_topics_use_case.execute(request).await {
        Ok(page) => ApiResponse::records(
            page.records,
            PageMeta {
                total: page.total,
                offset: page.offset,
                limit: page.limit,
            },
        ),
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> HttpResponse {
    match err {
        GetTopicsError::QueryFailed(ref msg) => {
            error!("Topic listing failed: {}", msg);
            ApiResponse::internal_error(&err.to_string())
        }
    }
}
