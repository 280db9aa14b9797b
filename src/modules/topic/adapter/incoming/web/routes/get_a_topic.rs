use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, RecordResponse},
    shared::api::ApiResponse,
    topic::{
        adapter::incoming::web::query_params::parse_bool,
        application::{domain::entities::TopicFull, ports::incoming::use_cases::GetATopicError},
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct GetATopicQuery {
    pub full: Option<String>,
}

/// Reads `full` without rejecting the request; anything unreadable is `false`.
fn full_flag(query_string: &str) -> bool {
    web::Query::<GetATopicQuery>::from_query(query_string)
        .ok()
        .and_then(|query| query.into_inner().full)
        .and_then(|raw| parse_bool(raw.trim()))
        .unwrap_or(false)
}

/// Get a topic by slug
///
/// Pagination parameters are ignored. An unrecognised `full` value means `false`.
#[utoipa::path(
    get,
    path = "/v1/topics/{slug}",
    tag = "topics",
    params(
        ("slug" = String, Path, description = "Topic slug"),
        ("full" = Option<bool>, Query, description = "Return the full projection"),
    ),
    responses(
        (status = 200, description = "The topic", body = inline(RecordResponse<TopicFull>)),
        (
            status = 404,
            description = "No topic with this slug",
            body = ErrorResponse,
            example = json!({"status": "Record Not Found", "error": "Record Not Found"})
        ),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/v1/topics/{slug}")]
pub async fn get_a_topic_handler(
    req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    let full = full_flag(req.query_string());

    match data.get_a_topic_use_case.execute(&slug, full).await {
        Ok(record) => ApiResponse::record(record),
        Err(err) => map_get_a_topic_error(err),
    }
}

fn map_get_a_topic_error(err: GetATopicError) -> HttpResponse {
    match err {
        GetATopicError::NotFound => ApiResponse::not_found(),
        GetATopicError::QueryFailed(ref msg) => {
            error!("Topic lookup failed: {}", msg);
            ApiResponse::internal_error(&err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::{
        shared::api::custom_query_config,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            stubs::{sample_full, sample_meta, StubGetATopicUseCase},
        },
        topic::application::domain::entities::TopicRecord,
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn returns_single_record() {
        // Arrange
        let stub = StubGetATopicUseCase::found(TopicRecord::Meta(sample_meta("far-sea")));
        let state = TestAppStateBuilder::default()
            .with_get_a_topic(stub.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_a_topic_handler)).await;

        let req = test::TestRequest::get()
            .uri("/v1/topics/far-sea?limit=50&offset=3")
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["record"]["slug"], "far-sea");
        assert!(json.get("records").is_none());
        assert_eq!(stub.calls(), vec![("far-sea".to_string(), false)]);
    }

    #[actix_web::test]
    async fn full_flag_is_forwarded() {
        // Arrange
        let stub = StubGetATopicUseCase::found(TopicRecord::Full(sample_full("far-sea")));
        let state = TestAppStateBuilder::default()
            .with_get_a_topic(stub.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_a_topic_handler)).await;

        let req = test::TestRequest::get()
            .uri("/v1/topics/far-sea?full=1")
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(stub.calls(), vec![("far-sea".to_string(), true)]);
    }

    #[actix_web::test]
    async fn unparseable_full_means_meta() {
        // Arrange
        let stub = StubGetATopicUseCase::found(TopicRecord::Meta(sample_meta("far-sea")));
        let state = TestAppStateBuilder::default()
            .with_get_a_topic(stub.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_a_topic_handler)).await;

        let req = test::TestRequest::get()
            .uri("/v1/topics/far-sea?full=maybe")
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(stub.calls(), vec![("far-sea".to_string(), false)]);
    }

    #[actix_web::test]
    async fn repeated_full_is_read_as_meta() {
        // Arrange
        let stub = StubGetATopicUseCase::not_found();
        let state = TestAppStateBuilder::default()
            .with_get_a_topic(stub.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_query_config())
                .service(get_a_topic_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/v1/topics/missing?full=1&full=0")
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(stub.calls(), vec![("missing".to_string(), false)]);
    }

    #[actix_web::test]
    async fn full_flag_forms() {
        assert!(full_flag("full=true"));
        assert!(full_flag("full=%20T%20&limit=3"));
        assert!(!full_flag(""));
        assert!(!full_flag("full=yes"));
        assert!(!full_flag("full=1&full=1"));
    }

    #[actix_web::test]
    async fn missing_topic_returns_literal_not_found() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_a_topic(StubGetATopicUseCase::not_found())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_a_topic_handler)).await;

        let req = test::TestRequest::get().uri("/v1/topics/nope").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(resp).await,
            json!({"status": "Record Not Found", "error": "Record Not Found"})
        );
    }

    #[actix_web::test]
    async fn storage_failure_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_a_topic(StubGetATopicUseCase::failure("db down"))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_a_topic_handler)).await;

        let req = test::TestRequest::get().uri("/v1/topics/far-sea").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(resp).await["status"], "Internal server error");
    }
}
