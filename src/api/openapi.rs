use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorResponse, ProviderErrorResponse};
use crate::shared::api::PageMeta;
use crate::topic::application::domain::entities::{TopicFull, TopicMeta};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "News API",
        version = "1.0.0",
        description = "Topic read endpoints and Facebook login for the news site"
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_a_topic_handler,

        // OAuth endpoints
        crate::oauth::adapter::incoming::web::routes::facebook_login_handler,
        crate::oauth::adapter::incoming::web::routes::facebook_callback_handler,
    ),
    components(
        schemas(
            PageMeta,
            ErrorResponse,
            ProviderErrorResponse,
            TopicMeta,
            TopicFull
        )
    ),
    tags(
        (name = "topics", description = "Topic listing and lookup"),
        (name = "oauth", description = "Third-party login"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
