use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::info;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct BeginLoginQuery {
    pub location: Option<String>,
}

/// Start Facebook login
///
/// Redirects the browser to the Facebook consent page. After login the browser
/// lands on `location` (default: the site URL) with the session token appended.
#[utoipa::path(
    get,
    path = "/v1/oauth/facebook",
    tag = "oauth",
    params(
        ("location" = Option<String>, Query, description = "Where to send the browser after login"),
    ),
    responses(
        (status = 307, description = "Redirect to the Facebook consent page")
    )
)]
#[get("/v1/oauth/facebook")]
pub async fn facebook_login_handler(
    query: web::Query<BeginLoginQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.facebook_login_use_case;
    info!(provider = %use_case.provider(), "Starting OAuth login");

    ApiResponse::temporary_redirect(&use_case.begin(query.location.as_deref()))
}
