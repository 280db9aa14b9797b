use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, ProviderErrorResponse},
    oauth::application::{
        domain::entities::{OAuthCallback, OAuthProvider},
        ports::incoming::use_cases::OAuthLoginError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub state: Option<String>,
    pub code: Option<String>,
    pub location: Option<String>,
}

impl From<CallbackQuery> for OAuthCallback {
    fn from(query: CallbackQuery) -> Self {
        Self {
            state: query.state,
            code: query.code,
            location: query.location,
        }
    }
}

/// Facebook login callback
///
/// Completes the login and redirects to the requested location with a
/// `token` query parameter. Recoverable failures restart the login.
#[utoipa::path(
    get,
    path = "/v1/oauth/facebook/callback",
    tag = "oauth",
    params(
        ("state" = Option<String>, Query, description = "Anti-forgery state echoed by Facebook"),
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("location" = Option<String>, Query, description = "Post-login destination"),
    ),
    responses(
        (status = 307, description = "Redirect to the destination with `token`, or back to the login page"),
        (
            status = 401,
            description = "Facebook returned no usable profile",
            body = ProviderErrorResponse,
            example = json!({
                "status": "unauthorized",
                "type": "facebook",
                "description": "Cannot get user data from Facebook."
            })
        ),
        (status = 500, description = "Registration or token issuance failed", body = ErrorResponse)
    )
)]
#[get("/v1/oauth/facebook/callback")]
pub async fn facebook_callback_handler(
    query: web::Query<CallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.facebook_login_use_case;

    match use_case.complete(query.into_inner().into()).await {
        Ok(destination) => ApiResponse::temporary_redirect(&destination),
        Err(err) => map_callback_error(err, use_case.login_url(), use_case.provider()),
    }
}

fn map_callback_error(err: OAuthLoginError, login_url: &str, provider: OAuthProvider) -> HttpResponse {
    if err.restarts_login() {
        return ApiResponse::temporary_redirect(login_url);
    }

    match err {
        OAuthLoginError::MissingAccountId => ApiResponse::provider_unauthorized(
            provider.as_str(),
            &format!("Cannot get user data from {}.", provider.display_name()),
        ),
        other => {
            error!(provider = %provider, "OAuth login failed: {}", other);
            ApiResponse::internal_error(&other.to_string())
        }
    }
}
