use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::oauth::application::domain::entities::{
    AccessToken, OAuthProvider, OAuthRedirect, ProviderProfile,
};
use crate::oauth::application::ports::outgoing::{OAuthProviderClient, OAuthProviderError};

pub const FACEBOOK_AUTH_URL: &str = "https://www.facebook.com/dialog/oauth";
pub const FACEBOOK_TOKEN_URL: &str = "https://graph.facebook.com/oauth/access_token";
pub const FACEBOOK_PROFILE_URL: &str = "https://graph.facebook.com/v2.8/me";

const SCOPES: &str = "public_profile email";
const PROFILE_FIELDS: &str = "id,name,email,picture,birthday,first_name,last_name,gender";
const MAX_ERROR_BODY: usize = 512;

#[derive(Clone)]
pub struct FacebookClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: Url,
    pub token_url: Url,
    pub profile_url: Url,
    pub http_timeout: Duration,
}

impl fmt::Debug for FacebookClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacebookClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("auth_url", &self.auth_url.as_str())
            .field("token_url", &self.token_url.as_str())
            .field("profile_url", &self.profile_url.as_str())
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct FacebookProfile {
    id: Option<String>,
    email: Option<String>,
    name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    gender: Option<String>,
    picture: Option<FacebookPicture>,
}

#[derive(Debug, Deserialize)]
struct FacebookPicture {
    data: Option<FacebookPictureData>,
}

#[derive(Debug, Deserialize)]
struct FacebookPictureData {
    url: Option<String>,
}

impl From<FacebookProfile> for ProviderProfile {
    fn from(profile: FacebookProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            name: profile.name,
            first_name: profile.first_name,
            last_name: profile.last_name,
            gender: profile.gender,
            picture_url: profile.picture.and_then(|p| p.data).and_then(|d| d.url),
        }
    }
}

/// Facebook Graph API client for the authorization-code flow.
#[derive(Debug, Clone)]
pub struct FacebookGraphClient {
    http: Client,
    config: FacebookClientConfig,
}

impl FacebookGraphClient {
    pub fn new(config: FacebookClientConfig) -> Result<Self, OAuthProviderError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .connect_timeout(config.http_timeout)
            .build()
            .map_err(transport)?;

        Ok(Self { http, config })
    }
}

fn transport(e: reqwest::Error) -> OAuthProviderError {
    OAuthProviderError::Transport(e.to_string())
}

/// Passes 2xx responses through and turns anything else into a status error.
async fn ensure_success(resp: Response) -> Result<Response, OAuthProviderError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body: String = resp
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(MAX_ERROR_BODY)
        .collect();

    Err(OAuthProviderError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl OAuthProviderClient for FacebookGraphClient {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Facebook
    }

    fn authorization_url(&self, redirect: &OAuthRedirect, state: &str) -> String {
        let mut url = self.config.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &redirect.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", SCOPES)
            .append_pair("state", state);
        url.to_string()
    }

    async fn exchange_code(
        &self,
        redirect: &OAuthRedirect,
        code: &str,
    ) -> Result<AccessToken, OAuthProviderError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let resp = self
            .http
            .post(self.config.token_url.clone())
            .form(&params)
            .send()
            .await
            .map_err(transport)?;

        let token: TokenResponse = ensure_success(resp)
            .await?
            .json()
            .await
            .map_err(|e| OAuthProviderError::Decode(e.to_string()))?;

        debug!("Facebook access token obtained");

        Ok(AccessToken::new(token.access_token))
    }

    async fn fetch_profile(
        &self,
        token: &AccessToken,
    ) -> Result<ProviderProfile, OAuthProviderError> {
        let resp = self
            .http
            .get(self.config.profile_url.clone())
            .query(&[("fields", PROFILE_FIELDS), ("access_token", token.secret())])
            .send()
            .await
            .map_err(transport)?;

        let profile: FacebookProfile = ensure_success(resp)
            .await?
            .json()
            .await
            .map_err(|e| OAuthProviderError::Decode(e.to_string()))?;

        Ok(profile.into())
    }
}
