use async_trait::async_trait;

use crate::oauth::application::domain::entities::{
    AccessToken, OAuthProvider, OAuthRedirect, ProviderProfile,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OAuthProviderError {
    #[error("Request to identity provider failed: {0}")]
    Transport(String),

    #[error("Identity provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected identity provider response: {0}")]
    Decode(String),
}

/// Authorization-code client for one identity provider.
#[async_trait]
pub trait OAuthProviderClient: Send + Sync {
    fn provider(&self) -> OAuthProvider;

    /// URL of the provider's consent page.
    fn authorization_url(&self, redirect: &OAuthRedirect, state: &str) -> String;

    /// Trades an authorization code for an access token. `redirect` must be the
    /// one the consent page was opened with.
    async fn exchange_code(
        &self,
        redirect: &OAuthRedirect,
        code: &str,
    ) -> Result<AccessToken, OAuthProviderError>;

    async fn fetch_profile(&self, token: &AccessToken)
        -> Result<ProviderProfile, OAuthProviderError>;
}
