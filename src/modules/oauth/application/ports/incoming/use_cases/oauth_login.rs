use async_trait::async_trait;

use crate::oauth::application::domain::entities::{OAuthCallback, OAuthProvider};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OAuthLoginError {
    #[error("OAuth state does not match")]
    StateMismatch,

    #[error("Invalid redirect location: {0}")]
    InvalidLocation(String),

    #[error("Authorization code exchange failed: {0}")]
    TokenExchangeFailed(String),

    #[error("Fetching provider profile failed: {0}")]
    ProfileFetchFailed(String),

    #[error("Provider profile has no account id")]
    MissingAccountId,

    #[error("User lookup failed: {0}")]
    LookupFailed(String),

    #[error("User registration failed: {0}")]
    RegistrationFailed(String),

    #[error("Session token issuance failed: {0}")]
    TokenIssuanceFailed(String),
}

impl OAuthLoginError {
    /// Failures the browser recovers from by starting the login again.
    pub fn restarts_login(&self) -> bool {
        matches!(
            self,
            OAuthLoginError::StateMismatch
                | OAuthLoginError::TokenExchangeFailed(_)
                | OAuthLoginError::ProfileFetchFailed(_)
        )
    }
}

#[async_trait]
pub trait OAuthLoginUseCase: Send + Sync {
    fn provider(&self) -> OAuthProvider;

    /// Where the browser goes when a login has to be restarted.
    fn login_url(&self) -> &str;

    /// Consent page URL for a login that should end at `location`.
    fn begin(&self, location: Option<&str>) -> String;

    /// Completes the callback and returns the final redirect URL carrying the
    /// session token.
    async fn complete(&self, callback: OAuthCallback) -> Result<String, OAuthLoginError>;
}
