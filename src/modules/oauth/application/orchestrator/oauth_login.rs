use async_trait::async_trait;
use reqwest::Url;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::oauth::application::domain::entities::{
    OAuthAccount, OAuthCallback, OAuthProvider, OAuthRedirect,
};
use crate::oauth::application::ports::incoming::use_cases::{OAuthLoginError, OAuthLoginUseCase};
use crate::oauth::application::ports::outgoing::{OAuthProviderClient, OAuthUserRepository};

// ============================================================================
// Flow Settings
// ============================================================================

#[derive(Clone)]
pub struct OAuthFlowSettings {
    /// Anti-forgery value sent to the provider and expected back.
    pub state_token: String,
    /// This service's callback endpoint, registered with the provider.
    pub callback_url: Url,
    /// Base for relative locations and the default destination.
    pub site_url: Url,
    /// Where failed logins are sent to start over.
    pub login_url: String,
}

impl fmt::Debug for OAuthFlowSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthFlowSettings")
            .field("state_token", &"***")
            .field("callback_url", &self.callback_url.as_str())
            .field("site_url", &self.site_url.as_str())
            .field("login_url", &self.login_url)
            .finish()
    }
}

// ============================================================================
// OAuth Login Orchestrator
// ============================================================================

/// Drives the authorization-code login for one provider: code exchange,
/// profile fetch, local user reconciliation and session token issuance.
pub struct OAuthLoginOrchestrator<C, R>
where
    C: OAuthProviderClient,
    R: OAuthUserRepository,
{
    client: C,
    repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    settings: OAuthFlowSettings,
}

impl<C, R> OAuthLoginOrchestrator<C, R>
where
    C: OAuthProviderClient,
    R: OAuthUserRepository,
{
    pub fn new(
        client: C,
        repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        settings: OAuthFlowSettings,
    ) -> Self {
        Self {
            client,
            repository,
            token_provider,
            settings,
        }
    }

    fn location_or_default<'a>(&'a self, location: Option<&'a str>) -> &'a str {
        location
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
            .unwrap_or_else(|| self.settings.site_url.as_str())
    }

    /// Relative locations resolve against the site URL.
    fn resolve_location(&self, location: &str) -> Result<Url, OAuthLoginError> {
        Url::options()
            .base_url(Some(&self.settings.site_url))
            .parse(location)
            .map_err(|e| {
                warn!(location = %location, error = %e, "Rejecting OAuth redirect location");
                OAuthLoginError::InvalidLocation(e.to_string())
            })
    }

    /// Finds the local user for the provider account, creating one on first
    /// login. Known accounts get their stored profile refreshed.
    async fn reconcile(&self, account: &OAuthAccount) -> Result<User, OAuthLoginError> {
        let found = self
            .repository
            .find_user_by_oauth(account.provider, &account.account_id)
            .await
            .map_err(|e| {
                error!(provider = %account.provider, error = %e, "OAuth user lookup failed");
                OAuthLoginError::LookupFailed(e.to_string())
            })?;

        match found {
            Some(user) => {
                if let Err(e) = self.repository.update_oauth_data(account).await {
                    warn!(
                        provider = %account.provider,
                        a_id = %account.account_id,
                        error = %e,
                        "Failed to refresh stored OAuth profile"
                    );
                }
                Ok(user)
            }
            None => {
                info!(
                    provider = %account.provider,
                    a_id = %account.account_id,
                    "Registering user from OAuth profile"
                );
                self.repository
                    .insert_user_by_oauth(account)
                    .await
                    .map_err(|e| {
                        error!(provider = %account.provider, error = %e, "OAuth registration failed");
                        OAuthLoginError::RegistrationFailed(e.to_string())
                    })
            }
        }
    }
}

#[async_trait]
impl<C, R> OAuthLoginUseCase for OAuthLoginOrchestrator<C, R>
where
    C: OAuthProviderClient,
    R: OAuthUserRepository,
{
    fn provider(&self) -> OAuthProvider {
        self.client.provider()
    }

    fn login_url(&self) -> &str {
        &self.settings.login_url
    }

    fn begin(&self, location: Option<&str>) -> String {
        let location = self.location_or_default(location);
        let redirect = OAuthRedirect::for_location(&self.settings.callback_url, location);
        self.client
            .authorization_url(&redirect, &self.settings.state_token)
    }

    async fn complete(&self, callback: OAuthCallback) -> Result<String, OAuthLoginError> {
        let provider = self.client.provider();

        // Step 1: Reject forged callbacks before touching the provider
        if callback.state.as_deref() != Some(self.settings.state_token.as_str()) {
            warn!(provider = %provider, state = ?callback.state, "Invalid OAuth state");
            return Err(OAuthLoginError::StateMismatch);
        }

        // Step 2: Rebuild the redirect the consent page was opened with
        let location = self.location_or_default(callback.location.as_deref());
        let mut destination = self.resolve_location(location)?;
        let redirect = OAuthRedirect::for_location(&self.settings.callback_url, location);

        // Step 3: Code exchange and profile fetch
        let code = callback
            .code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| {
                warn!(provider = %provider, "OAuth callback without authorization code");
                OAuthLoginError::TokenExchangeFailed("missing authorization code".to_string())
            })?;

        let access_token = self
            .client
            .exchange_code(&redirect, code)
            .await
            .map_err(|e| {
                warn!(provider = %provider, error = %e, "OAuth code exchange failed");
                OAuthLoginError::TokenExchangeFailed(e.to_string())
            })?;

        let profile = self.client.fetch_profile(&access_token).await.map_err(|e| {
            warn!(provider = %provider, error = %e, "Fetching OAuth profile failed");
            OAuthLoginError::ProfileFetchFailed(e.to_string())
        })?;

        let account = OAuthAccount::from_profile(provider, profile).ok_or_else(|| {
            warn!(provider = %provider, "OAuth profile has no account id");
            OAuthLoginError::MissingAccountId
        })?;

        info!(provider = %provider, a_id = %account.account_id, "OAuth login");

        // Step 4: Local user and session token
        let user = self.reconcile(&account).await?;

        let token = self
            .token_provider
            .generate_session_token(&user)
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Session token generation failed");
                OAuthLoginError::TokenIssuanceFailed(e.to_string())
            })?;

        destination.query_pairs_mut().append_pair("token", &token);

        Ok(destination.to_string())
    }
}
