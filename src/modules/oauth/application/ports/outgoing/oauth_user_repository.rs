use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::User;
use crate::oauth::application::domain::entities::{OAuthAccount, OAuthProvider};

#[async_trait]
pub trait OAuthUserRepository: Send + Sync {
    /// Local user linked to the provider account, if any.
    async fn find_user_by_oauth(
        &self,
        provider: OAuthProvider,
        account_id: &str,
    ) -> Result<Option<User>, OAuthUserRepositoryError>;

    /// Creates the local user and its provider account atomically.
    async fn insert_user_by_oauth(
        &self,
        account: &OAuthAccount,
    ) -> Result<User, OAuthUserRepositoryError>;

    /// Overwrites the stored profile fields of an existing provider account.
    async fn update_oauth_data(&self, account: &OAuthAccount)
        -> Result<(), OAuthUserRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthUserRepositoryError {
    AccountNotFound,
    CorruptRecord(String),
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for OAuthUserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OAuthUserRepositoryError::AccountNotFound => write!(f, "OAuth account not found"),
            OAuthUserRepositoryError::CorruptRecord(msg) => write!(f, "Corrupt user record: {}", msg),
            OAuthUserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for OAuthUserRepositoryError {}
