pub mod oauth_provider_client;
pub mod oauth_user_repository;

pub use oauth_provider_client::{OAuthProviderClient, OAuthProviderError};
pub use oauth_user_repository::{OAuthUserRepository, OAuthUserRepositoryError};
