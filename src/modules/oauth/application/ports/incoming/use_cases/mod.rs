pub mod oauth_login;

pub use oauth_login::{OAuthLoginError, OAuthLoginUseCase};
