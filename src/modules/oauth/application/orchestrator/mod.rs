mod oauth_login;

pub use oauth_login::{OAuthFlowSettings, OAuthLoginOrchestrator};
