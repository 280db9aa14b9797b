pub mod facebook_graph_client;
mod oauth_user_repository_postgres;
pub mod sea_orm_entity;

pub use facebook_graph_client::FacebookGraphClient;
pub use oauth_user_repository_postgres::OAuthUserRepositoryPostgres;
