pub mod oauth_accounts;
