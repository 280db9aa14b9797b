mod facebook_callback;
mod facebook_login;

pub use facebook_callback::*;
pub use facebook_login::*;
