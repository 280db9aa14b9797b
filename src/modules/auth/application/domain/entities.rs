use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Access level carried into the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Registered,
    Admin,
}

impl Privilege {
    pub fn level(self) -> i16 {
        match self {
            Privilege::Registered => 1,
            Privilege::Admin => 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown privilege level: {0}")]
pub struct UnknownPrivilege(pub i16);

impl TryFrom<i16> for Privilege {
    type Error = UnknownPrivilege;

    fn try_from(level: i16) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Privilege::Registered),
            9 => Ok(Privilege::Admin),
            other => Err(UnknownPrivilege(other)),
        }
    }
}

/// Local user account. Created on first OAuth login.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub privilege: Privilege,
    pub registration_date: DateTime<Utc>,
    pub active: bool,
}
