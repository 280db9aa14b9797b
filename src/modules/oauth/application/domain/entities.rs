use reqwest::Url;
use std::fmt;

/// Identity providers a local account can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Facebook,
}

impl OAuthProvider {
    /// Tag stored in `oauth_accounts.type` and echoed in error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            OAuthProvider::Facebook => "facebook",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OAuthProvider::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

impl Gender {
    pub fn from_provider(raw: Option<&str>) -> Self {
        match raw.map(|g| g.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") => Gender::Unknown,
            Some("male") => Gender::Male,
            Some("female") => Gender::Female,
            Some(_) => Gender::Other,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
            Gender::Unknown => "U",
        }
    }
}

/// Profile as returned by a provider's user-info endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderProfile {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub picture_url: Option<String>,
}

/// Provider account mapped from one login's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthAccount {
    pub provider: OAuthProvider,
    pub account_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Gender,
    pub picture: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl OAuthAccount {
    /// Returns `None` when the profile carries no account id.
    pub fn from_profile(provider: OAuthProvider, profile: ProviderProfile) -> Option<Self> {
        let account_id = present(profile.id)?;

        Some(Self {
            provider,
            account_id,
            gender: Gender::from_provider(profile.gender.as_deref()),
            email: present(profile.email),
            name: present(profile.name),
            first_name: present(profile.first_name),
            last_name: present(profile.last_name),
            picture: present(profile.picture_url),
        })
    }
}

/// Provider access token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Redirect URI registered for one authorization round trip: the callback
/// URL carrying the post-login `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRedirect {
    pub redirect_uri: String,
}

impl OAuthRedirect {
    pub fn for_location(callback_url: &Url, location: &str) -> Self {
        let mut url = callback_url.clone();
        url.query_pairs_mut().append_pair("location", location);
        Self {
            redirect_uri: url.to_string(),
        }
    }
}

/// Query parameters the provider sends back to the callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthCallback {
    pub state: Option<String>,
    pub code: Option<String>,
    pub location: Option<String>,
}
