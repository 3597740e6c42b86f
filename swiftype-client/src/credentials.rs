//! Per-client credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-client overrides passed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// API key used instead of the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// A user's access token. Takes precedence over any API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_access_token: Option<String>,
}

impl ClientOptions {
    #[must_use]
    pub fn api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            platform_access_token: None,
        }
    }

    #[must_use]
    pub fn platform_access_token(token: impl Into<String>) -> Self {
        Self {
            api_key: None,
            platform_access_token: Some(token.into()),
        }
    }
}

/// How a request is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth<'a> {
    /// `Authorization: Bearer <token>`
    AccessToken(&'a str),
    /// HTTP basic auth with the key as user name and an empty password.
    ApiKey(&'a str),
    /// No credential available; the server will reject the call.
    None,
}

/// Credentials resolved once at construction and never mutated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    default_api_key: Option<String>,
    options: ClientOptions,
}

impl Credentials {
    pub fn new(default_api_key: Option<String>, options: ClientOptions) -> Self {
        Self {
            default_api_key,
            options,
        }
    }

    /// The instance override if present, else the default key.
    pub fn api_key(&self) -> Option<&str> {
        self.options
            .api_key
            .as_deref()
            .or(self.default_api_key.as_deref())
    }

    pub fn platform_access_token(&self) -> Option<&str> {
        self.options.platform_access_token.as_deref()
    }

    /// Picks the credential for a request: access token first, then API key.
    pub fn auth(&self) -> Auth<'_> {
        if let Some(token) = self.platform_access_token() {
            Auth::AccessToken(token)
        } else if let Some(key) = self.api_key() {
            Auth::ApiKey(key)
        } else {
            Auth::None
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field(
                "platform_access_token",
                &self.platform_access_token().map(|_| "<redacted>"),
            )
            .finish()
    }
}
