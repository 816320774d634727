//! Client configuration: target environment and API credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target API environment.
///
/// The sandbox is the default: publishers integrate against it first and
/// switch to production at go-live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live API at `https://api.igivefirst.com`.
    Production,
    /// Integration API at `https://api.igivefirst.mobi`.
    #[default]
    Sandbox,
}

impl Environment {
    /// Root URL for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.igivefirst.com",
            Environment::Sandbox => "https://api.igivefirst.mobi",
        }
    }
}

/// API credentials for a publisher account.
///
/// The API key is public and travels in cleartext inside the authorization
/// header; the secret only ever feeds the HMAC and is redacted from `Debug`
/// output.  Both are immutable after construction and safe to share across
/// concurrent requests.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret: Box<[u8]>,
}

impl Credentials {
    /// Create credentials from an API key and signing secret.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<[u8]>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.as_ref().into(),
        }
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Raw secret bytes for HMAC signing.  Never log the return value.
    pub fn secret_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
