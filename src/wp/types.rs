use std::fmt;

use serde::{Deserialize, Serialize};

/// Site credentials for one session. Never persisted.
#[derive(Clone, Default)]
pub struct Credentials {
    pub site_url: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(site_url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { site_url: site_url.into(), username: username.into(), password: password.into() }
    }

    /// Names of the fields that are empty (after trimming).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.site_url.trim().is_empty() { missing.push("site_url"); }
        if self.username.trim().is_empty() { missing.push("username"); }
        if self.password.is_empty() { missing.push("password"); }
        missing
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("site_url", &self.site_url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Opaque bearer token issued by the JWT plugin.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self { AuthToken(token.into()) }
    pub fn expose(&self) -> &str { &self.0 }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("AuthToken(***)") }
}

/// Result of a successful token exchange, bound to the site it was issued for.
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub site: String,
    pub token: AuthToken,
    pub display_name: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_display_name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct PostRef {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let creds = Credentials::new("https://example.com", "admin", "hunter2");
        let dbg = format!("{creds:?}");
        assert!(dbg.contains("admin"));
        assert!(!dbg.contains("hunter2"));
        assert_eq!(format!("{:?}", AuthToken::new("abc.def")), "AuthToken(***)");
    }

    #[test]
    fn missing_fields_lists_blank_entries() {
        let creds = Credentials::new("  ", "admin", "");
        assert_eq!(creds.missing_fields(), vec!["site_url", "password"]);
        assert!(Credentials::new("https://x.test", "u", "p").missing_fields().is_empty());
    }
}
