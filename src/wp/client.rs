use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::warn;

use super::types::{PostRef, TokenRequest, TokenResponse};
use super::{AuthSession, AuthToken, Credentials, WpApi, WpError, POSTS_PATH, TOKEN_PATH};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("wp-pruner/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct WpClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for WpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl WpClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `WP_TIMEOUT_SECS` must be a positive number of seconds; anything else
    /// keeps the default.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(timeout) = lookup("WP_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(0) => warn!("WP_TIMEOUT_SECS=0 ignored; using {}s", DEFAULT_TIMEOUT_SECS),
                Ok(secs) => cfg.timeout = Duration::from_secs(secs),
                Err(_) => warn!("WP_TIMEOUT_SECS={:?} is not a number; using {}s", timeout, DEFAULT_TIMEOUT_SECS),
            }
        }
        cfg
    }
}

#[derive(Clone)]
pub struct WpClient {
    http: HttpClient,
}

impl WpClient {
    pub fn new(cfg: WpClientConfig) -> Result<Self, WpError> {
        let http = HttpClient::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent)
            .build()
            .map_err(WpError::from_reqwest)?;
        Ok(Self { http })
    }
}

fn endpoint(site: &str, path: &str) -> String {
    format!("{}{}", site.trim_end_matches('/'), path)
}

#[async_trait]
impl WpApi for WpClient {
    async fn authenticate(&self, creds: &Credentials) -> Result<AuthSession, WpError> {
        let body = TokenRequest { username: &creds.username, password: &creds.password };
        let response = self
            .http
            .post(endpoint(&creds.site_url, TOKEN_PATH))
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(WpError::from_reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(WpError::from_reqwest)?;

        // the JWT plugin answers 200 on success; 403 with a JSON error otherwise
        if status != StatusCode::OK {
            return Err(WpError::from_response(status, &bytes));
        }

        let parsed: TokenResponse = serde_json::from_slice(&bytes).map_err(WpError::Decode)?;
        let token = parsed
            .token
            .filter(|t| !t.is_empty())
            .ok_or(WpError::MissingToken)?;

        Ok(AuthSession {
            site: creds.site_url.trim_end_matches('/').to_string(),
            token: AuthToken::new(token),
            display_name: parsed.user_display_name,
        })
    }

    async fn find_post_id(&self, session: &AuthSession, slug: &str) -> Result<Option<u64>, WpError> {
        let response = self
            .http
            .get(endpoint(&session.site, POSTS_PATH))
            .bearer_auth(session.token.expose())
            .query(&[("slug", slug)])
            .send()
            .await
            .map_err(WpError::from_reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(WpError::from_reqwest)?;
        if !status.is_success() {
            return Err(WpError::from_response(status, &bytes));
        }

        let posts: Vec<PostRef> = serde_json::from_slice(&bytes).map_err(WpError::Decode)?;
        Ok(posts.first().map(|p| p.id))
    }

    async fn delete_post(&self, session: &AuthSession, post_id: u64, force: bool) -> Result<(), WpError> {
        let url = format!("{}/{}", endpoint(&session.site, POSTS_PATH), post_id);
        let mut request = self.http.delete(url).bearer_auth(session.token.expose());
        if force {
            request = request.query(&[("force", "true")]);
        }
        let response = request.send().await.map_err(WpError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.map_err(WpError::from_reqwest)?;
            return Err(WpError::from_response(status, &bytes));
        }
        Ok(())
    }
}
