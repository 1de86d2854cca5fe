use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{AuthSession, AuthToken, Credentials, WpApi, WpError};

/// One recorded call against the mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Authenticate { username: String },
    FindPost { slug: String },
    DeletePost { post_id: u64, force: bool },
}

/// In-memory `WpApi` for exercising the pruner without a server.
///
/// Unconfigured lookups answer "not found", unconfigured deletes succeed and
/// authentication succeeds with a fixed token unless `fail_auth` was called.
#[derive(Debug, Default)]
pub struct MockClient {
    auth_error: Mutex<Option<WpError>>,
    lookups: Mutex<HashMap<String, Result<Option<u64>, WpError>>>,
    deletes: Mutex<HashMap<u64, WpError>>,
    calls: Mutex<Vec<Call>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_auth(&self, err: WpError) {
        *self.auth_error.lock().unwrap() = Some(err);
    }

    pub fn post(&self, slug: &str, post_id: u64) {
        self.lookups.lock().unwrap().insert(slug.to_string(), Ok(Some(post_id)));
    }

    pub fn fail_lookup(&self, slug: &str, err: WpError) {
        self.lookups.lock().unwrap().insert(slug.to_string(), Err(err));
    }

    pub fn fail_delete(&self, post_id: u64, err: WpError) {
        self.deletes.lock().unwrap().insert(post_id, err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::DeletePost { post_id, .. } => Some(post_id),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl WpApi for MockClient {
    async fn authenticate(&self, creds: &Credentials) -> Result<AuthSession, WpError> {
        self.calls.lock().unwrap().push(Call::Authenticate { username: creds.username.clone() });
        if let Some(err) = self.auth_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(AuthSession {
            site: creds.site_url.clone(),
            token: AuthToken::new("mock-token"),
            display_name: Some(creds.username.clone()),
        })
    }

    async fn find_post_id(&self, _session: &AuthSession, slug: &str) -> Result<Option<u64>, WpError> {
        self.calls.lock().unwrap().push(Call::FindPost { slug: slug.to_string() });
        // a configured slug answers once; repeats fall back to "not found"
        self.lookups.lock().unwrap().remove(slug).unwrap_or(Ok(None))
    }

    async fn delete_post(&self, _session: &AuthSession, post_id: u64, force: bool) -> Result<(), WpError> {
        self.calls.lock().unwrap().push(Call::DeletePost { post_id, force });
        match self.deletes.lock().unwrap().remove(&post_id) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Shorthand for a WordPress-style API failure.
pub fn api_error(status: u16, message: &str) -> WpError {
    WpError::Api {
        status: reqwest::StatusCode::from_u16(status).unwrap(),
        code: None,
        message: message.to_string(),
    }
}
