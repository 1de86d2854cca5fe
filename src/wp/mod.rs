//! WordPress REST API access: the `WpApi` seam, the reqwest client behind it,
//! and the wire types for the three endpoints the pruner touches.

use std::sync::Arc;

use async_trait::async_trait;

mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod types;

pub use client::{WpClient, WpClientConfig};
pub use error::WpError;
pub use types::{AuthSession, AuthToken, Credentials};

pub const TOKEN_PATH: &str = "/wp-json/jwt-auth/v1/token";
pub const POSTS_PATH: &str = "/wp-json/wp/v2/posts";

#[async_trait]
pub trait WpApi: Send + Sync {
    /// Exchange username/password for a bearer token.
    async fn authenticate(&self, creds: &Credentials) -> Result<AuthSession, WpError>;

    /// Look a post up by slug; `None` when the result set is empty.
    async fn find_post_id(&self, session: &AuthSession, slug: &str) -> Result<Option<u64>, WpError>;

    /// Delete a post. `force` skips the trash.
    async fn delete_post(&self, session: &AuthSession, post_id: u64, force: bool) -> Result<(), WpError>;
}

#[async_trait]
impl<T: WpApi + ?Sized> WpApi for Arc<T> {
    async fn authenticate(&self, creds: &Credentials) -> Result<AuthSession, WpError> {
        (**self).authenticate(creds).await
    }

    async fn find_post_id(&self, session: &AuthSession, slug: &str) -> Result<Option<u64>, WpError> {
        (**self).find_post_id(session, slug).await
    }

    async fn delete_post(&self, session: &AuthSession, post_id: u64, force: bool) -> Result<(), WpError> {
        (**self).delete_post(session, post_id, force).await
    }
}
