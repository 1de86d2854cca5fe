use thiserror::Error;

use super::slug::SlugError;
use crate::wp::WpError;

/// Run-level failures: nothing is deleted when one of these is returned.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Please enter WordPress site URL, username, and password.")]
    MissingCredentials,
    #[error("invalid site URL {url}: {source}")]
    InvalidSiteUrl { url: String, source: url::ParseError },
    #[error("authentication failed: {0}")]
    Auth(#[source] WpError),
    #[error("a deletion run is already in progress")]
    RunInProgress,
}

/// Per-URL failures, recorded in the status log while the batch continues.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error(transparent)]
    Api(#[from] WpError),
}
