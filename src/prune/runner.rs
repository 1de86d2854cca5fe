use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Instrument;
use url::Url;

use super::error::{ItemError, PruneError};
use super::slug::{permalink_host, slug_from_permalink};
use super::status::{Outcome, PlanLine, StatusLine, StatusLog};
use crate::telemetry::{self};
use crate::telemetry::ops::prune::Phase as PrunePhase;
use crate::wp::{AuthSession, Credentials, WpApi};

#[derive(Clone, Copy, Debug, Default)]
pub struct PruneOptions {
    /// Bypass the trash and delete permanently.
    pub force: bool,
}

/// Turns permalinks into deleted posts on one WordPress site.
///
/// A run authenticates once, then walks the URLs strictly in order: resolve
/// the slug to a post ID, delete it, record one status line. Item failures
/// are recorded and the run moves on; only credential and authentication
/// problems abort it. One run at a time per pruner.
pub struct PostPruner<A: WpApi> {
    api: A,
    running: AtomicBool,
}

struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, PruneError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| PruneError::RunInProgress)?;
        Ok(RunGuard(flag))
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<A: WpApi> PostPruner<A> {
    pub fn new(api: A) -> Self {
        Self { api, running: AtomicBool::new(false) }
    }

    pub async fn authenticate(&self, creds: &Credentials) -> Result<AuthSession, PruneError> {
        validate(creds)?;
        let log = telemetry::prune();
        self.api
            .authenticate(creds)
            .instrument(log.span(&PrunePhase::Authenticate))
            .await
            .map_err(PruneError::Auth)
    }

    pub async fn resolve_post_id(&self, session: &AuthSession, permalink: &str) -> Result<Option<u64>, ItemError> {
        let slug = slug_from_permalink(permalink)?;
        let log = telemetry::prune();
        let id = self
            .api
            .find_post_id(session, &slug)
            .instrument(log.span_kv(&PrunePhase::Resolve, [("url", permalink.to_string()), ("slug", slug.clone())]))
            .await?;
        Ok(id)
    }

    pub async fn delete_post(&self, session: &AuthSession, post_id: u64, opts: PruneOptions) -> Result<(), ItemError> {
        let log = telemetry::prune();
        self.api
            .delete_post(session, post_id, opts.force)
            .instrument(log.span_kv(&PrunePhase::Delete, [("post_id", post_id.to_string()), ("force", opts.force.to_string())]))
            .await?;
        Ok(())
    }

    /// Authenticate, then resolve and delete every URL in order.
    pub async fn delete_all(&self, creds: &Credentials, urls: &[String], opts: PruneOptions) -> Result<StatusLog, PruneError> {
        let _guard = RunGuard::acquire(&self.running)?;
        let log = telemetry::prune();
        let session = self.authenticate(creds).await?;
        let site_host = permalink_host(&session.site);

        let mut status = StatusLog::default();
        for url in urls {
            warn_foreign_host(site_host.as_deref(), url);
            let line = self.prune_one(&session, url, opts).await;
            log.item(&line);
            status.push(line);
        }
        Ok(status)
    }

    /// Same walk as `delete_all` without issuing any DELETE.
    pub async fn plan_all(&self, creds: &Credentials, urls: &[String]) -> Result<Vec<PlanLine>, PruneError> {
        let _guard = RunGuard::acquire(&self.running)?;
        let session = self.authenticate(creds).await?;
        let site_host = permalink_host(&session.site);

        let mut plan = Vec::with_capacity(urls.len());
        for url in urls {
            warn_foreign_host(site_host.as_deref(), url);
            let slug = slug_from_permalink(url).ok();
            let line = match self.resolve_post_id(&session, url).await {
                Ok(post_id) => PlanLine { url: url.clone(), slug, post_id, error: None },
                Err(e) => PlanLine { url: url.clone(), slug, post_id: None, error: Some(e.to_string()) },
            };
            plan.push(line);
        }
        Ok(plan)
    }

    async fn prune_one(&self, session: &AuthSession, url: &str, opts: PruneOptions) -> StatusLine {
        let outcome = match self.resolve_post_id(session, url).await {
            Ok(None) => Outcome::NotFound,
            Ok(Some(post_id)) => match self.delete_post(session, post_id, opts).await {
                Ok(()) => Outcome::Deleted { post_id },
                Err(e) => Outcome::Failed { message: e.to_string() },
            },
            Err(e) => Outcome::Failed { message: e.to_string() },
        };
        StatusLine { url: url.to_string(), outcome }
    }
}

/// Credentials present and a parseable site URL; checked before any input is read.
pub(crate) fn validate(creds: &Credentials) -> Result<(), PruneError> {
    if !creds.missing_fields().is_empty() {
        return Err(PruneError::MissingCredentials);
    }
    let site = creds.site_url.trim();
    Url::parse(site).map_err(|source| PruneError::InvalidSiteUrl { url: site.to_string(), source })?;
    Ok(())
}

fn warn_foreign_host(site_host: Option<&str>, url: &str) {
    let (Some(site), Some(host)) = (site_host, permalink_host(url)) else { return };
    if site != host {
        telemetry::prune().warn_kv(
            &format!("⚠️  permalink host {} differs from site {}", host, site),
            [("url", url.to_string()), ("site", site.to_string())],
        );
    }
}
