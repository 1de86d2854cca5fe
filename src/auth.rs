use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::Instrument;

use crate::prune::PostPruner;
use crate::telemetry::{self};
use crate::telemetry::ops::auth::Phase as AuthPhase;
use crate::wp::{Credentials, WpApi};

/// pruner auth: exchange the credentials for a token and report, nothing else
#[derive(Args, Debug)]
pub struct AuthCmd {}

#[derive(Serialize)]
struct AuthResult {
    site: String,
    username: String,
    display_name: Option<String>,
    authenticated: bool,
}

pub async fn run<A: WpApi>(api: A, creds: &Credentials, args: AuthCmd) -> Result<()> {
    let log = telemetry::auth();
    let root = log.root_span_kv([("site", creds.site_url.clone()), ("username", creds.username.clone())]);
    check(api, creds, args).instrument(root).await
}

async fn check<A: WpApi>(api: A, creds: &Credentials, _args: AuthCmd) -> Result<()> {
    let log = telemetry::auth();
    let pruner = PostPruner::new(api);
    let session = pruner.authenticate(creds).instrument(log.span(&AuthPhase::Authenticate)).await?;
    let who = session.display_name.clone().unwrap_or_else(|| creds.username.clone());
    log.info(format!("✅ Authenticated as {} on {}", who, session.site));

    if telemetry::config::json_mode() {
        let result = AuthResult {
            site: session.site,
            username: creds.username.clone(),
            display_name: session.display_name,
            authenticated: true,
        };
        log.check(&result, None)?;
    }
    Ok(())
}
