use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::Instrument;

use crate::output::types::Meta;
use crate::telemetry::{self};
use crate::telemetry::ops::prune::Phase as PrunePhase;
use crate::wp::{Credentials, WpApi};

mod error;
mod runner;
mod slug;
mod status;
pub mod types;
mod urls;

pub use error::PruneError;
pub use runner::{PostPruner, PruneOptions};
use runner::validate;
pub use status::{Outcome, StatusLine};
use urls::UrlList;

/// pruner prune [URL]... (plan-only by default; use --apply to delete)
#[derive(Args, Debug)]
pub struct PruneCmd {
    /// Permalinks of the posts to delete
    pub urls: Vec<String>,
    /// Newline-separated list of permalinks; `-` reads stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Drop the entry at this 0-based position before running (repeatable)
    #[arg(long = "skip", value_name = "INDEX")]
    pub skip: Vec<usize>,
    /// Delete permanently instead of moving to the trash
    #[arg(long, default_value_t = false)]
    pub force: bool,
    /// Execute the deletions; without it only the plan is printed
    #[arg(long, default_value_t = false)]
    pub apply: bool,
}

pub async fn run<A: WpApi>(api: A, creds: &Credentials, args: PruneCmd) -> Result<()> {
    let log = telemetry::prune();
    let root = log.root_span_kv([
        ("mode", if args.apply { "apply".to_string() } else { "plan".to_string() }),
        ("site", creds.site_url.clone()),
        ("force", args.force.to_string()),
        ("file", format!("{:?}", args.file)),
    ]);
    execute(api, creds, args).instrument(root).await
}

async fn execute<A: WpApi>(api: A, creds: &Credentials, args: PruneCmd) -> Result<()> {
    let log = telemetry::prune();
    let t0 = Instant::now();
    validate(creds)?;
    let list = build_list(&args)?;
    if list.is_empty() {
        log.info("ℹ️  No URLs queued; only the credentials will be checked.");
    }

    let pruner = PostPruner::new(api);
    let opts = PruneOptions { force: args.force };

    if !args.apply {
        let plan = pruner.plan_all(creds, list.as_slice()).instrument(log.span(&PrunePhase::Plan)).await?;
        let would_delete = plan.iter().filter(|p| p.post_id.is_some()).count();
        log.info(format!(
            "📝 Prune plan — urls={} would_delete={} force={}",
            list.len(), would_delete, args.force
        ));
        if telemetry::config::json_mode() {
            let plan = types::PrunePlan {
                site: creds.site_url.clone(),
                force: args.force,
                urls: list.len(),
                would_delete,
                items: plan,
            };
            log.plan(&plan, Some(run_meta(t0, list.len())))?;
        } else {
            for line in &plan { println!("{line}"); }
            log.info("   Use --apply to execute.");
        }
        return Ok(());
    }

    let status = pruner.delete_all(creds, list.as_slice(), opts).await?;
    let totals = types::PruneTotals {
        deleted: status.deleted(),
        not_found: status.not_found(),
        failed: status.failed(),
    };
    log.totals(totals.deleted, totals.not_found, totals.failed);

    if telemetry::config::json_mode() {
        let result = types::PruneResult { site: creds.site_url.clone(), force: args.force, totals, lines: status };
        log.result(&result, Some(run_meta(t0, list.len())))?;
    } else {
        for line in status.lines() { println!("{line}"); }
    }
    Ok(())
}

/// Positional URLs first, then the batch file, then `--skip` removals.
fn build_list(args: &PruneCmd) -> Result<UrlList> {
    let mut list = UrlList::new();
    for url in &args.urls {
        list.push(url);
    }
    if let Some(path) = &args.file {
        let text = read_batch(path)?;
        list.push_batch(&text);
    }
    if !args.skip.is_empty() {
        let removed = list.remove_many(&args.skip).context("--skip")?;
        for url in removed {
            telemetry::prune().info(format!("↩️ skip {}", url));
        }
    }
    Ok(list)
}

fn read_batch(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("read URL list from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read URL list from {}", path.display()))
}

fn run_meta(t0: Instant, urls: usize) -> Meta {
    Meta { duration_ms: Some(t0.elapsed().as_millis()), urls: Some(urls) }
}
