use anyhow::Result;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{info, debug, warn, Span};

use super::emit;
use crate::output::types::Meta;
use super::ops::prune::Prune;
use crate::prune::{Outcome, StatusLine};

pub trait PhaseSpan {
    fn name(&self) -> &'static str;
    fn span(&self) -> Span;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseSpan;
    fn root_span() -> Span;
}

pub struct LogCtx<O: OpMarker> {
    json: bool,
    _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    pub(crate) fn new(json: bool) -> Self { LogCtx { json, _marker: PhantomData } }

    fn op_name(&self) -> &'static str { O::NAME }

    pub fn root_span_kv<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = O::root_span();
        let details = kv_to_string(fields);
        if details.is_empty() {
            info!(op = %self.op_name(), "start");
        } else {
            info!(op = %self.op_name(), details = %details, "start");
        }
        span
    }

    pub fn span(&self, ph: &O::Phase) -> Span { ph.span() }

    pub fn span_kv<'a, T>(&self, ph: &O::Phase, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.span(ph);
        let details = kv_to_string(fields);
        if !details.is_empty() {
            debug!(op = %self.op_name(), phase = ph.name(), details = %details, "span_start");
        }
        span
    }

    pub fn info(&self, msg: impl AsRef<str>) { if self.json { info!(op = %self.op_name(), "{}", msg.as_ref()); } else { info!("{}", msg.as_ref()); } }

    pub fn warn_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        if self.json { let details = kv_to_string(kv); warn!(op = %self.op_name(), details = %details, "{}", msg); }
        else { warn!("{}", msg); }
    }

    pub fn plan<T: Serialize>(&self, plan: &T, meta: Option<Meta>) -> Result<()> { emit::print_plan(self.op_name(), plan, meta) }
    pub fn result<T: Serialize>(&self, result: &T, meta: Option<Meta>) -> Result<()> { emit::print_result(self.op_name(), result, meta) }
    pub fn check<T: Serialize>(&self, result: &T, meta: Option<Meta>) -> Result<()> { emit::print_check(self.op_name(), result, meta) }
}

// Prune-specific helpers
impl LogCtx<Prune> {
    pub fn item(&self, line: &StatusLine) {
        match &line.outcome {
            Outcome::Deleted { post_id } => {
                if self.json { info!(op = %self.op_name(), url = %line.url, post_id, "deleted"); }
                else { info!("🗑️  deleted post {} ({})", post_id, line.url); }
            }
            Outcome::NotFound => {
                if self.json { info!(op = %self.op_name(), url = %line.url, "not_found"); }
                else { info!("↩️ not found: {}", line.url); }
            }
            Outcome::Failed { message } => {
                if self.json { warn!(op = %self.op_name(), url = %line.url, error = %message, "failed"); }
                else { warn!("⚠️  failed: {} — {}", line.url, message); }
            }
        }
    }

    pub fn totals(&self, deleted: usize, not_found: usize, failed: usize) {
        if self.json { info!(op = %self.op_name(), deleted, not_found, failed, "prune_totals"); }
        else { info!("📊 Prune totals — deleted={} not_found={} failed={}", deleted, not_found, failed); }
    }
}

fn kv_to_string<'a, T>(kv: T) -> String
where
    T: IntoIterator<Item = (&'a str, String)>,
{
    let mut parts: Vec<String> = Vec::new();
    for (k, v) in kv { parts.push(format!("{}={}", k, v)); }
    parts.join(" ")
}
