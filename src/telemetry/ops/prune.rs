use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Prune;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Plan, Authenticate, Resolve, Delete }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Plan => "plan",
        Phase::Authenticate => "authenticate",
        Phase::Resolve => "resolve",
        Phase::Delete => "delete",
    }}
    fn span(&self) -> Span { match self {
        Phase::Plan => info_span!("plan"),
        Phase::Authenticate => info_span!("authenticate"),
        Phase::Resolve => info_span!("resolve"),
        Phase::Delete => info_span!("delete"),
    }}
}

impl OpMarker for Prune {
    const NAME: &'static str = "prune";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("prune") }
}
