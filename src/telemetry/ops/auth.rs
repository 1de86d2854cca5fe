use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Auth;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Authenticate }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Authenticate => "authenticate" } }
    fn span(&self) -> Span { match self { Phase::Authenticate => info_span!("authenticate") } }
}

impl OpMarker for Auth {
    const NAME: &'static str = "auth";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("auth") }
}
