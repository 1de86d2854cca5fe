pub mod config;
pub mod ctx;
pub mod emit;
pub mod ops;

use ctx::LogCtx;

pub fn prune() -> LogCtx<ops::prune::Prune> { LogCtx::new(config::logs_are_json()) }
pub fn auth() -> LogCtx<ops::auth::Auth> { LogCtx::new(config::logs_are_json()) }
