pub mod auth;
pub mod prune;
