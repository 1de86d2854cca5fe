use std::env;

use clap::Args;

use crate::wp::Credentials;

/// Site credentials shared by every subcommand. Each flag falls back to its
/// environment variable (a `.env` file is loaded first).
#[derive(Args, Debug, Default)]
pub struct SiteArgs {
    /// Base URL of the WordPress site, e.g. https://blog.example.com [env: WP_SITE_URL]
    #[arg(global = true, long = "site", value_name = "URL")]
    pub site_url: Option<String>,
    /// [env: WP_USERNAME]
    #[arg(global = true, long)]
    pub username: Option<String>,
    /// Prefer WP_PASSWORD over the flag so it stays out of shell history
    #[arg(global = true, long)]
    pub password: Option<String>,
}

impl SiteArgs {
    /// Merge flags with the environment. Missing values come back empty and
    /// are rejected later, before any request is made.
    pub fn resolve(self) -> Credentials {
        self.resolve_with(|key| env::var(key).ok())
    }

    fn resolve_with(self, lookup: impl Fn(&str) -> Option<String>) -> Credentials {
        let pick = |flag: Option<String>, key: &str| {
            flag.filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(key))
                .unwrap_or_default()
        };
        Credentials::new(
            pick(self.site_url, "WP_SITE_URL").trim().trim_end_matches('/'),
            pick(self.username, "WP_USERNAME").trim(),
            pick(self.password, "WP_PASSWORD"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn flags_win_over_environment() {
        let args = SiteArgs {
            site_url: Some("https://flag.test/".into()),
            username: Some("flag-user".into()),
            password: None,
        };
        let creds = args.resolve_with(env_of(&[
            ("WP_SITE_URL", "https://env.test"),
            ("WP_USERNAME", "env-user"),
            ("WP_PASSWORD", "env-pw"),
        ]));
        assert_eq!(creds.site_url, "https://flag.test");
        assert_eq!(creds.username, "flag-user");
        assert_eq!(creds.password, "env-pw");
    }

    #[test]
    fn blank_values_stay_missing() {
        let args = SiteArgs { site_url: Some("  ".into()), ..SiteArgs::default() };
        let creds = args.resolve_with(env_of(&[]));
        assert_eq!(creds.missing_fields(), vec!["site_url", "username", "password"]);
    }
}
