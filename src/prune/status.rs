use std::fmt;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Deleted { post_id: u64 },
    NotFound,
    Failed { message: String },
}

/// One processed URL and what happened to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub url: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Deleted { .. } => write!(f, "Successfully deleted post: {}", self.url),
            Outcome::NotFound => write!(f, "Post not found for URL: {}", self.url),
            Outcome::Failed { message } => write!(f, "Error deleting post {}: {}", self.url, message),
        }
    }
}

/// Append-only record of a single run, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusLog {
    lines: Vec<StatusLine>,
}

impl StatusLog {
    pub fn push(&mut self, line: StatusLine) { self.lines.push(line); }
    pub fn lines(&self) -> &[StatusLine] { &self.lines }

    #[cfg(test)]
    pub fn rendered(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }

    pub fn deleted(&self) -> usize { self.count(|o| matches!(o, Outcome::Deleted { .. })) }
    pub fn not_found(&self) -> usize { self.count(|o| matches!(o, Outcome::NotFound)) }
    pub fn failed(&self) -> usize { self.count(|o| matches!(o, Outcome::Failed { .. })) }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.lines.iter().filter(|l| pred(&l.outcome)).count()
    }
}

/// Dry-run view of one URL: what `--apply` would do with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlanLine {
    pub url: String,
    pub slug: Option<String>,
    pub post_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for PlanLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, self.post_id) {
            (Some(err), _) => write!(f, "Error resolving post {}: {}", self.url, err),
            (None, Some(id)) => write!(f, "Would delete post {}: {}", id, self.url),
            (None, None) => write!(f, "Post not found for URL: {}", self.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line(url: &str, outcome: Outcome) -> StatusLine {
        StatusLine { url: url.to_string(), outcome }
    }

    #[test]
    fn lines_render_exact_messages() {
        assert_eq!(
            line("https://site/a/", Outcome::Deleted { post_id: 1 }).to_string(),
            "Successfully deleted post: https://site/a/"
        );
        assert_eq!(
            line("https://site/b/", Outcome::NotFound).to_string(),
            "Post not found for URL: https://site/b/"
        );
        assert_eq!(
            line("https://site/c/", Outcome::Failed { message: "request timed out".into() }).to_string(),
            "Error deleting post https://site/c/: request timed out"
        );
    }

    #[test]
    fn log_serializes_as_flat_array() {
        let mut log = StatusLog::default();
        log.push(line("https://site/a/", Outcome::Deleted { post_id: 1 }));
        log.push(line("https://site/b/", Outcome::NotFound));
        let v = serde_json::to_value(&log).unwrap();
        assert_eq!(
            v,
            json!([
                {"url": "https://site/a/", "outcome": "deleted", "post_id": 1},
                {"url": "https://site/b/", "outcome": "not_found"}
            ])
        );
        assert_eq!((log.deleted(), log.not_found(), log.failed()), (1, 1, 0));
    }

    #[test]
    fn plan_lines_render_by_state() {
        let mut p = PlanLine { url: "https://site/a/".into(), slug: Some("a".into()), post_id: Some(9), error: None };
        assert_eq!(p.to_string(), "Would delete post 9: https://site/a/");
        p.post_id = None;
        assert_eq!(p.to_string(), "Post not found for URL: https://site/a/");
        p.error = Some("boom".into());
        assert_eq!(p.to_string(), "Error resolving post https://site/a/: boom");
    }
}
