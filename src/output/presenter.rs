use std::io::{self, Write};

use super::config::OutputConfig;
use super::types::Envelope;

/// Writes envelopes to stdout as a single JSON document per line
/// (or indented when `PRUNER_OUTPUT_PRETTY` is set).
pub struct Emitter {
    pretty: bool,
}

impl Emitter {
    pub fn new(cfg: OutputConfig) -> Self {
        Emitter { pretty: cfg.pretty }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout().lock();
        self.write_to(env, &mut out)?;
        out.flush()
    }

    fn write_to(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_output_is_one_line() {
        let env = Envelope::result("prune", &json!({"deleted": 2}), None).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        Emitter::new(OutputConfig { pretty: false }).write_to(&env, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s.lines().count(), 1);
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn pretty_output_spans_lines() {
        let env = Envelope::plan("prune", &json!({"items": []}), None).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        Emitter::new(OutputConfig { pretty: true }).write_to(&env, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.lines().count() > 1);
        let parsed: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(parsed["op"], "prune");
    }
}
