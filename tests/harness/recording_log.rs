use std::sync::{Arc, Mutex};

use querylog::{Field, StructuredLog};
use tracing::Span;

/// One captured emission, with field values rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub level: &'static str,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
    /// Keys whose value was passed as an error rather than text.
    pub error_keys: Vec<&'static str>,
}

impl Emission {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Thread-safe emission collector for logger assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingLog {
    emissions: Arc<Mutex<Vec<Emission>>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.lock().expect("lock emissions").clone()
    }

    pub fn len(&self) -> usize {
        self.emissions.lock().expect("lock emissions").len()
    }

    pub fn levels(&self) -> Vec<&'static str> {
        self.emissions().iter().map(|e| e.level).collect()
    }

    fn record(&self, level: &'static str, msg: &str, fields: &[Field<'_>]) {
        let emission = Emission {
            level,
            message: msg.to_string(),
            fields: fields
                .iter()
                .map(|f| (f.key, f.value.to_string()))
                .collect(),
            error_keys: fields
                .iter()
                .filter(|f| f.value.as_error().is_some())
                .map(|f| f.key)
                .collect(),
        };
        self.emissions
            .lock()
            .expect("lock emissions")
            .push(emission);
    }
}

impl StructuredLog for RecordingLog {
    fn debug(&self, _ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        self.record("debug", msg, fields);
    }

    fn info(&self, _ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        self.record("info", msg, fields);
    }

    fn warn(&self, _ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        self.record("warn", msg, fields);
    }

    fn error(&self, _ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        self.record("error", msg, fields);
    }
}
