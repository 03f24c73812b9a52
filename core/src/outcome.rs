//! Classified probe results.
//!
//! An [`Outcome`] is produced exactly once per probe and never mutated
//! afterward. A [`ProbeOutcome`] carries the outcome plus any observed
//! `(name, value)` pairs the probe contributes to the report.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Pass, message: message.into() }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Warn, message: message.into() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Fail, message: message.into() }
    }

    pub fn is_fail(&self) -> bool {
        self.kind == OutcomeKind::Fail
    }
}

#[derive(Clone, Debug)]
pub struct ProbeOutcome {
    pub outcome: Outcome,
    pub observed: Vec<(String, String)>,
}

impl ProbeOutcome {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome, observed: Vec::new() }
    }

    pub fn observe(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.observed.push((name.into(), value.into()));
        self
    }
}

impl From<Outcome> for ProbeOutcome {
    fn from(outcome: Outcome) -> Self {
        Self::new(outcome)
    }
}
