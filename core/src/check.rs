//! Comparison policies shared by the probes.
//!
//! Every policy classifies a `(subject, observed)` pair into an [`Outcome`].
//! Mismatch messages carry both the expected and the observed value verbatim
//! so the report is actionable without re-querying the control plane.
//! `Prefers` is the one soft policy: a mismatch is a Warn, never a Fail.

use crate::outcome::Outcome;

#[derive(Clone, Debug)]
pub enum Expectation {
    /// Observed value must be present.
    Exists,
    /// Observed value must equal the expected value exactly.
    Equals(String),
    /// Observed value must start with the expected prefix.
    HasPrefix(String),
    /// Observed value must be one of the listed values.
    OneOf(Vec<String>),
    /// Soft match: mismatch or absence yields a warning, not a failure.
    Prefers(String),
}

impl Expectation {
    pub fn evaluate(&self, subject: &str, observed: Option<&str>) -> Outcome {
        match self {
            Expectation::Exists => match observed {
                Some(v) => Outcome::pass(format!("{subject} present ({v})")),
                None => Outcome::fail(format!("{subject} not found")),
            },
            Expectation::Equals(expected) => match observed {
                Some(v) if v == expected => Outcome::pass(format!("{subject} = \"{v}\"")),
                Some(v) => Outcome::fail(format!(
                    "{subject} mismatch: expected \"{expected}\", got \"{v}\""
                )),
                None => Outcome::fail(format!("{subject} not set (expected \"{expected}\")")),
            },
            Expectation::HasPrefix(prefix) => match observed {
                Some(v) if v.starts_with(prefix.as_str()) => {
                    Outcome::pass(format!("{subject} starts with \"{prefix}\""))
                }
                Some(v) => Outcome::fail(format!(
                    "{subject} mismatch: expected prefix \"{prefix}\", got \"{v}\""
                )),
                None => Outcome::fail(format!(
                    "{subject} not set (expected prefix \"{prefix}\")"
                )),
            },
            Expectation::OneOf(allowed) => match observed {
                Some(v) if allowed.iter().any(|a| a == v) => {
                    Outcome::pass(format!("{subject} = \"{v}\""))
                }
                Some(v) => Outcome::fail(format!(
                    "{subject} mismatch: expected one of {allowed:?}, got \"{v}\""
                )),
                None => Outcome::fail(format!("{subject} not set (expected one of {allowed:?})")),
            },
            Expectation::Prefers(preferred) => match observed {
                Some(v) if v == preferred => Outcome::pass(format!("{subject} = \"{v}\"")),
                Some(v) => Outcome::warn(format!(
                    "{subject} is \"{v}\", preferred \"{preferred}\""
                )),
                None => Outcome::warn(format!("{subject} not set, preferred \"{preferred}\"")),
            },
        }
    }
}
