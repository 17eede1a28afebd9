//! Submit sink abstraction for accepted signups

use super::schema::AcceptedSignup;
use anyhow::Result;

/// Receives every accepted signup, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait SubmitSink {
    /// Called once per accepted submit with the normalized value
    fn on_accepted(&mut self, signup: &AcceptedSignup) -> Result<()>;
}

/// Sink that writes accepted signups to the log
#[derive(Debug, Default)]
pub struct LogSubmitSink;

impl SubmitSink for LogSubmitSink {
    fn on_accepted(&mut self, signup: &AcceptedSignup) -> Result<()> {
        let json = serde_json::to_string(signup)?;
        tracing::info!(techs = signup.techs.len(), "Signup accepted: {json}");
        Ok(())
    }
}

/// Result of a single submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(AcceptedSignup),
    /// Accepted, but the sink failed with the given message
    Unrecorded { signup: AcceptedSignup, error: String },
    /// Number of errors found
    Rejected(usize),
}

impl SubmitOutcome {
    /// The accepted value, whether or not the sink recorded it
    pub fn accepted(&self) -> Option<&AcceptedSignup> {
        match self {
            SubmitOutcome::Accepted(signup) | SubmitOutcome::Unrecorded { signup, .. } => {
                Some(signup)
            }
            SubmitOutcome::Rejected(_) => None,
        }
    }
}
