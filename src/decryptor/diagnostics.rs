//! src/decryptor/diagnostics.rs
//! Per-call diagnostic sinks

use crate::decryptor::strategy::Strategy;
use crate::error::AttemptFailure;
use crate::sniff::FormatTag;

/// Receives the orchestrator's progress for a single call.
///
/// Passed in per call; the decryptor itself holds no debug state.
pub trait DiagnosticSink {
    fn attempt_failed(&mut self, failure: &AttemptFailure) {
        let _ = failure;
    }

    fn attempt_succeeded(&mut self, strategy: Strategy, format: FormatTag) {
        let _ = (strategy, format);
    }
}

/// Discards everything.
impl DiagnosticSink for () {}

/// Collects failures in the order they happened.
impl DiagnosticSink for Vec<AttemptFailure> {
    fn attempt_failed(&mut self, failure: &AttemptFailure) {
        self.push(*failure);
    }
}

/// Forwards progress to `tracing` at debug level. Never logs key material or plaintext.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn attempt_failed(&mut self, failure: &AttemptFailure) {
        tracing::debug!(
            strategy = %failure.strategy,
            reason = %failure.reason,
            "strategy rejected"
        );
    }

    fn attempt_succeeded(&mut self, strategy: Strategy, format: FormatTag) {
        tracing::debug!(%strategy, %format, "strategy accepted");
    }
}
