//! Injectable diagnostics sinks.
//!
//! The scorer and plugin report every decision through a [`DiagnosticsSink`]
//! instead of process-wide debug state, so overlays and telemetry can be
//! attached per fire mode and tests can inspect exactly what happened.

use aimassist_core::events::AimDiagnostic;

/// Receiver for auto-aim diagnostics.
pub trait DiagnosticsSink {
    fn record(&mut self, event: AimDiagnostic);

    /// Lets callers skip building events nobody will see.
    fn enabled(&self) -> bool {
        true
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record(&mut self, _event: AimDiagnostic) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&mut self, event: AimDiagnostic) {
        tracing::debug!(?event, "auto-aim");
    }

    fn enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }
}

/// Records events in order.
impl DiagnosticsSink for Vec<AimDiagnostic> {
    fn record(&mut self, event: AimDiagnostic) {
        self.push(event);
    }
}
