use dnscheck_application::ports::FailureReporter;

/// Reporter that surfaces swallowed failures on the log.
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
