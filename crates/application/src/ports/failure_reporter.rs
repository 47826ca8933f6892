/// Sink for swallowed lookup failures.
pub trait FailureReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Default reporter: drops everything.
pub struct NullReporter;

impl FailureReporter for NullReporter {
    fn report(&self, _message: &str) {}
}
