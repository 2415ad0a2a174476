use crate::error::{ErrorClass, MappingError};
use std::sync::{Mutex, MutexGuard, PoisonError};

///
/// DiagnosticSink
///

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: MappingError);
}

///
/// TracingSink
/// Default sink: one `warn` event per diagnostic.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: MappingError) {
        tracing::warn!(
            row = diagnostic.row,
            field = diagnostic.field.unwrap_or_default(),
            class = %diagnostic.class,
            "{}",
            diagnostic.message
        );
    }
}

///
/// CollectingSink
///
/// Keeps every diagnostic in memory so callers can inspect what degraded
/// during a bulk read or write.
///

#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<MappingError>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MappingError>> {
        // a panicking reporter cannot leave the vec half-written
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of everything reported so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MappingError> {
        self.lock().clone()
    }

    /// Drain everything reported so far.
    #[must_use]
    pub fn take(&self) -> Vec<MappingError> {
        std::mem::take(&mut *self.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of diagnostics of one class.
    #[must_use]
    pub fn count(&self, class: ErrorClass) -> usize {
        self.lock().iter().filter(|d| d.class == class).count()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: MappingError) {
        self.lock().push(diagnostic);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_counts_by_class() {
        let sink = CollectingSink::new();
        sink.report(MappingError::configuration("r", "a", "no order"));
        sink.report(MappingError::access("r", "b", "missing"));
        sink.report(MappingError::configuration("r", "c", "no order"));

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.count(ErrorClass::Configuration), 2);
        assert_eq!(sink.count(ErrorClass::Conversion), 0);

        let drained = sink.take();
        assert_eq!(drained.len(), 3);
        assert!(sink.is_empty());
    }

    #[test]
    fn tracing_sink_accepts_diagnostics_without_subscriber() {
        TracingSink.report(MappingError::access("r", "a", "gone"));
    }
}
