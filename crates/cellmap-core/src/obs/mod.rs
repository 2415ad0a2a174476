//! Observability: the diagnostic sink boundary.
//!
//! Mapping code never logs directly. Every non-fatal failure is handed to
//! a `DiagnosticSink`; the default sink forwards to `tracing`.

pub mod sink;

// re-exports
pub use sink::{CollectingSink, DiagnosticSink, TracingSink};
