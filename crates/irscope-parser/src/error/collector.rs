//! Collector for diagnostics raised while reading a dump.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so that one bad line does not hide the others.
///
/// Warnings are logged as they are emitted.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_warning() {
            warn!(
                code = diagnostic.code().map(|code| code.as_str()).unwrap_or("-");
                "{}", diagnostic.message()
            );
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity().is_error())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Finish collection.
    ///
    /// Returns the collected warnings, or a [`ParseError`] with every
    /// diagnostic when at least one error was emitted. Errors are moved to
    /// the front so the error display names the failure first.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if !self.has_errors() {
            return Ok(self.diagnostics);
        }

        let (mut errors, warnings): (Vec<_>, Vec<_>) = self
            .diagnostics
            .into_iter()
            .partition(|diagnostic| diagnostic.severity().is_error());
        errors.extend(warnings);
        Err(ParseError::new(errors))
    }
}
