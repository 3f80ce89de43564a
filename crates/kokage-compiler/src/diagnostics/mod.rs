//! Compilation diagnostics.
//!
//! Compilation stops at the first problem, so a failed compilation yields
//! exactly one [`Diagnostic`]: what rule was violated, and where.

mod kind;
mod printer;


use kokage_core::Span;
use rowan::{TextRange, TextSize};

pub use kind::DiagnosticKind;
pub use printer::DiagnosticPrinter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Range of the offending node in the host source, in parser offsets.
    /// Absent for failures on the typed IR, which carries no positions.
    pub range: Option<TextRange>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self {
            kind,
            range: Some(span_to_range(span)),
        }
    }

    /// A diagnostic with no source position.
    pub fn detached(kind: DiagnosticKind) -> Self {
        Self { kind, range: None }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn printer<'s>(&self) -> DiagnosticPrinter<'_, 's> {
        DiagnosticPrinter::new(self)
    }
}

fn span_to_range(span: Span) -> TextRange {
    let start = TextSize::from(span.start);
    // A malformed tree may report end < start.
    let end = TextSize::from(span.end.max(span.start));
    TextRange::new(start, end)
}
