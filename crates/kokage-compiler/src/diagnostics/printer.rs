//! Builder-pattern printer for rendering a diagnostic.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostic;

/// Renders a [`Diagnostic`], with a source snippet when the host source is
/// known.
pub struct DiagnosticPrinter<'d, 's> {
    diagnostic: &'d Diagnostic,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticPrinter<'d, 's> {
    pub fn new(diagnostic: &'d Diagnostic) -> Self {
        Self {
            diagnostic,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// Host source text the parser saw.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(range)) = (self.source, self.diagnostic.range) else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.diagnostic.kind.to_string();
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(source_range(source, range))
                .label(&message),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        w.write_str("error")?;
        if let Some(path) = self.path {
            write!(w, " in {path}")?;
        }
        if let Some(range) = self.diagnostic.range {
            write!(
                w,
                " at {}..{}",
                u32::from(range.start()),
                u32::from(range.end())
            )?;
        }
        write!(w, ": {}", self.diagnostic.kind)
    }
}

/// Map a range in parser offsets (UTF-16 code units) onto byte offsets of
/// `source`, widening empty ranges to one character so they stay visible.
fn source_range(source: &str, range: TextRange) -> std::ops::Range<usize> {
    let start = byte_offset(source, u32::from(range.start()));
    let end = byte_offset(source, u32::from(range.end()));

    if start == end {
        let next = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        return start..next;
    }

    start..end
}

/// Byte offset of the character at `utf16` code units into `source`,
/// clamped to the end of the source.
pub(crate) fn byte_offset(source: &str, utf16: u32) -> usize {
    let mut units = 0u32;
    for (idx, ch) in source.char_indices() {
        if units >= utf16 {
            return idx;
        }
        units += ch.len_utf16() as u32;
    }
    source.len()
}
