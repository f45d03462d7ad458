pub mod sink;

pub use codespan_reporting::diagnostic::{Label, LabelStyle, Severity};
pub use codespan_reporting::term::{Chars, Config};
use text_size::TextRange;

pub use crate::diagnostics::sink::{Buffer, ConsoleSink, DiagnosticSink};
use crate::{FileId, SourceFiles};

pub type Report = codespan_reporting::diagnostic::Diagnostic<FileId>;

/// Anything that can be turned into a user facing report.
pub trait Diagnostic {
    fn build_report(&self, file: FileId, sources: &SourceFiles) -> Report;
}

pub fn primary_label(file: FileId, range: TextRange, message: impl Into<String>) -> Label<FileId> {
    Label { style: LabelStyle::Primary, file_id: file, range: range.into(), message: message.into() }
}

pub fn secondary_label(
    file: FileId,
    range: TextRange,
    message: impl Into<String>,
) -> Label<FileId> {
    Label {
        style: LabelStyle::Secondary,
        file_id: file,
        range: range.into(),
        message: message.into(),
    }
}
