use std::fmt::Display;

pub use codespan_reporting::term::termcolor::{Buffer, ColorChoice};
use codespan_reporting::term::termcolor::{StandardStream, WriteColor};
use codespan_reporting::term::{emit, Chars, Config};
use log::error;

use crate::diagnostics::{Diagnostic, Report, Severity};
use crate::{FileId, SourceFiles};

pub trait DiagnosticSink {
    fn add_report(&mut self, report: Report);
    fn add_diagnostic(&mut self, diagnostic: &impl Diagnostic, file: FileId, sources: &SourceFiles) {
        self.add_report(diagnostic.build_report(file, sources))
    }
    fn add_diagnostics<'a>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'a (impl Diagnostic + 'a)>,
        file: FileId,
        sources: &SourceFiles,
    ) {
        diagnostics
            .into_iter()
            .for_each(|diagnostic| self.add_diagnostic(diagnostic, file, sources))
    }
}

/// Collects reports without rendering them.
impl DiagnosticSink for Vec<Report> {
    fn add_report(&mut self, report: Report) {
        self.push(report)
    }
}

pub struct ConsoleSink<'a> {
    warning_cnt: usize,
    error_cnt: usize,
    config: Config,
    sources: &'a SourceFiles,
    dst: Box<dyn WriteColor + 'a>,
}

impl<'a> ConsoleSink<'a> {
    pub fn new(config: Config, sources: &'a SourceFiles) -> ConsoleSink<'a> {
        ConsoleSink::new_with(config, sources, Box::new(StandardStream::stderr(ColorChoice::Auto)))
    }

    pub fn buffer(config: Config, sources: &'a SourceFiles, buffer: &'a mut Buffer) -> ConsoleSink<'a> {
        ConsoleSink::new_with(config, sources, Box::new(buffer))
    }

    pub fn new_with(
        config: Config,
        sources: &'a SourceFiles,
        dst: Box<dyn WriteColor + 'a>,
    ) -> ConsoleSink<'a> {
        ConsoleSink { warning_cnt: 0, error_cnt: 0, config, sources, dst }
    }

    /// The terminal style used by command line tools.
    pub fn cli_config() -> Config {
        let mut config = Config { chars: Chars::ascii(), ..Config::default() };
        config.styles.header_error.set_intense(false);
        config.styles.header_warning.set_intense(false);
        config.styles.header_note.set_intense(false);

        config.styles.note_bullet.set_bold(true).set_intense(true);
        config.styles.line_number.set_bold(true).set_intense(true);
        config.styles.source_border.set_bold(true).set_intense(true);
        config.styles.primary_label_error.set_bold(true);
        config.styles.primary_label_warning.set_bold(true);
        config.styles.secondary_label.set_bold(true);
        config
    }

    pub fn error_cnt(&self) -> usize {
        self.error_cnt
    }

    pub fn warning_cnt(&self) -> usize {
        self.warning_cnt
    }

    /// Prints a closing message. Returns `true` if any errors were reported.
    pub fn summary(&mut self, target_name: &impl Display) -> bool {
        if self.error_cnt != 0 {
            let warn = if self.warning_cnt != 0 {
                format!("; {} warning emitted", self.warning_cnt)
            } else {
                String::new()
            };
            let message = format!(
                "could not compile `{}` due to {} previous errors{}",
                target_name, self.error_cnt, warn
            );

            self.print_simple_message(Severity::Error, message);
            return true;
        }

        if self.warning_cnt != 0 {
            let message = format!("`{}` generated {} warning", target_name, self.warning_cnt);
            self.print_simple_message(Severity::Warning, message);
            self.warning_cnt = 0;
        }

        false
    }

    pub fn print_simple_message(&mut self, severity: Severity, msg: String) {
        self.emit(&Report::new(severity).with_message(msg))
    }

    fn emit(&mut self, report: &Report) {
        if let Err(err) = emit(&mut self.dst, &self.config, self.sources, report) {
            error!("failed to emit diagnostic: {err}");
        }
    }
}

impl DiagnosticSink for ConsoleSink<'_> {
    fn add_report(&mut self, report: Report) {
        match report.severity {
            Severity::Error | Severity::Bug => self.error_cnt += 1,
            Severity::Warning => self.warning_cnt += 1,
            _ => (),
        }

        self.emit(&report)
    }
}
