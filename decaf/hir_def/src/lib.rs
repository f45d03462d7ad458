//! Semantic analysis of Decaf declarations.
//!
//! [`check_program`] visits every declaration of a [`Program`] exactly once. It builds a
//! [`SymbolTable`] for each declaration list (the file level, class members, formals and block
//! locals), composes nested tables with [`SymbolTable::unify`] and resolves every type reference
//! against the scope it is written in. Classes additionally inherit the members of their
//! superclass and of the interfaces they implement.
//!
//! Errors never abort the pass. They are collected as [`DefDiagnostic`]s in the returned
//! [`Analysis`] and can be rendered with [`collect_diagnostics`].

mod analysis;
mod check;
mod config;
mod diagnostics;
pub mod scope;
mod types;


use basedb::diagnostics::DiagnosticSink;
use basedb::{FileId, SourceFiles};
use log::debug;
use syntax::Program;

pub use crate::analysis::{Analysis, ClassData, ClassState};
pub use crate::config::{CheckConfig, ScopePrecedence};
pub use crate::diagnostics::{DefDiagnostic, DefDiagnosticWrapped};
pub use crate::scope::SymbolTable;
pub use crate::types::{LookupReason, Ty};

pub fn check_program(program: &Program, config: &CheckConfig) -> Analysis {
    debug!("checking {} top level declarations", program.top_level.len());
    let analysis = check::DeclChecker::new(program, config).check_program();
    debug!("found {} semantic errors", analysis.diagnostics.len());
    analysis
}

/// Renders the diagnostics of `analysis` into `dst`. All identifier ranges refer to `file`.
pub fn collect_diagnostics(
    program: &Program,
    analysis: &Analysis,
    file: FileId,
    sources: &SourceFiles,
    dst: &mut impl DiagnosticSink,
) {
    for diag in &analysis.diagnostics {
        let diag = DefDiagnosticWrapped { diag, program };
        dst.add_diagnostic(&diag, file, sources);
    }
}
