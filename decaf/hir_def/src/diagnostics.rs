use basedb::diagnostics::{primary_label, secondary_label, Diagnostic, Report};
use basedb::{FileId, SourceFiles};
use stdx::pretty::List;
use syntax::{ClassId, DeclId, FunctionId, Identifier, Program};

use crate::types::LookupReason;

/// A semantic error found while checking declarations. All of them are recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefDiagnostic {
    /// `new` reuses a name that `old` already declared in the same scope.
    DeclConflict { new: DeclId, old: DeclId },
    /// `function` overrides `inherited` with a different signature.
    OverrideMismatch { function: FunctionId, inherited: FunctionId },
    IdentifierNotDeclared { name: Identifier, reason: LookupReason },
    /// The `extends` clause of `class` names `superclass`, which (indirectly) extends `class`.
    InheritanceCycle { class: ClassId, superclass: ClassId },
}

/// Gives a [`DefDiagnostic`] access to the program it was reported for.
pub struct DefDiagnosticWrapped<'a> {
    pub diag: &'a DefDiagnostic,
    pub program: &'a Program,
}

impl Diagnostic for DefDiagnosticWrapped<'_> {
    fn build_report(&self, file: FileId, sources: &SourceFiles) -> Report {
        match *self.diag {
            DefDiagnostic::DeclConflict { new, old } => {
                let new = self.program.decl_name(new);
                let old = self.program.decl_name(old);
                let line = sources[file].line(old.range.start()).one_based();
                Report::error()
                    .with_message(format!(
                        "*** Declaration of '{}' here conflicts with declaration on line {}",
                        new, line
                    ))
                    .with_labels(vec![
                        secondary_label(file, old.range, format!("'{old}' first declared here")),
                        primary_label(file, new.range, "conflicting declaration"),
                    ])
            }
            DefDiagnostic::OverrideMismatch { function, inherited } => {
                let name = &self.program[function].name;
                let inherited_name = &self.program[inherited].name;
                Report::error()
                    .with_message(format!(
                        "*** Method '{}' must match inherited type signature",
                        name
                    ))
                    .with_labels(vec![
                        secondary_label(
                            file,
                            inherited_name.range,
                            "inherited method declared here",
                        ),
                        primary_label(file, name.range, "signature differs"),
                    ])
                    .with_notes(vec![
                        format!("expected: {}", self.signature(inherited)),
                        format!("found: {}", self.signature(function)),
                    ])
            }
            DefDiagnostic::IdentifierNotDeclared { ref name, reason } => Report::error()
                .with_message(format!("*** No declaration found for {} '{}'", reason, name))
                .with_labels(vec![primary_label(
                    file,
                    name.range,
                    format!("expected a {reason}"),
                )]),
            DefDiagnostic::InheritanceCycle { class, superclass } => {
                let class = &self.program[class];
                let superclass = &self.program[superclass].name;
                let mut labels = Vec::with_capacity(1);
                if let Some(extends) = &class.extends {
                    labels.push(primary_label(file, extends.range, "closes the inheritance cycle"));
                }
                Report::error()
                    .with_message(format!(
                        "*** Class '{}' extends itself through '{}'",
                        class.name, superclass
                    ))
                    .with_labels(labels)
            }
        }
    }
}

impl DefDiagnosticWrapped<'_> {
    fn signature(&self, function: FunctionId) -> String {
        let function = &self.program[function];
        let formals: Vec<_> =
            function.formals.iter().map(|&formal| &self.program[formal].ty).collect();
        format!("{} {}({})", function.return_ty, function.name, List::params(formals))
    }
}
