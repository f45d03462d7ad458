use log::debug;
use stdx::iter::zip;
use syntax::{ClassId, ClassMember, DeclId, FunctionId, Identifier, InterfaceId};

use crate::analysis::ClassState;
use crate::check::DeclChecker;
use crate::diagnostics::DefDiagnostic;
use crate::scope::SymbolTable;
use crate::types::{LookupReason, TypeResolver};

impl DeclChecker<'_> {
    /// Checks `class` at most once. The superclass is checked first so that its merged scope
    /// can be inherited.
    pub(super) fn check_class(&mut self, class: ClassId, scope: &SymbolTable) {
        if self.analysis.classes[class].state != ClassState::Unchecked {
            return;
        }
        self.analysis.classes[class].state = ClassState::Checking;

        let program = self.program;
        let decl = &program[class];
        debug!("checking class {}", decl.name);

        let superclass = decl
            .extends
            .as_ref()
            .and_then(|name| self.resolve_superclass(class, name, scope));

        let interfaces: Vec<InterfaceId> = decl
            .implements
            .iter()
            .filter_map(|name| {
                self.resolve_name(name, LookupReason::LookingForInterface, scope)
                    .and_then(|decl| InterfaceId::try_from(decl).ok())
            })
            .collect();

        let mut inherited = match superclass {
            Some(superclass) => self.analysis.classes[superclass].scope.clone(),
            None => SymbolTable::new(),
        };
        for &interface in &interfaces {
            inherited.extend_missing(self.analysis.interface_scope(program, interface));
        }

        let diagnostics = &mut self.analysis.diagnostics;
        let members = SymbolTable::build(program, decl.members.iter().copied(), diagnostics);
        let merged = self.fold_members(inherited, &members);

        let view = SymbolTable::unify(scope, &merged, self.config.precedence);
        let data = &mut self.analysis.classes[class];
        data.superclass = superclass;
        data.interfaces = interfaces;
        data.scope = merged;
        data.state = ClassState::Checked;

        for &member in &decl.members {
            match member {
                ClassMember::Var(var) => self.check_var(var, &view),
                ClassMember::Function(function) => self.check_function(function, &view),
            }
        }
        debug!("finished class {}", decl.name);
    }

    /// Resolves and checks the class named in an `extends` clause. Returns `None` if the name
    /// does not resolve or the superclass is still being checked, which means that it
    /// (indirectly) extends `class`.
    fn resolve_superclass(
        &mut self,
        class: ClassId,
        name: &Identifier,
        scope: &SymbolTable,
    ) -> Option<ClassId> {
        let superclass = self.resolve_name(name, LookupReason::LookingForClass, scope)?;
        let superclass = ClassId::try_from(superclass).ok()?;
        self.check_class(superclass, scope);
        if self.analysis.classes[superclass].state == ClassState::Checking {
            debug!("inheritance cycle: {} extends {}", self.program[class].name, name);
            if self.config.report_inheritance_cycles {
                let cycle = DefDiagnostic::InheritanceCycle { class, superclass };
                self.analysis.diagnostics.push(cycle);
            }
            return None;
        }
        Some(superclass)
    }

    /// Folds the own members of a class over the members it inherits.
    fn fold_members(&mut self, mut inherited: SymbolTable, members: &SymbolTable) -> SymbolTable {
        for (name, member) in members.iter() {
            match (member, inherited.lookup(name.as_str())) {
                (_, None) => {
                    inherited.replace(name.clone(), member);
                }
                (DeclId::Function(function), Some(DeclId::Function(old))) => {
                    if self.signatures_match(function, old) {
                        debug!("{} overrides an inherited method", name);
                        inherited.replace(name.clone(), member);
                    } else {
                        let mismatch = DefDiagnostic::OverrideMismatch { function, inherited: old };
                        self.analysis.diagnostics.push(mismatch);
                    }
                }
                (_, Some(old)) => {
                    let conflict = DefDiagnostic::DeclConflict { new: member, old };
                    self.analysis.diagnostics.push(conflict);
                }
            }
        }
        inherited
    }

    /// Return types and the types of the formals must be equivalent position by position. The
    /// names of the formals are irrelevant.
    fn signatures_match(&self, function: FunctionId, inherited: FunctionId) -> bool {
        let program = self.program;
        let (function, inherited) = (&program[function], &program[inherited]);
        function.return_ty.is_equivalent(&inherited.return_ty)
            && function.formals.len() == inherited.formals.len()
            && zip(&function.formals, &inherited.formals)
                .all(|(&lhs, &rhs)| program[lhs].ty.is_equivalent(&program[rhs].ty))
    }

    fn resolve_name(
        &mut self,
        name: &Identifier,
        reason: LookupReason,
        scope: &SymbolTable,
    ) -> Option<DeclId> {
        TypeResolver { scope }.resolve_name(name, reason, &mut self.analysis.diagnostics)
    }
}
