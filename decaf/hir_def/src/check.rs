//! Walks the declarations of a program, building the scope of every nested declaration list and
//! resolving each type reference against the scope it appears in.

mod class;
mod stmt;

use log::trace;
use syntax::{DeclId, FunctionId, InterfaceId, Program, Type, VarId};

use crate::analysis::Analysis;
use crate::config::CheckConfig;
use crate::scope::SymbolTable;
use crate::types::{LookupReason, Ty, TypeResolver};

pub(crate) struct DeclChecker<'a> {
    program: &'a Program,
    config: &'a CheckConfig,
    analysis: Analysis,
}

impl<'a> DeclChecker<'a> {
    pub fn new(program: &'a Program, config: &'a CheckConfig) -> DeclChecker<'a> {
        DeclChecker { program, config, analysis: Analysis::new(program) }
    }

    pub fn check_program(mut self) -> Analysis {
        let program = self.program;
        let scope = SymbolTable::build(
            program,
            program.top_level.iter().copied(),
            &mut self.analysis.diagnostics,
        );
        for &decl in program.top_level.iter() {
            self.check_decl(decl, &scope);
        }
        self.analysis.program_scope = scope;
        self.analysis
    }

    fn check_decl(&mut self, decl: DeclId, scope: &SymbolTable) {
        match decl {
            DeclId::Var(var) => self.check_var(var, scope),
            DeclId::Function(function) => self.check_function(function, scope),
            DeclId::Class(class) => self.check_class(class, scope),
            DeclId::Interface(interface) => self.check_interface(interface),
        }
    }

    fn check_var(&mut self, var: VarId, scope: &SymbolTable) {
        let program = self.program;
        let ty = self.resolve_type(&program[var].ty, LookupReason::LookingForType, scope);
        self.analysis.var_types[var] = Some(ty);
    }

    fn check_function(&mut self, function: FunctionId, scope: &SymbolTable) {
        let program = self.program;
        let data = &program[function];
        let diagnostics = &mut self.analysis.diagnostics;
        let formals = SymbolTable::build(program, data.formals.iter().copied(), diagnostics);

        let return_ty = self.resolve_type(&data.return_ty, LookupReason::LookingForType, scope);
        self.analysis.return_types[function] = Some(return_ty);

        // formal types resolve in the enclosing scope, not in the formal list
        for &formal in &data.formals {
            self.check_var(formal, scope);
        }

        if let Some(body) = data.body {
            let scope = SymbolTable::unify(scope, &formals, self.config.precedence);
            self.check_stmt(body, &scope);
        }
    }

    fn check_interface(&mut self, interface: InterfaceId) {
        // the member table is only needed by implementing classes and built on demand
        trace!("skipping interface {}", self.program[interface].name);
    }

    fn resolve_type(&mut self, ty: &Type, reason: LookupReason, scope: &SymbolTable) -> Ty {
        TypeResolver { scope }.resolve_type(ty, reason, &mut self.analysis.diagnostics)
    }
}
