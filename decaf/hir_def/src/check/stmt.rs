use syntax::{Stmt, StmtId};

use crate::check::DeclChecker;
use crate::scope::SymbolTable;

impl DeclChecker<'_> {
    pub(super) fn check_stmt(&mut self, stmt: StmtId, scope: &SymbolTable) {
        let program = self.program;
        match program[stmt] {
            Stmt::Block { ref locals, ref stmts } => {
                let diagnostics = &mut self.analysis.diagnostics;
                let table = SymbolTable::build(program, locals.iter().copied(), diagnostics);
                for &local in locals {
                    self.check_var(local, scope);
                }

                let view = SymbolTable::unify(scope, &table, self.config.precedence);
                for &stmt in stmts {
                    self.check_stmt(stmt, &view);
                }
                self.analysis.block_scopes[stmt] = Some(view);
            }
            Stmt::If { then_branch, else_branch, .. } => {
                self.check_stmt(then_branch, scope);
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch, scope);
                }
            }
            Stmt::While { body, .. } | Stmt::For { body, .. } => self.check_stmt(body, scope),
            Stmt::Switch { .. }
            | Stmt::Break
            | Stmt::Return(_)
            | Stmt::Print(_)
            | Stmt::Expr(_) => (),
        }
    }
}
