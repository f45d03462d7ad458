use typed_index_collections::TiVec;

use crate::{
    Class, ClassId, ClassMember, DeclId, Function, FunctionId, Identifier, Interface,
    InterfaceId, Program, Stmt, StmtId, Type, Var, VarId,
};

/// Incrementally constructs a [`Program`].
///
/// Children are allocated before their parents: formals and the body before the function,
/// members before their class.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    vars: TiVec<VarId, Var>,
    functions: TiVec<FunctionId, Function>,
    classes: TiVec<ClassId, Class>,
    interfaces: TiVec<InterfaceId, Interface>,
    stmts: TiVec<StmtId, Stmt>,
    top_level: Vec<DeclId>,
}

impl ProgramBuilder {
    pub fn new() -> ProgramBuilder {
        ProgramBuilder::default()
    }

    pub fn var(&mut self, name: Identifier, ty: Type) -> VarId {
        self.vars.push_and_get_key(Var { name, ty })
    }

    pub fn function(
        &mut self,
        name: Identifier,
        return_ty: Type,
        formals: Vec<VarId>,
        body: Option<StmtId>,
    ) -> FunctionId {
        self.functions.push_and_get_key(Function { name, return_ty, formals, body })
    }

    pub fn class(
        &mut self,
        name: Identifier,
        extends: Option<Identifier>,
        implements: Vec<Identifier>,
        members: Vec<ClassMember>,
    ) -> ClassId {
        self.classes.push_and_get_key(Class { name, extends, implements, members })
    }

    pub fn interface(&mut self, name: Identifier, members: Vec<FunctionId>) -> InterfaceId {
        self.interfaces.push_and_get_key(Interface { name, members })
    }

    pub fn stmt(&mut self, stmt: Stmt) -> StmtId {
        self.stmts.push_and_get_key(stmt)
    }

    pub fn block(&mut self, locals: Vec<VarId>, stmts: Vec<StmtId>) -> StmtId {
        self.stmt(Stmt::Block { locals, stmts })
    }

    /// Appends a declaration to the file level declaration list.
    pub fn top_level(&mut self, decl: impl Into<DeclId>) -> &mut ProgramBuilder {
        self.top_level.push(decl.into());
        self
    }

    pub fn finish(self) -> Program {
        let ProgramBuilder { vars, functions, classes, interfaces, stmts, top_level } = self;
        Program { vars, functions, classes, interfaces, stmts, top_level: top_level.into() }
    }
}
