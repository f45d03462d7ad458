use std::ops::Index;

use once_cell::unsync::OnceCell;
use syntax::{ClassId, DeclId, FunctionId, InterfaceId, Program, StmtId, VarId};
use typed_index_collections::TiVec;

use crate::diagnostics::DefDiagnostic;
use crate::scope::SymbolTable;
use crate::types::Ty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassState {
    #[default]
    Unchecked,
    /// The class is being checked further up the stack. Reaching it again while resolving a
    /// superclass means the hierarchy is cyclic.
    Checking,
    Checked,
}

/// Everything derived for a single class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassData {
    pub state: ClassState,
    /// `None` if there is no `extends` clause, it failed to resolve or it closes a cycle.
    /// Following these links therefore always terminates.
    pub superclass: Option<ClassId>,
    pub interfaces: Vec<InterfaceId>,
    /// Own members folded over the inherited ones. Empty until the class is checked.
    pub scope: SymbolTable,
}

/// The result of checking a [`Program`].
#[derive(Debug)]
pub struct Analysis {
    /// In the order they were found.
    pub diagnostics: Vec<DefDiagnostic>,
    pub program_scope: SymbolTable,
    pub classes: TiVec<ClassId, ClassData>,
    /// `None` for variables that were never checked, such as the formals of interface
    /// prototypes.
    pub var_types: TiVec<VarId, Option<Ty>>,
    pub return_types: TiVec<FunctionId, Option<Ty>>,
    /// The view that is visible inside each block statement, `None` for other statements.
    pub block_scopes: TiVec<StmtId, Option<SymbolTable>>,
    interface_scopes: TiVec<InterfaceId, OnceCell<SymbolTable>>,
}

impl Analysis {
    pub(crate) fn new(program: &Program) -> Analysis {
        Analysis {
            diagnostics: Vec::new(),
            program_scope: SymbolTable::new(),
            classes: program.classes.iter().map(|_| ClassData::default()).collect(),
            var_types: program.vars.iter().map(|_| None).collect(),
            return_types: program.functions.iter().map(|_| None).collect(),
            block_scopes: program.stmts.iter().map(|_| None).collect(),
            interface_scopes: program.interfaces.iter().map(|_| OnceCell::new()).collect(),
        }
    }

    /// The member table of an interface. Built on first use, duplicate members are not reported.
    pub fn interface_scope(&self, program: &Program, interface: InterfaceId) -> &SymbolTable {
        self.interface_scopes[interface].get_or_init(|| {
            SymbolTable::collect(program, program[interface].members.iter().copied())
        })
    }

    /// Looks `name` up in the merged scope of `class`, including inherited members.
    pub fn lookup_member(&self, class: ClassId, name: &str) -> Option<DeclId> {
        self.classes[class].scope.lookup(name)
    }

    pub fn var_type(&self, var: VarId) -> Option<&Ty> {
        self.var_types[var].as_ref()
    }

    pub fn return_type(&self, function: FunctionId) -> Option<&Ty> {
        self.return_types[function].as_ref()
    }

    pub fn block_scope(&self, block: StmtId) -> Option<&SymbolTable> {
        self.block_scopes[block].as_ref()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl Index<ClassId> for Analysis {
    type Output = ClassData;

    fn index(&self, class: ClassId) -> &ClassData {
        &self.classes[class]
    }
}
