use stdx::impl_from_typed;

use crate::name::Identifier;
use crate::ty::Type;
use crate::{ClassId, FunctionId, InterfaceId, StmtId, VarId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    pub name: Identifier,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: Identifier,
    pub return_ty: Type,
    pub formals: Vec<VarId>,
    /// `None` for prototypes (interface members).
    pub body: Option<StmtId>,
}

impl Function {
    pub fn is_prototype(&self) -> bool {
        self.body.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: Identifier,
    pub extends: Option<Identifier>,
    pub implements: Vec<Identifier>,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: Identifier,
    pub members: Vec<FunctionId>,
}

/// Any declaration that can be entered into a scope.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DeclId {
    Var(VarId),
    Function(FunctionId),
    Class(ClassId),
    Interface(InterfaceId),
}

impl_from_typed! (
    Var(VarId),
    Function(FunctionId),
    Class(ClassId),
    Interface(InterfaceId) for DeclId
);

/// The declarations allowed inside a class body.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ClassMember {
    Var(VarId),
    Function(FunctionId),
}

impl_from_typed! (
    Var(VarId),
    Function(FunctionId) for ClassMember
);

impl From<ClassMember> for DeclId {
    fn from(member: ClassMember) -> DeclId {
        match member {
            ClassMember::Var(id) => DeclId::Var(id),
            ClassMember::Function(id) => DeclId::Function(id),
        }
    }
}
