//! The syntax tree of a Decaf program as it is handed to semantic analysis.
//!
//! Parsing is not part of this crate. A parser (or a test) constructs the tree with
//! [`ProgramBuilder`]; afterwards the [`Program`] is immutable. All declarations and statements
//! live in per-kind arenas and refer to each other with typed indices, so a class may name
//! another class that is declared later in the file without any ownership cycles: names are
//! only ever resolved by looking them up in a scope.

mod builder;
mod decl;
pub mod name;
mod stmt;
mod ty;


use std::ops::Index;

pub use smol_str::SmolStr;
use stdx::{impl_debug_display, impl_idx_from};
pub use text_size::{TextRange, TextSize};
use typed_index_collections::TiVec;

pub use crate::builder::ProgramBuilder;
pub use crate::decl::{Class, ClassMember, DeclId, Function, Interface, Var};
pub use crate::name::{Identifier, Name};
pub use crate::stmt::{Case, Expr, Stmt};
pub use crate::ty::{BuiltinType, Type};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct VarId(u32);
impl_idx_from!(VarId(u32));
impl_debug_display! {match VarId{VarId(id) => "var{}", id;}}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct FunctionId(u32);
impl_idx_from!(FunctionId(u32));
impl_debug_display! {match FunctionId{FunctionId(id) => "fn{}", id;}}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct ClassId(u32);
impl_idx_from!(ClassId(u32));
impl_debug_display! {match ClassId{ClassId(id) => "class{}", id;}}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct InterfaceId(u32);
impl_idx_from!(InterfaceId(u32));
impl_debug_display! {match InterfaceId{InterfaceId(id) => "interface{}", id;}}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct StmtId(u32);
impl_idx_from!(StmtId(u32));
impl_debug_display! {match StmtId{StmtId(id) => "stmt{}", id;}}

/// A parsed Decaf program.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    pub vars: TiVec<VarId, Var>,
    pub functions: TiVec<FunctionId, Function>,
    pub classes: TiVec<ClassId, Class>,
    pub interfaces: TiVec<InterfaceId, Interface>,
    pub stmts: TiVec<StmtId, Stmt>,
    /// The declarations at file level in source order.
    pub top_level: Box<[DeclId]>,
}

impl Program {
    /// The identifier a declaration was introduced with.
    pub fn decl_name(&self, decl: DeclId) -> &Identifier {
        match decl {
            DeclId::Var(id) => &self[id].name,
            DeclId::Function(id) => &self[id].name,
            DeclId::Class(id) => &self[id].name,
            DeclId::Interface(id) => &self[id].name,
        }
    }
}

macro_rules! program_nodes {
    ( $( $node:ident in $fld:ident: $id:ident ),+ $(,)? ) => {
        $(
            impl Index<$id> for Program {
                type Output = $node;

                fn index(&self, index: $id) -> &Self::Output {
                    &self.$fld[index]
                }
            }
        )+
    };
}

program_nodes! {
    Var in vars: VarId,
    Function in functions: FunctionId,
    Class in classes: ClassId,
    Interface in interfaces: InterfaceId,
    Stmt in stmts: StmtId,
}
