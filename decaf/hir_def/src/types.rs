use stdx::impl_display;
use syntax::{BuiltinType, ClassId, DeclId, Identifier, InterfaceId, Program, Type};

use crate::diagnostics::DefDiagnostic;
use crate::scope::SymbolTable;

/// The kind of declaration a named type reference must resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupReason {
    LookingForType,
    LookingForClass,
    LookingForInterface,
}

impl_display! {
    match LookupReason{
        LookupReason::LookingForType => "type";
        LookupReason::LookingForClass => "class";
        LookupReason::LookingForInterface => "interface";
    }
}

impl LookupReason {
    fn accepts(self, decl: DeclId) -> bool {
        match (self, decl) {
            (LookupReason::LookingForType, DeclId::Class(_) | DeclId::Interface(_)) => true,
            (LookupReason::LookingForClass, DeclId::Class(_)) => true,
            (LookupReason::LookingForInterface, DeclId::Interface(_)) => true,
            _ => false,
        }
    }
}

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    Builtin(BuiltinType),
    Class(ClassId),
    Interface(InterfaceId),
    Array(Box<Ty>),
}

impl Ty {
    /// Stands in for references that failed to resolve.
    pub const ERROR: Ty = Ty::Builtin(BuiltinType::Error);

    pub fn is_error(&self) -> bool {
        matches!(self, Ty::Builtin(BuiltinType::Error))
    }

    pub fn display<'a>(&'a self, program: &'a Program) -> impl std::fmt::Display + 'a {
        TyDisplay { ty: self, program }
    }
}

struct TyDisplay<'a> {
    ty: &'a Ty,
    program: &'a Program,
}

impl std::fmt::Display for TyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ty {
            Ty::Builtin(ty) => write!(f, "{ty}"),
            Ty::Class(class) => write!(f, "{}", self.program[*class].name),
            Ty::Interface(interface) => write!(f, "{}", self.program[*interface].name),
            Ty::Array(elem) => write!(f, "{}[]", elem.display(self.program)),
        }
    }
}

/// Resolves the type references within a single scope, reporting every failed lookup.
pub(crate) struct TypeResolver<'a> {
    pub scope: &'a SymbolTable,
}

impl TypeResolver<'_> {
    pub fn resolve_type(
        &self,
        ty: &Type,
        reason: LookupReason,
        diagnostics: &mut Vec<DefDiagnostic>,
    ) -> Ty {
        match ty {
            Type::Builtin(ty) => Ty::Builtin(*ty),
            Type::Named(name) => match self.resolve_name(name, reason, diagnostics) {
                Some(DeclId::Class(class)) => Ty::Class(class),
                Some(DeclId::Interface(interface)) => Ty::Interface(interface),
                _ => Ty::ERROR,
            },
            Type::Array(elem) => {
                let elem = self.resolve_type(elem, LookupReason::LookingForType, diagnostics);
                Ty::Array(Box::new(elem))
            }
        }
    }

    /// Looks up `name` and checks that it denotes a declaration acceptable for `reason`.
    pub fn resolve_name(
        &self,
        name: &Identifier,
        reason: LookupReason,
        diagnostics: &mut Vec<DefDiagnostic>,
    ) -> Option<DeclId> {
        match self.scope.lookup(name.text()) {
            Some(decl) if reason.accepts(decl) => Some(decl),
            _ => {
                let name = name.clone();
                diagnostics.push(DefDiagnostic::IdentifierNotDeclared { name, reason });
                None
            }
        }
    }
}
