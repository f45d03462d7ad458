use stdx::impl_display;

use crate::name::Identifier;

/// The types built into the language.
///
/// `Error` never appears in source text. It stands in for a type that failed to resolve so that
/// later checks do not produce follow-up errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Int,
    Double,
    Bool,
    String,
    Void,
    Null,
    Error,
}

impl_display! {
    match BuiltinType{
        BuiltinType::Int => "int";
        BuiltinType::Double => "double";
        BuiltinType::Bool => "bool";
        BuiltinType::String => "string";
        BuiltinType::Void => "void";
        BuiltinType::Null => "null";
        BuiltinType::Error => "error";
    }
}

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Builtin(BuiltinType),
    /// A class or interface, resolved by name during semantic analysis.
    Named(Identifier),
    Array(Box<Type>),
}

impl_display! {
    match Type{
        Type::Builtin(ty) => "{}", ty;
        Type::Named(name) => "{}", name;
        Type::Array(elem) => "{}[]", elem;
    }
}

impl Type {
    pub const INT: Type = Type::Builtin(BuiltinType::Int);
    pub const DOUBLE: Type = Type::Builtin(BuiltinType::Double);
    pub const BOOL: Type = Type::Builtin(BuiltinType::Bool);
    pub const STRING: Type = Type::Builtin(BuiltinType::String);
    pub const VOID: Type = Type::Builtin(BuiltinType::Void);
    pub const NULL: Type = Type::Builtin(BuiltinType::Null);
    pub const ERROR: Type = Type::Builtin(BuiltinType::Error);

    pub fn array_of(elem: Type) -> Type {
        Type::Array(Box::new(elem))
    }

    /// Name equivalence: built-ins are equal to themselves, named types are equal when they are
    /// spelled the same and arrays are equal when their elements are. No subtyping and no
    /// resolution takes place.
    pub fn is_equivalent(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Builtin(lhs), Type::Builtin(rhs)) => lhs == rhs,
            (Type::Named(lhs), Type::Named(rhs)) => lhs.name == rhs.name,
            (Type::Array(lhs), Type::Array(rhs)) => lhs.is_equivalent(rhs),
            _ => false,
        }
    }
}
