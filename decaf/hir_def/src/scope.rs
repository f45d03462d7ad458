//! Symbol tables and their composition into the scope that is visible at a point in the tree.

use ahash::RandomState;
use indexmap::map::Entry;
use indexmap::IndexMap;
use syntax::{DeclId, Name, Program};

use crate::config::ScopePrecedence;
use crate::diagnostics::DefDiagnostic;

/// Maps names to the declaration they denote within a single scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    declarations: IndexMap<Name, DeclId, RandomState>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Enters every declaration under its name. A name that is already taken is reported as a
    /// conflict and the first declaration is kept.
    pub fn build<I>(
        program: &Program,
        decls: I,
        diagnostics: &mut Vec<DefDiagnostic>,
    ) -> SymbolTable
    where
        I: IntoIterator,
        I::Item: Into<DeclId>,
    {
        SymbolTable::build_with(program, decls, |new, old| {
            diagnostics.push(DefDiagnostic::DeclConflict { new, old })
        })
    }

    /// Same as [`SymbolTable::build`] but duplicate names are dropped silently.
    pub fn collect<I>(program: &Program, decls: I) -> SymbolTable
    where
        I: IntoIterator,
        I::Item: Into<DeclId>,
    {
        SymbolTable::build_with(program, decls, |_, _| ())
    }

    fn build_with<I>(
        program: &Program,
        decls: I,
        mut on_conflict: impl FnMut(DeclId, DeclId),
    ) -> SymbolTable
    where
        I: IntoIterator,
        I::Item: Into<DeclId>,
    {
        let mut table = SymbolTable::new();
        for decl in decls {
            let decl: DeclId = decl.into();
            let name = program.decl_name(decl).name.clone();
            if let Err(old) = table.insert(name, decl) {
                on_conflict(decl, old)
            }
        }
        table
    }

    pub fn lookup(&self, name: &str) -> Option<DeclId> {
        self.declarations.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    /// Inserts `decl` unless `name` is already taken, in which case the existing declaration is
    /// returned and the table is left unchanged.
    pub fn insert(&mut self, name: Name, decl: DeclId) -> Result<(), DeclId> {
        match self.declarations.entry(name) {
            Entry::Occupied(entry) => Err(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(decl);
                Ok(())
            }
        }
    }

    /// Unconditionally binds `name` to `decl`, keeping the position of an existing entry.
    pub(crate) fn replace(&mut self, name: Name, decl: DeclId) -> Option<DeclId> {
        self.declarations.insert(name, decl)
    }

    /// Copies every entry of `other` whose name is not bound yet.
    pub(crate) fn extend_missing(&mut self, other: &SymbolTable) {
        for (name, &decl) in &other.declarations {
            self.declarations.entry(name.clone()).or_insert(decl);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, DeclId)> + '_ {
        self.declarations.iter().map(|(name, &decl)| (name, decl))
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> + '_ {
        self.declarations.keys()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Composes an enclosing scope with a nested one into a single lookup view.
    ///
    /// With [`ScopePrecedence::OuterWins`] a name bound in both scopes resolves to the `outer`
    /// declaration and the `inner` one is silently hidden. This is not a conflict: conflicts
    /// within each table are reported when the table is built. [`ScopePrecedence::InnerShadows`]
    /// implements conventional lexical shadowing instead.
    pub fn unify(
        outer: &SymbolTable,
        inner: &SymbolTable,
        precedence: ScopePrecedence,
    ) -> SymbolTable {
        let mut unified = outer.clone();
        match precedence {
            ScopePrecedence::OuterWins => unified.extend_missing(inner),
            ScopePrecedence::InnerShadows => {
                for (name, decl) in inner.iter() {
                    unified.replace(name.clone(), decl);
                }
            }
        }
        unified
    }
}
