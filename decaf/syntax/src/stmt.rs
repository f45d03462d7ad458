use text_size::TextRange;

use crate::{StmtId, VarId};

/// An expression. Expression semantics belong to a later phase, this tree only records where
/// the expression was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Expr {
    pub range: TextRange,
}

impl Expr {
    pub fn new(range: TextRange) -> Expr {
        Expr { range }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `{ locals... stmts... }`, all local declarations precede the statements.
    Block {
        locals: Vec<VarId>,
        stmts: Vec<StmtId>,
    },
    If {
        cond: Expr,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: Expr,
        body: StmtId,
    },
    For {
        init: Option<Expr>,
        cond: Expr,
        step: Option<Expr>,
        body: StmtId,
    },
    Switch {
        discriminant: Expr,
        cases: Vec<Case>,
        default: Option<Vec<StmtId>>,
    },
    Break,
    Return(Option<Expr>),
    Print(Vec<Expr>),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub value: Expr,
    pub stmts: Vec<StmtId>,
}
