use expect_test::expect;
use syntax::{Case, DeclId, Expr, Stmt, StmtId};

use crate::tests::TestProgram;
use crate::{CheckConfig, DefDiagnostic, ScopePrecedence, SymbolTable};

#[test]
fn first_declaration_wins() {
    let src = "int x;\nint y;\nint x;\ndouble x;\n";
    let mut p = TestProgram::new(src);
    let vars = [("int", "x"), ("int", "y"), ("int", "x"), ("double", "x")]
        .map(|(ty, name)| p.var(ty, name));
    for var in vars {
        p.top_level(var);
    }
    let checked = p.check();
    let scope = &checked.analysis.program_scope;

    assert_eq!(scope.len(), 2);
    assert_eq!(scope.lookup("x"), Some(DeclId::Var(vars[0])));
    assert_eq!(scope.lookup("y"), Some(DeclId::Var(vars[1])));
    assert_eq!(
        checked.analysis.diagnostics,
        vec![
            DefDiagnostic::DeclConflict { new: vars[2].into(), old: vars[0].into() },
            DefDiagnostic::DeclConflict { new: vars[3].into(), old: vars[0].into() },
        ]
    );
}

#[test]
fn conflict_report() {
    let src = "int x;\nclass x {}\n";
    let mut p = TestProgram::new(src);
    let var = p.var("int", "x");
    p.top_level(var);
    p.class("x", None, &[], |_| Vec::new());
    let checked = p.check();

    let expected = expect![[r#"
        error: *** Declaration of 'x' here conflicts with declaration on line 1
          ┌─ /test.decaf:2:7
          │
        1 │ int x;
          │     - 'x' first declared here
        2 │ class x {}
          │       ^ conflicting declaration

    "#]];
    expected.assert_eq(&checked.render());
}

#[test]
fn unify_precedence() {
    let src = "int x; int y; double x; bool z;";
    let mut p = TestProgram::new(src);
    let outer = [p.var("int", "x"), p.var("int", "y")];
    let inner = [p.var("double", "x"), p.var("bool", "z")];
    let program = p.check().program;

    let mut diagnostics = Vec::new();
    let outer_table = SymbolTable::build(&program, outer, &mut diagnostics);
    let inner_table = SymbolTable::build(&program, inner, &mut diagnostics);
    assert!(diagnostics.is_empty());

    let view = SymbolTable::unify(&outer_table, &inner_table, ScopePrecedence::OuterWins);
    assert_eq!(view.lookup("x"), Some(DeclId::Var(outer[0])));
    assert_eq!(view.lookup("z"), Some(DeclId::Var(inner[1])));
    assert_eq!(view.len(), 3);

    let view = SymbolTable::unify(&outer_table, &inner_table, ScopePrecedence::InnerShadows);
    assert_eq!(view.lookup("x"), Some(DeclId::Var(inner[0])));
    assert_eq!(view.lookup("y"), Some(DeclId::Var(outer[1])));
    assert_eq!(view.len(), 3);

    // composing with an empty scope changes nothing
    let empty = SymbolTable::new();
    assert_eq!(SymbolTable::unify(&outer_table, &empty, ScopePrecedence::OuterWins), outer_table);
    assert_eq!(SymbolTable::unify(&empty, &inner_table, ScopePrecedence::OuterWins), inner_table);
    assert_eq!(view.lookup("w"), None);
}

#[test]
fn nested_blocks() {
    let src = "
void f() {
    int i;
    {
        int i;
        {
            int i;
        }
    }
}
";
    for precedence in [ScopePrecedence::OuterWins, ScopePrecedence::InnerShadows] {
        let mut p = TestProgram::new(src);
        let mut blocks = Vec::new();
        let function = p.function("void", "f", &[], |p| {
            p.block(&[("int", "i")], |p| {
                vec![p.block(&[("int", "i")], |p| {
                    let innermost = p.block(&[("int", "i")], |_| Vec::new());
                    blocks.push(innermost);
                    vec![innermost]
                })]
            })
        });
        p.top_level(function);
        let config = CheckConfig::default().with_precedence(precedence);
        let checked = p.check_with(&config);
        assert_eq!(checked.render(), "");

        let program = &checked.program;
        let local = |block: StmtId| match &program[block] {
            Stmt::Block { locals, .. } => DeclId::Var(locals[0]),
            stmt => unreachable!("not a block {stmt:?}"),
        };
        let outermost = local(program[function].body.unwrap());
        let innermost = local(blocks[0]);
        let visible = checked.analysis.block_scope(blocks[0]).unwrap().lookup("i");
        match precedence {
            ScopePrecedence::OuterWins => assert_eq!(visible, Some(outermost)),
            ScopePrecedence::InnerShadows => assert_eq!(visible, Some(innermost)),
        }
    }
}

#[test]
fn formals_and_locals() {
    let src = "void f(int a, double a) { int a; Missing m; }\n";
    let mut p = TestProgram::new(src);
    let function = p.function("void", "f", &[("int", "a"), ("double", "a")], |p| {
        p.block(&[("int", "a"), ("Missing", "m")], |_| Vec::new())
    });
    p.top_level(function);
    let checked = p.check();

    // a local may reuse the name of a formal, they live in different scopes
    let formals = &checked.program[function].formals;
    assert!(matches!(
        checked.analysis.diagnostics[..],
        [DefDiagnostic::DeclConflict { new, old }, DefDiagnostic::IdentifierNotDeclared { .. }]
            if new == DeclId::Var(formals[1]) && old == DeclId::Var(formals[0])
    ));
}

#[test]
fn branches_and_loops() {
    let src = "
void f() {
    if (c) { A a; } else { B b; }
    while (c) { C c; }
    for (; c; ) { D d; }
    return;
}
";
    let mut p = TestProgram::new(src);
    let mut blocks = Vec::new();
    let function = p.function("void", "f", &[], |p| {
        let then_branch = p.block(&[("A", "a")], |_| Vec::new());
        let else_branch = p.block(&[("B", "b")], |_| Vec::new());
        let cond = Expr::default();
        let branch = p.stmt(Stmt::If { cond, then_branch, else_branch: Some(else_branch) });
        let body = p.block(&[("C", "c")], |_| Vec::new());
        let while_loop = p.stmt(Stmt::While { cond, body });
        let body = p.block(&[("D", "d")], |_| Vec::new());
        let for_loop = p.stmt(Stmt::For { init: None, cond, step: None, body });
        let ret = p.stmt(Stmt::Return(None));
        blocks = vec![then_branch, else_branch];
        p.block(&[], |_| vec![branch, while_loop, for_loop, ret])
    });
    p.top_level(function);
    let checked = p.check();

    let missing: Vec<_> = checked
        .analysis
        .diagnostics
        .iter()
        .map(|diag| match diag {
            DefDiagnostic::IdentifierNotDeclared { name, .. } => name.text(),
            diag => unreachable!("unexpected diagnostic {diag:?}"),
        })
        .collect();
    assert_eq!(missing, vec!["A", "B", "C", "D"]);
    for block in blocks {
        assert!(checked.analysis.block_scope(block).is_some());
    }
}

#[test]
fn duplicate_locals() {
    let src = "void f() { int a; double a; switch (x) { case 1: { Missing m; } } }";
    let mut p = TestProgram::new(src);
    let mut case_block = None;
    let function = p.function("void", "f", &[], |p| {
        p.block(&[("int", "a"), ("double", "a")], |p| {
            let block = p.block(&[("Missing", "m")], |_| Vec::new());
            case_block = Some(block);
            let cases = vec![Case { value: Expr::default(), stmts: vec![block] }];
            let switch = Stmt::Switch { discriminant: Expr::default(), cases, default: None };
            vec![p.stmt(switch)]
        })
    });
    p.top_level(function);
    let checked = p.check();

    let body = checked.program[function].body.unwrap();
    let locals = match &checked.program[body] {
        Stmt::Block { locals, .. } => locals.clone(),
        stmt => unreachable!("not a block {stmt:?}"),
    };
    assert_eq!(
        checked.analysis.diagnostics,
        vec![DefDiagnostic::DeclConflict { new: locals[1].into(), old: locals[0].into() }]
    );
    let scope = checked.analysis.block_scope(body).unwrap();
    assert_eq!(scope.lookup("a"), Some(DeclId::Var(locals[0])));
    // switch statements are not entered
    assert_eq!(checked.analysis.block_scope(case_block.unwrap()), None);
}
