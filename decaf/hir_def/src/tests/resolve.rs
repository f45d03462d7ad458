use expect_test::expect;
use syntax::{BuiltinType, ClassMember, DeclId};

use crate::tests::TestProgram;
use crate::{DefDiagnostic, LookupReason, Ty};

#[test]
fn undeclared_type() {
    let src = "Point p;\n";
    let mut p = TestProgram::new(src);
    let var = p.var("Point", "p");
    p.top_level(var);
    let checked = p.check();

    assert!(checked.analysis.has_errors());
    assert!(checked.analysis.var_type(var).unwrap().is_error());
    let expected = expect![[r#"
        error: *** No declaration found for type 'Point'
          ┌─ /test.decaf:1:1
          │
        1 │ Point p;
          │ ^^^^^ expected a type

    "#]];
    expected.assert_eq(&checked.render());
}

#[test]
fn builtin_types_always_resolve() {
    let src = "int a; double b; bool c; string d; void e;";
    let mut p = TestProgram::new(src);
    let vars = [("int", "a"), ("double", "b"), ("bool", "c"), ("string", "d"), ("void", "e")]
        .map(|(ty, name)| p.var(ty, name));
    for var in vars {
        p.top_level(var);
    }
    let checked = p.check();

    assert!(!checked.analysis.has_errors());
    assert_eq!(checked.analysis.var_type(vars[0]), Some(&Ty::Builtin(BuiltinType::Int)));
    assert!(!checked.analysis.var_type(vars[4]).unwrap().is_error());
    assert_eq!(checked.analysis.var_type(vars[4]), Some(&Ty::Builtin(BuiltinType::Void)));
}

#[test]
fn forward_reference() {
    let src = "A a;\nclass A {}\n";
    let mut p = TestProgram::new(src);
    let var = p.var("A", "a");
    p.top_level(var);
    let class = p.class("A", None, &[], |_| Vec::new());
    let checked = p.check();

    assert_eq!(checked.render(), "");
    assert_eq!(checked.analysis.var_type(var), Some(&Ty::Class(class)));
}

#[test]
fn extends_requires_class() {
    let src = "interface I {}\nclass C extends I {}\n";
    let mut p = TestProgram::new(src);
    p.interface("I", |_| Vec::new());
    let class = p.class("C", Some("I"), &[], |_| Vec::new());
    let checked = p.check();

    assert_eq!(checked.analysis[class].superclass, None);
    let expected = expect![[r#"
        error: *** No declaration found for class 'I'
          ┌─ /test.decaf:2:17
          │
        2 │ class C extends I {}
          │                 ^ expected a class

    "#]];
    expected.assert_eq(&checked.render());
}

#[test]
fn implements_requires_interface() {
    let src = "class A {}\ninterface I {}\nclass C implements A, I, J {}\n";
    let mut p = TestProgram::new(src);
    p.class("A", None, &[], |_| Vec::new());
    let interface = p.interface("I", |_| Vec::new());
    let class = p.class("C", None, &["A", "I", "J"], |_| Vec::new());
    let checked = p.check();

    let reasons: Vec<_> = checked
        .analysis
        .diagnostics
        .iter()
        .map(|diag| match diag {
            DefDiagnostic::IdentifierNotDeclared { name, reason } => (name.text(), *reason),
            diag => unreachable!("unexpected diagnostic {diag:?}"),
        })
        .collect();
    assert_eq!(
        reasons,
        vec![("A", LookupReason::LookingForInterface), ("J", LookupReason::LookingForInterface)]
    );
    assert_eq!(checked.analysis[class].interfaces, vec![interface]);
}

#[test]
fn variable_is_not_a_type() {
    let src = "int T;\nT t;\n";
    let mut p = TestProgram::new(src);
    let ty = p.var("int", "T");
    let var = p.var("T", "t");
    p.top_level(ty);
    p.top_level(var);
    let checked = p.check();

    assert_eq!(checked.analysis.var_type(var), Some(&Ty::ERROR));
    assert!(matches!(
        checked.analysis.diagnostics[..],
        [DefDiagnostic::IdentifierNotDeclared { reason: LookupReason::LookingForType, .. }]
    ));
}

#[test]
fn array_elements() {
    let src = "class A {}\nA[] xs;\nMissing[][] grid;\nint[][] m;\n";
    let mut p = TestProgram::new(src);
    let class = p.class("A", None, &[], |_| Vec::new());
    let xs = p.var("A[]", "xs");
    let grid = p.var("Missing[][]", "grid");
    let matrix = p.var("int[][]", "m");
    for var in [xs, grid, matrix] {
        p.top_level(var);
    }
    let checked = p.check();
    let analysis = &checked.analysis;

    assert_eq!(analysis.diagnostics.len(), 1);
    let xs = analysis.var_type(xs).unwrap();
    assert_eq!(xs, &Ty::Array(Box::new(Ty::Class(class))));
    assert_eq!(xs.display(&checked.program).to_string(), "A[]");
    let grid = analysis.var_type(grid).unwrap();
    assert_eq!(grid, &Ty::Array(Box::new(Ty::Array(Box::new(Ty::ERROR)))));
    let matrix = analysis.var_type(matrix).unwrap();
    assert_eq!(matrix.display(&checked.program).to_string(), "int[][]");
}

#[test]
fn function_signature() {
    let src = "Foo make(Bar b, int n) {}\n";
    let mut p = TestProgram::new(src);
    let function = p.method("Foo", "make", &[("Bar", "b"), ("int", "n")]);
    p.top_level(function);
    let checked = p.check();
    let analysis = &checked.analysis;

    let missing: Vec<_> = analysis
        .diagnostics
        .iter()
        .map(|diag| match diag {
            DefDiagnostic::IdentifierNotDeclared { name, .. } => name.text(),
            diag => unreachable!("unexpected diagnostic {diag:?}"),
        })
        .collect();
    assert_eq!(missing, vec!["Foo", "Bar"]);
    assert_eq!(analysis.return_type(function), Some(&Ty::ERROR));
    let formals = &checked.program[function].formals;
    assert_eq!(analysis.var_type(formals[1]), Some(&Ty::Builtin(BuiltinType::Int)));
}

#[test]
fn interface_prototypes_are_not_resolved() {
    let src = "interface I { Missing f(Unknown u); }\n";
    let mut p = TestProgram::new(src);
    let mut prototype = None;
    p.interface("I", |p| {
        let f = p.prototype("Missing", "f", &[("Unknown", "u")]);
        prototype = Some(f);
        vec![f]
    });
    let checked = p.check();

    assert_eq!(checked.render(), "");
    assert_eq!(checked.analysis.return_type(prototype.unwrap()), None);
}

#[test]
fn class_members_see_the_program() {
    let src = "class Node { Node next; List owner; }\nclass List {}\n";
    let mut p = TestProgram::new(src);
    let mut members = Vec::new();
    let node = p.class("Node", None, &[], |p| {
        members = vec![p.var("Node", "next"), p.var("List", "owner")];
        members.iter().copied().map(ClassMember::Var).collect()
    });
    let list = p.class("List", None, &[], |_| Vec::new());
    let checked = p.check();

    assert_eq!(checked.render(), "");
    assert_eq!(checked.analysis.var_type(members[0]), Some(&Ty::Class(node)));
    assert_eq!(checked.analysis.var_type(members[1]), Some(&Ty::Class(list)));
    assert_eq!(checked.analysis.program_scope.lookup("List"), Some(DeclId::Class(list)));
}
