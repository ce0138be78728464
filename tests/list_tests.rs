use pl0ast::ast::AstList;
use pl0ast::ast::Node;
use pl0ast::ast::{ConstDecl, ConstDecls, ConstDef, ConstDefs};
use pl0ast::ast::{Empty, Ident, Number};
use pl0ast::ast::{Idents, Stmt, Stmts};
use pl0ast::ast::{ProcDecls, VarDecl, VarDecls};
use pl0ast::ast::{SkipStmt, WriteStmt};
use pl0ast::ast::Expr;
use pl0ast::location::SourceLocation;

fn loc(line: usize) -> SourceLocation {
    SourceLocation::new("test.pl0", line)
}

#[test]
fn test_singleton_has_one_element_and_element_location() {
    let ident = Ident::new(loc(4), "x");
    let idents = Idents::singleton(ident);
    assert_eq!(idents.len(), 1);
    assert!(!idents.is_empty());
    assert_eq!(idents.loc, loc(4));
    assert_eq!(idents.last_elem().unwrap().name, "x");
}

#[test]
fn test_length_after_k_appends_is_k() {
    let empty = Empty::new(loc(1));
    let mut decls = VarDecls::empty(empty);
    assert_eq!(decls.len(), 0);
    for k in 1..=5 {
        let idents = Idents::singleton(Ident::new(loc(k), format!("v{}", k)));
        decls = decls.append(VarDecl::new(idents));
        assert_eq!(decls.len(), k);
    }
}

#[test]
fn test_last_elem_is_most_recently_appended() {
    let mut idents = Idents::singleton(Ident::new(loc(2), "a"));
    idents = idents.append(Ident::new(loc(2), "b"));
    idents = idents.append(Ident::new(loc(2), "c"));
    assert_eq!(idents.last_elem().unwrap().name, "c");
}

#[test]
fn test_empty_list_has_no_last_element() {
    let decls = ProcDecls::empty(Empty::new(loc(3)));
    assert_eq!(decls.len(), 0);
    assert!(decls.is_empty());
    assert!(decls.last_elem().is_none());
}

#[test]
fn test_append_to_empty_makes_element_first() {
    let decls = ConstDecls::empty(Empty::new(loc(1)));
    let def = ConstDef::new(Ident::new(loc(1), "one"), Number::new(loc(1), "1", 1));
    let decls = decls.append(ConstDecl::new(ConstDefs::singleton(def)));
    assert_eq!(decls.len(), 1);
    assert_eq!(decls.decls[0].const_defs.defs[0].ident.name, "one");
}

#[test]
fn test_list_keeps_its_own_location_across_appends() {
    // The wrapper's location comes from the empty marker, not from the
    // elements appended later.
    let decls = ConstDecls::empty(Empty::new(loc(1)));
    let def = ConstDef::new(Ident::new(loc(9), "n"), Number::new(loc(9), "2", 2));
    let decls = decls.append(ConstDecl::new(ConstDefs::singleton(def)));
    assert_eq!(decls.loc, loc(1));
    assert_eq!(decls.decls[0].line(), 9);
}

#[test]
fn test_three_appends_preserve_source_order() {
    let mut decls = ConstDecls::empty(Empty::new(loc(1)));
    for (line, name) in [(2, "a"), (3, "b"), (4, "c")] {
        let def = ConstDef::new(
            Ident::new(loc(line), name),
            Number::new(loc(line), "0", 0),
        );
        decls = decls.append(ConstDecl::new(ConstDefs::singleton(def)));
    }
    assert_eq!(decls.len(), 3);
    let names: Vec<&str> = decls
        .decls
        .iter()
        .map(|d| d.const_defs.defs[0].ident.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_statement_sequence_order_and_last() {
    let mut stmts = Stmts::singleton(Stmt::from(SkipStmt::new(loc(5))));
    let write = WriteStmt::new(Expr::from(Number::new(loc(6), "7", 7)));
    stmts = stmts.append(Stmt::from(write));
    assert_eq!(stmts.len(), 2);
    assert_eq!(stmts.loc, loc(5));
    match stmts.last_elem().unwrap() {
        Stmt::Write(w) => assert_eq!(w.line(), 6),
        other => panic!("expected write statement, got {:?}", other),
    }
}
