// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::HashSet;

use crate::ast::{Expr, Visitor};
use crate::common::{EquationError, Ident};
use crate::parser;

/// A single equation: a variable name bound to the parsed form of its
/// defining expression.
#[derive(Clone, PartialEq, Debug)]
pub struct Variable {
    pub ident: Ident,
    pub eqn: String,
    pub ast: Option<Expr>,
    pub errors: Vec<EquationError>,
    pub direct_deps: HashSet<Ident>,
}

impl Variable {
    pub fn ident(&self) -> &str {
        self.ident.as_str()
    }

    pub fn eqn(&self) -> &str {
        self.eqn.as_str()
    }

    pub fn ast(&self) -> Option<&Expr> {
        self.ast.as_ref()
    }

    pub fn direct_deps(&self) -> &HashSet<Ident> {
        &self.direct_deps
    }

    pub fn errors(&self) -> Option<&Vec<EquationError>> {
        if self.errors.is_empty() {
            return None;
        }

        Some(&self.errors)
    }
}

fn parse_eqn(eqn: &str) -> (Option<Expr>, Vec<EquationError>) {
    use crate::common::ErrorCode;

    match parser::parse(eqn) {
        Ok(Some(ast)) => (Some(ast), Vec::new()),
        Ok(None) => (
            None,
            vec![EquationError {
                start: 0,
                end: 0,
                code: ErrorCode::EmptyEquation,
            }],
        ),
        Err(errors) => (None, errors),
    }
}

/// Parse one (name, expression) pair into a Variable, recording any
/// equation errors on the variable rather than failing table
/// construction.
pub fn parse_var(ident: &str, eqn: &str) -> Variable {
    let (ast, errors) = parse_eqn(eqn);
    let direct_deps = match &ast {
        Some(ast) => identifier_set(ast),
        None => HashSet::new(),
    };
    Variable {
        ident: ident.to_string(),
        eqn: eqn.to_string(),
        ast,
        errors,
        direct_deps,
    }
}

struct IdentifierSetVisitor {
    identifiers: HashSet<Ident>,
}

impl Visitor<()> for IdentifierSetVisitor {
    fn walk(&mut self, e: &Expr) {
        match e {
            Expr::Const(_, _, _) => (),
            Expr::Var(id, _) => {
                self.identifiers.insert(id.clone());
            }
            Expr::Op2(_, l, r, _) => {
                self.walk(l);
                self.walk(r);
            }
            Expr::Op1(_, l, _) => {
                self.walk(l);
            }
        }
    }
}

/// The set of variables referenced by an expression -- the direct
/// dependencies of the equation it defines.
pub fn identifier_set(e: &Expr) -> HashSet<Ident> {
    let mut id_visitor = IdentifierSetVisitor {
        identifiers: HashSet::new(),
    };
    id_visitor.walk(e);
    id_visitor.identifiers
}

#[test]
fn test_identifier_sets() {
    let cases: &[(&str, &[&str])] = &[
        ("a + b * (c + d)", &["a", "b", "c", "d"]),
        ("-(a)", &["a"]),
        ("S + SX", &["S", "SX"]),
        ("3.2 - 8", &[]),
        ("a / a", &["a"]),
    ];

    for (eqn, id_list) in cases.iter() {
        let (ast, errors) = parse_eqn(eqn);
        assert_eq!(0, errors.len());
        assert!(ast.is_some());
        let ast = ast.unwrap();
        let id_set_expected: HashSet<Ident> = id_list.iter().map(|s| s.to_string()).collect();
        let id_set_test = identifier_set(&ast);
        assert_eq!(id_set_expected, id_set_test);
    }
}

#[test]
fn test_parse_var() {
    let var = parse_var("D", "S + 8");
    assert_eq!("D", var.ident());
    assert_eq!("S + 8", var.eqn());
    assert!(var.ast().is_some());
    assert!(var.errors().is_none());
    let expected: HashSet<Ident> = ["S".to_string()].into_iter().collect();
    assert_eq!(&expected, var.direct_deps());
}

#[test]
fn test_parse_var_records_errors() {
    let var = parse_var("D", "S +");
    assert!(var.ast().is_none());
    assert!(var.errors().is_some());
    assert!(var.direct_deps().is_empty());

    let var = parse_var("D", "");
    assert!(var.ast().is_none());
    let errors = var.errors().unwrap();
    assert_eq!(crate::common::ErrorCode::EmptyEquation, errors[0].code);
}
