// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

#![forbid(unsafe_code)]

#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod common;
pub mod ast;
pub mod document;
mod interpreter;
mod model;
mod parser;
mod token;
pub mod validate;
mod variable;

pub use self::common::{Error, ErrorCode, ErrorKind, Ident, Result};
pub use self::interpreter::Interpreter;
pub use self::model::Model;
pub use self::validate::is_valid_equation_token;
pub use self::variable::Variable;

/// Resolve the document's query target to a numeric value: extract the
/// equation statements and the `?TARGET` marker, build the equation
/// table, and evaluate the target against it.
pub fn resolve(document: &str) -> Result<f64> {
    let statements = document::extract_statements(document);
    let target = document::extract_target(document)?;

    let model = Model::new(&statements);

    let mut interpreter = Interpreter::new(&model);
    interpreter.resolve(&target)
}

#[test]
fn test_resolve_end_to_end() {
    use float_cmp::approx_eq;

    let document = "
    X = 5 * 6 + B * (C + D);
    C = 3.2 - D;
    D = S + 8;
    B = S;
    S = 18;
    ?X
    ";

    let value = resolve(document).unwrap();
    assert!(approx_eq!(f64, 87.6, value, epsilon = 1e-9));
}

#[test]
fn test_resolve_end_to_end_with_en_dash() {
    use float_cmp::approx_eq;

    // dash variants pasted from word processors normalize to minus
    let document = "C = 3.2 \u{2013} D;\nD = 26;\n?C\n";
    let value = resolve(document).unwrap();
    assert!(approx_eq!(f64, -22.8, value, epsilon = 1e-9));
}

#[test]
fn test_resolve_no_target_marker() {
    let err = resolve("S = 18;\n").unwrap_err();
    assert_eq!(ErrorCode::NoTargetVariable, err.code);
    assert_eq!(ErrorKind::Document, err.kind);
}

#[test]
fn test_resolve_target_not_defined() {
    let err = resolve("S = 18;\n?X\n").unwrap_err();
    assert_eq!(ErrorCode::DoesNotExist, err.code);
}

#[test]
fn test_resolve_cycle_fails_fast() {
    let err = resolve("A = B;\nB = A;\n?A\n").unwrap_err();
    assert_eq!(ErrorCode::CircularDependency, err.code);
}
