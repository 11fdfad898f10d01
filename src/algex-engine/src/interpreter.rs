// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::{BTreeSet, HashMap};

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::common::{Ident, Result};
use crate::model::Model;
use crate::resolve_err;

/// Resolves target variables against a read-only equation table.
///
/// Each variable is evaluated exactly once: resolved values are memoized
/// in an arena keyed by name, and multiple references to the same
/// variable all read the same resolved value.  Substitution happens by
/// AST reference rather than text rewriting, so a variable name can
/// never be replaced inside a longer name.
pub struct Interpreter<'a> {
    model: &'a Model,
    values: HashMap<Ident, f64>,
    // variables on the active resolution chain; a revisit is a cycle
    processing: BTreeSet<Ident>,
}

impl<'a> Interpreter<'a> {
    pub fn new(model: &'a Model) -> Self {
        Interpreter {
            model,
            values: HashMap::new(),
            processing: BTreeSet::new(),
        }
    }

    /// Resolve the named target to a numeric value.
    pub fn resolve(&mut self, target: &str) -> Result<f64> {
        if !self.model.variables.contains_key(target) {
            return resolve_err!(DoesNotExist, target.to_string());
        }

        // an earlier failed resolution leaves its chain behind
        self.processing.clear();

        self.value_of(target)
    }

    fn value_of(&mut self, ident: &str) -> Result<f64> {
        // short circuit if we've already figured this out
        if let Some(value) = self.values.get(ident) {
            return Ok(*value);
        }

        if self.processing.contains(ident) {
            return resolve_err!(CircularDependency, ident.to_string());
        }

        let model = self.model;
        let var = match model.variables.get(ident) {
            Some(var) => var,
            None => return resolve_err!(UnknownDependency, ident.to_string()),
        };

        let ast = match var.ast() {
            Some(ast) => ast,
            None => {
                let details = match var.errors() {
                    Some(errors) => format!("{}: {}", ident, errors[0]),
                    None => ident.to_string(),
                };
                return resolve_err!(VariablesHaveErrors, details);
            }
        };

        self.processing.insert(ident.to_string());

        // dependencies are enumerated up front from the equation's
        // identifier set, not discovered through failed evaluation
        for dep in var.direct_deps().iter() {
            self.value_of(dep)?;
        }

        let value = self.eval(ast)?;

        self.processing.remove(ident);
        self.values.insert(ident.to_string(), value);

        Ok(value)
    }

    fn eval(&self, expr: &Expr) -> Result<f64> {
        match expr {
            Expr::Const(_, n, _) => Ok(*n),
            Expr::Var(id, _) => match self.values.get(id) {
                Some(value) => Ok(*value),
                None => resolve_err!(UnknownDependency, id.clone()),
            },
            Expr::Op1(op, l, _) => {
                let l = self.eval(l)?;
                match op {
                    UnaryOp::Positive => Ok(l),
                    UnaryOp::Negative => Ok(-l),
                }
            }
            Expr::Op2(op, l, r, loc) => {
                let l = self.eval(l)?;
                let r = self.eval(r)?;
                match op {
                    BinaryOp::Add => Ok(l + r),
                    BinaryOp::Sub => Ok(l - r),
                    BinaryOp::Mul => Ok(l * r),
                    BinaryOp::Div => {
                        if r == 0.0 {
                            resolve_err!(DivisionByZero, format!("{}:{}", loc.start, loc.end))
                        } else {
                            Ok(l / r)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
use crate::common::ErrorCode;
#[cfg(test)]
use crate::document::extract_statements;

#[cfg(test)]
fn model_from(doc: &str) -> Model {
    Model::new(&extract_statements(doc))
}

#[test]
fn test_resolve_numeric_literal() {
    let model = model_from("S = 18;\n");
    let mut interpreter = Interpreter::new(&model);
    assert_eq!(18.0, interpreter.resolve("S").unwrap());
}

#[test]
fn test_resolve_chain() {
    let model = model_from("D = S + 8;\nS = 18;\n");
    let mut interpreter = Interpreter::new(&model);
    assert_eq!(26.0, interpreter.resolve("D").unwrap());
}

#[test]
fn test_resolve_worked_example() {
    use float_cmp::approx_eq;

    let model = model_from(
        "
        X = 5 * 6 + B * (C + D);
        C = 3.2 - D;
        D = S + 8;
        B = S;
        S = 18;
        ",
    );
    let mut interpreter = Interpreter::new(&model);
    let value = interpreter.resolve("X").unwrap();
    assert!(approx_eq!(f64, 87.6, value, epsilon = 1e-9));
}

#[test]
fn test_resolve_is_idempotent() {
    let model = model_from("D = S + 8;\nS = 18;\n");
    let mut interpreter = Interpreter::new(&model);
    let first = interpreter.resolve("D").unwrap();
    let second = interpreter.resolve("D").unwrap();
    assert_eq!(first, second);

    // a fresh interpreter over the same table agrees
    let mut fresh = Interpreter::new(&model);
    assert_eq!(first, fresh.resolve("D").unwrap());
}

#[test]
fn test_whole_token_substitution() {
    // resolving S must never corrupt the variable named SX
    let model = model_from("X = S + SX;\nS = 18;\nSX = 99;\n");
    let mut interpreter = Interpreter::new(&model);
    assert_eq!(117.0, interpreter.resolve("X").unwrap());
}

#[test]
fn test_repeated_reference_resolves_once() {
    let model = model_from("X = S + S + S;\nS = 7;\n");
    let mut interpreter = Interpreter::new(&model);
    assert_eq!(21.0, interpreter.resolve("X").unwrap());
}

#[test]
fn test_missing_target() {
    let model = model_from("S = 18;\n");
    let mut interpreter = Interpreter::new(&model);
    let err = interpreter.resolve("X").unwrap_err();
    assert_eq!(ErrorCode::DoesNotExist, err.code);
}

#[test]
fn test_undefined_reference() {
    let model = model_from("X = Y;\n");
    let mut interpreter = Interpreter::new(&model);
    let err = interpreter.resolve("X").unwrap_err();
    assert_eq!(ErrorCode::UnknownDependency, err.code);
    assert_eq!(Some("Y".to_string()), err.get_details());
}

#[test]
fn test_circular_dependency() {
    let model = model_from("A = B;\nB = A;\n");
    let mut interpreter = Interpreter::new(&model);
    let err = interpreter.resolve("A").unwrap_err();
    assert_eq!(ErrorCode::CircularDependency, err.code);
}

#[test]
fn test_resolve_after_cycle_error() {
    let model = model_from("A = B;\nB = A;\nC = 5;\n");
    let mut interpreter = Interpreter::new(&model);
    assert!(interpreter.resolve("A").is_err());
    // a failed resolution must not poison later, unrelated ones
    assert_eq!(5.0, interpreter.resolve("C").unwrap());
}

#[test]
fn test_self_reference() {
    let model = model_from("A = A + 1;\n");
    let mut interpreter = Interpreter::new(&model);
    let err = interpreter.resolve("A").unwrap_err();
    assert_eq!(ErrorCode::CircularDependency, err.code);
}

#[test]
fn test_division_by_zero() {
    let model = model_from("X = 1 / Z;\nZ = 0;\n");
    let mut interpreter = Interpreter::new(&model);
    let err = interpreter.resolve("X").unwrap_err();
    assert_eq!(ErrorCode::DivisionByZero, err.code);
}

#[test]
fn test_division() {
    let model = model_from("X = A / B;\nA = 9;\nB = 2;\n");
    let mut interpreter = Interpreter::new(&model);
    assert_eq!(4.5, interpreter.resolve("X").unwrap());
}

#[test]
fn test_unary_minus() {
    let model = model_from("X = -S * 2;\nS = 3;\n");
    let mut interpreter = Interpreter::new(&model);
    assert_eq!(-6.0, interpreter.resolve("X").unwrap());
}

#[test]
fn test_variable_with_parse_error() {
    let model = model_from("X = Y;\nY = 1 +;\n");
    let mut interpreter = Interpreter::new(&model);
    let err = interpreter.resolve("X").unwrap_err();
    assert_eq!(ErrorCode::VariablesHaveErrors, err.code);
}
