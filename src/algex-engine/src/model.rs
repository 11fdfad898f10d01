// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::HashMap;

use crate::common::{Error, ErrorKind, Ident};
use crate::document;
use crate::variable::{parse_var, Variable};

/// The equation table: every variable defined by the document, keyed by
/// name.
#[derive(Clone, PartialEq, Debug)]
pub struct Model {
    pub variables: HashMap<Ident, Variable>,
    pub errors: Option<Vec<Error>>,
}

impl Model {
    /// Build the table from an extracted statement list.  If the same
    /// variable is defined twice the last definition wins, silently --
    /// an intentional, documented policy, not enforced uniqueness.
    /// Statements with no `=` are recorded as model errors and skipped;
    /// equations that fail to parse keep their errors on the variable.
    pub fn new(statements: &[String]) -> Self {
        let mut errors: Vec<Error> = Vec::new();
        let mut variables: HashMap<Ident, Variable> = HashMap::new();

        for statement in statements {
            match document::parse_statement(statement) {
                Ok((ident, eqn)) => {
                    let var = parse_var(&ident, &eqn);
                    variables.insert(var.ident.clone(), var);
                }
                Err(err) => {
                    errors.push(Error::new(
                        ErrorKind::Model,
                        err.code,
                        Some(statement.clone()),
                    ));
                }
            }
        }

        Model {
            variables,
            errors: if errors.is_empty() {
                None
            } else {
                Some(errors)
            },
        }
    }

    pub fn get_variable(&self, ident: &str) -> Option<&Variable> {
        self.variables.get(ident)
    }
}

#[cfg(test)]
fn stmts(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_model_builds_table() {
    let model = Model::new(&stmts(&["D = S + 8", "S = 18"]));
    assert!(model.errors.is_none());
    assert_eq!(2, model.variables.len());
    assert_eq!("S + 8", model.get_variable("D").unwrap().eqn());
    assert_eq!("18", model.get_variable("S").unwrap().eqn());
    assert!(model.get_variable("Q").is_none());
}

#[test]
fn test_model_duplicate_definition_last_wins() {
    let model = Model::new(&stmts(&["A = 1", "A = 2"]));
    assert!(model.errors.is_none());
    assert_eq!(1, model.variables.len());
    assert_eq!("2", model.get_variable("A").unwrap().eqn());
}

#[test]
fn test_model_records_malformed_statements() {
    use crate::common::ErrorCode;

    let model = Model::new(&stmts(&["A = 1", "B + 2"]));
    let errors = model.errors.as_ref().unwrap();
    assert_eq!(1, errors.len());
    assert_eq!(ErrorCode::MalformedEquation, errors[0].code);
    // the well-formed statement still made it into the table
    assert!(model.get_variable("A").is_some());
}

#[test]
fn test_model_keeps_unparseable_equations() {
    let model = Model::new(&stmts(&["A = 1 +"]));
    assert!(model.errors.is_none());
    let var = model.get_variable("A").unwrap();
    assert!(var.ast().is_none());
    assert!(var.errors().is_some());
}
