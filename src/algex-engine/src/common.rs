// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::{error, result};

pub type Ident = String;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    NoError,      // will never be produced
    DoesNotExist, // the named entity doesn't exist
    UnrecognizedEof,
    UnrecognizedToken,
    ExtraToken,
    ExpectedNumber,
    EmptyEquation,
    MalformedEquation,
    NoTargetVariable,
    UnknownDependency,
    CircularDependency,
    DivisionByZero,
    VariablesHaveErrors,
    Generic,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            DoesNotExist => "does_not_exist",
            UnrecognizedEof => "unrecognized_eof",
            UnrecognizedToken => "unrecognized_token",
            ExtraToken => "extra_token",
            ExpectedNumber => "expected_number",
            EmptyEquation => "empty_equation",
            MalformedEquation => "malformed_equation",
            NoTargetVariable => "no_target_variable",
            UnknownDependency => "unknown_dependency",
            CircularDependency => "circular_dependency",
            DivisionByZero => "division_by_zero",
            VariablesHaveErrors => "variables_have_errors",
            Generic => "generic",
        };

        write!(f, "{}", name)
    }
}

/// An error localized to a span of a single equation's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquationError {
    pub start: u16,
    pub end: u16,
    pub code: ErrorCode,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.code)
    }
}

#[macro_export]
macro_rules! eqn_err(
    ($code:tt, $start:expr, $end:expr) => {{
        use $crate::common::{EquationError, ErrorCode};
        Err(EquationError{ start: $start as u16, end: $end as u16, code: ErrorCode::$code })
    }}
);

#[macro_export]
macro_rules! document_err(
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Document, ErrorCode::$code, Some($str)))
    }}
);

#[macro_export]
macro_rules! resolve_err(
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Resolution, ErrorCode::$code, Some($str)))
    }}
);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Document,
    Model,
    Resolution,
    Variable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub(crate) details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        Error {
            kind: ErrorKind::Resolution,
            code: ErrorCode::Generic,
            details: Some(err.to_string()),
        }
    }
}

impl From<EquationError> for Error {
    fn from(err: EquationError) -> Self {
        Error {
            kind: ErrorKind::Variable,
            code: err.code,
            details: Some(format!("{}:{}", err.start, err.end)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Document => "DocumentError",
            ErrorKind::Model => "ModelError",
            ErrorKind::Resolution => "ResolutionError",
            ErrorKind::Variable => "VariableError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;
pub type EquationResult<T> = result::Result<T, EquationError>;

#[test]
fn test_error_display() {
    let err = Error::new(
        ErrorKind::Resolution,
        ErrorCode::CircularDependency,
        Some("A".to_string()),
    );
    assert_eq!("ResolutionError{circular_dependency: A}", format!("{}", err));

    let err = Error::new(ErrorKind::Document, ErrorCode::NoTargetVariable, None);
    assert_eq!("DocumentError{no_target_variable}", format!("{}", err));
}

#[test]
fn test_equation_error_display() {
    let err = EquationError {
        start: 3,
        end: 5,
        code: ErrorCode::UnrecognizedToken,
    };
    assert_eq!("3:5:unrecognized_token", format!("{}", err));
}
