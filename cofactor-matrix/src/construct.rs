//! Matrix construction functions

use cofactor_plugin::prelude::*;
use crate::helpers::*;

// ============ matrix ============

pub struct MatrixFn;

static MATRIX_ARGS: [ArgMeta; 1] = [
    ArgMeta {
        name: "data",
        typ: "List",
        description: "Nested list of numbers [[row1], [row2], ...]",
        optional: false,
        default: None,
    },
];

static MATRIX_EXAMPLES: [&str; 1] = ["matrix([[1,2,3],[4,5,6]]) → 2×3 matrix"];

static MATRIX_RELATED: [&str; 2] = ["zeros", "identity"];

impl FunctionPlugin for MatrixFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix",
            description: "Create a matrix from nested list",
            usage: "matrix(data)",
            args: &MATRIX_ARGS,
            returns: "Matrix",
            examples: &MATRIX_EXAMPLES,
            category: "matrix/construct",
            related: &MATRIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 1, "matrix") {
            return Value::Error(e);
        }

        match extract_matrix(&args[0], "matrix", "data") {
            Ok(m) => m.into_owned().into(),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ zeros ============

pub struct ZerosFn;

static ZEROS_ARGS: [ArgMeta; 2] = [
    ArgMeta {
        name: "rows",
        typ: "Number",
        description: "Number of rows (positive)",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "cols",
        typ: "Number",
        description: "Number of columns (positive)",
        optional: false,
        default: None,
    },
];

static ZEROS_EXAMPLES: [&str; 1] = ["zeros(2, 3) → 2×3 matrix of zeros"];

static ZEROS_RELATED: [&str; 2] = ["matrix", "identity"];

impl FunctionPlugin for ZerosFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "zeros",
            description: "Allocate a zero-filled matrix",
            usage: "zeros(rows, cols)",
            args: &ZEROS_ARGS,
            returns: "Matrix",
            examples: &ZEROS_EXAMPLES,
            category: "matrix/construct",
            related: &ZEROS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 2, "zeros") {
            return Value::Error(e);
        }

        let rows = match extract_dimension(&args[0], "zeros", "rows") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let cols = match extract_dimension(&args[1], "zeros", "cols") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        Matrix::new(rows, cols).into()
    }
}

// ============ identity ============

pub struct IdentityFn;

static IDENTITY_ARGS: [ArgMeta; 1] = [
    ArgMeta {
        name: "n",
        typ: "Number",
        description: "Order of the square matrix",
        optional: false,
        default: None,
    },
];

static IDENTITY_EXAMPLES: [&str; 1] = ["identity(3) → 3×3 identity matrix"];

static IDENTITY_RELATED: [&str; 2] = ["zeros", "inverse"];

impl FunctionPlugin for IdentityFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "identity",
            description: "Create an identity matrix",
            usage: "identity(n)",
            args: &IDENTITY_ARGS,
            returns: "Matrix",
            examples: &IDENTITY_EXAMPLES,
            category: "matrix/construct",
            related: &IDENTITY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 1, "identity") {
            return Value::Error(e);
        }

        match extract_dimension(&args[0], "identity", "n") {
            Ok(n) => Matrix::identity(n).into(),
            Err(e) => Value::Error(e),
        }
    }
}
