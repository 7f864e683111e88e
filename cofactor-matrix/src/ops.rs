//! Matrix arithmetic and derived-matrix functions

use cofactor_plugin::prelude::*;
use crate::helpers::*;

/// Shared body for `f(a, b) -> Matrix` functions
fn binary(args: &[Value], func: &str, op: fn(&Matrix, &Matrix) -> Result<Matrix, MatrixError>) -> Value {
    if let Err(e) = check_arg_count(args, 2, func) { return Value::Error(e); }

    let a = match extract_matrix(&args[0], func, "a") { Ok(m) => m, Err(e) => return Value::Error(e) };
    let b = match extract_matrix(&args[1], func, "b") { Ok(m) => m, Err(e) => return Value::Error(e) };

    op(&a, &b).into()
}

/// Shared body for `f(m) -> Matrix` functions
fn unary(args: &[Value], func: &str, op: fn(&Matrix) -> Result<Matrix, MatrixError>) -> Value {
    if let Err(e) = check_arg_count(args, 1, func) { return Value::Error(e); }

    let m = match extract_matrix(&args[0], func, "matrix") { Ok(m) => m, Err(e) => return Value::Error(e) };

    op(&m).into()
}

static PAIR_ARGS: [ArgMeta; 2] = [
    ArgMeta { name: "a", typ: "Matrix", description: "First matrix", optional: false, default: None },
    ArgMeta { name: "b", typ: "Matrix", description: "Second matrix", optional: false, default: None },
];

static SQUARE_ARGS: [ArgMeta; 1] = [
    ArgMeta { name: "matrix", typ: "Matrix", description: "Square matrix", optional: false, default: None },
];

// ============ add ============

pub struct AddFn;

static ADD_EXAMPLES: [&str; 1] = ["add([[1,2],[3,4]], [[1,1],[1,1]]) → [[2,3],[4,5]]"];
static ADD_RELATED: [&str; 2] = ["sub", "scale"];

impl FunctionPlugin for AddFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "add", description: "Element-wise matrix sum", usage: "add(a, b)",
            args: &PAIR_ARGS, returns: "Matrix", examples: &ADD_EXAMPLES,
            category: "matrix/ops", related: &ADD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        binary(args, "add", Matrix::add)
    }
}

// ============ sub ============

pub struct SubFn;

static SUB_EXAMPLES: [&str; 1] = ["sub([[1,2],[3,4]], [[1,1],[1,1]]) → [[0,1],[2,3]]"];
static SUB_RELATED: [&str; 2] = ["add", "scale"];

impl FunctionPlugin for SubFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "sub", description: "Element-wise matrix difference", usage: "sub(a, b)",
            args: &PAIR_ARGS, returns: "Matrix", examples: &SUB_EXAMPLES,
            category: "matrix/ops", related: &SUB_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        binary(args, "sub", Matrix::sub)
    }
}

// ============ scale ============

pub struct ScaleFn;

static SCALE_ARGS: [ArgMeta; 2] = [
    ArgMeta { name: "matrix", typ: "Matrix", description: "Matrix to scale", optional: false, default: None },
    ArgMeta { name: "k", typ: "Number", description: "Scalar factor", optional: false, default: None },
];

static SCALE_EXAMPLES: [&str; 1] = ["scale([[1,2],[3,4]], 2) → [[2,4],[6,8]]"];
static SCALE_RELATED: [&str; 2] = ["add", "matmul"];

impl FunctionPlugin for ScaleFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "scale", description: "Multiply every element by a scalar", usage: "scale(matrix, k)",
            args: &SCALE_ARGS, returns: "Matrix", examples: &SCALE_EXAMPLES,
            category: "matrix/ops", related: &SCALE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 2, "scale") { return Value::Error(e); }

        let m = match extract_matrix(&args[0], "scale", "matrix") { Ok(m) => m, Err(e) => return Value::Error(e) };
        let k = match extract_number(&args[1], "scale", "k") { Ok(k) => k, Err(e) => return Value::Error(e) };

        m.scale(k).into()
    }
}

// ============ matmul ============

pub struct MatmulFn;

static MATMUL_EXAMPLES: [&str; 1] = ["matmul(a, b) → a × b"];
static MATMUL_RELATED: [&str; 2] = ["transpose", "scale"];

impl FunctionPlugin for MatmulFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matmul", description: "Matrix multiplication", usage: "matmul(a, b)",
            args: &PAIR_ARGS, returns: "Matrix", examples: &MATMUL_EXAMPLES,
            category: "matrix/ops", related: &MATMUL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        binary(args, "matmul", Matrix::matmul)
    }
}

// ============ transpose ============

pub struct TransposeFn;

static TRANSPOSE_ARGS: [ArgMeta; 1] = [
    ArgMeta { name: "matrix", typ: "Matrix", description: "Matrix to transpose", optional: false, default: None },
];

static TRANSPOSE_EXAMPLES: [&str; 1] = ["transpose(m) → m transposed"];
static TRANSPOSE_RELATED: [&str; 2] = ["matmul", "inverse"];

impl FunctionPlugin for TransposeFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "transpose", description: "Matrix transpose", usage: "transpose(matrix)",
            args: &TRANSPOSE_ARGS, returns: "Matrix", examples: &TRANSPOSE_EXAMPLES,
            category: "matrix/ops", related: &TRANSPOSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary(args, "transpose", Matrix::transpose)
    }
}

// ============ minor ============

pub struct MinorFn;

static MINOR_ARGS: [ArgMeta; 3] = [
    ArgMeta { name: "matrix", typ: "Matrix", description: "Square matrix, at least 2×2", optional: false, default: None },
    ArgMeta { name: "row", typ: "Number", description: "Row to remove (0-based)", optional: false, default: None },
    ArgMeta { name: "col", typ: "Number", description: "Column to remove (0-based)", optional: false, default: None },
];

static MINOR_EXAMPLES: [&str; 1] = ["minor([[1,2,3],[4,5,6],[7,8,9]], 1, 1) → [[1,3],[7,9]]"];
static MINOR_RELATED: [&str; 2] = ["cofactors", "determinant"];

impl FunctionPlugin for MinorFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "minor", description: "Submatrix without one row and one column", usage: "minor(matrix, row, col)",
            args: &MINOR_ARGS, returns: "Matrix", examples: &MINOR_EXAMPLES,
            category: "matrix/inverse", related: &MINOR_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 3, "minor") { return Value::Error(e); }

        let m = match extract_matrix(&args[0], "minor", "matrix") { Ok(m) => m, Err(e) => return Value::Error(e) };
        let row = match extract_usize(&args[1], "minor", "row") { Ok(n) => n, Err(e) => return Value::Error(e) };
        let col = match extract_usize(&args[2], "minor", "col") { Ok(n) => n, Err(e) => return Value::Error(e) };

        m.minor(row, col).into()
    }
}

// ============ cofactors ============

pub struct CofactorsFn;

static COFACTORS_EXAMPLES: [&str; 2] = [
    "cofactors([[4,7],[2,6]]) → [[6,-2],[-7,4]]",
    "cofactors([[5]]) → [[1]]",
];
static COFACTORS_RELATED: [&str; 3] = ["minor", "determinant", "inverse"];

impl FunctionPlugin for CofactorsFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "cofactors", description: "Matrix of signed minor determinants", usage: "cofactors(matrix)",
            args: &SQUARE_ARGS, returns: "Matrix", examples: &COFACTORS_EXAMPLES,
            category: "matrix/inverse", related: &COFACTORS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary(args, "cofactors", Matrix::cofactors)
    }
}

// ============ inverse ============

pub struct InverseFn;

static INVERSE_EXAMPLES: [&str; 1] = ["inverse([[4,7],[2,6]]) → [[0.6,-0.7],[-0.2,0.4]]"];
static INVERSE_RELATED: [&str; 2] = ["determinant", "cofactors"];

impl FunctionPlugin for InverseFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "inverse", description: "Matrix inverse via the adjugate", usage: "inverse(matrix)",
            args: &SQUARE_ARGS, returns: "Matrix", examples: &INVERSE_EXAMPLES,
            category: "matrix/inverse", related: &INVERSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary(args, "inverse", Matrix::inverse)
    }
}
