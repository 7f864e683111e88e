//! Matrix property functions

use cofactor_plugin::prelude::*;
use crate::helpers::*;

// ============================================================================
// SHAPE - [rows, cols]
// ============================================================================

pub struct ShapeFn;

static SHAPE_ARGS: [ArgMeta; 1] = [ArgMeta {
    name: "matrix",
    typ: "Matrix",
    description: "Input matrix",
    optional: false,
    default: None,
}];
static SHAPE_EXAMPLES: [&str; 1] = ["shape([[1,2,3],[4,5,6]]) → [2, 3]"];
static SHAPE_RELATED: [&str; 1] = ["zeros"];

impl FunctionPlugin for ShapeFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "shape",
            description: "Get matrix dimensions as [rows, cols]",
            usage: "shape(matrix)",
            args: &SHAPE_ARGS,
            returns: "List",
            examples: &SHAPE_EXAMPLES,
            category: "matrix/props",
            related: &SHAPE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 1, "shape") {
            return Value::Error(e);
        }

        match extract_matrix(&args[0], "shape", "matrix") {
            Ok(m) => Value::List(vec![
                Value::Number(m.rows() as f64),
                Value::Number(m.cols() as f64),
            ]),
            Err(e) => Value::Error(e),
        }
    }
}

// ============================================================================
// EQUALS - Element-wise comparison within the context tolerance
// ============================================================================

pub struct EqualsFn;

static EQUALS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Matrix", "First matrix"),
    ArgMeta::required("b", "Matrix", "Second matrix"),
];
static EQUALS_EXAMPLES: [&str; 2] = [
    "equals([[1,2]], [[1,2.00000001]]) → true",
    "equals([[1]], [[1,1]]) → false",
];
static EQUALS_RELATED: [&str; 1] = ["shape"];

impl FunctionPlugin for EqualsFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "equals",
            description: "True when shapes match and every element differs by at most epsilon",
            usage: "equals(a, b)",
            args: &EQUALS_ARGS,
            returns: "Bool",
            examples: &EQUALS_EXAMPLES,
            category: "matrix/props",
            related: &EQUALS_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 2, "equals") {
            return Value::Error(e);
        }

        let a = match extract_matrix(&args[0], "equals", "a") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };
        let b = match extract_matrix(&args[1], "equals", "b") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        a.equals_within(&b, ctx.tolerance).into()
    }
}

// ============================================================================
// DETERMINANT - Recursive cofactor expansion
// ============================================================================

pub struct DeterminantFn;

static DET_ARGS: [ArgMeta; 1] = [ArgMeta {
    name: "matrix",
    typ: "Matrix",
    description: "Square matrix",
    optional: false,
    default: None,
}];
static DET_EXAMPLES: [&str; 2] = [
    "determinant(identity(3)) → 1",
    "determinant([[1, 2], [3, 4]]) → -2",
];
static DET_RELATED: [&str; 2] = ["inverse", "cofactors"];

impl FunctionPlugin for DeterminantFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "determinant",
            description: "Compute the determinant of a square matrix",
            usage: "determinant(matrix)",
            args: &DET_ARGS,
            returns: "Number",
            examples: &DET_EXAMPLES,
            category: "matrix/props",
            related: &DET_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = check_arg_count(args, 1, "determinant") {
            return Value::Error(e);
        }

        match extract_matrix(&args[0], "determinant", "matrix") {
            Ok(m) => m.determinant().into(),
            Err(e) => Value::Error(e),
        }
    }
}
