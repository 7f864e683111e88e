//! Argument extraction for matrix functions

use cofactor_core::{Matrix, MatrixError, Value};
use std::borrow::Cow;

/// Extract a number from a Value
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, MatrixError> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(MatrixError::arg_type(func, arg, "Number", value.type_name())),
    }
}

/// Extract a non-negative integer from a Value
pub fn extract_usize(value: &Value, func: &str, arg: &str) -> Result<usize, MatrixError> {
    let n = extract_number(value, func, arg)?;
    if n < 0.0 || n.fract() != 0.0 || !n.is_finite() {
        return Err(MatrixError::arg_type(func, arg, "non-negative integer", &n.to_string()));
    }
    Ok(n as usize)
}

/// Extract a matrix dimension. Negative integers are a shape error,
/// everything else is handled like `extract_usize`.
pub fn extract_dimension(value: &Value, func: &str, arg: &str) -> Result<usize, MatrixError> {
    let n = extract_number(value, func, arg)?;
    if n < 0.0 && n.is_finite() && n.fract() == 0.0 {
        return Err(MatrixError::invalid_dimension(func, arg, n));
    }
    extract_usize(value, func, arg)
}

/// Extract a matrix from a Value: either a `Value::Matrix` (borrowed as is)
/// or a nested list of number rows (built into a new matrix).
pub fn extract_matrix<'a>(value: &'a Value, func: &str, arg: &str) -> Result<Cow<'a, Matrix>, MatrixError> {
    match value {
        Value::Matrix(m) => Ok(Cow::Borrowed(m)),
        Value::List(rows) => matrix_from_nested_list(rows, func, arg).map(Cow::Owned),
        _ => Err(MatrixError::arg_type(func, arg, "Matrix", value.type_name())),
    }
}

/// Extract a matrix from a nested list of Values
fn matrix_from_nested_list(rows: &[Value], func: &str, arg: &str) -> Result<Matrix, MatrixError> {
    let mut data: Vec<Vec<f64>> = Vec::with_capacity(rows.len());

    for (i, row_val) in rows.iter().enumerate() {
        match row_val {
            Value::List(cols) => {
                let mut row = Vec::with_capacity(cols.len());
                for (j, col_val) in cols.iter().enumerate() {
                    match col_val {
                        Value::Number(n) => row.push(*n),
                        other => return Err(MatrixError::arg_type(
                            func, &format!("{}[{}][{}]", arg, i, j), "Number", other.type_name(),
                        )),
                    }
                }
                data.push(row);
            }
            other => return Err(MatrixError::arg_type(
                func, &format!("{}[{}]", arg, i), "List", other.type_name(),
            )),
        }
    }

    Matrix::from_rows(&data).map_err(|e| e.with_note(format!("{}: argument '{}'", func, arg)))
}

/// Fail unless exactly `expected` arguments were passed
pub fn check_arg_count(args: &[Value], expected: usize, func: &str) -> Result<(), MatrixError> {
    if args.len() != expected {
        return Err(MatrixError::arg_count(func, expected, args.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofactor_core::ErrorKind;

    fn row(xs: &[f64]) -> Value {
        Value::List(xs.iter().map(|&x| Value::Number(x)).collect())
    }

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number(&Value::Number(4.5), "test", "x").unwrap(), 4.5);
        let err = extract_number(&Value::Bool(true), "test", "x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArgType);
    }

    #[test]
    fn test_extract_usize() {
        assert_eq!(extract_usize(&Value::Number(3.0), "test", "n").unwrap(), 3);
        assert!(extract_usize(&Value::Number(-1.0), "test", "n").is_err());
        assert!(extract_usize(&Value::Number(2.5), "test", "n").is_err());
        assert!(extract_usize(&Value::Number(f64::NAN), "test", "n").is_err());
    }

    #[test]
    fn test_extract_dimension() {
        assert_eq!(extract_dimension(&Value::Number(2.0), "test", "rows").unwrap(), 2);
        let err = extract_dimension(&Value::Number(-2.0), "test", "rows").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidShape);
        assert!(err.message.contains("'rows'"));
        let err = extract_dimension(&Value::Number(-0.5), "test", "rows").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArgType);
        let err = extract_dimension(&Value::Number(f64::NEG_INFINITY), "test", "rows").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArgType);
    }

    #[test]
    fn test_extract_matrix_from_list() {
        let val = Value::List(vec![row(&[1.0, 2.0]), row(&[3.0, 4.0])]);
        let m = extract_matrix(&val, "test", "m").unwrap();
        assert!(matches!(m, Cow::Owned(_)));
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get(1, 0), Some(3.0));
    }

    #[test]
    fn test_extract_matrix_borrows() {
        let val = Value::Matrix(Matrix::identity(3).unwrap());
        let m = extract_matrix(&val, "test", "m").unwrap();
        assert!(matches!(m, Cow::Borrowed(_)));
    }

    #[test]
    fn test_extract_matrix_errors() {
        let ragged = Value::List(vec![row(&[1.0, 2.0]), row(&[3.0])]);
        assert_eq!(extract_matrix(&ragged, "test", "m").unwrap_err().kind, ErrorKind::InvalidShape);

        let bad_cell = Value::List(vec![Value::List(vec![Value::Null])]);
        let err = extract_matrix(&bad_cell, "test", "m").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArgType);
        assert!(err.message.contains("m[0][0]"));

        let empty = Value::List(vec![]);
        assert_eq!(extract_matrix(&empty, "test", "m").unwrap_err().kind, ErrorKind::InvalidShape);

        assert_eq!(extract_matrix(&Value::Number(1.0), "test", "m").unwrap_err().kind, ErrorKind::ArgType);
    }

    #[test]
    fn test_check_arg_count() {
        assert!(check_arg_count(&[Value::Null], 1, "f").is_ok());
        assert_eq!(check_arg_count(&[], 1, "f").unwrap_err().kind, ErrorKind::ArgCount);
    }
}
