//! Cofactor Matrix - matrix operations as named functions
//!
//! Exposes the engine in `cofactor-core` through the plugin registry:
//! - Construction (matrix, zeros, identity)
//! - Arithmetic (add, sub, scale, matmul, transpose)
//! - Properties (shape, equals, determinant)
//! - Inverse family (minor, cofactors, inverse)
//!
//! Matrix arguments may be passed as `Value::Matrix` or as a nested list of
//! number rows.

mod helpers;
mod construct;
mod ops;
mod props;

pub use helpers::extract_matrix;

use cofactor_plugin::PluginRegistry;

/// Load matrix functions into registry
pub fn load_matrix_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Construction
        .with_function(construct::MatrixFn)
        .with_function(construct::ZerosFn)
        .with_function(construct::IdentityFn)

        // Arithmetic
        .with_function(ops::AddFn)
        .with_function(ops::SubFn)
        .with_function(ops::ScaleFn)
        .with_function(ops::MatmulFn)
        .with_function(ops::TransposeFn)

        // Properties
        .with_function(props::ShapeFn)
        .with_function(props::EqualsFn)
        .with_function(props::DeterminantFn)

        // Inverse
        .with_function(ops::MinorFn)
        .with_function(ops::CofactorsFn)
        .with_function(ops::InverseFn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofactor_plugin::prelude::*;

    fn registry() -> PluginRegistry {
        load_matrix_library(PluginRegistry::new())
    }

    fn list(rows: &[&[f64]]) -> Value {
        Value::List(rows.iter()
            .map(|r| Value::List(r.iter().map(|&x| Value::Number(x)).collect()))
            .collect())
    }

    #[test]
    fn test_load_matrix_library() {
        let registry = registry();
        assert_eq!(
            registry.function_names(),
            vec![
                "add", "cofactors", "determinant", "equals", "identity", "inverse", "matmul",
                "matrix", "minor", "scale", "shape", "sub", "transpose", "zeros",
            ]
        );
    }

    #[test]
    fn test_inverse_round_trip_through_registry() {
        let registry = registry();
        let ctx = EvalContext::new();
        let a = registry.call_function("matrix", &[list(&[&[2.0, 5.0, 7.0], &[6.0, 3.0, 4.0], &[5.0, -2.0, -3.0]])], &ctx);
        let inv = registry.call_function("inverse", &[a.clone()], &ctx);
        let product = registry.call_function("matmul", &[a, inv], &ctx);
        let identity = registry.call_function("identity", &[Value::Number(3.0)], &ctx);

        let same = registry.call_function("equals", &[product, identity], &ctx);
        assert_eq!(same.as_bool(), Some(true));
    }

    #[test]
    fn test_unknown_function() {
        let registry = registry();
        let result = registry.call_function("inverce", &[], &EvalContext::new());
        let err = result.as_error().unwrap();
        assert_eq!(err.kind, ErrorKind::UndefinedFunc);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("inverse"));
    }

    #[test]
    fn test_help_lists_categories() {
        let registry = registry();
        let help = registry.help(None);
        let json: serde_json::Value = serde_json::from_str(help.as_text().unwrap()).unwrap();
        let inverse_family = json["matrix/inverse"].as_array().unwrap();
        assert_eq!(inverse_family.len(), 3);
        assert_eq!(json["matrix/construct"][0], "identity");
    }

    #[test]
    fn test_help_for_inverse() {
        let registry = registry();
        let help = registry.help(Some("inverse"));
        let json: serde_json::Value = serde_json::from_str(help.as_text().unwrap()).unwrap();
        assert_eq!(json["usage"], "inverse(matrix)");
        assert_eq!(json["returns"], "Matrix");
    }
}
