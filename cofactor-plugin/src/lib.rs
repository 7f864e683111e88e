//! Cofactor Plugin System
//!
//! Provides the trait for exposing matrix operations as named functions,
//! the registry that dispatches calls by name, and the evaluation context
//! handed to every call.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::EvalContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext};
    pub use cofactor_core::prelude::*;
}
