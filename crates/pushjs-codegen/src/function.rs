//! Function assembly

use pushjs_ir::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fragment::CodeFragment;

/// A compiled per-row JavaScript function.
///
/// The remote engine calls it once per row with `parameters` bound to that
/// row's column values. The return value is always a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFunction {
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<String>,
    pub return_expr: String,
}

impl GeneratedFunction {
    pub fn return_type(&self) -> DataType {
        DataType::String
    }

    /// Full function source, e.g. `function(a) { return a.toUpperCase(); }`
    pub fn render(&self) -> String {
        let mut body = String::new();
        for statement in &self.statements {
            body.push_str(statement);
            body.push(' ');
        }
        format!(
            "function({}) {{ {}return {}; }}",
            self.parameters.join(", "),
            body,
            self.return_expr
        )
    }
}

impl fmt::Display for GeneratedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Wrap a string-typed root fragment into a function over `parameters`.
///
/// The root must already have been coerced to `String`.
pub fn assemble(root: CodeFragment, parameters: Vec<String>) -> GeneratedFunction {
    debug_assert_eq!(root.result_type, DataType::String, "root must be coerced to String");
    debug_assert!(!parameters.is_empty(), "generated functions take at least one parameter");

    let (statements, return_expr) = root.into_parts();
    GeneratedFunction {
        parameters,
        statements,
        return_expr,
    }
}
