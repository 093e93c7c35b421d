use pushjs_ir::DataType;

/// A compiled piece of a larger function.
///
/// A fragment either has an inline expression that can be substituted
/// directly, or is bound to a temporary (`bound_name`) and has an empty
/// `inline_expr`. `statements` must run before the value is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFragment {
    pub bound_name: Option<String>,
    pub statements: Vec<String>,
    pub inline_expr: String,
    pub result_type: DataType,
}

impl CodeFragment {
    pub fn inline(statements: Vec<String>, expr: impl Into<String>, result_type: DataType) -> Self {
        Self {
            bound_name: None,
            statements,
            inline_expr: expr.into(),
            result_type,
        }
    }

    pub fn bound(name: impl Into<String>, statements: Vec<String>, result_type: DataType) -> Self {
        Self {
            bound_name: Some(name.into()),
            statements,
            inline_expr: String::new(),
            result_type,
        }
    }

    /// Text that refers to this fragment's value
    pub fn value_ref(&self) -> &str {
        self.bound_name.as_deref().unwrap_or(&self.inline_expr)
    }

    /// Split into the statements to emit and the value reference
    pub fn into_parts(self) -> (Vec<String>, String) {
        let value = self.value_ref().to_string();
        (self.statements, value)
    }
}
