//! JavaScript code generation for expression pushdown
//!
//! Compiles a typed scalar expression into a single JavaScript function the
//! remote engine evaluates per row. Compilation is all-or-nothing: if any
//! node cannot be expressed, no function is produced and the caller keeps
//! evaluating the expression locally.

mod coerce;
mod error;
mod fragment;
mod function;
mod names;
mod translator;

pub use coerce::{coerce, to_date_like};
pub use error::CompileError;
pub use fragment::CodeFragment;
pub use function::{assemble, GeneratedFunction};
pub use names::{is_usable_identifier, TempNames, TEMP_PREFIX};
pub use translator::Translator;

use pushjs_ir::{ColumnResolver, DataType, Expr};
use tracing::debug;

/// Compiler front door holding the column resolver and input policy
pub struct JsCompiler<'a> {
    resolver: &'a dyn ColumnResolver,
    allow_multiple_inputs: bool,
}

impl<'a> JsCompiler<'a> {
    /// Single-input compiler; see [`JsCompiler::allow_multiple_inputs`]
    pub fn new(resolver: &'a dyn ColumnResolver) -> Self {
        Self {
            resolver,
            allow_multiple_inputs: false,
        }
    }

    pub fn allow_multiple_inputs(mut self, allow: bool) -> Self {
        self.allow_multiple_inputs = allow;
        self
    }

    /// Compile `expr`, reporting why it cannot be pushed down on failure
    pub fn try_compile(&self, expr: &Expr) -> Result<GeneratedFunction, CompileError> {
        let mut translator = Translator::new(self.resolver, self.allow_multiple_inputs);
        let root = translator.translate(expr)?;
        let root = translator.cast(root, DataType::String)?;

        let parameters = translator.into_inputs();
        if parameters.is_empty() {
            return Err(CompileError::NoInputs);
        }

        Ok(assemble(root, parameters))
    }

    /// Compile `expr`; `None` means evaluate it locally
    pub fn compile(&self, expr: &Expr) -> Option<GeneratedFunction> {
        match self.try_compile(expr) {
            Ok(function) => {
                debug!(
                    kind = expr.kind_name(),
                    parameters = ?function.parameters,
                    "compiled expression for pushdown"
                );
                Some(function)
            }
            Err(reason) => {
                debug!(kind = expr.kind_name(), %reason, "expression cannot be pushed down");
                None
            }
        }
    }
}

/// One-shot form of [`JsCompiler::compile`]
pub fn compile(
    expr: &Expr,
    resolver: &dyn ColumnResolver,
    allow_multiple_inputs: bool,
) -> Option<GeneratedFunction> {
    JsCompiler::new(resolver)
        .allow_multiple_inputs(allow_multiple_inputs)
        .compile(expr)
}
