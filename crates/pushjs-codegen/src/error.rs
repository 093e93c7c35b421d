use pushjs_ir::DataType;
use thiserror::Error;

/// Reason an expression cannot be pushed down.
///
/// Every variant means the same thing to callers: no function is produced
/// and the expression has to be evaluated locally. The variants only record
/// which node or constraint triggered the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Measure column cannot be referenced per row: {0}")]
    MeasureColumn(String),

    #[error("Column name is not a usable JavaScript identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Only one input column allowed, found {first} and {second}")]
    MultipleInputs { first: String, second: String },

    #[error("Expression references no columns")]
    NoInputs,

    #[error("Unsupported cast from {from} to {to}")]
    UnsupportedCast { from: DataType, to: DataType },

    #[error("{func} requires a literal {arg} argument")]
    NonLiteralArgument { func: &'static str, arg: &'static str },

    #[error("{func} expects a {expected} operand, got {actual}")]
    OperandType {
        func: &'static str,
        expected: &'static str,
        actual: DataType,
    },

    #[error("Invalid {data_type} literal: {value}")]
    InvalidLiteral { value: String, data_type: DataType },

    #[error("Concat requires at least one argument")]
    EmptyConcat,
}
