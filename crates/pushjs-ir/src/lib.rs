//! pushjs expression IR
//!
//! Typed scalar expression trees handed over by the query planner, plus the
//! column metadata interface the code generator consumes. All types are
//! deterministically serializable so compiled functions can be cached by
//! fingerprint.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

mod resolver;
mod types;

pub use resolver::{ColumnDef, ColumnResolver, ColumnRole, ResolvedColumn, SchemaError, SchemaResolver};
pub use types::*;

/// A typed expression node.
///
/// `data_type` is the node's semantic type as inferred by the planner. For
/// `Cast` it is the cast target and for `Literal` the literal's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    #[serde(flatten)]
    pub kind: ExprKind,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

/// Expression variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExprKind {
    Column {
        name: String,
    },
    Literal {
        /// Source text of the value; `None` is SQL NULL
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Cast {
        expr: Box<Expr>,
    },
    Concat {
        args: Vec<Expr>,
    },
    Upper {
        expr: Box<Expr>,
    },
    Lower {
        expr: Box<Expr>,
    },
    Substring {
        expr: Box<Expr>,
        pos: Box<Expr>,
        len: Box<Expr>,
    },
    ToDate {
        expr: Box<Expr>,
    },
    DateAdd {
        date: Box<Expr>,
        days: Box<Expr>,
    },
    DateSub {
        date: Box<Expr>,
        days: Box<Expr>,
    },
    Extract {
        field: DateField,
        expr: Box<Expr>,
    },
    Arithmetic {
        op: ArithOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Year,
    Month,
    Hour,
    Minute,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Mod => "%",
        }
    }
}

impl Expr {
    pub fn new(kind: ExprKind, data_type: DataType) -> Self {
        Self { kind, data_type }
    }

    pub fn column(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(ExprKind::Column { name: name.into() }, data_type)
    }

    pub fn literal(value: impl Into<String>, data_type: DataType) -> Self {
        Self::new(ExprKind::Literal { value: Some(value.into()) }, data_type)
    }

    pub fn null() -> Self {
        Self::new(ExprKind::Literal { value: None }, DataType::Null)
    }

    pub fn cast(expr: Expr, target: DataType) -> Self {
        Self::new(ExprKind::Cast { expr: Box::new(expr) }, target)
    }

    pub fn concat(args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Concat { args }, DataType::String)
    }

    pub fn upper(expr: Expr) -> Self {
        Self::new(ExprKind::Upper { expr: Box::new(expr) }, DataType::String)
    }

    pub fn lower(expr: Expr) -> Self {
        Self::new(ExprKind::Lower { expr: Box::new(expr) }, DataType::String)
    }

    pub fn substring(expr: Expr, pos: Expr, len: Expr) -> Self {
        Self::new(
            ExprKind::Substring {
                expr: Box::new(expr),
                pos: Box::new(pos),
                len: Box::new(len),
            },
            DataType::String,
        )
    }

    pub fn to_date(expr: Expr) -> Self {
        Self::new(ExprKind::ToDate { expr: Box::new(expr) }, DataType::Date)
    }

    pub fn date_add(date: Expr, days: Expr) -> Self {
        Self::new(
            ExprKind::DateAdd {
                date: Box::new(date),
                days: Box::new(days),
            },
            DataType::Date,
        )
    }

    pub fn date_sub(date: Expr, days: Expr) -> Self {
        Self::new(
            ExprKind::DateSub {
                date: Box::new(date),
                days: Box::new(days),
            },
            DataType::Date,
        )
    }

    pub fn extract(field: DateField, expr: Expr) -> Self {
        Self::new(
            ExprKind::Extract {
                field,
                expr: Box::new(expr),
            },
            DataType::Integer,
        )
    }

    pub fn year(expr: Expr) -> Self {
        Self::extract(DateField::Year, expr)
    }

    pub fn month(expr: Expr) -> Self {
        Self::extract(DateField::Month, expr)
    }

    pub fn hour(expr: Expr) -> Self {
        Self::extract(DateField::Hour, expr)
    }

    pub fn minute(expr: Expr) -> Self {
        Self::extract(DateField::Minute, expr)
    }

    pub fn second(expr: Expr) -> Self {
        Self::extract(DateField::Second, expr)
    }

    pub fn arithmetic(op: ArithOp, left: Expr, right: Expr, data_type: DataType) -> Self {
        Self::new(
            ExprKind::Arithmetic {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            data_type,
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Literal { .. })
    }

    /// Short variant name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            ExprKind::Column { .. } => "column",
            ExprKind::Literal { .. } => "literal",
            ExprKind::Cast { .. } => "cast",
            ExprKind::Concat { .. } => "concat",
            ExprKind::Upper { .. } => "upper",
            ExprKind::Lower { .. } => "lower",
            ExprKind::Substring { .. } => "substring",
            ExprKind::ToDate { .. } => "to_date",
            ExprKind::DateAdd { .. } => "date_add",
            ExprKind::DateSub { .. } => "date_sub",
            ExprKind::Extract { .. } => "extract",
            ExprKind::Arithmetic { .. } => "arithmetic",
        }
    }

    /// Calculate fingerprint (SHA-256) for caching compiled functions
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("IR should always serialize");
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
