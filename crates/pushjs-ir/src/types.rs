//! Type system for pushjs expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type carried by every expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    // Numeric
    Short,
    Integer,
    Long,
    Float,
    Double,

    // Text
    String,

    Boolean,

    // Temporal
    Date,
    Timestamp,

    // Special
    Null,
}

impl DataType {
    pub fn is_numeric(self) -> bool {
        self.is_integral() || self.is_fractional()
    }

    pub fn is_integral(self) -> bool {
        matches!(self, DataType::Short | DataType::Integer | DataType::Long)
    }

    pub fn is_fractional(self) -> bool {
        matches!(self, DataType::Float | DataType::Double)
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Short => "Short",
            DataType::Integer => "Integer",
            DataType::Long => "Long",
            DataType::Float => "Float",
            DataType::Double => "Double",
            DataType::String => "String",
            DataType::Boolean => "Boolean",
            DataType::Date => "Date",
            DataType::Timestamp => "Timestamp",
            DataType::Null => "Null",
        }
    }

    /// Every type, in declaration order
    pub const ALL: [DataType; 10] = [
        DataType::Short,
        DataType::Integer,
        DataType::Long,
        DataType::Float,
        DataType::Double,
        DataType::String,
        DataType::Boolean,
        DataType::Date,
        DataType::Timestamp,
        DataType::Null,
    ];
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
