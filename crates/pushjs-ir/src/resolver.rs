//! Column resolver trait and an in-memory schema for column metadata lookup

use crate::DataType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Role a column plays in the remote engine's data model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Dimension,
    /// The row's primary time axis
    TimeDimension,
    /// Pre-aggregated metric; never embeddable in a row function
    Measure,
}

/// Column metadata returned by a resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Name the remote engine knows the column by
    pub canonical_name: String,
    pub role: ColumnRole,
    pub data_type: DataType,
}

/// Trait for resolving columns at compile time.
///
/// Implementations must not change their answers while a compile is in
/// progress.
pub trait ColumnResolver {
    fn lookup(&self, name: &str) -> Option<ResolvedColumn>;
}

impl<T: ColumnResolver + ?Sized> ColumnResolver for &T {
    fn lookup(&self, name: &str) -> Option<ResolvedColumn> {
        (**self).lookup(name)
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("More than one time dimension: {0} and {1}")]
    MultipleTimeDimensions(String, String),
}

/// Column definition as it appears in schema configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_name: Option<String>,
    pub role: ColumnRole,
    pub data_type: DataType,
}

impl ColumnDef {
    pub fn new(name: &str, role: ColumnRole, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            canonical_name: None,
            role,
            data_type,
        }
    }

    /// The time dimension under an alias, resolving to `canonical_name`
    pub fn time_dimension(alias: &str, canonical_name: &str, data_type: DataType) -> Self {
        Self {
            name: alias.to_string(),
            canonical_name: Some(canonical_name.to_string()),
            role: ColumnRole::TimeDimension,
            data_type,
        }
    }
}

/// In-memory resolver over a fixed set of columns
#[derive(Debug, Clone, Default)]
pub struct SchemaResolver {
    columns: HashMap<String, ResolvedColumn>,
    time_column: Option<String>,
}

impl SchemaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defs<I>(defs: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = ColumnDef>,
    {
        let mut schema = Self::new();
        for def in defs {
            schema.add(def)?;
        }
        Ok(schema)
    }

    pub fn add(&mut self, def: ColumnDef) -> Result<(), SchemaError> {
        if self.columns.contains_key(&def.name) {
            return Err(SchemaError::DuplicateColumn(def.name));
        }
        if def.role == ColumnRole::TimeDimension {
            if let Some(existing) = &self.time_column {
                return Err(SchemaError::MultipleTimeDimensions(existing.clone(), def.name));
            }
            self.time_column = Some(def.name.clone());
        }

        let canonical_name = def.canonical_name.unwrap_or_else(|| def.name.clone());
        self.columns.insert(
            def.name,
            ResolvedColumn {
                canonical_name,
                role: def.role,
                data_type: def.data_type,
            },
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl ColumnResolver for SchemaResolver {
    fn lookup(&self, name: &str) -> Option<ResolvedColumn> {
        self.columns.get(name).cloned()
    }
}
