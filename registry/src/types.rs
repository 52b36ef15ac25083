//! Schema definition types.

use shelf_core::{ModelId, RelationKind};
use std::collections::HashMap;

/// A relation declared on a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDef {
    /// Accessor name the relation is declared under.
    pub accessor: String,
    /// Declared kind.
    pub kind: RelationKind,
    /// Name of the related model.
    pub target: String,
}

impl RelationDef {
    pub fn new(accessor: impl Into<String>, kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            kind,
            target: target.into(),
        }
    }
}

/// Model class definition.
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Unique identifier.
    pub id: ModelId,
    /// Model name.
    pub name: String,
    /// Backing table, if declared.
    pub table_name: Option<String>,
    /// Relations by accessor name.
    pub relations: HashMap<String, RelationDef>,
}

impl ModelDef {
    pub fn new(id: ModelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            table_name: None,
            relations: HashMap::new(),
        }
    }

    /// Get a relation definition by accessor name.
    pub fn get_relation(&self, accessor: &str) -> Option<&RelationDef> {
        self.relations.get(accessor)
    }

    /// Check if this model declares a relation under `accessor`.
    pub fn has_relation(&self, accessor: &str) -> bool {
        self.relations.contains_key(accessor)
    }
}
