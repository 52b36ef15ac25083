//! SchemaBuilder for constructing an immutable Schema.

use crate::{ModelDef, RelationDef, Schema};
use shelf_core::{ModelId, RelationKind};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during schema construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Duplicate model name: {0}")]
    DuplicateModelName(String),

    #[error("Duplicate relation '{accessor}' on model {model}")]
    DuplicateRelation { model: String, accessor: String },

    #[error("Relation '{accessor}' on model {model} targets unknown model: {target}")]
    UnknownRelationTarget {
        model: String,
        accessor: String,
        target: String,
    },
}

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Builder for constructing an immutable Schema.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Next model ID to allocate.
    next_model_id: u32,
    /// Models being built.
    models: HashMap<ModelId, ModelDef>,
    /// Model name to ID mapping.
    model_names: HashMap<String, ModelId>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model definition.
    pub fn add_model(&mut self, name: impl Into<String>) -> ModelBuilder<'_> {
        let name = name.into();
        let id = ModelId::new(self.next_model_id);
        self.next_model_id += 1;

        ModelBuilder {
            builder: self,
            id,
            name,
            table_name: None,
            relations: Vec::new(),
        }
    }

    /// Build the immutable Schema.
    ///
    /// Relation targets are resolved here rather than in [`ModelBuilder::done`],
    /// so models may refer to models declared after them.
    pub fn build(self) -> SchemaResult<Schema> {
        let mut ids: Vec<&ModelId> = self.models.keys().collect();
        ids.sort();

        for id in ids {
            let model = &self.models[id];
            let mut accessors: Vec<&String> = model.relations.keys().collect();
            accessors.sort();

            for accessor in accessors {
                let relation = &model.relations[accessor];
                if !self.model_names.contains_key(&relation.target) {
                    return Err(SchemaError::UnknownRelationTarget {
                        model: model.name.clone(),
                        accessor: relation.accessor.clone(),
                        target: relation.target.clone(),
                    });
                }
            }
        }

        Ok(Schema::new(self.models, self.model_names))
    }
}

/// Builder for a model definition.
pub struct ModelBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    id: ModelId,
    name: String,
    table_name: Option<String>,
    relations: Vec<RelationDef>,
}

impl<'a> ModelBuilder<'a> {
    /// Set the backing table.
    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Declare a relation of any kind.
    pub fn relation(
        mut self,
        accessor: impl Into<String>,
        kind: RelationKind,
        target: impl Into<String>,
    ) -> Self {
        self.relations.push(RelationDef::new(accessor, kind, target));
        self
    }

    /// Declare a `hasOne` relation.
    pub fn has_one(self, accessor: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(accessor, RelationKind::HasOne, target)
    }

    /// Declare a `hasMany` relation.
    pub fn has_many(self, accessor: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(accessor, RelationKind::HasMany, target)
    }

    /// Declare a `belongsTo` relation.
    pub fn belongs_to(self, accessor: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(accessor, RelationKind::BelongsTo, target)
    }

    /// Declare a `belongsToMany` relation.
    pub fn belongs_to_many(self, accessor: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(accessor, RelationKind::BelongsToMany, target)
    }

    /// Finish building this model.
    pub fn done(self) -> SchemaResult<ModelId> {
        if self.builder.model_names.contains_key(&self.name) {
            return Err(SchemaError::DuplicateModelName(self.name));
        }

        let mut model_def = ModelDef::new(self.id, self.name.clone());
        model_def.table_name = self.table_name;

        for relation in self.relations {
            if model_def.has_relation(&relation.accessor) {
                return Err(SchemaError::DuplicateRelation {
                    model: self.name,
                    accessor: relation.accessor,
                });
            }
            model_def
                .relations
                .insert(relation.accessor.clone(), relation);
        }

        self.builder.model_names.insert(self.name, self.id);
        self.builder.models.insert(self.id, model_def);

        Ok(self.id)
    }
}
