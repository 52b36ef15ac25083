//! The Schema - immutable model lookup.

use crate::{ModelDef, RelationDef};
use shelf_core::{ModelClass, ModelId, ModelInstance, RelationDescriptor};
use std::collections::HashMap;

/// The Schema provides runtime lookup of model definitions.
/// It is immutable after construction.
#[derive(Debug)]
pub struct Schema {
    /// Model definitions by ID.
    models: HashMap<ModelId, ModelDef>,
    /// Model ID lookup by name.
    model_names: HashMap<String, ModelId>,
}

impl Schema {
    /// Create a schema (use SchemaBuilder for construction).
    pub(crate) fn new(models: HashMap<ModelId, ModelDef>, model_names: HashMap<String, ModelId>) -> Self {
        Self {
            models,
            model_names,
        }
    }

    /// Get a model class by name.
    pub fn model(&self, name: &str) -> Option<Model<'_>> {
        self.get_model_def_by_name(name).map(|def| Model { schema: self, def })
    }

    /// Get a model class by ID.
    pub fn model_by_id(&self, id: ModelId) -> Option<Model<'_>> {
        self.models.get(&id).map(|def| Model { schema: self, def })
    }

    /// Get a model definition by name.
    pub fn get_model_def_by_name(&self, name: &str) -> Option<&ModelDef> {
        self.model_names.get(name).and_then(|id| self.models.get(id))
    }

    /// Get a model ID by name.
    pub fn get_model_id(&self, name: &str) -> Option<ModelId> {
        self.model_names.get(name).copied()
    }

    /// Get the number of models.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

/// A model class in a schema.
#[derive(Debug, Clone, Copy)]
pub struct Model<'s> {
    schema: &'s Schema,
    def: &'s ModelDef,
}

impl<'s> Model<'s> {
    pub fn id(&self) -> ModelId {
        self.def.id
    }

    /// The underlying definition.
    pub fn def(&self) -> &'s ModelDef {
        self.def
    }

    /// Build a new, empty record of this model.
    pub fn forge(&self) -> Record<'s> {
        Record {
            schema: self.schema,
            def: self.def,
        }
    }
}

impl ModelClass for Model<'_> {
    fn name(&self) -> &str {
        &self.def.name
    }

    fn table_name(&self) -> Option<&str> {
        self.def.table_name.as_deref()
    }

    fn construct(&self) -> Box<dyn ModelInstance + '_> {
        Box::new(self.forge())
    }
}

/// An empty, unsaved record of a model.
#[derive(Debug, Clone, Copy)]
pub struct Record<'s> {
    schema: &'s Schema,
    def: &'s ModelDef,
}

impl<'s> Record<'s> {
    /// The model this record belongs to.
    pub fn model(&self) -> Model<'s> {
        Model {
            schema: self.schema,
            def: self.def,
        }
    }

    /// The relation definition declared under `accessor`.
    pub fn relation_def(&self, accessor: &str) -> Option<&'s RelationDef> {
        self.def.get_relation(accessor)
    }

    /// The model on the other side of the relation declared under `accessor`.
    pub fn related_model(&self, accessor: &str) -> Option<Model<'s>> {
        self.relation_def(accessor)
            .and_then(|relation| self.schema.model(&relation.target))
    }
}

impl ModelInstance for Record<'_> {
    fn related(&self, name: &str) -> Option<RelationDescriptor> {
        self.relation_def(name)
            .map(|relation| RelationDescriptor::new(relation.kind, relation.target.clone()))
    }
}
