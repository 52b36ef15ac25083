//! Configuration for relationship assertions.

use serde::{Deserialize, Serialize};
use shelf_core::messages::{
    BOOKSHELF_MODEL_CLASS, ERR_EXPECTATION_NOT_MODEL, ERR_SUBJECT_NOT_MODEL, NEUTRAL_MODEL_CLASS,
};
use shelf_inflect::Inflector;

/// How failure messages name a model class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelWording {
    /// "bookshelf model class", matching the established message texts.
    #[default]
    Bookshelf,
    /// "model class".
    Neutral,
}

impl ModelWording {
    /// The phrase used for a model class.
    pub fn phrase(&self) -> &'static str {
        match self {
            ModelWording::Bookshelf => BOOKSHELF_MODEL_CLASS,
            ModelWording::Neutral => NEUTRAL_MODEL_CLASS,
        }
    }

    /// Failure message for a subject that is not a model class.
    pub fn subject_not_model(&self) -> String {
        ERR_SUBJECT_NOT_MODEL.replace(BOOKSHELF_MODEL_CLASS, self.phrase())
    }

    /// Failure message for an expectation that is not a model class.
    pub fn expectation_not_model(&self) -> String {
        ERR_EXPECTATION_NOT_MODEL.replace(BOOKSHELF_MODEL_CLASS, self.phrase())
    }
}

/// Configuration for relationship assertions
#[derive(Debug, Clone, Default)]
pub struct AssertConfig {
    /// Wording of the class-validation failures
    pub wording: ModelWording,
    /// Derives relation names from table names
    pub inflector: Inflector,
}

impl AssertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wording(mut self, wording: ModelWording) -> Self {
        self.wording = wording;
        self
    }

    pub fn with_inflector(mut self, inflector: Inflector) -> Self {
        self.inflector = inflector;
        self
    }

    pub fn neutral() -> Self {
        Self::default().with_wording(ModelWording::Neutral)
    }
}
