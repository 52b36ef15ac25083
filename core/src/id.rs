//! Identity types for shelf models.

use std::fmt;

/// Unique identifier for a model class within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u32);

impl ModelId {
    /// Create a new ModelId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}
