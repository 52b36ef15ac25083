//! Model capability traits.
//!
//! An ORM plugs into shelf by implementing [`ModelClass`] for its model types
//! and [`ModelInstance`] for the instances they construct. Assertions only ever
//! read through these traits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::RelationKind;

/// A model class: an ORM entity type that can build empty instances.
pub trait ModelClass {
    /// Display name of the model.
    fn name(&self) -> &str;

    /// Backing table declared in the model's defaults, if any.
    fn table_name(&self) -> Option<&str>;

    /// Construct an empty, unsaved instance.
    fn construct(&self) -> Box<dyn ModelInstance + '_>;
}

/// An instance of a model class, used to interrogate declared relations.
pub trait ModelInstance {
    /// Resolve the relation declared under `name`, or `None` if there is none.
    fn related(&self, name: &str) -> Option<RelationDescriptor>;
}

/// Metadata describing a declared relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Declared kind.
    pub kind: RelationKind,
    /// Name of the related model.
    pub target: String,
}

impl RelationDescriptor {
    pub fn new(kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

/// Anything that may appear on either side of a relationship assertion.
///
/// Model classes answer with themselves; plain values answer `None` and
/// fail the class checks.
pub trait Operand {
    /// This operand as a model class, if it is one.
    fn as_model_class(&self) -> Option<&dyn ModelClass>;

    /// Short human-readable rendering, for logs.
    fn describe(&self) -> String;
}

impl<T: ModelClass> Operand for T {
    fn as_model_class(&self) -> Option<&dyn ModelClass> {
        Some(self)
    }

    fn describe(&self) -> String {
        self.name().to_string()
    }
}

impl Operand for str {
    fn as_model_class(&self) -> Option<&dyn ModelClass> {
        None
    }

    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl Operand for String {
    fn as_model_class(&self) -> Option<&dyn ModelClass> {
        None
    }

    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl Operand for () {
    fn as_model_class(&self) -> Option<&dyn ModelClass> {
        None
    }

    fn describe(&self) -> String {
        "()".to_string()
    }
}

macro_rules! impl_plain_operand {
    ($($ty:ty),*) => {
        $(
            impl Operand for $ty {
                fn as_model_class(&self) -> Option<&dyn ModelClass> {
                    None
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_plain_operand!(bool, i32, i64, u32, u64, usize, f64);

/// A borrowed, type-erased operand.
///
/// Lets unsized operands such as `str` be held next to model classes. Model
/// classes are kept by reference and rendered on demand; plain values are
/// rendered once, when captured.
#[derive(Clone)]
pub struct OperandRef<'a> {
    kind: OperandKind<'a>,
}

#[derive(Clone)]
enum OperandKind<'a> {
    Model(&'a dyn ModelClass),
    Value(String),
}

impl<'a> OperandRef<'a> {
    pub fn of<O: Operand + ?Sized>(operand: &'a O) -> Self {
        let kind = match operand.as_model_class() {
            Some(model) => OperandKind::Model(model),
            None => OperandKind::Value(operand.describe()),
        };
        Self { kind }
    }

    /// The underlying model class, if the operand is one.
    pub fn model_class(&self) -> Option<&'a dyn ModelClass> {
        match self.kind {
            OperandKind::Model(model) => Some(model),
            OperandKind::Value(_) => None,
        }
    }
}

impl Operand for OperandRef<'_> {
    fn as_model_class(&self) -> Option<&dyn ModelClass> {
        self.model_class()
    }

    fn describe(&self) -> String {
        match &self.kind {
            OperandKind::Model(model) => model.name().to_string(),
            OperandKind::Value(value) => value.clone(),
        }
    }
}

impl fmt::Debug for OperandRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperandRef")
            .field("description", &self.describe())
            .field("is_model", &self.model_class().is_some())
            .finish()
    }
}
