//! Shelf Core Types
//!
//! This crate provides the foundational types shared by every shelf component:
//! - Identity types (ModelId)
//! - The closed set of relationship kinds (RelationKind)
//! - Model capability traits (ModelClass, ModelInstance, Operand)
//! - The assertion failure type and its message texts

mod error;
mod id;
mod kind;
pub mod messages;
mod model;

pub use error::*;
pub use id::*;
pub use kind::*;
pub use model::*;
