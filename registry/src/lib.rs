//! Shelf Registry
//!
//! An in-memory model schema: model classes, their tables and their declared
//! relations. The schema is immutable after construction via SchemaBuilder,
//! and its models implement the shelf capability traits so assertions can
//! interrogate them like any other ORM.

mod builder;
mod schema;
mod types;

pub use builder::{ModelBuilder, SchemaBuilder, SchemaError, SchemaResult};
pub use schema::{Model, Record, Schema};
pub use types::*;
