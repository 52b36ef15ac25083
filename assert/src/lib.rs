//! Shelf Assertions
//!
//! Relationship assertions for ORM model classes:
//!
//! ```ignore
//! expect(&student).to().have_one(&transcript)?;
//! expect(&school).to().have_many_via(&student, "body")?;
//! ```
//!
//! The four predicates (`haveOne`, `haveMany`, `belongTo`, `belongToMany`)
//! are registered into an [`Extensions`] table by the [`RelationsPlugin`] and
//! all run through [`validate_relation`].

mod config;
mod framework;
mod relation;
mod relations;

pub use config::{AssertConfig, ModelWording};
pub use framework::{expect, Arg, Assertion, Extensions, Method, Plugin};
pub use relation::validate_relation;
pub use relations::RelationsPlugin;
pub use shelf_core::{AssertResult, AssertionError, Operand, RelationKind};
