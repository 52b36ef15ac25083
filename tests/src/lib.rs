//! Shelf test support.
//!
//! - [`fixtures`]: fresh, immutable model schemas for each test
//! - [`assert_fails_with`]: run an assertion and require a specific failure
//! - [`init_tracing`]: opt-in log output for debugging a test run

mod harness;

pub use harness::{assert_fails_with, fails_with, init_tracing};

/// Prelude for integration tests.
pub mod prelude {
    pub use crate::fixtures::{campus, Campus};
    pub use crate::{assert_fails_with, fails_with, init_tracing};
    pub use shelf_assert::{
        expect, validate_relation, Arg, AssertConfig, Extensions, ModelWording, RelationKind,
        RelationsPlugin,
    };
    pub use shelf_core::messages::*;
    pub use shelf_core::{AssertResult, AssertionError, ModelClass};
}
