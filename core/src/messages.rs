//! Failure messages raised by relationship assertions.
//!
//! These constants keep the wording identical between the validator, the
//! plugin handlers and the tests that match on it.

/// Failure: the assertion subject is not a model class.
pub const ERR_SUBJECT_NOT_MODEL: &str = "relationship subject should be a bookshelf model class";

/// Failure: the expected related value is not a model class.
pub const ERR_EXPECTATION_NOT_MODEL: &str =
    "relationship expectation should be a bookshelf model class";

/// Failure: the expected model declares no table, so no relation name can be derived.
pub const ERR_EXPECTATION_NO_TABLE: &str = "relationship expectation does not have a tableName";

/// Failure: the subject declares no relation under the resolved name.
pub const ERR_NO_RELATION: &str = "model classes have no relation";

/// Failure: an accessor argument was passed that is not a string.
pub const ERR_ACCESSOR_NOT_STRING: &str = "relationship accessor name should be a string";

/// Phrase naming a model class in the default wording.
pub const BOOKSHELF_MODEL_CLASS: &str = "bookshelf model class";

/// Phrase naming a model class in the neutral wording.
pub const NEUTRAL_MODEL_CLASS: &str = "model class";

/// Failure: the declared relation kind differs from the asserted one.
pub fn kind_mismatch(expected: impl std::fmt::Display, actual: impl std::fmt::Display) -> String {
    format!("expected a '{}' relationship instead of '{}'", expected, actual)
}

/// Failure: a relationship method was called with more than `(expected, accessor)`.
pub fn too_many_arguments(method: &str, count: usize) -> String {
    format!("'{}' takes at most 2 arguments, got {}", method, count)
}

/// Failure: no assertion method is registered under `name`.
pub fn unknown_method(name: &str) -> String {
    format!("no assertion method named '{}'", name)
}
