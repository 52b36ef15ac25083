//! Relationship validation shared by all four predicates.

use shelf_core::messages::{kind_mismatch, ERR_EXPECTATION_NO_TABLE, ERR_NO_RELATION};
use shelf_core::{AssertResult, AssertionError, ModelClass, Operand, RelationKind};

use crate::AssertConfig;

/// Check that `subject` declares a relation of `expected_kind` toward `expected`.
///
/// The relation is looked up under `accessor` when given; otherwise under the
/// singular form of `expected`'s table name. Checks run in a fixed order and
/// the first failing one is reported:
/// 1. `subject` is a model class
/// 2. `expected` is a model class
/// 3. a relation name can be resolved (accessor, or a non-empty table name)
/// 4. the subject declares a relation under that name
/// 5. the declared kind equals `expected_kind`
///
/// The relation's target is not compared with `expected`.
pub fn validate_relation<S, E>(
    expected_kind: RelationKind,
    subject: &S,
    expected: &E,
    accessor: Option<&str>,
    config: &AssertConfig,
) -> AssertResult<()>
where
    S: Operand + ?Sized,
    E: Operand + ?Sized,
{
    let (subject_class, expected_class) = model_operands(subject, expected, config)?;

    let instance = subject_class.construct();

    let relation_name = match accessor {
        Some(name) => name.to_string(),
        None => {
            let table = expected_class
                .table_name()
                .filter(|table| !table.is_empty())
                .ok_or_else(|| AssertionError::new(ERR_EXPECTATION_NO_TABLE))?;
            config.inflector.singularize(table)
        }
    };

    tracing::debug!(
        subject = subject_class.name(),
        expected = expected_class.name(),
        relation = %relation_name,
        explicit = accessor.is_some(),
        "resolved relation name"
    );

    let relation = instance
        .related(&relation_name)
        .ok_or_else(|| AssertionError::new(ERR_NO_RELATION))?;

    tracing::debug!(
        relation = %relation_name,
        declared = %relation.kind,
        target = %relation.target,
        expected = %expected_kind,
        "comparing relation kind"
    );

    if relation.kind != expected_kind {
        return Err(AssertionError::new(kind_mismatch(expected_kind, relation.kind)));
    }

    Ok(())
}

/// Both operands as model classes, subject first.
pub(crate) fn model_operands<'a, S, E>(
    subject: &'a S,
    expected: &'a E,
    config: &AssertConfig,
) -> AssertResult<(&'a dyn ModelClass, &'a dyn ModelClass)>
where
    S: Operand + ?Sized,
    E: Operand + ?Sized,
{
    let subject_class = subject
        .as_model_class()
        .ok_or_else(|| AssertionError::new(config.wording.subject_not_model()))?;

    let expected_class = expected
        .as_model_class()
        .ok_or_else(|| AssertionError::new(config.wording.expectation_not_model()))?;

    Ok((subject_class, expected_class))
}
