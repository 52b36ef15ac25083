//! The relationship methods: `haveOne`, `haveMany`, `belongTo`, `belongToMany`.

use shelf_core::messages::{too_many_arguments, ERR_ACCESSOR_NOT_STRING};
use shelf_core::{AssertResult, AssertionError, Operand, RelationKind};
use std::sync::Arc;

use crate::relation::model_operands;
use crate::{validate_relation, Arg, AssertConfig, Assertion, Extensions, Plugin};

/// Installs one method per relation kind.
///
/// Each method takes `(expected, accessor?)`. A non-string accessor or a third
/// argument fails the assertion.
#[derive(Debug, Clone, Default)]
pub struct RelationsPlugin {
    config: Arc<AssertConfig>,
}

impl RelationsPlugin {
    pub fn new(config: AssertConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AssertConfig {
        &self.config
    }
}

impl Plugin for RelationsPlugin {
    fn install(&self, extensions: &mut Extensions) {
        for kind in RelationKind::ALL {
            let config = Arc::clone(&self.config);
            extensions.add_method(kind.predicate_name(), move |assertion, args| {
                relation_method(kind, &config, assertion, args)
            });
        }
    }
}

fn relation_method(
    kind: RelationKind,
    config: &AssertConfig,
    assertion: &Assertion<'_>,
    args: &[Arg<'_>],
) -> AssertResult<()> {
    match args.first() {
        Some(expected) => check_call(kind, config, assertion, expected, args),
        // A missing expectation is no model class either.
        None => check_call(kind, config, assertion, &(), args),
    }
}

/// Argument shape is checked only once both operands are known to be models,
/// so a non-model subject is always reported first.
fn check_call<E: Operand + ?Sized>(
    kind: RelationKind,
    config: &AssertConfig,
    assertion: &Assertion<'_>,
    expected: &E,
    args: &[Arg<'_>],
) -> AssertResult<()> {
    let subject = assertion.subject();

    let accessor = match args.get(1) {
        None => None,
        Some(Arg::Str(name)) => Some(*name),
        Some(Arg::Operand(_)) => {
            model_operands(subject, expected, config)?;
            return Err(AssertionError::new(ERR_ACCESSOR_NOT_STRING));
        }
    };

    if args.len() > 2 {
        model_operands(subject, expected, config)?;
        return Err(AssertionError::new(too_many_arguments(
            kind.predicate_name(),
            args.len(),
        )));
    }

    validate_relation(kind, subject, expected, accessor, config)
}

impl Assertion<'_> {
    /// Assert a `hasOne` relation named after `expected`'s table.
    pub fn have_one<O: Operand + ?Sized>(&self, expected: &O) -> AssertResult<()> {
        self.relate(RelationKind::HasOne, expected, None)
    }

    /// Assert a `hasOne` relation declared under `accessor`.
    pub fn have_one_via<O: Operand + ?Sized>(&self, expected: &O, accessor: &str) -> AssertResult<()> {
        self.relate(RelationKind::HasOne, expected, Some(accessor))
    }

    /// Assert a `hasMany` relation named after `expected`'s table.
    pub fn have_many<O: Operand + ?Sized>(&self, expected: &O) -> AssertResult<()> {
        self.relate(RelationKind::HasMany, expected, None)
    }

    /// Assert a `hasMany` relation declared under `accessor`.
    pub fn have_many_via<O: Operand + ?Sized>(&self, expected: &O, accessor: &str) -> AssertResult<()> {
        self.relate(RelationKind::HasMany, expected, Some(accessor))
    }

    /// Assert a `belongsTo` relation named after `expected`'s table.
    pub fn belong_to<O: Operand + ?Sized>(&self, expected: &O) -> AssertResult<()> {
        self.relate(RelationKind::BelongsTo, expected, None)
    }

    /// Assert a `belongsTo` relation declared under `accessor`.
    pub fn belong_to_via<O: Operand + ?Sized>(&self, expected: &O, accessor: &str) -> AssertResult<()> {
        self.relate(RelationKind::BelongsTo, expected, Some(accessor))
    }

    /// Assert a `belongsToMany` relation named after `expected`'s table.
    pub fn belong_to_many<O: Operand + ?Sized>(&self, expected: &O) -> AssertResult<()> {
        self.relate(RelationKind::BelongsToMany, expected, None)
    }

    /// Assert a `belongsToMany` relation declared under `accessor`.
    pub fn belong_to_many_via<O: Operand + ?Sized>(
        &self,
        expected: &O,
        accessor: &str,
    ) -> AssertResult<()> {
        self.relate(RelationKind::BelongsToMany, expected, Some(accessor))
    }

    fn relate<O: Operand + ?Sized>(
        &self,
        kind: RelationKind,
        expected: &O,
        accessor: Option<&str>,
    ) -> AssertResult<()> {
        let mut args = vec![Arg::operand(expected)];
        args.extend(accessor.map(Arg::str));
        self.call(kind.predicate_name(), &args)
    }
}
