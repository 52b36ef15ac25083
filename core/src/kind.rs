//! Relationship kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseKindError;

/// The kind of a declared relation between two model classes.
///
/// A relation carries exactly one kind. The rendered names match the ORM's
/// own vocabulary and are what failure messages show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    /// One-to-one, foreign key on the related model.
    HasOne,
    /// One-to-many, foreign key on the related model.
    HasMany,
    /// Many-to-one, foreign key on this model.
    BelongsTo,
    /// Many-to-many through a join table.
    BelongsToMany,
}

impl RelationKind {
    /// All kinds, in declaration order.
    pub const ALL: [RelationKind; 4] = [
        RelationKind::HasOne,
        RelationKind::HasMany,
        RelationKind::BelongsTo,
        RelationKind::BelongsToMany,
    ];

    /// The ORM name of this kind (`hasOne`, `hasMany`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::HasOne => "hasOne",
            RelationKind::HasMany => "hasMany",
            RelationKind::BelongsTo => "belongsTo",
            RelationKind::BelongsToMany => "belongsToMany",
        }
    }

    /// The assertion method name that checks for this kind.
    pub fn predicate_name(&self) -> &'static str {
        match self {
            RelationKind::HasOne => "haveOne",
            RelationKind::HasMany => "haveMany",
            RelationKind::BelongsTo => "belongTo",
            RelationKind::BelongsToMany => "belongToMany",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError::new(s))
    }
}
