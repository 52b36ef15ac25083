//! Cross-predicate properties of relationship assertions.

use pretty_assertions::assert_eq;
use shelf_registry::SchemaBuilder;
use shelf_tests::prelude::*;

/// Every declared relation in the campus, as (subject, expected, accessor, kind).
fn declared() -> Vec<(&'static str, &'static str, Option<&'static str>, RelationKind)> {
    vec![
        ("Student", "Transcript", None, RelationKind::HasOne),
        ("Class", "Slacker", Some("mistake"), RelationKind::HasOne),
        ("School", "Class", None, RelationKind::HasMany),
        ("School", "Student", Some("body"), RelationKind::HasMany),
        ("Class", "School", None, RelationKind::BelongsTo),
        ("School", "Student", Some("student_body_president"), RelationKind::BelongsTo),
        ("Class", "Student", None, RelationKind::BelongsToMany),
        ("School", "Transcript", Some("records"), RelationKind::BelongsToMany),
    ]
}

fn call(
    extensions: &Extensions,
    c: &Campus,
    kind: RelationKind,
    subject: &str,
    expected: &str,
    accessor: Option<&str>,
) -> AssertResult<()> {
    let subject = c.schema().model(subject).unwrap();
    let expected = c.schema().model(expected).unwrap();

    let mut args = vec![Arg::operand(&expected)];
    args.extend(accessor.map(Arg::str));
    extensions.expect(&subject).call(kind.predicate_name(), &args)
}

#[test]
fn test_only_the_declared_kind_passes() {
    init_tracing();
    let c = campus();
    let extensions = Extensions::with_relations();

    for (subject, expected, accessor, declared_kind) in declared() {
        for kind in RelationKind::ALL {
            let result = call(&extensions, &c, kind, subject, expected, accessor);
            if kind == declared_kind {
                assert!(result.is_ok(), "{} {} {}", subject, kind.predicate_name(), expected);
            } else {
                assert_eq!(
                    result.unwrap_err().message(),
                    kind_mismatch(kind, declared_kind),
                    "{} {} {}",
                    subject,
                    kind.predicate_name(),
                    expected
                );
            }
        }
    }
}

#[test]
fn test_no_relation_fails_every_predicate() {
    let c = campus();
    let extensions = Extensions::with_relations();

    for kind in RelationKind::ALL {
        let result = call(&extensions, &c, kind, "Transcript", "Student", None);
        assert_eq!(result.unwrap_err().message(), ERR_NO_RELATION);

        let result = call(&extensions, &c, kind, "Student", "School", Some("missing"));
        assert_eq!(result.unwrap_err().message(), ERR_NO_RELATION);
    }
}

#[test]
fn test_non_model_subject_wins_over_everything() {
    let c = campus();
    let extensions = Extensions::with_relations();
    let school = c.school();

    for kind in RelationKind::ALL {
        for expected in [Arg::operand(&school), Arg::str("nope"), Arg::operand(&7i64)] {
            let result = extensions.expect(&true).call(kind.predicate_name(), &[expected]);
            assert_eq!(result.unwrap_err().message(), ERR_SUBJECT_NOT_MODEL);
        }
    }
}

#[test]
fn test_non_model_subject_wins_over_malformed_arguments() {
    let c = campus();
    let extensions = Extensions::with_relations();
    let school = c.school();

    let malformed = [
        vec![Arg::operand(&school), Arg::operand(&school)],
        vec![Arg::operand(&school), Arg::str("body"), Arg::str("extra")],
    ];

    for kind in RelationKind::ALL {
        for args in &malformed {
            let result = extensions.expect("not a model").call(kind.predicate_name(), args);
            assert_eq!(result.unwrap_err().message(), ERR_SUBJECT_NOT_MODEL);
        }
    }
}

#[test]
fn test_missing_table_reported_even_when_subject_has_relations() {
    // Class declares three relations, none of which are consulted
    let c = campus();

    for kind in RelationKind::ALL {
        let result = validate_relation(kind, &c.class(), &c.slacker(), None, &AssertConfig::default());
        assert_eq!(result.unwrap_err().message(), ERR_EXPECTATION_NO_TABLE);
    }
}

#[test]
fn test_accessor_skips_table_derivation() {
    let c = campus();
    assert_eq!(c.slacker().table_name(), None);

    // Not declared under "nothing", but the table name is never read
    assert_fails_with(
        || expect(&c.class()).to().have_one_via(&c.slacker(), "nothing"),
        ERR_NO_RELATION,
    );
}

#[test]
fn test_repeated_assertions_are_idempotent() {
    let c = campus();

    for _ in 0..3 {
        expect(&c.student()).to().have_one(&c.transcript()).unwrap();
        assert_fails_with(
            || expect(&c.class()).to().have_one(&c.school()),
            "expected a 'hasOne' relationship instead of 'belongsTo'",
        );
    }
}

#[test]
fn test_neutral_wording() {
    let c = campus();
    let mut extensions = Extensions::new();
    extensions.use_plugin(&RelationsPlugin::new(AssertConfig::neutral()));

    assert_fails_with(
        || extensions.expect("nope").to().belong_to(&c.school()),
        "relationship subject should be a model class",
    );
    assert_fails_with(
        || extensions.expect(&c.class()).to().belong_to("nope"),
        "relationship expectation should be a model class",
    );
}

#[test]
fn test_relation_target_is_not_compared() {
    // Page.owner points at User, yet asserting against Owner only checks the kind
    let mut builder = SchemaBuilder::new();
    builder.add_model("User").table("users").done().unwrap();
    builder.add_model("Owner").table("owners").done().unwrap();
    builder
        .add_model("Page")
        .table("pages")
        .belongs_to("owner", "User")
        .done()
        .unwrap();
    let schema = builder.build().unwrap();

    let page = schema.model("Page").unwrap();
    let owner = schema.model("Owner").unwrap();

    expect(&page).to().belong_to(&owner).unwrap();
}

#[test]
fn test_irregular_table_names_derive_relation_names() {
    let mut builder = SchemaBuilder::new();
    builder.add_model("Person").table("people").done().unwrap();
    builder.add_model("Category").table("categories").done().unwrap();
    builder.add_model("SalesPerson").table("sales_people").done().unwrap();
    builder
        .add_model("Team")
        .table("teams")
        .has_one("person", "Person")
        .belongs_to("category", "Category")
        .has_many("sales_person", "SalesPerson")
        .done()
        .unwrap();
    let schema = builder.build().unwrap();

    let team = schema.model("Team").unwrap();
    expect(&team).to().have_one(&schema.model("Person").unwrap()).unwrap();
    expect(&team).to().belong_to(&schema.model("Category").unwrap()).unwrap();
    expect(&team).to().have_many(&schema.model("SalesPerson").unwrap()).unwrap();
}
