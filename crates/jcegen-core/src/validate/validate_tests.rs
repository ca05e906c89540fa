#![allow(non_snake_case)]

use super::*;
use crate::model::Field;
use test_case::test_case;

fn ping() -> Structure {
    Structure::new("Ping", 0)
        .field(Field::new("seq", "JInt"))
        .field(Field::new("note", "JString").with_tag(3).optional())
}

#[test]
fn validate___well_formed_structure___passes() {
    assert!(validate(&ping()).is_ok());
}

#[test]
fn validate___empty_structure___passes() {
    assert!(validate(&Structure::new("Empty", 0)).is_ok());
}

#[test_case("" ; "empty")]
#[test_case("1Ping" ; "leading digit")]
#[test_case("Ping Pong" ; "space")]
#[test_case("_" ; "lone underscore")]
#[test_case("Self" ; "self type keyword")]
#[test_case("r#Self" ; "raw self type")]
#[test_case("r#crate" ; "raw crate")]
#[test_case("struct" ; "keyword")]
fn validate___bad_structure_name___is_rejected(name: &str) {
    let result = validate(&Structure::new(name, 0));

    assert!(matches!(result, Err(SchemaError::InvalidName(_))));
}

#[test]
fn validate___bad_field_name___is_rejected() {
    let structure = Structure::new("Req", 0).field(Field::new("self-id", "JLong"));

    let result = validate(&structure);

    assert!(matches!(
        result,
        Err(SchemaError::InvalidFieldName { ref field, .. }) if field == "self-id"
    ));
}

#[test]
fn validate___blank_type_name___is_rejected() {
    let structure = Structure::new("Req", 0).field(Field::new("uin", "  "));

    let result = validate(&structure);

    assert!(matches!(result, Err(SchemaError::EmptyType { .. })));
}

#[test]
fn validate___duplicate_field_name___is_rejected() {
    let structure = Structure::new("Req", 0)
        .field(Field::new("uin", "JLong"))
        .field(Field::new("uin", "JLong").with_tag(9));

    let result = validate(&structure);

    assert!(matches!(
        result,
        Err(SchemaError::DuplicateField { ref field, .. }) if field == "uin"
    ));
}

#[test]
fn validate___positional_tag_past_255___is_rejected() {
    let structure = Structure::new("Req", 254)
        .field(Field::new("a", "JInt"))
        .field(Field::new("b", "JInt"))
        .field(Field::new("c", "JInt"));

    let result = validate(&structure);

    assert!(matches!(
        result,
        Err(SchemaError::TagOverflow { tag: 256, ref field, .. }) if field == "c"
    ));
}

#[test]
fn validate___explicit_tag_rescues_overflowing_position___passes() {
    let structure = Structure::new("Req", 254)
        .field(Field::new("a", "JInt"))
        .field(Field::new("b", "JInt"))
        .field(Field::new("c", "JInt").with_tag(10));

    assert!(validate(&structure).is_ok());
}

#[test]
fn validate___explicit_tag_collides_with_positional___is_rejected() {
    let structure = Structure::new("Req", 0)
        .field(Field::new("a", "JInt"))
        .field(Field::new("b", "JInt").with_tag(0));

    let err = validate(&structure).unwrap_err();

    match err {
        SchemaError::DuplicateTag {
            tag, first, second, ..
        } => {
            assert_eq!(tag, 0);
            assert_eq!(first, "a");
            assert_eq!(second, "b");
        }
        other => panic!("expected duplicate tag, got {other:?}"),
    }
}

#[test_case("seq", true ; "lowercase")]
#[test_case("_private", true ; "leading underscore")]
#[test_case("vecFriend2", true ; "camel with digit")]
#[test_case("", false ; "empty")]
#[test_case("9lives", false ; "leading digit")]
#[test_case("a.b", false ; "dot")]
#[test_case("名字", false ; "non ascii")]
#[test_case("type", false ; "type keyword")]
#[test_case("Self", false ; "self type keyword")]
#[test_case("fn", false ; "fn keyword")]
#[test_case("gen", false ; "reserved in 2024")]
#[test_case("r#type", true ; "raw type")]
#[test_case("r#match", true ; "raw match")]
#[test_case("r#self", false ; "raw self")]
#[test_case("r#super", false ; "raw super")]
#[test_case("r#", false ; "bare raw prefix")]
#[test_case("r#9", false ; "raw leading digit")]
#[test_case("union", true ; "weak keyword")]
#[test_case("types", true ; "keyword prefix")]
fn is_identifier___classifies(name: &str, expected: bool) {
    assert_eq!(is_identifier(name), expected);
}

#[test]
fn validate___keyword_field_name___is_rejected() {
    let structure = Structure::new("Msg", 0).field(Field::new("type", "JInt"));

    let result = validate(&structure);

    assert!(matches!(
        result,
        Err(SchemaError::InvalidFieldName { ref field, .. }) if field == "type"
    ));
}

#[test]
fn validate___raw_keyword_field_name___passes() {
    let structure = Structure::new("Msg", 0).field(Field::new("r#type", "JInt"));

    assert!(validate(&structure).is_ok());
}

#[test]
fn validate___raw_and_plain_spelling_of_same_name___is_rejected() {
    let structure = Structure::new("Msg", 0)
        .field(Field::new("seq", "JInt"))
        .field(Field::new("r#seq", "JInt"));

    assert!(matches!(
        validate(&structure),
        Err(SchemaError::DuplicateField { ref field, .. }) if field == "r#seq"
    ));
}

// ============================================================================
// Counter drift
// ============================================================================

#[test]
fn validate___positional_field_after_jump___drifts() {
    let structure = Structure::new("Req", 0)
        .field(Field::new("a", "JInt"))
        .field(Field::new("b", "JInt").with_tag(5))
        .field(Field::new("c", "JInt"));

    let result = validate(&structure);

    assert!(matches!(
        result,
        Err(SchemaError::TagDrift { tag: 2, written: 6, ref field, .. }) if field == "c"
    ));
}

#[test]
fn validate___explicit_tag_equal_to_position_after_jump___drifts() {
    let structure = Structure::new("Req", 0)
        .field(Field::new("a", "JInt"))
        .field(Field::new("b", "JInt").with_tag(5))
        .field(Field::new("c", "JInt").with_tag(2));

    assert!(matches!(
        validate(&structure),
        Err(SchemaError::TagDrift { written: 6, .. })
    ));
}

#[test]
fn validate___every_field_after_jump_tagged___passes() {
    let structure = Structure::new("Req", 0)
        .field(Field::new("a", "JInt"))
        .field(Field::new("b", "JInt").with_tag(5))
        .field(Field::new("c", "JInt").with_tag(6))
        .field(Field::new("d", "JInt").with_tag(9).optional());

    assert!(validate(&structure).is_ok());
}

#[test]
fn validate___jump_on_last_field___passes() {
    let structure = Structure::new("Req", 1)
        .field(Field::new("a", "JInt"))
        .field(Field::new("b", "JInt"))
        .field(Field::new("c", "JInt").with_tag(20));

    assert!(validate(&structure).is_ok());
}
