//! Unit tests for key derivation and tag parsing.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface key derivation mistakes"
)]

use rstest::{fixture, rstest};

use super::{KeyRegistry, Tag, describe, kebab_case};
use crate::ConfigError;
use crate::decode::ScalarKind;

#[fixture]
fn registry() -> KeyRegistry {
    KeyRegistry::default()
}

#[rstest]
#[case::camel("TeaCup", "tea-cup")]
#[case::three_words("CupOfTea", "cup-of-tea")]
#[case::underscore("CupOf_Tea", "cup-of-tea")]
#[case::snake("cup_of_tea", "cup-of-tea")]
#[case::lower("answer", "answer")]
#[case::digits("int64", "int-64")]
#[case::digits_between("This2That", "this-2-that")]
#[case::acronym("HTTPServer", "httpserver")]
#[case::trailing_underscore("towel_", "towel")]
#[case::leading_underscore("_towel", "towel")]
#[case::doubled_separator("tea__cup", "tea-cup")]
#[case::hyphen("tea-Cup", "tea-cup")]
fn kebab_case_inserts_single_separators(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(kebab_case(name), expected);
}

#[rstest]
fn auto_keys_fall_back_to_uppercase_then_none(mut registry: KeyRegistry) {
    let towel = describe(&mut registry, "towel", ScalarKind::Bool, None).expect("towel");
    let tarantula =
        describe(&mut registry, "tarantula", ScalarKind::Bool, None).expect("tarantula");
    let turnbuckle =
        describe(&mut registry, "turnbuckle", ScalarKind::Bool, None).expect("turnbuckle");

    assert_eq!(towel.short, Some('t'));
    assert_eq!(tarantula.short, Some('T'));
    assert_eq!(turnbuckle.short, None);
    assert_eq!(turnbuckle.long.as_deref(), Some("turnbuckle"));
}

#[rstest]
fn single_letter_long_key_collides_with_its_own_short_key(mut registry: KeyRegistry) {
    let field = describe(&mut registry, "a", ScalarKind::I32, None).expect("field");
    assert_eq!(field.short, Some('a'));
    assert_eq!(field.long, None);
}

#[rstest]
fn colliding_long_key_is_dropped(mut registry: KeyRegistry) {
    describe(&mut registry, "tea_cup", ScalarKind::String, None).expect("first");
    let second = describe(&mut registry, "TeaCup", ScalarKind::String, None).expect("second");
    assert_eq!(second.long, None);
}

#[rstest]
#[case::underscore("_hidden")]
#[case::digit("9lives")]
#[case::empty("")]
fn non_public_names_are_rejected(mut registry: KeyRegistry, #[case] name: &str) {
    let err = describe(&mut registry, name, ScalarKind::String, None).expect_err("rejected");
    assert_eq!(
        err,
        ConfigError::PrivateField {
            field: name.to_owned()
        }
    );
}

#[rstest]
fn help_only_tag_keeps_derived_keys(mut registry: KeyRegistry) {
    let field = describe(
        &mut registry,
        "answer",
        ScalarKind::I64,
        Some("The ultimate answer"),
    )
    .expect("field");
    assert_eq!(field.short, Some('a'));
    assert_eq!(field.long.as_deref(), Some("answer"));
    assert_eq!(field.help, "The ultimate answer");
    assert_eq!(field.placeholder, "i64");
}

#[rstest]
#[case::short_only("q:Ask a question", Some('q'), None)]
#[case::long_only("ask:Ask a question", None, Some("ask"))]
#[case::no_keys(":Ask a question", None, None)]
#[case::both("q:ask:Ask a question", Some('q'), Some("ask"))]
#[case::long_without_short(":ask:Ask a question", None, Some("ask"))]
fn key_tags_replace_derived_keys(
    mut registry: KeyRegistry,
    #[case] tag: &str,
    #[case] short: Option<char>,
    #[case] long: Option<&str>,
) {
    let field = describe(&mut registry, "question", ScalarKind::String, Some(tag))
        .expect("field");
    assert_eq!(field.short, short);
    assert_eq!(field.long.as_deref(), long);
    assert_eq!(field.help, "Ask a question");
}

#[rstest]
fn four_segment_tag_sets_placeholder() {
    let tag = Tag::parse("file", "f:file:path:Input file: one per run").expect("tag");
    assert_eq!(tag.short, Some('f'));
    assert_eq!(tag.long, Some("file"));
    assert_eq!(tag.placeholder, Some("path"));
    assert_eq!(tag.help, "Input file: one per run");
}

#[rstest]
#[case::three("ask:a:Ask a question")]
#[case::four("ask:a:question:Ask a question")]
fn long_short_segment_is_rejected(#[case] tag: &str) {
    let err = Tag::parse("question", tag).expect_err("rejected");
    assert_eq!(
        err,
        ConfigError::ShortKeyTooLong {
            field: "question".to_owned(),
            key: "ask".to_owned(),
        }
    );
}

#[rstest]
fn repeated_explicit_key_is_rejected(mut registry: KeyRegistry) {
    describe(&mut registry, "a", ScalarKind::I32, Some("a:A flag")).expect("first");
    let err = describe(&mut registry, "b", ScalarKind::I32, Some("a:A flag")).expect_err("dup");
    assert_eq!(err, ConfigError::DuplicateKey { key: "a".to_owned() });
}

#[rstest]
fn explicit_key_clashing_with_derived_key_is_rejected(mut registry: KeyRegistry) {
    describe(&mut registry, "towel", ScalarKind::Bool, None).expect("first");
    let err =
        describe(&mut registry, "pan", ScalarKind::Bool, Some("t::Pan")).expect_err("dup");
    assert_eq!(err, ConfigError::DuplicateKey { key: "t".to_owned() });
}
