//! Unit tests for usage and help rendering.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface rendering mistakes"
)]

use rstest::{fixture, rstest};

use super::wrap::{hang, wrap};
use super::{ArgumentsInfo, Help};
use crate::decode::ScalarKind;
use crate::field::FieldSet;

const CMD: &str = "mypath/mycommand";

fn args() -> Vec<String> {
    vec![CMD.to_owned()]
}

fn string_field(name: &str, tag: Option<&str>) -> Help {
    let mut value = String::new();
    let mut fields = FieldSet::new();
    fields.field(name, tag, &mut value).expect("registers");
    Help::new(&args(), fields.descriptors(), None)
}

fn string_and_flag(flag: &str, arguments: Option<ArgumentsInfo>) -> Help {
    let mut text = String::new();
    let mut set = false;
    let mut fields = FieldSet::new();
    fields
        .field("a", None, &mut text)
        .and_then(|f| f.field(flag, None, &mut set))
        .expect("registers");
    Help::new(&args(), fields.descriptors(), arguments)
}

fn container(capacity: Option<usize>) -> Help {
    Help::new(
        &args(),
        Vec::new(),
        Some(ArgumentsInfo {
            kind: ScalarKind::String,
            capacity,
        }),
    )
}

#[fixture]
fn nothing() -> Help {
    string_field("nothing", None)
}

#[rstest]
fn cmd_keeps_path_and_command_name_strips_it() {
    let help = container(None);
    assert_eq!(help.cmd(), CMD);
    assert_eq!(help.command_name(), "mycommand");
    assert!(!help.has_args());
}

#[rstest]
#[case::one(Some(1), "mycommand [string]")]
#[case::two(Some(2), "mycommand [string] [string]")]
#[case::three(Some(3), "mycommand [string]...")]
#[case::unbounded(None, "mycommand [string]...")]
#[case::none(Some(0), "mycommand")]
fn usage_line_reflects_container_capacity(#[case] capacity: Option<usize>, #[case] expected: &str) {
    assert_eq!(container(capacity).usage_line(), expected);
}

#[rstest]
fn usage_with_single_option() {
    assert_eq!(string_field("a", None).usage(), "Usage: mycommand [OPTION]\n");
}

#[rstest]
#[case::short("h", "Usage: mycommand [OPTIONS]\nTry 'mycommand -h' for more information.\n")]
#[case::long(
    "help",
    "Usage: mycommand [OPTIONS]\nTry 'mycommand --help' for more information.\n"
)]
#[case::other("b", "Usage: mycommand [OPTIONS]\n")]
fn usage_points_at_help_flag(#[case] flag: &str, #[case] expected: &str) {
    assert_eq!(string_and_flag(flag, None).usage(), expected);
}

#[rstest]
fn usage_with_options_and_vector() {
    let help = string_and_flag(
        "b",
        Some(ArgumentsInfo {
            kind: ScalarKind::String,
            capacity: None,
        }),
    );
    assert_eq!(help.usage(), "Usage: mycommand [OPTIONS] [string]...\n");
}

#[rstest]
#[case::no_tag(None, "    -a string\n\n")]
#[case::help_tag(Some("Ask a question"), "    -a string   Ask a question\n\n")]
#[case::key_tag(Some("A:Ask a question"), "    -A string   Ask a question\n\n")]
#[case::both_keys(
    Some("A:ask:Ask a question"),
    "    -A string, --ask=string\n                Ask a question\n\n"
)]
#[case::placeholder(
    Some("A:ask:question:Ask a question"),
    "    -A question, --ask=question\n                Ask a question\n\n"
)]
fn option_list_formats_keys_and_help(#[case] tag: Option<&str>, #[case] option: &str) {
    let expected = format!("SYNOPSIS\n    mycommand [OPTION]\n\nOPTION\n{option}");
    assert_eq!(string_field("a", tag).render(), expected);
}

#[rstest]
fn name_section_comes_first(mut nothing: Help) {
    nothing.section("NAME", &["Hitchhiker Ipsum"]);
    assert_eq!(
        nothing.render(),
        "NAME\n    Hitchhiker Ipsum\n\nSYNOPSIS\n    mycommand [OPTION]\n\n\
         OPTION\n    -n string, --nothing=string\n\n"
    );
}

#[rstest]
fn description_follows_synopsis(mut nothing: Help) {
    nothing
        .section("NAME", &["Hitchhiker Ipsum"])
        .section(
            "DESCRIPTION",
            &["Lorem Ipsum Hitchhiker simply generating synthesized improbability drive."],
        );
    assert_eq!(
        nothing.render(),
        "NAME\n    Hitchhiker Ipsum\n\nSYNOPSIS\n    mycommand [OPTION]\n\n\
         DESCRIPTION\n    Lorem Ipsum Hitchhiker simply generating synthesized improbability drive.\n\n\
         OPTION\n    -n string, --nothing=string\n\n"
    );
}

#[rstest]
fn custom_synopsis_replaces_usage_line(mut nothing: Help) {
    nothing.section("SYNOPSIS", &["mycommand [-n name]"]);
    assert!(nothing.render().starts_with("SYNOPSIS\n    mycommand [-n name]\n\nOPTION\n"));
}

#[rstest]
fn plain_section_is_appended_and_wrapped(mut nothing: Help) {
    nothing.section(
        "INFINITE IMPROBABILITY",
        &["Permanent Frogstar banks occurred drink statistically virtual universe side \
           restaurant hallucinations."],
    );
    assert_eq!(
        nothing.render(),
        "SYNOPSIS\n    mycommand [OPTION]\n\nOPTION\n    -n string, --nothing=string\n\n\
         INFINITE IMPROBABILITY\n\
         \x20   Permanent Frogstar banks occurred drink statistically virtual universe\n\
         \x20   side restaurant hallucinations.\n\n"
    );
}

#[rstest]
fn untitled_section_separates_paragraphs(mut nothing: Help) {
    nothing.section(
        "",
        &[
            "Lorem Ipsum Hitchhiker simply generating synthesized improbability drive Arthur \
             Dent closes world sector satisfaction secretively reasoning ship.",
            "Finite probability cabin quite desert while concave into used Galactic machine \
             Kakrafoon which instantly realized mental carrier denies thinkers.",
        ],
    );
    assert_eq!(
        nothing.render(),
        "SYNOPSIS\n    mycommand [OPTION]\n\nOPTION\n    -n string, --nothing=string\n\n\
         \x20   Lorem Ipsum Hitchhiker simply generating synthesized improbability drive\n\
         \x20   Arthur Dent closes world sector satisfaction secretively reasoning ship.\n\n\
         \x20   Finite probability cabin quite desert while concave into used Galactic\n\
         \x20   machine Kakrafoon which instantly realized mental carrier denies thinkers.\n\n"
    );
}

#[rstest]
fn line_breaks_inside_paragraphs_are_kept(mut nothing: Help) {
    nothing.section(
        "TURLINGDROMES",
        &["Axlegrurts shone jewelled agrocrustles millstone enquiry backbone about \
           political sun goop.\nJurpling\nAgrocrustles\nBindlewurdles"],
    );
    assert!(nothing.render().ends_with(
        "TURLINGDROMES\n\
         \x20   Axlegrurts shone jewelled agrocrustles millstone enquiry backbone about\n\
         \x20   political sun goop.\n    Jurpling\n    Agrocrustles\n    Bindlewurdles\n\n"
    ));
}

#[rstest]
fn heading_only_section(mut nothing: Help) {
    nothing.section("AGROCRUSTLES", &[]);
    assert!(nothing.render().ends_with("--nothing=string\n\nAGROCRUSTLES\n\n"));
}

#[rstest]
fn consecutive_sections_are_separated_by_a_blank_line(mut nothing: Help) {
    nothing
        .section("NOTES", &["First."])
        .section("BUGS", &["Second."]);
    assert!(nothing.render().ends_with("NOTES\n    First.\n\nBUGS\n    Second.\n\n"));
}

#[rstest]
fn keyed_section_is_inserted_before_its_option() {
    let mut first = String::new();
    let mut second = false;
    let mut fields = FieldSet::new();
    fields
        .field("first", None, &mut first)
        .and_then(|f| f.field("second", Some("translate:Enable translator"), &mut second))
        .expect("registers");
    let mut help = Help::new(&args(), fields.descriptors(), None);
    help.section("translate:TRANSLATOR", &["Babel fish."]);
    assert_eq!(
        help.render(),
        "SYNOPSIS\n    mycommand [OPTIONS]\n\nOPTIONS\n    -f string, --first=string\n\n\
         TRANSLATOR\n    Babel fish.\n\n    --translate Enable translator\n\n"
    );
}

#[rstest]
fn section_before_first_option_suppresses_options_heading(mut nothing: Help) {
    nothing.section("n:INPUT", &["What to read."]);
    assert_eq!(
        nothing.render(),
        "SYNOPSIS\n    mycommand [OPTION]\n\nINPUT\n    What to read.\n\n\
         \x20   -n string, --nothing=string\n\n"
    );
}

#[rstest]
fn unmatched_key_section_is_appended_without_key(mut nothing: Help) {
    nothing.section("zz:LATER", &["Appended."]);
    assert!(nothing.render().ends_with("LATER\n    Appended.\n\n"));
}

#[rstest]
#[case::fits("one two three", 14, "one two three")]
#[case::breaks("one two three", 13, "one two\nthree")]
#[case::long_word("supercalifragilistic word", 10, "supercalifragilistic\nword")]
#[case::keeps_breaks("a b\nc d", 79, "a b\nc d")]
fn wrap_keeps_lines_shorter_than_width(
    #[case] text: &str,
    #[case] width: usize,
    #[case] expected: &str,
) {
    assert_eq!(wrap(text, width), expected);
}

#[rstest]
fn hang_skips_blank_lines() {
    assert_eq!(hang("a\n\nb", 2), "a\n\n  b");
}
