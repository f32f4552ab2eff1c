//! Valued options supplied with short keys, long keys and assignments.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface parsing mistakes"
)]

use argbind::{Binder, DecodeError, Options, ParseError};
use chrono::{DateTime, FixedOffset, NaiveDate};
use rstest::rstest;

const CMD: &str = "mycommand";

#[derive(Debug, Default, Options)]
struct Mixed {
    pub answer: i64,
    pub language: String,
    pub pi: f32,
    pub uint: u64,
    pub int64: i64,
    pub time: DateTime<FixedOffset>,
}

fn parse<O: Options>(opts: &mut O, args: &[&str]) -> Result<(), ParseError> {
    Binder::new(std::iter::once(CMD).chain(args.iter().copied()))
        .options(opts)
        .build()
        .expect("builds")
        .parse()
}

#[rstest]
#[case::short(&[
    "-a", "42", "-l", "Vogon", "-p", "3.14159265359", "-u", "17080198121677824",
    "-i", "-6764018660779421696", "-t", "\"2010-10-10 10:10:10\"",
])]
#[case::long(&[
    "--answer", "42", "--language", "Vogon", "--pi", "3.14159265359",
    "--uint", "17080198121677824", "--int-64", "-6764018660779421696",
    "--time", "\"2010-10-10 10:10:10\"",
])]
#[case::assigned(&[
    "--answer=42", "--language=Vogon", "--pi=3.14159265359", "--uint=17080198121677824",
    "--int-64=-6764018660779421696", "--time=\"2010-10-10 10:10:10\"",
])]
fn every_key_style_sets_every_kind(#[case] args: &[&str]) {
    let mut opts = Mixed::default();
    parse(&mut opts, args).expect("parses");
    let expected_time = NaiveDate::from_ymd_opt(2010, 10, 10)
        .and_then(|date| date.and_hms_opt(10, 10, 10))
        .expect("valid date")
        .and_utc()
        .fixed_offset();

    assert_eq!(opts.answer, 42);
    assert_eq!(opts.language, "Vogon");
    assert_eq!(opts.pi.to_bits(), std::f32::consts::PI.to_bits());
    assert_eq!(opts.uint, 17_080_198_121_677_824);
    assert_eq!(opts.int64, -6_764_018_660_779_421_696);
    assert_eq!(opts.time, expected_time);
}

#[rstest]
#[case::short_alone(&["-f"])]
#[case::short_empty(&["-f", ""])]
#[case::short_quoted_empty(&["-f", "\"\""])]
#[case::long_alone(&["--file"])]
#[case::long_empty(&["--file", ""])]
#[case::long_quoted_empty(&["--file", "\"\""])]
fn empty_value_clears_string_option(#[case] args: &[&str]) {
    #[derive(Options)]
    struct File {
        pub file: String,
    }

    let mut opts = File {
        file: "X".to_owned(),
    };
    parse(&mut opts, args).expect("parses");
    assert_eq!(opts.file, "");
}

#[rstest]
#[case::short(&["-f", "-o"], "o")]
#[case::long(&["--file", "-o"], "o")]
fn key_following_string_option_is_unknown(#[case] args: &[&str], #[case] unknown: &str) {
    #[derive(Options)]
    struct File {
        pub file: String,
    }

    let mut opts = File {
        file: "X".to_owned(),
    };
    let err = parse(&mut opts, args).expect_err("rejected");
    assert_eq!(
        err,
        ParseError::UnknownOptions {
            keys: vec![unknown.to_owned()]
        }
    );
    assert_eq!(opts.file, "");
}

#[rstest]
fn flags_ganged_with_one_string_option() {
    #[derive(Default, Options)]
    struct Ganged {
        pub creator: bool,
        pub towel: bool,
        pub poem: String,
    }

    let mut opts = Ganged::default();
    parse(&mut opts, &["-tcp", "Vogon"]).expect("parses");
    assert!(opts.creator);
    assert!(opts.towel);
    assert_eq!(opts.poem, "Vogon");
}

#[derive(Debug, Default, Options)]
struct Int {
    pub int: i32,
}

#[rstest]
#[case::unknown_upper(&["-I"])]
#[case::unknown_upper_with_value(&["-I", "Vogon"])]
#[case::missing_value(&["--int"])]
#[case::not_a_number(&["--int=\"Vogon\""])]
fn bad_integer_input_is_rejected(#[case] args: &[&str]) {
    let mut opts = Int::default();
    parse(&mut opts, args).expect_err("rejected");
}

#[rstest]
fn overflow_names_key_and_value() {
    let mut opts = Int::default();
    let err = parse(&mut opts, &["-i", "3G"]).expect_err("rejected");
    assert_eq!(
        err,
        ParseError::Option {
            key: "i".to_owned(),
            source: DecodeError::Overflow {
                value: "3G".to_owned(),
                kind: argbind::decode::ScalarKind::I32,
            },
        }
    );
}

#[rstest]
fn suffixes_scale_option_values() {
    let mut opts = Int::default();
    parse(&mut opts, &["--int=-2M"]).expect("parses");
    assert_eq!(opts.int, -2_000_000);
}

#[rstest]
fn undefined_options_are_listed() {
    #[derive(Default, Options)]
    struct Stack {
        pub answer: i32,
        pub poem: String,
        pub towel: bool,
    }

    let mut opts = Stack::default();
    let err = parse(&mut opts, &["--more=beer", "-x", "-yz"]).expect_err("rejected");
    assert_eq!(err.to_string(), "Invalid command line options: (more, x, y, z)");
}

#[rstest]
fn tagged_keys_replace_derived_keys() {
    #[derive(Default, Options)]
    struct Tagged {
        #[argbind("I:Supply your answer")]
        pub answer: i32,
        #[argbind("a:ask:question:Ask the ultimate question")]
        pub question: String,
    }

    let mut opts = Tagged::default();
    parse(&mut opts, &["-I", "42", "--ask", "What?"]).expect("parses");
    assert_eq!(opts.answer, 42);
    assert_eq!(opts.question, "What?");

    let mut rejected = Tagged::default();
    let err = parse(&mut rejected, &["--answer=42"]).expect_err("derived key is gone");
    assert_eq!(err.to_string(), "Invalid command line option: (answer)");
}

#[rstest]
fn time_option_without_date_defaults_to_year_zero() {
    #[derive(Default, Options)]
    struct When {
        pub when: DateTime<FixedOffset>,
    }

    let mut opts = When::default();
    parse(&mut opts, &["-w", "\"10:10:10 +0200\""]).expect("parses");
    assert_eq!(opts.when.to_rfc3339(), "0000-01-01T10:10:10+02:00");
}

#[rstest]
fn repeated_keys_are_reported_as_unknown() {
    #[derive(Default, Options)]
    struct Pair {
        pub answer: i64,
        pub babel: bool,
    }

    let mut opts = Pair::default();
    let err = parse(&mut opts, &["-a", "1", "-a", "2", "-b", "-b"]).expect_err("rejected");
    assert_eq!(
        err,
        ParseError::UnknownOptions {
            keys: vec!["a".to_owned(), "b".to_owned()],
        }
    );
    assert_eq!(err.to_string(), "Invalid command line options: (a, b)");
    assert_eq!(opts.answer, 2);
}

#[rstest]
#[case::derived(&["--int64=7"], Some("int64"))]
#[case::split(&["--int-64=7"], None)]
fn digit_runs_split_derived_long_keys(#[case] args: &[&str], #[case] unknown: Option<&str>) {
    let mut opts = Mixed::default();
    let result = parse(&mut opts, args);
    match unknown {
        Some(key) => assert_eq!(
            result,
            Err(ParseError::UnknownOptions {
                keys: vec![key.to_owned()],
            })
        ),
        None => {
            result.expect("parses");
            assert_eq!(opts.int64, 7);
        }
    }
}

#[rstest]
fn tag_restores_unsplit_long_key() {
    #[derive(Default, Options)]
    struct Wide {
        #[argbind("i:int64:A 64-bit integer")]
        pub int64: i64,
    }

    let mut opts = Wide::default();
    parse(&mut opts, &["--int64", "-64"]).expect("parses");
    assert_eq!(opts.int64, -64);
}
