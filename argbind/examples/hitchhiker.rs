//! Example CLI binding options and file arguments with `argbind`.
//!
//! ```text
//! cargo run --example hitchhiker -- -I 42 --translate towel.txt
//! cargo run --example hitchhiker -- --help
//! ```

use std::io::{self, Write};

use argbind::{Binder, Help, Options};

/// Command-line options for the example.
#[derive(Debug, Default, Options)]
struct Opts {
    #[argbind("I:Supply your answer")]
    pub answer: i64,
    #[argbind("translate:Enable babel fish translator")]
    pub babel: bool,
    #[argbind("a:ask:question:Ask the ultimate question")]
    pub question: String,
    #[argbind("Show this help text")]
    pub help: bool,
}

fn main() -> Result<(), String> {
    let mut opts = Opts::default();
    let mut files: Vec<String> = Vec::new();
    let parser = Binder::from_env()
        .options(&mut opts)
        .arguments(&mut files)
        .build()
        .map_err(|err| err.to_string())?;
    let mut help = parser.help();
    describe(&mut help);

    if let Err(err) = parser.parse() {
        let mut stderr = io::stderr().lock();
        write_line(&mut stderr, &err.to_string())?;
        help.write_usage(&mut stderr).map_err(|e| e.to_string())?;
        return Err(String::from("invalid command line"));
    }
    if opts.help || !help.has_args() {
        return help.print_help().map_err(|err| err.to_string());
    }

    let mut stdout = io::stdout().lock();
    write_line(
        &mut stdout,
        &format!(
            "answer={} babel={} question={:?}",
            opts.answer, opts.babel, opts.question
        ),
    )?;
    for file in &files {
        write_line(&mut stdout, &format!("file: {file}"))?;
    }
    Ok(())
}

fn describe(help: &mut Help) {
    help.section("NAME", &["hitchhiker - a towel-aware argument demo"])
        .section(
            "translate:BABEL FISH",
            &["Translation is applied to every file given after the options."],
        )
        .section("NOTES", &["Don't panic."]);
}

fn write_line(writer: &mut dyn Write, message: &str) -> Result<(), String> {
    writer
        .write_all(message.as_bytes())
        .map_err(|err| err.to_string())?;
    writer.write_all(b"\n").map_err(|err| err.to_string())
}
