use anyhow::{Context, Result};
use clap::{ArgEnum, Parser};
use clap_verbosity_flag::Verbosity;
use log::{info, warn, LevelFilter};
use notation_converter::converter::{convert, strict, Notation};
use std::env;
use std::io;
use std::io::BufRead;

/// Converts arithmetic expressions between infix, prefix and postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The notation the expressions are written in
    #[clap(short, long, arg_enum)]
    from: NotationArgument,

    /// The notation to convert the expressions into
    #[clap(short, long, arg_enum)]
    to: NotationArgument,

    /// Fail on malformed expressions instead of printing an unspecified result
    #[clap(short, long)]
    strict: bool,

    #[clap(flatten)]
    verbose: Verbosity,

    /// The expressions to convert. Read line by line from stdin when omitted
    expressions: Vec<String>,
}

#[derive(ArgEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum NotationArgument {
    Infix,
    Prefix,
    Postfix,
}

impl From<NotationArgument> for Notation {
    fn from(argument: NotationArgument) -> Self {
        match argument {
            NotationArgument::Infix => Notation::Infix,
            NotationArgument::Prefix => Notation::Prefix,
            NotationArgument::Postfix => Notation::Postfix,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    logger(args.verbose.log_level_filter(), env::var("RUST_LOG").ok().as_deref()).init();

    let from = Notation::from(args.from);
    let to = Notation::from(args.to);
    info!("Converting from {} to {}", from, to);

    if args.expressions.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read expression from stdin")?;
            if line.trim().is_empty() {
                warn!("Skipping blank line");
                continue;
            }
            println!("{}", run(&line, from, to, args.strict)?);
        }
    } else {
        for expression in &args.expressions {
            println!("{}", run(expression, from, to, args.strict)?);
        }
    }

    Ok(())
}

/// Starts from the level picked with `-v`/`-q`; filters from `RUST_LOG` override it.
fn logger(level: LevelFilter, env_filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder
}

fn run(expression: &str, from: Notation, to: Notation, validate: bool) -> Result<String> {
    if validate {
        strict::convert(expression, from, to)
    } else {
        Ok(convert(expression, from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_parse_notations_and_expressions() {
        let args =
            Arguments::parse_from(["notation-converter", "--from", "postfix", "-t", "infix", "ab+"]);

        assert_eq!(args.from, NotationArgument::Postfix);
        assert_eq!(args.to, NotationArgument::Infix);
        assert!(!args.strict);
        assert_eq!(args.expressions, vec!["ab+".to_string()]);
    }

    #[test]
    fn logger_uses_verbosity_level_without_env_filters() {
        let logger = logger(LevelFilter::Warn, None).build();

        assert_eq!(logger.filter(), LevelFilter::Warn);
    }

    #[test]
    fn logger_applies_env_filters_over_verbosity_level() {
        let logger = logger(LevelFilter::Warn, Some("debug")).build();

        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn run_converts_leniently_by_default() {
        let result = run("+a", Notation::Prefix, Notation::Infix, false).unwrap();

        assert_eq!(result, "(a+)");
    }

    #[test]
    fn run_fails_on_malformed_input_when_strict() {
        run("+a", Notation::Prefix, Notation::Infix, true).expect_err("Should return Err");
    }
}
