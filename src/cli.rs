use std::{
    fs,
    io::{self, Write},
};

use clap::Parser;

use crate::{Outcome, Policy, run};

/// Exit status of a run that printed its results.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of a run that failed to read, lex, parse or evaluate.
pub const EXIT_FAILURE: u8 = 1;

/// digitwise evaluates `+`/`-` programs over arbitrarily large non-negative
/// integers.
#[derive(Parser, Debug)]
#[command(name = "digitwise", version, about, long_about = None)]
pub struct Args {
    /// Tells digitwise to look at a file instead of a script.
    #[arg(short, long)]
    pub file: bool,

    /// Pipe mode automatically prints out the value of the last statement.
    #[arg(short, long)]
    pub pipe_mode: bool,

    /// Report malformed programs and unknown variables as errors.
    #[arg(long)]
    pub strict: bool,

    /// Print every variable as `name = value` after the run.
    #[arg(long)]
    pub vars: bool,

    /// The script, or the path to it with `--file`.
    pub contents: String,
}

impl Args {
    /// The policy selected by `--strict`.
    #[must_use]
    pub const fn policy(&self) -> Policy {
        if self.strict { Policy::Strict } else { Policy::Permissive }
    }
}

/// Runs the program named by `args` and writes its report.
///
/// Results go to `out`: the final value under `--pipe-mode`, then one
/// `name = value` line per variable, in name order, under `--vars`. A file
/// that cannot be read and any error from [`run`] are written to `err` as a
/// single line.
///
/// # Returns
/// [`EXIT_SUCCESS`] or [`EXIT_FAILURE`].
///
/// # Errors
/// Only if writing to `out` or `err` fails.
///
/// # Example
/// ```
/// use clap::Parser;
/// use digitwise::cli::{Args, EXIT_SUCCESS, execute};
///
/// let args = Args::parse_from(["digitwise", "-p", "--vars", "b = 2; a = b + 1;"]);
/// let (mut out, mut err) = (Vec::new(), Vec::new());
///
/// assert_eq!(execute(&args, &mut out, &mut err).unwrap(), EXIT_SUCCESS);
/// assert_eq!(String::from_utf8(out).unwrap(), "3\na = 3\nb = 2\n");
/// ```
pub fn execute(args: &Args, out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                writeln!(err, "Failed to read the input file '{}': {e}", &args.contents)?;
                return Ok(EXIT_FAILURE);
            },
        }
    } else {
        args.contents.clone()
    };

    match run(&script, args.policy()) {
        Ok(outcome) => {
            report(&outcome, args, out)?;
            Ok(EXIT_SUCCESS)
        },
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(EXIT_FAILURE)
        },
    }
}

fn report(outcome: &Outcome, args: &Args, out: &mut impl Write) -> io::Result<()> {
    if args.pipe_mode {
        writeln!(out, "{}", outcome.value)?;
    }
    if args.vars {
        for (name, value) in &outcome.variables {
            writeln!(out, "{name} = {value}")?;
        }
    }
    Ok(())
}
