use clap::Parser;
use digitwise::{
    Policy,
    cli::{Args, EXIT_FAILURE, EXIT_SUCCESS, execute},
};
use pretty_assertions::assert_eq;

struct Report {
    status: u8,
    out:    String,
    err:    String,
}

fn invoke(argv: &[&str]) -> Report {
    let args = Args::try_parse_from(std::iter::once("digitwise").chain(argv.iter().copied()))
        .unwrap_or_else(|e| panic!("arguments {argv:?} rejected: {e}"));
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let status = execute(&args, &mut out, &mut err).unwrap();

    Report { status,
             out: String::from_utf8(out).unwrap(),
             err: String::from_utf8(err).unwrap() }
}

#[test]
fn vars_are_listed_in_name_order() {
    let report = invoke(&["--vars", "zeta = 1; alpha = zeta + 1; mid = 30;"]);

    assert_eq!(report.status, EXIT_SUCCESS);
    assert_eq!(report.out, "alpha = 2\nmid = 30\nzeta = 1\n");
    assert_eq!(report.err, "");
}

#[test]
fn pipe_mode_prints_the_final_value_first() {
    let report = invoke(&["-p", "--vars", "x = 3 + 4 ; x - 2 ;"]);

    assert_eq!(report.status, EXIT_SUCCESS);
    assert_eq!(report.out, "5\nx = 7\n");
}

#[test]
fn nothing_is_printed_without_output_flags() {
    let report = invoke(&["x = 3 + 4;"]);

    assert_eq!(report.status, EXIT_SUCCESS);
    assert_eq!(report.out, "");
    assert_eq!(report.err, "");
}

#[test]
fn strict_flag_selects_the_strict_policy() {
    let permissive = Args::try_parse_from(["digitwise", "1;"]).unwrap();
    let strict = Args::try_parse_from(["digitwise", "--strict", "1;"]).unwrap();
    assert_eq!(permissive.policy(), Policy::Permissive);
    assert_eq!(strict.policy(), Policy::Strict);

    assert_eq!(invoke(&["-p", "1 + ;"]).out, "1\n");

    let report = invoke(&["-p", "--strict", "1 + ;"]);
    assert_eq!(report.status, EXIT_FAILURE);
    assert_eq!(report.out, "");
    assert_eq!(report.err, "Error on line 1: Operator '+' is missing an operand.\n");
}

#[test]
fn lexing_error_exits_with_failure() {
    let report = invoke(&["-p", "x = 1;\n2 * 3;"]);

    assert_eq!(report.status, EXIT_FAILURE);
    assert_eq!(report.out, "");
    assert_eq!(report.err, "Error on line 2: Unexpected token: *.\n");
}

#[test]
fn scripts_are_read_from_files() {
    let report = invoke(&["-f", "-p", "tests/programs/sum_and_difference.dw"]);

    assert_eq!(report.status, EXIT_SUCCESS);
    assert_eq!(report.out, "5\n");
}

#[test]
fn unreadable_file_exits_with_failure() {
    let report = invoke(&["--file", "tests/programs/does_not_exist.dw"]);

    assert_eq!(report.status, EXIT_FAILURE);
    assert_eq!(report.out, "");
    assert!(report.err
                  .starts_with("Failed to read the input file 'tests/programs/does_not_exist.dw'"),
            "unexpected message: {}",
            report.err);
}
