use std::fs;

use digitwise::{Outcome, Policy, get_result, run};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn program_corpus_works() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "dw"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let header = read_header(&source);
        let expected = header.expect
                             .unwrap_or_else(|| panic!("{path:?} has no '// expect:' line"));

        count += 1;
        match run(&source, header.policy) {
            Ok(outcome) => assert_eq!(outcome.value.to_string(), expected, "program {path:?}"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e:?}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

struct Header {
    expect: Option<String>,
    policy: Policy,
}

fn read_header(source: &str) -> Header {
    let mut header = Header { expect: None,
                              policy: Policy::Permissive, };

    for line in source.lines().map(str::trim) {
        if let Some(value) = line.strip_prefix("// expect:") {
            header.expect = Some(value.trim().to_string());
        } else if line.strip_prefix("// policy:").is_some_and(|p| p.trim() == "strict") {
            header.policy = Policy::Strict;
        }
    }

    header
}

fn eval(src: &str) -> Outcome {
    run(src, Policy::Permissive).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn eval_strict(src: &str) -> Outcome {
    run(src, Policy::Strict).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_failure(src: &str) {
    if run(src, Policy::Strict).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn addition_of_literals() {
    assert_eq!(eval("3 + 4;").value.to_string(), "7");
    assert_eq!(eval("456 + 1123;").value.to_string(), "1579");
}

#[test]
fn subtraction_is_absolute_difference() {
    assert_eq!(eval("456 - 1123;").value.to_string(), "667");
    assert_eq!(eval("1123 - 456;").value.to_string(), "667");
    assert_eq!(eval("5 - 5;").value.to_string(), "0");
}

#[test]
fn assignment_and_sequencing() {
    let outcome = eval_strict("x = 3 + 4 ; x - 2 ;");

    assert_eq!(outcome.value.to_string(), "5");
    assert_eq!(outcome.variables.len(), 1);
    assert_eq!(outcome.variables.get("x").map(ToString::to_string),
               Some("7".to_string()));
}

#[test]
fn assignment_is_the_value_of_its_statement() {
    assert_eq!(eval_strict("x = 40 + 2;").value.to_string(), "42");
}

#[test]
fn reassignment_overwrites() {
    let outcome = eval_strict("x = 1; x = x + 1; x = x + 1;");
    assert_eq!(outcome.variables.get("x").map(ToString::to_string),
               Some("3".to_string()));
}

#[test]
fn parentheses_change_grouping() {
    assert_eq!(eval("(1+2)-3;").value.to_string(), "0");
    assert_eq!(eval("1+(2-3);").value.to_string(), "2");
}

#[test]
fn left_to_right_association() {
    // |10 - 4| + 1, not |10 - (4 + 1)|
    assert_eq!(eval("10 - 4 + 1;").value.to_string(), "7");
    assert_eq!(eval("10 - (4 + 1);").value.to_string(), "5");
}

#[test]
fn whitespace_comments_and_newlines_are_ignored() {
    let src = "// running sum\na = 1;\n\n  b = a +\n\t2; // trailing\na + b;\n";
    assert_eq!(eval_strict(src).value.to_string(), "4");
}

#[test]
fn large_values_do_not_overflow() {
    let src = "a = 123456789012345678901234567890; b = 987654321098765432109876543210; a + b;";
    assert_eq!(eval_strict(src).value.to_string(), "1111111110111111111011111111100");
}

#[test]
fn undefined_variable_reads_as_empty() {
    let outcome = eval("y;");

    assert!(outcome.value.is_empty());
    assert_eq!(outcome.value.to_string(), "");
    assert!(outcome.variables.contains("y"));
}

#[test]
fn empty_program_has_no_value() {
    assert!(eval("").value.is_empty());
    assert!(eval_strict("   // nothing\n").value.is_empty());
}

#[test]
fn unknown_character_is_error() {
    assert!(run("2 * 3;", Policy::Permissive).is_err());
    assert!(get_result("x = 1 / 2;", false).is_err());
}

#[test]
fn get_result_runs_programs() {
    assert!(get_result("x = 1; x + 1;", false).is_ok());
}

#[test]
fn undefined_variable_is_error_when_strict() {
    assert_failure("y + 1;");
}

#[test]
fn missing_terminator_is_error_when_strict() {
    assert_failure("1 + 2");
}

#[test]
fn missing_operand_is_error_when_strict() {
    assert_failure("1 + ;");
}
