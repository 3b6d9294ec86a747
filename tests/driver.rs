extern crate dpll_rust;
extern crate tempfile;

use std::io::{self, Write};
use std::{fs, path};
use dpll_rust::{Answer, Limits, MainOptions};
use dpll_rust::sat::dpll;


fn cnf_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn options(input: &path::Path, output: Option<&path::Path>) -> MainOptions {
    MainOptions {
        strict: true,
        verify: true,
        in_path: input.to_path_buf(),
        out_path: output.map(path::Path::to_path_buf),
    }
}


#[test]
fn sat_answer_and_output_file() {
    let input = cnf_file("c exactly one\np cnf 2 2\n1 2 0\n-1 -2 0\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.txt");

    let answer = dpll_rust::solve(options(input.path(), Some(out.as_path())), Default::default(), Limits::default()).unwrap();
    assert_eq!(answer, Answer::Sat);
    assert_eq!(answer.exit_code(), 10);

    let written = fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("SAT"));
    let model: Vec<i32> = lines.next().unwrap().split_whitespace().map(|x| x.parse().unwrap()).collect();
    assert_eq!(model.len(), 2);
    assert!(model.contains(&1) != model.contains(&2));
    assert_eq!(lines.next(), None);
}

#[test]
fn unsat_answer() {
    let input = cnf_file("p cnf 1 2\n1 0\n-1 0\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.txt");

    let answer = dpll_rust::solve(options(input.path(), Some(out.as_path())), Default::default(), Limits::default()).unwrap();
    assert_eq!(answer, Answer::UnSat);
    assert_eq!(answer.exit_code(), 20);
    assert_eq!(fs::read_to_string(&out).unwrap(), "UNSAT\n");
}

#[test]
fn decision_limit_gives_indeterminate() {
    let input = cnf_file("p cnf 2 4\n1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.txt");
    let limits = Limits { decisions: Some(0), ..Limits::default() };

    let answer = dpll_rust::solve(options(input.path(), Some(out.as_path())), Default::default(), limits).unwrap();
    assert_eq!(answer, Answer::Indeterminate);
    assert_eq!(answer.exit_code(), 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "INDETERMINATE\n");
}

#[test]
fn limits_leave_propagation_only_formulas_alone() {
    let input = cnf_file("p cnf 2 2\n1 0\n-1 2 0\n");
    let limits = Limits { decisions: Some(0), propagations: Some(0), seconds: None };

    let answer = dpll_rust::solve(options(input.path(), None), Default::default(), limits).unwrap();
    assert_eq!(answer, Answer::Sat);
}

#[test]
fn propagation_limit_gives_indeterminate() {
    let input = cnf_file("p cnf 3 5\n1 0\n-1 2 3 0\n-2 3 0\n2 -3 0\n-2 -3 0\n");
    let limits = Limits { propagations: Some(1), ..Limits::default() };

    let answer = dpll_rust::solve(options(input.path(), None), Default::default(), limits).unwrap();
    assert_eq!(answer, Answer::Indeterminate);
}

#[test]
fn settings_are_honoured() {
    let input = cnf_file("p cnf 3 3\n1 2 3 0\n-1 2 0\n-2 3 0\n");
    let mut settings = dpll::Settings::default();
    settings.prop.pure_literals = false;
    settings.prop.unit_propagation = false;
    settings.heur.first_phase = false;
    settings.heur.product_weight = 0;

    let answer = dpll_rust::solve(options(input.path(), None), settings, Limits::default()).unwrap();
    assert_eq!(answer, Answer::Sat);
}

#[test]
fn malformed_input_is_an_error() {
    let input = cnf_file("p cnf 2 1\n1 two 0\n");
    let err = dpll_rust::solve(options(input.path(), None), Default::default(), Limits::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn strict_header_mismatch_is_an_error() {
    let input = cnf_file("p cnf 2 3\n1 2 0\n");
    let err = dpll_rust::solve(options(input.path(), None), Default::default(), Limits::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);

    let mut lenient = options(input.path(), None);
    lenient.strict = false;
    let answer = dpll_rust::solve(lenient, Default::default(), Limits::default()).unwrap();
    assert_eq!(answer, Answer::Sat);
}
