use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_editpath"))
        .args(args)
        .output()
        .expect("editpath binary should run")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is utf8")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn prints_distance_then_each_step() {
    let output = run(&["qwerty", "etz"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["4", "qwerty", "qwertz", "qwetz", "qetz", "etz"]
    );
}

#[test]
fn identical_words_print_zero_and_the_word() {
    let output = run(&["same", "same"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["0", "same"]);
}

#[test]
fn empty_words_are_valid_operands() {
    let output = run(&["", ""]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["0", ""]);
}

#[test]
fn no_words_is_a_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("stderr is utf8");
    assert!(stderr.contains("expected exactly two words"));
}

#[test]
fn one_word_is_a_usage_error() {
    let output = run(&["solo"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn three_words_are_a_usage_error() {
    let output = run(&["a", "b", "c"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("stderr is utf8");
    assert!(stderr.contains("unexpected extra word"));
}

#[test]
fn unknown_flags_are_rejected() {
    let output = run(&["--bogus", "a", "b"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("stderr is utf8");
    assert!(stderr.contains("unrecognized argument"));
}

#[test]
fn malformed_cost_values_are_rejected() {
    let output = run(&["--insert-cost", "many", "a", "b"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("stderr is utf8");
    assert!(stderr.contains("insert cost"));
}

#[test]
fn cost_flags_change_the_chosen_path() {
    let output = run(&["--replace-cost=100", "A", "B"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["2", "A", "", "B"]);
}

#[test]
fn cost_flags_accept_the_space_separated_form() {
    let output = run(&["--delete-cost", "2", "--replace-cost", "3", "AaaaA", "BaaaB"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.first().map(String::as_str), Some("6"));
    assert_eq!(lines.last().map(String::as_str), Some("BaaaB"));
}

#[test]
fn double_dash_ends_option_parsing() {
    let output = run(&["--", "-a", "-b"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["1", "-a", "-b"]);
}

#[test]
fn help_prints_usage_and_exits_cleanly() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(stdout.contains("Usage: editpath"));
}
