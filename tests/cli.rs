//! Integration tests for the `formfill` binary

mod fixtures;

use assert_cmd::Command;
use fixtures::{field_in, TestFixtures};
use formfill::{FieldFlags, FieldKey, FormNode};
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("formfill").unwrap()
}

fn output_pdfs(dir: &std::path::Path, input_name: &str) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "pdf")
                && path.file_name().is_some_and(|name| name != input_name)
        })
        .collect()
}

#[test]
fn test_fill_writes_timestamped_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = TestFixtures::write(
        dir.path(),
        "form.pdf",
        &TestFixtures::form_pdf(vec![TestFixtures::text_field("name")]),
    );

    cmd()
        .args(["fill", "--input"])
        .arg(&input)
        .args(["--set", "name=John Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Field name found.  Writing value of John Doe",
        ));

    let outputs = output_pdfs(dir.path(), "form.pdf");
    assert_eq!(outputs.len(), 1);
    let saved = std::fs::read(&outputs[0]).unwrap();
    let field = field_in(&saved, "name").unwrap();
    assert_eq!(field.text(FieldKey::Value), Some("John Doe".to_string()));
    assert_eq!(field.flags(), Some(FieldFlags::READ_ONLY));
}

#[test]
fn test_fill_missing_field_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = TestFixtures::write(
        dir.path(),
        "form.pdf",
        &TestFixtures::form_pdf(vec![TestFixtures::text_field("name")]),
    );

    cmd()
        .args(["fill", "--input"])
        .arg(&input)
        .args(["--set", "ghost_field=boo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Field ghost_field not found"));

    assert_eq!(output_pdfs(dir.path(), "form.pdf").len(), 1);
}

#[test]
fn test_fill_without_form_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = TestFixtures::write(dir.path(), "plain.pdf", &TestFixtures::plain_pdf());

    cmd()
        .args(["fill", "--input"])
        .arg(&input)
        .args(["--set", "name=x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("AcroForm not found"));

    assert!(output_pdfs(dir.path(), "plain.pdf").is_empty());
}

#[test]
fn test_fill_missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args(["fill", "--input"])
        .arg(dir.path().join("absent.pdf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_fill_from_values_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = TestFixtures::write(
        dir.path(),
        "form.pdf",
        &TestFixtures::form_pdf(vec![
            TestFixtures::text_field("name"),
            TestFixtures::text_field("city"),
        ]),
    );
    let values = dir.path().join("values.yaml");
    std::fs::write(&values, "name: John Doe\ncity: Springfield\n").unwrap();
    let out_dir = dir.path().join("out");

    cmd()
        .args(["fill", "--input"])
        .arg(&input)
        .arg("--values")
        .arg(&values)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let outputs = output_pdfs(&out_dir, "form.pdf");
    assert_eq!(outputs.len(), 1);
    let saved = std::fs::read(&outputs[0]).unwrap();
    assert_eq!(
        field_in(&saved, "city").unwrap().text(FieldKey::Value),
        Some("Springfield".to_string())
    );
}

#[test]
fn test_list_prints_named_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = TestFixtures::write(
        dir.path(),
        "form.pdf",
        &TestFixtures::form_pdf(vec![
            TestFixtures::text_field("name"),
            TestFixtures::unnamed_text_field(),
        ]),
    );

    cmd()
        .args(["list", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("Field Name: name Field Type: Tx\n"));
}

#[test]
fn test_no_subcommand_fails() {
    cmd().assert().failure();
}
