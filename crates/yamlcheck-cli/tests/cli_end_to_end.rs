//! End-to-end tests driving the built `yamlcheck` binary

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn yamlcheck(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yamlcheck"))
        .args(args)
        .current_dir(cwd)
        .env_remove("YAMLCHECK_DIRS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run yamlcheck")
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_missing_rules_argument_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    let output = yamlcheck(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Usage: yamlcheck <conditions_file>\n");
}

#[test]
fn test_no_record_documents() {
    let temp_dir = TempDir::new().unwrap();
    let output = yamlcheck(temp_dir.path(), &["conditions.yaml"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No YAML files found to validate.\n");
}

#[test]
fn test_one_violation_among_two_resources() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "conditions.yaml", "mandatory:\n  - name\n  - bucket_acl\n");
    write(
        temp_dir.path(),
        "yaml_files/s3.yaml",
        "- name: logs\n  bucket_acl: private\n- name: assets\n",
    );

    let output = yamlcheck(temp_dir.path(), &["conditions.yaml"]);
    assert_eq!(output.status.code(), Some(1));

    let text = stdout(&output);
    let errors: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("In the file"))
        .collect();
    assert_eq!(
        errors,
        vec!["In the file yaml_files/s3.yaml, the key bucket_acl is not present for the resource assets."]
    );
}

#[test]
fn test_clean_run_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "conditions.yaml", "type:\n  port: int\n");
    write(temp_dir.path(), "yaml_files/a.yaml", "- {name: web, port: 80}\n");
    write(temp_dir.path(), "yaml_files2/nested/b.yaml", "- {name: db}\n");

    let output = yamlcheck(temp_dir.path(), &["conditions.yaml"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Validating yaml_files/a.yaml...\n\
         Validating yaml_files2/nested/b.yaml...\n\
         Validation successful!\n"
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "conditions.yaml",
        "mandatory: [name, region]\nallowed_values:\n  tier: [gold, silver]\n",
    );
    for name in ["c.yaml", "a.yaml", "b/b.yaml"] {
        write(
            temp_dir.path(),
            &format!("yaml_files/{}", name),
            "- {name: x, tier: bronze}\n- {name: y, region: eu}\n",
        );
    }

    let first = yamlcheck(temp_dir.path(), &["conditions.yaml"]);
    let second = yamlcheck(temp_dir.path(), &["conditions.yaml"]);
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_malformed_rules_are_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "conditions.yaml", "length:\n  name: [1, 2, 3]\n");
    write(temp_dir.path(), "yaml_files/a.yaml", "- {name: web}\n");

    let output = yamlcheck(temp_dir.path(), &["conditions.yaml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid length constraint"));
}

#[test]
fn test_custom_directory_and_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "rules.yaml", "length:\n  region: [9]\n");
    write(temp_dir.path(), "records/r.yaml", "- {name: r1, region: eu-west-10}\n");
    write(temp_dir.path(), "yaml_files/ignored.yaml", "- {name: r2, region: x}\n");

    let output = yamlcheck(
        temp_dir.path(),
        &["rules.yaml", "--dir", "records", "--format", "json"],
    );
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["files_checked"], 1);
    assert_eq!(json["files"][0]["file"], "records/r.yaml");
    assert_eq!(json["files"][0]["findings"][0]["field"], "region");
}
