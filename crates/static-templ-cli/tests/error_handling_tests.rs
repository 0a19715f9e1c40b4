//! Tests for error reporting and exit codes.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn static_templ(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("static-templ");
    cmd.current_dir(dir).env_remove("RUST_LOG").env_remove("STATIC_TEMPL_LOG");
    cmd
}

fn module_with_component(file: &str, source: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let pages = temp.path().join("web/pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(temp.path().join("go.mod"), "module example.com/site\n").unwrap();
    fs::write(pages.join(file), source).unwrap();
    temp
}

#[test]
fn missing_subcommand_is_usage_error() {
    let temp = TempDir::new().unwrap();
    static_templ(temp.path()).assert().code(2);
}

#[test]
fn unknown_mode_is_usage_error() {
    let temp = TempDir::new().unwrap();
    static_templ(temp.path())
        .args(["run", "--mode", "sideways"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn missing_input_directory() {
    let temp = TempDir::new().unwrap();
    static_templ(temp.path())
        .args(["run", "-i", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input directory not found"))
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn no_renderable_component_leaves_output_alone() {
    let temp = module_with_component(
        "card_templ.go",
        "package pages\n\nfunc card() templ.Component {\n\treturn nil\n}\n\nfunc Button(label string) templ.Component {\n\treturn nil\n}\n",
    );
    fs::create_dir_all(temp.path().join("dist")).unwrap();
    fs::write(temp.path().join("dist/keep.html"), "old").unwrap();

    static_templ(temp.path())
        .arg("run")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("discover failed"))
        .stderr(predicate::str::contains("exported"));

    assert!(temp.path().join("dist/keep.html").exists());
    assert!(!temp.path().join("temp").exists());
}

#[test]
fn syntax_error_names_file_and_position() {
    let temp = module_with_component(
        "index_templ.go",
        "package pages\n\nfunc Index( {\n}\n",
    );

    static_templ(temp.path())
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("discover failed"))
        .stderr(predicate::str::contains("index_templ.go"));
}

#[test]
fn colliding_output_names() {
    let temp = module_with_component(
        "index_templ.go",
        "package pages\n\nfunc Home() templ.Component {\n\treturn nil\n}\n",
    );
    fs::write(
        temp.path().join("web/pages/misc_templ.go"),
        "package pages\n\nfunc Index() templ.Component {\n\treturn nil\n}\n\nfunc Other() templ.Component {\n\treturn nil\n}\n",
    )
    .unwrap();

    static_templ(temp.path())
        .args(["run", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("resolve failed"))
        .stderr(predicate::str::contains("index.html"));
}

#[test]
fn missing_go_mod_is_configuration_error() {
    let temp = module_with_component(
        "index_templ.go",
        "package pages\n\nfunc Index() templ.Component {\n\treturn nil\n}\n",
    );
    fs::remove_file(temp.path().join("go.mod")).unwrap();

    static_templ(temp.path())
        .args(["run", "--dry-run"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("go.mod"));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    static_templ(temp.path())
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".static-templ.toml"), "# mine\n").unwrap();

    static_templ(temp.path())
        .args(["init", "--local"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(
        fs::read_to_string(temp.path().join(".static-templ.toml")).unwrap(),
        "# mine\n"
    );
}
