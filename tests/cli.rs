//! CLI integration tests. Each test runs the binary against a temp project root.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notebook-portfolio"))
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn gen_config_prints_loadable_toml() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["gen-config"]);
    assert!(out.status.success());

    fs::write(tmp.path().join("portfolio.toml"), stdout(&out)).unwrap();
    let check = run(tmp.path(), &["check"]);
    assert!(check.status.success());
}

#[test]
fn routes_lists_builtin_entries() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["routes"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("#/projects/epilepsy-gwas"));
    assert!(text.contains("#/blogs/why-genomics-journey"));
    assert!(text.contains("Fallbacks"));
}

#[test]
fn settings_set_then_get() {
    let tmp = TempDir::new().unwrap();
    let set = run(tmp.path(), &["settings", "set", "tagline", "Genomes • Code"]);
    assert!(set.status.success());
    assert!(tmp.path().join(".portfolio/settings.json").exists());

    let get = run(tmp.path(), &["settings", "get", "tagline"]);
    assert!(get.status.success());
    assert_eq!(stdout(&get).trim_end(), "Genomes • Code");
}

#[test]
fn settings_unknown_field_fails() {
    let tmp = TempDir::new().unwrap();
    assert!(!run(tmp.path(), &["settings", "get", "favoriteColor"]).status.success());
    assert!(!run(tmp.path(), &["settings", "set", "favoriteColor", "x"]).status.success());
}

#[test]
fn settings_reset_restores_defaults() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["settings", "set", "name", "Someone"]);
    assert!(run(tmp.path(), &["settings", "reset"]).status.success());
    let get = run(tmp.path(), &["settings", "get", "name"]);
    assert_eq!(stdout(&get).trim_end(), "Harita Anbuvelan");
}

#[test]
fn render_accepts_fragments_and_routes() {
    let tmp = TempDir::new().unwrap();
    let resume = stdout(&run(tmp.path(), &["render", "#/resume"]));
    assert!(resume.starts_with("<!DOCTYPE html>"));
    assert!(resume.contains("Experience"));

    let missing = stdout(&run(tmp.path(), &["render", "--fragment", "/projects/"]));
    assert!(missing.contains("Project not found"));
    assert!(!missing.contains("<!DOCTYPE html>"));
}

#[test]
fn build_writes_index() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("site");
    let out = run(
        tmp.path(),
        &["build", "--output", out_dir.to_str().unwrap()],
    );
    assert!(out.status.success());
    assert!(out_dir.join("index.html").exists());
    assert!(stdout(&out).contains("Preview not found"));
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("portfolio.toml"), "[preview]\nmax_rows = 0\n").unwrap();
    assert!(!run(tmp.path(), &["check"]).status.success());
}
