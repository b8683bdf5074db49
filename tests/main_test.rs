use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(root: &Path, path: &str, content: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "conf.json", r#"{"siteA": {"pages": {"404.html": {"title": "Not Found"}}}}"#);
    write(root, "templates/siteA/404.html", "{{ title }}");
    write(root, "css/siteA/main.css", "body {}");
    write(root, "img/siteA/logo.png", "png");
    temp_dir
}

fn errpages(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_errpages"))
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_generate_app_exits_zero() {
    let dir = project();
    let output = errpages(dir.path(), &["siteA"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[siteA] generated '404.html'"), "{stdout}");
    assert_eq!(fs::read_to_string(dir.path().join("dist/siteA/404.html")).unwrap(), "Not Found");
}

#[test]
fn test_unknown_app_exits_one() {
    let dir = project();
    write(dir.path(), "dist/siteZ/404.html", "kept");

    let output = errpages(dir.path(), &["siteZ"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Application 'siteZ' is not defined"), "{stderr}");
    assert_eq!(fs::read_to_string(dir.path().join("dist/siteZ/404.html")).unwrap(), "kept");
}

#[test]
fn test_invalid_arguments_exit_one() {
    let dir = project();
    let output = errpages(dir.path(), &["siteA", "siteB"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_config_exits_one() {
    let dir = project();
    let missing = dir.path().join("missing.json");
    let output = errpages(dir.path(), &[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("dist").exists());
}
