use errpages::config::{load_config, parse_config};
use errpages::error::Error;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_parse_config() {
    let config = parse_config(
        r#"{
            "siteA": {
                "web_root": "/err",
                "pages": {
                    "404.html": {"title": "Not Found", "code": 404, "links": ["/", "/help"]}
                }
            },
            "siteB": {"pages": {}}
        }"#,
    )
    .unwrap();

    assert_eq!(config.len(), 2);
    assert_eq!(config.app_ids().collect::<Vec<_>>(), ["siteA", "siteB"]);

    let site_a = config.app("siteA").unwrap();
    assert_eq!(site_a.web_root.as_deref(), Some("/err"));
    let page = &site_a.pages["404.html"];
    assert_eq!(page["title"], json!("Not Found"));
    assert_eq!(page["code"], json!(404));
    assert_eq!(page["links"], json!(["/", "/help"]));

    let site_b = config.app("siteB").unwrap();
    assert_eq!(site_b.web_root, None);
    assert!(site_b.pages.is_empty());
}

#[test]
fn test_unknown_app() {
    let config = parse_config(r#"{"siteA": {"pages": {}}}"#).unwrap();
    match config.app("siteC") {
        Err(Error::AppNotFound { app }) => assert_eq!(app, "siteC"),
        other => panic!("Expected AppNotFound, got {other:?}"),
    }
}

#[test]
fn test_malformed_config() {
    let cases = [
        "{not json",
        r#"{"siteA": {"web_root": "/err"}}"#,
        r#"{"siteA": {"pages": {"404.html": "Not Found"}}}"#,
        r#"{"siteA": {"pages": {"../404.html": {}}}}"#,
        r#"["siteA"]"#,
    ];
    for case in cases {
        assert!(
            matches!(parse_config(case), Err(Error::ConfigMalformed(_))),
            "expected ConfigMalformed for {case}"
        );
    }
}

#[test]
fn test_app_ids_must_be_plain_names() {
    let cases = [
        r#"{"../templates": {"pages": {}}}"#,
        r#"{"": {"pages": {}}}"#,
        r#"{"siteA": {"pages": {}}, "nested/siteB": {"pages": {}}}"#,
        r#"{"..": {"pages": {}}}"#,
    ];
    for case in cases {
        match parse_config(case) {
            Err(Error::ConfigMalformed(message)) => {
                assert!(message.starts_with("Invalid application id"), "{message}")
            }
            other => panic!("Expected ConfigMalformed for {case}, got {other:?}"),
        }
    }
}

#[test]
fn test_load_config_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");

    match load_config(&path) {
        Err(Error::ConfigNotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ConfigNotFound, got {other:?}"),
    }
}

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, r#"{"siteA": {"pages": {"500.html": {}}}}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert!(config.app("siteA").unwrap().pages.contains_key("500.html"));
}
