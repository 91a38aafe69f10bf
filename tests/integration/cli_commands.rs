//! End-to-end tests for the projector binary.

use crate::integration::run_projector;
use std::fs;
use tempfile::TempDir;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_add_then_print_from_descendant() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");
    let store = store.to_str().unwrap();

    let out = run_projector(
        temp_dir.path(),
        &["--config", store, "--pwd", "/foo/bar", "add", "foo", "bar3"],
    );
    assert!(out.status.success(), "add failed: {}", stderr(&out));
    assert_eq!(stdout(&out), "");

    let out = run_projector(
        temp_dir.path(),
        &["--config", store, "--pwd", "/foo/bar/baz", "foo"],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out), "bar3\n");
}

#[test]
fn test_print_missing_key_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "/", "nonexistent"],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(!store.exists(), "printing must not create the store file");
}

#[test]
fn test_print_all_is_unmerged_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");
    fs::write(
        &store,
        r#"{"projector":{"/":{"foo":"bar1"},"/foo":{"foo":"bar2"},"/foo/bar":{"baz":"qux"}}}"#,
    )
    .unwrap();

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "/foo/bar"],
    );
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    let scopes = value["projector"].as_object().unwrap();
    assert_eq!(scopes.len(), 3);
    assert_eq!(value["projector"]["/foo"]["foo"], "bar2");
    assert_eq!(value["projector"]["/foo/bar"]["baz"], "qux");
    assert!(value["projector"]["/foo/bar"].get("foo").is_none());
}

#[test]
fn test_print_merged_view() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");
    fs::write(
        &store,
        r#"{"projector":{"/":{"foo":"bar1","fem":"is_great"},"/foo":{"foo":"bar2"}}}"#,
    )
    .unwrap();

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "/foo/x", "--merged"],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out), "{\"fem\":\"is_great\",\"foo\":\"bar2\"}\n");
}

#[test]
fn test_remove_unshadows_ancestor() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");
    fs::write(
        &store,
        r#"{"projector":{"/":{"foo":"bar1"},"/foo/bar":{"foo":"bar3"}}}"#,
    )
    .unwrap();
    let store = store.to_str().unwrap();

    let out = run_projector(temp_dir.path(), &["-c", store, "-p", "/foo/bar", "rm", "foo"]);
    assert!(out.status.success(), "rm failed: {}", stderr(&out));

    let out = run_projector(temp_dir.path(), &["-c", store, "-p", "/foo/bar", "foo"]);
    assert_eq!(stdout(&out), "bar1\n");

    // Second removal is a no-op
    let out = run_projector(temp_dir.path(), &["-c", store, "-p", "/foo/bar", "rm", "foo"]);
    assert!(out.status.success());
    let out = run_projector(temp_dir.path(), &["-c", store, "-p", "/", "foo"]);
    assert_eq!(stdout(&out), "bar1\n");
}

#[test]
fn test_arity_error_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "/", "add", "only_key"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("add expects 2 arguments, but got 1"));
    assert!(!store.exists());
}

#[test]
fn test_error_is_single_stderr_line() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "/", "add", "only_key"],
    );
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert_eq!(err.lines().count(), 1, "unexpected stderr: {:?}", err);
    assert!(!err.contains('\x1b'), "stderr carries ANSI escapes: {:?}", err);
}

#[test]
fn test_relative_pwd_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "foo/bar", "add", "k", "v"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("current location is not usable"));
    assert!(!store.exists());
}

#[test]
fn test_malformed_store_is_fatal_and_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");
    fs::write(&store, "{ not json").unwrap();

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "/", "add", "k", "v"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Malformed store data"));
    assert_eq!(fs::read_to_string(&store).unwrap(), "{ not json");
}

#[test]
fn test_default_store_path_under_xdg_config_home() {
    let temp_dir = TempDir::new().unwrap();

    let out = run_projector(temp_dir.path(), &["--pwd", "/a", "add", "k", "v"]);
    assert!(out.status.success(), "add failed: {}", stderr(&out));

    let expected = temp_dir
        .path()
        .join("config")
        .join("projector")
        .join("projector.json");
    assert!(expected.exists());
}

#[test]
fn test_settings_file_sets_store_path() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("from_settings.json");
    let settings = temp_dir.path().join("settings.toml");
    fs::write(
        &settings,
        format!("store_path = {:?}\n", store.to_str().unwrap()),
    )
    .unwrap();

    let out = run_projector(
        temp_dir.path(),
        &["--settings", settings.to_str().unwrap(), "--pwd", "/", "add", "k", "v"],
    );
    assert!(out.status.success(), "add failed: {}", stderr(&out));
    assert!(store.exists());
}

#[test]
fn test_text_format_renders_table() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");
    fs::write(&store, r#"{"projector":{"/work":{"editor":"vim"}}}"#).unwrap();

    let out = run_projector(
        temp_dir.path(),
        &["--config", store.to_str().unwrap(), "--pwd", "/", "--format", "text"],
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Scope"));
    assert!(text.contains("/work"));
    assert!(text.contains("vim"));
}
