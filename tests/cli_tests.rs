use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn path_str(&self, name: &str) -> String {
        self.path(name).to_str().unwrap().to_string()
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keymapcraft"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_presets_lists_both() {
    let output = run(&["presets"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("jis-full"));
    assert!(out.contains("US ANSI Compact"));
}

#[test]
fn test_cli_inspect_preset() {
    let output = run(&["inspect", "--preset", "us"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("US ANSI Compact"));
    assert!(out.contains("No overlapping keys"));
}

#[test]
fn test_cli_export_then_import() {
    let ctx = TestContext::new();
    let file = ctx.path_str("jis.json");

    let export = run(&["export", "--preset", "jis-full", "--format", "json", "--output", &file]);
    assert!(export.status.success());
    assert!(ctx.path("jis.json").exists());

    let import = run(&["import", &file]);
    assert!(import.status.success());
    let out = stdout(&import);
    assert!(out.contains("Imported 'JIS Full' as imported_"));
}

#[test]
fn test_cli_import_malformed_fails() {
    let ctx = TestContext::new();
    let file = ctx.path_str("bad.json");
    fs::write(&file, r#"{"id": "x", "keys": []}"#).unwrap();

    let output = run(&["import", &file]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("name"));
}

#[test]
fn test_cli_export_csv_and_url() {
    let csv = run(&["export", "--preset", "us", "--format", "csv"]);
    assert!(csv.status.success());
    let out = stdout(&csv);
    assert!(out.starts_with("id,keycode,x,y,width,height,normal,shift,fn,altgr"));
    assert_eq!(out.lines().count(), 62);

    let url = run(&["export", "--preset", "us", "--format", "url"]);
    assert!(url.status.success());
    assert!(stdout(&url).starts_with("https://keymapcraft.app/?layout="));
}

#[test]
fn test_cli_share_url_import() {
    let ctx = TestContext::new();
    let link = ctx.path_str("link.txt");
    let export = run(&["export", "--preset", "us", "--format", "url", "--output", &link]);
    assert!(export.status.success());

    let import = run(&["import", "--url", &link]);
    assert!(import.status.success());
    assert!(stdout(&import).contains("US ANSI Compact"));
}

#[test]
fn test_cli_compare_presets() {
    let output = run(&["compare", "us", "jis-full"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("key1"));
    assert!(out.contains("difference(s)"));
}

#[test]
fn test_cli_config_flag() {
    let ctx = TestContext::new();
    let config = ctx.path_str("editor.json");
    fs::write(&config, r#"{"share_base_url": "https://example.test/edit"}"#).unwrap();

    let output = run(&["--config", &config, "export", "--preset", "us", "--format", "url"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("https://example.test/edit?layout="));

    fs::write(&config, r#"{"unit_px": -3}"#).unwrap();
    let output = run(&["--config", &config, "presets"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_editor_flags_override_defaults() {
    // US extent is 15u x 5u; default 50px/u with 16px padding
    let default = run(&["inspect", "--preset", "us"]);
    assert!(stdout(&default).contains("782 x 282 px"));

    let scaled = run(&["inspect", "--preset", "us", "--unit-px", "25"]);
    assert!(scaled.status.success());
    assert!(stdout(&scaled).contains("407 x 157 px"));

    let invalid = run(&["inspect", "--preset", "us", "--unit-px", "0"]);
    assert_eq!(invalid.status.code(), Some(1));
}

#[test]
fn test_cli_flags_win_over_config_file() {
    let ctx = TestContext::new();
    let config = ctx.path_str("editor.json");
    fs::write(&config, r#"{"unit_px": 25.0, "canvas_padding_px": 0.0}"#).unwrap();

    let from_file = run(&["--config", &config, "inspect", "--preset", "us"]);
    assert!(stdout(&from_file).contains("375 x 125 px"));

    let overridden = run(&["--config", &config, "inspect", "--preset", "us", "--unit-px", "10"]);
    assert!(stdout(&overridden).contains("150 x 50 px"));
}

#[test]
fn test_cli_export_input_keeps_layout_id() {
    let ctx = TestContext::new();
    let file = ctx.path_str("us.json");
    let export = run(&["export", "--preset", "us", "--output", &file]);
    assert!(export.status.success());

    let again = run(&["export", "--input", &file, "--format", "json"]);
    assert!(again.status.success());
    let out = stdout(&again);
    assert!(out.contains(r#""id": "us-ansi""#));
    assert!(!out.contains("imported_"));
}

#[test]
fn test_cli_unknown_preset_fails() {
    let output = run(&["inspect", "--preset", "colemak"]);
    assert_eq!(output.status.code(), Some(1));
}
