#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_ROOT");
    cmd.env_remove("DAYBOOK_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a diary in `dir`
pub fn init_diary(dir: &Path) {
    daybook_cmd().arg("init").arg(dir).assert().success();
}

/// Add an entry through the CLI and return its id
pub fn add_entry(dir: &Path, date: &str, message: &str) -> String {
    let output = daybook_cmd()
        .current_dir(dir)
        .args(["add", "--date", date, "--message", message])
        .args(["--image", "https://example.com/photo.jpg"])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Saved entry ")
        .expect("unexpected add output")
        .to_string()
}
