#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::assert::Assert;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub fn prepare_package(prefix: &str, manifest: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let root = temp.path().join("package");
    fs::create_dir_all(&root).expect("package dir");
    fs::write(root.join("package.json"), manifest).expect("write manifest");
    (temp, root)
}

/// `nppub` with a scrubbed environment so ambient tokens never leak in.
pub fn nppub() -> Command {
    let mut cmd = cargo_bin_cmd!("nppub");
    cmd.env_remove("NPM_TOKEN").env("NO_COLOR", "1");
    cmd
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}
