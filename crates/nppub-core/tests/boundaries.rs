use std::fs;
use std::path::PathBuf;

fn source(relative: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {}: {err}", path.display()))
}

const OPTIONS_FILES: [&str; 4] = [
    "src/core/options/mod.rs",
    "src/core/options/defaults.rs",
    "src/core/options/validate.rs",
    "src/core/options/errors.rs",
];

#[test]
fn options_never_touch_the_process_environment() {
    for path in OPTIONS_FILES {
        let contents = source(path);
        assert!(
            !contents.contains("std::env"),
            "options must read ambient defaults through AmbientDefaults: {path}"
        );
        assert!(
            !contents.contains("env::var"),
            "options must not read environment variables: {path}"
        );
    }
}

#[test]
fn options_never_perform_io() {
    for path in OPTIONS_FILES {
        let contents = source(path);
        for needle in ["std::fs", "fs::read", "std::net", "std::process"] {
            assert!(
                !contents.contains(needle),
                "options must stay free of I/O ({needle}): {path}"
            );
        }
    }
}

#[test]
fn options_do_not_depend_on_the_command_layer() {
    for path in OPTIONS_FILES {
        assert!(
            !source(path).contains("crate::core::command"),
            "options should not depend on command plumbing: {path}"
        );
    }
}
