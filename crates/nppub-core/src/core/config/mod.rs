use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Variables consulted, in order, for the temporary directory.
const TEMP_DIR_VARS: &[&str] = &["TMPDIR", "TMP", "TEMP"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
    pub json: bool,
}

/// Source of process-level fallbacks the normalizer may not read directly.
pub trait AmbientDefaults: Send + Sync {
    fn temporary_directory(&self) -> PathBuf;
}

/// Reads ambient defaults from the live process environment on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDefaults;

impl AmbientDefaults for SystemDefaults {
    fn temporary_directory(&self) -> PathBuf {
        EnvSnapshot::capture().temporary_directory()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Snapshot the process environment, skipping entries that are not UTF-8.
    #[must_use]
    pub fn capture() -> Self {
        let vars = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }

    #[must_use]
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

impl AmbientDefaults for EnvSnapshot {
    fn temporary_directory(&self) -> PathBuf {
        match TEMP_DIR_VARS.iter().find_map(|key| self.non_empty(key)) {
            Some(dir) => PathBuf::from(strip_trailing_separator(dir)),
            None => env::temp_dir(),
        }
    }
}

fn strip_trailing_separator(dir: &str) -> &str {
    let trimmed = dir.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        &dir[..1]
    } else {
        trimmed
    }
}
