#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod manifest;

pub use manifest::{
    manifest_path, read_manifest, scope_from_name, PackageManifest, PublishConfig, MANIFEST_FILE,
};
