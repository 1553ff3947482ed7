//! Shared test utilities for the mdpage test suite.
//!
//! Tests lay out a throwaway site in a [`TempDir`]:
//!
//! ```text
//! <tmp>/
//! ├── config.json
//! ├── src/            # source documents + optional template.html
//! ├── assets/         # optional bundled fallback template
//! └── dest/           # output root (created by the build)
//! ```
//!
//! Helpers write the pieces; [`build_options`] points a run at the layout.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::generate::BuildOptions;

/// Create a site root with the given `config.json` content and an empty
/// `src/` directory.
pub fn setup_site(config_json: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.json"), config_json).unwrap();
    fs::create_dir(tmp.path().join("src")).unwrap();
    tmp
}

/// Write a source document under `src/`.
pub fn write_source(root: &Path, name: &str, content: &str) {
    fs::write(root.join("src").join(name), content).unwrap();
}

/// Write the site's own `src/template.html`.
pub fn write_template(root: &Path, content: &str) {
    fs::write(root.join("src/template.html"), content).unwrap();
}

/// Write the bundled fallback under `assets/`.
pub fn write_fallback(root: &Path, content: &str) {
    let assets = root.join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("template.fallback.html"), content).unwrap();
}

/// Build options for the conventional test-site layout.
pub fn build_options(root: &Path) -> BuildOptions {
    BuildOptions::new(root)
}
