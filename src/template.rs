//! Template resolution.
//!
//! A site may ship its own `template.html` inside the source folder; when it
//! doesn't, the bundled fallback from the assets directory is used instead.
//! There is no merging — whichever file wins is used whole. If neither file
//! exists the run aborts before any page is processed.
//!
//! The resolved template is loaded once and reused (never mutated) for every
//! page: binding works on a fresh copy because substitution is destructive.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filename of a site's own template inside the source folder.
pub const CUSTOM_TEMPLATE: &str = "template.html";
/// Filename of the bundled fallback inside the assets directory.
pub const FALLBACK_TEMPLATE: &str = "template.fallback.html";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no template found: neither {custom} nor the fallback {fallback} exists")]
    NotFound { custom: PathBuf, fallback: PathBuf },
}

/// Resolve the active template text.
///
/// `<src>/template.html` is preferred; otherwise
/// `<assets>/template.fallback.html`.
pub fn resolve(src_dir: &Path, assets_dir: &Path) -> Result<String, TemplateError> {
    let custom = src_dir.join(CUSTOM_TEMPLATE);
    if custom.is_file() {
        return read(custom);
    }
    let fallback = assets_dir.join(FALLBACK_TEMPLATE);
    if fallback.is_file() {
        return read(fallback);
    }
    Err(TemplateError::NotFound { custom, fallback })
}

fn read(path: PathBuf) -> Result<String, TemplateError> {
    fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn custom_template_preferred() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let assets = tmp.path().join("assets");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&assets).unwrap();
        fs::write(src.join(CUSTOM_TEMPLATE), "custom").unwrap();
        fs::write(assets.join(FALLBACK_TEMPLATE), "fallback").unwrap();

        assert_eq!(resolve(&src, &assets).unwrap(), "custom");
    }

    #[test]
    fn fallback_used_when_no_custom_template() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let assets = tmp.path().join("assets");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join(FALLBACK_TEMPLATE), "fallback").unwrap();

        assert_eq!(resolve(&src, &assets).unwrap(), "fallback");
    }

    #[test]
    fn neither_template_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        let err = resolve(&src, &tmp.path().join("assets")).unwrap_err();
        match err {
            TemplateError::NotFound { custom, fallback } => {
                assert!(custom.ends_with("src/template.html"));
                assert!(fallback.ends_with("assets/template.fallback.html"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
