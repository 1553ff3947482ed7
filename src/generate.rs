//! Site generation — discover, convert, bind, write.
//!
//! The orchestration layer wires the other modules into one run:
//!
//! 1. Load `config.json` ([`crate::config`]); read the emoji flag.
//! 2. Resolve the source directory and the template ([`crate::template`]) —
//!    a missing template aborts before anything is written.
//! 3. For each immediate `*.md` file in the source folder (subdirectories
//!    are skipped, not recursed): convert, bind with the canonical
//!    bindings, and write `<output>/<name>.html`. Binding warnings are
//!    reported and the page is written anyway.
//! 4. Validate the configured static asset folder under the output root.
//!
//! Files are processed strictly sequentially in sorted filename order.
//! Fatal conditions stop the run where they occur; pages already written
//! stay on disk.

use crate::bind::{self, BindWarning, Binding};
use crate::config::{self, ConfigStore};
use crate::convert::Converter;
use crate::report;
use crate::template;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Template(#[from] template::TemplateError),
    #[error("failed to list source directory {path}: {source}")]
    ListSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("static file folder '{name}' does not exist at {path}")]
    StaticFolderMissing { name: String, path: PathBuf },
}

/// Paths a run operates on. Constructed once in `main` (or a test) and
/// passed down — no ambient globals.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Working directory; the default source folder lives under it.
    pub cwd: PathBuf,
    /// Path to `config.json`.
    pub config_path: PathBuf,
    /// Output root the pages are written into.
    pub output_dir: PathBuf,
    /// Directory holding the bundled fallback template.
    pub assets_dir: PathBuf,
}

impl BuildOptions {
    /// Conventional layout rooted at `cwd`: `config.json`, `dest/`, `assets/`.
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            config_path: cwd.join("config.json"),
            output_dir: cwd.join("dest"),
            assets_dir: cwd.join("assets"),
        }
    }
}

/// What a run produced, for callers and tests.
#[derive(Debug)]
pub struct Summary {
    pub pages: Vec<PageSummary>,
}

/// One written page: source filename, output path, binding warnings.
#[derive(Debug)]
pub struct PageSummary {
    pub source: String,
    pub output: PathBuf,
    pub warnings: Vec<BindWarning>,
}

/// Run the whole pipeline.
pub fn generate(opts: &BuildOptions) -> Result<Summary, GenerateError> {
    let config = ConfigStore::load(&opts.config_path)?;
    let emoji = config.emoji();
    if let Some(actual) = emoji.invalid_type {
        report::warn(&format!(
            "config key '{}': expected boolean, got {actual}; emoji output stays enabled",
            config::EMOJI_KEY
        ));
    }

    let src_dir = config.src_folder(&opts.cwd)?;
    let template_text = template::resolve(&src_dir, &opts.assets_dir)?;

    fs::create_dir_all(&opts.output_dir).map_err(|source| GenerateError::OutputWrite {
        path: opts.output_dir.clone(),
        source,
    })?;

    let converter = Converter::new();
    let bindings = bind::canonical_bindings();

    let mut pages = Vec::new();
    for filename in find_source_files(&src_dir)? {
        let page = process_file(
            &src_dir,
            &opts.output_dir,
            &filename,
            &template_text,
            &converter,
            &bindings,
        )?;
        for warning in &page.warnings {
            report::warn(&format!("{}: {warning}", page.source));
        }
        report::print_wrote(&page.source, emoji.enabled);
        pages.push(page);
    }

    validate_static_folder(&config, &opts.output_dir)?;

    Ok(Summary { pages })
}

/// Validate the setup without writing anything. Returns the source files a
/// build would process.
pub fn check(opts: &BuildOptions) -> Result<Vec<String>, GenerateError> {
    let config = ConfigStore::load(&opts.config_path)?;
    let src_dir = config.src_folder(&opts.cwd)?;
    template::resolve(&src_dir, &opts.assets_dir)?;
    let files = find_source_files(&src_dir)?;
    validate_static_folder(&config, &opts.output_dir)?;
    Ok(files)
}

/// Convert, bind, and write a single source file.
fn process_file(
    src_dir: &Path,
    output_dir: &Path,
    filename: &str,
    template_text: &str,
    converter: &Converter,
    bindings: &[Binding],
) -> Result<PageSummary, GenerateError> {
    let source_path = src_dir.join(filename);
    let text = fs::read_to_string(&source_path).map_err(|source| GenerateError::ReadSource {
        path: source_path,
        source,
    })?;

    let record = converter.convert(&text).into_record();
    let bound = bind::bind(template_text, &record, bindings);

    let output = output_path(output_dir, filename);
    fs::write(&output, &bound.html).map_err(|source| GenerateError::OutputWrite {
        path: output.clone(),
        source,
    })?;

    Ok(PageSummary {
        source: filename.to_string(),
        output,
        warnings: bound.warnings,
    })
}

/// Immediate `*.md` files in the source folder, sorted by name.
///
/// Subdirectories are skipped, not recursed into. Sorting pins the build
/// order — OS listing order is not stable across platforms.
pub fn find_source_files(src_dir: &Path) -> Result<Vec<String>, GenerateError> {
    let list_err = |source| GenerateError::ListSource {
        path: src_dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(src_dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".md") {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

/// Derive the output path: the final three characters of the filename are
/// replaced by `.html`, whatever they are. `a.b.md` keeps its embedded dot.
/// Source names are trusted to end in `.md`; shorter names produce a
/// malformed output name rather than an error.
pub fn output_path(output_dir: &Path, filename: &str) -> PathBuf {
    let stem = &filename[..filename.len().saturating_sub(3)];
    output_dir.join(format!("{stem}.html"))
}

/// If a static folder is configured it must be a directory under the
/// output root. Existence check only — copying is not this tool's job.
pub fn validate_static_folder(
    config: &ConfigStore,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let Some(name) = config.static_folder()? else {
        return Ok(());
    };
    let path = output_dir.join(name);
    if !path.is_dir() {
        return Err(GenerateError::StaticFolderMissing {
            name: name.to_string(),
            path,
        });
    }
    Ok(())
}
