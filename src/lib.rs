//! # mdpage
//!
//! A minimal static page generator. A folder of Markdown documents goes in,
//! a folder of templated HTML pages comes out. No themes, no taxonomies, no
//! build graph — one shared template, one page per source file.
//!
//! # Architecture: Per-File Pipeline
//!
//! Every run is a single pass over the source folder:
//!
//! ```text
//! config.json ──► ConfigStore
//! src/template.html (or bundled fallback) ──► Template
//!
//! for each src/*.md:
//!     convert   markdown → (html body, metadata record)
//!     bind      template markers ←→ record values
//!     write     dest/<name>.html
//!
//! then: validate the configured static asset folder
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.json` loading with per-key typed accessors |
//! | [`template`] | Resolves the active template: custom file or bundled fallback |
//! | [`convert`] | Markdown → HTML plus metadata-block extraction |
//! | [`bind`] | Substitutes record values into literal `<!--NAME-->` markers |
//! | [`generate`] | Orchestration: discover, convert, bind, write, validate |
//! | [`report`] | Console output — emoji/plain progress, colored warnings and errors |
//!
//! # Design Decisions
//!
//! ## Literal Markers, Not a Template Engine
//!
//! Templates are plain HTML files owned by the user, with `<!--NAME-->`
//! comments where values go. Markers are matched as exact substrings — no
//! grammar, no escaping rules, and a template with no markers is just a
//! static page repeated per document. A full engine (Tera, minijinja) would
//! be a heavier contract than the format needs.
//!
//! ## Warnings Never Kill a Page
//!
//! Binding problems come in two directions: the template wants a value the
//! document doesn't have, or the document carries a value no marker uses.
//! Both are per-file warnings: the page is still written, possibly with a
//! visible unreplaced marker, and the run continues. Fatal conditions are
//! reserved for broken setup: missing config, missing template, missing
//! source directory, write failures, and a misconfigured static folder.
//!
//! ## Values Are Trusted HTML
//!
//! Substitution is verbatim. The body is already HTML by construction, and
//! metadata values come from the site author's own files, so there is no
//! escaping layer between the record and the page.

pub mod bind;
pub mod config;
pub mod convert;
pub mod generate;
pub mod report;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
