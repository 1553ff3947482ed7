//! Markdown conversion and metadata extraction.
//!
//! A source document is a metadata block followed by a Markdown body:
//!
//! ```text
//! title: My first page
//! author: Someone
//!     Someone Else
//!
//! # Heading
//!
//! Body text.
//! ```
//!
//! The metadata block is a run of `Key: value` lines at the very top of the
//! file. Keys are lowercased; a repeated key or a line indented by four
//! spaces appends another value to the same key, so every key maps to a
//! sequence of strings. The block ends at the first blank or non-matching
//! line (a single blank separator line is consumed with the block).
//!
//! Conversion produces the raw multi-valued mapping plus the body rendered
//! to HTML. Pages only ever want one value per key, so [`Converted::into_record`]
//! keeps the first value of each key and stores the HTML body under the
//! reserved [`HTML_KEY`].

use pulldown_cmark::{Options, Parser, html};
use std::collections::BTreeMap;

/// Reserved record key holding the converted HTML body.
pub const HTML_KEY: &str = "html";

/// Markdown-to-HTML converter. Cheap to construct, reusable across files.
#[derive(Debug, Clone)]
pub struct Converter {
    options: Options,
}

impl Converter {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }

    /// Convert one document: extract the metadata block, render the rest.
    pub fn convert(&self, text: &str) -> Converted {
        let (meta, body) = split_meta(text);
        let parser = Parser::new_ext(body, self.options);
        let mut html_out = String::new();
        html::push_html(&mut html_out, parser);
        // pulldown-cmark ends blocks with a newline; pages splice the body
        // between markers, so the trailing one is noise.
        while html_out.ends_with('\n') {
            html_out.pop();
        }
        Converted {
            html: html_out,
            meta,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw converter output: HTML body plus the multi-valued metadata mapping.
#[derive(Debug, Clone)]
pub struct Converted {
    pub html: String,
    pub meta: BTreeMap<String, Vec<String>>,
}

impl Converted {
    /// Collapse to the per-page record: first value per metadata key, body
    /// under [`HTML_KEY`]. A metadata key literally named `html` is
    /// overwritten by the body.
    pub fn into_record(self) -> DocumentRecord {
        let mut record = DocumentRecord::default();
        for (key, values) in self.meta {
            if let Some(first) = values.into_iter().next() {
                record.insert(key, first);
            }
        }
        record.insert(HTML_KEY.to_string(), self.html);
        record
    }
}

/// The per-file bag of metadata values plus the converted HTML body.
///
/// Created per source file, consumed once by the binder, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRecord {
    values: BTreeMap<String, String>,
}

impl DocumentRecord {
    pub fn insert(&mut self, key: String, value: String) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in sorted order, which keeps warning output deterministic.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Split the leading metadata block off a document, returning the mapping
/// and the remaining body text.
fn split_meta(text: &str) -> (BTreeMap<String, Vec<String>>, &str) {
    let mut meta: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current_key: Option<String> = None;
    let mut consumed = 0;

    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if let Some((key, value)) = parse_meta_line(content) {
            meta.entry(key.clone()).or_default().push(value);
            current_key = Some(key);
        } else if let Some(key) = continuation_key(content, &current_key) {
            if let Some(values) = meta.get_mut(key) {
                values.push(content.trim().to_string());
            }
        } else {
            // A blank line after at least one meta line belongs to the
            // block; anything else starts the body.
            if content.is_empty() && !meta.is_empty() {
                consumed += line.len();
            }
            break;
        }
        consumed += line.len();
    }

    (meta, &text[consumed..])
}

/// Parse a `Key: value` metadata line. Keys are `[A-Za-z0-9_-]+` and get
/// lowercased; values are trimmed and may be empty.
fn parse_meta_line(line: &str) -> Option<(String, String)> {
    if line.starts_with(' ') || line.starts_with('\t') {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    let key = key.trim_end();
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some((key.to_ascii_lowercase(), value.trim().to_string()))
}

/// A line indented by four spaces continues the previous key, if any.
fn continuation_key<'a>(line: &str, current: &'a Option<String>) -> Option<&'a String> {
    if line.starts_with("    ") && !line.trim().is_empty() {
        current.as_ref()
    } else {
        None
    }
}
