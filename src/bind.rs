//! Placeholder binding — the content-assembly core.
//!
//! A template carries literal markers of the form `<!--NAME-->`. Binding
//! walks an ordered list of [`Binding`] entries, each pairing a record key
//! with the marker it fills, and substitutes matched values verbatim. The
//! marker is an exact substring — no regex, no escaping — and every
//! occurrence is replaced in one pass.
//!
//! The check direction is deliberately asymmetric: each entry asks "is my
//! marker in the template", never "is my key in the record". A marker that
//! isn't in the template is silently skipped. A marker that is present but
//! has no value warns ([`BindWarning::MissingValue`]) and stays in the
//! output as-is. After all entries run, a completeness pass warns
//! ([`BindWarning::UnusedValue`]) for every record value that ended up
//! substituted nowhere. None of this aborts the page.

use crate::convert::DocumentRecord;
use std::collections::BTreeSet;
use thiserror::Error;

/// A rule pairing a record key with the template marker it fills.
///
/// Without an override the marker name is the uppercased key, so the
/// `title` key fills `<!--TITLE-->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    marker_override: Option<String>,
}

impl Binding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            marker_override: None,
        }
    }

    /// Bind `key` to a marker whose name differs from the uppercased key.
    pub fn with_marker(key: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            marker_override: Some(marker.into()),
        }
    }

    /// The literal marker string this entry looks for.
    pub fn marker(&self) -> String {
        match &self.marker_override {
            Some(name) => format!("<!--{name}-->"),
            None => format!("<!--{}-->", self.key.to_uppercase()),
        }
    }
}

/// The two bindings every page gets: `title` → `<!--TITLE-->` and the
/// converted body → `<!--CONTENT-->`.
pub fn canonical_bindings() -> Vec<Binding> {
    vec![
        Binding::new("title"),
        Binding::with_marker(crate::convert::HTML_KEY, "CONTENT"),
    ]
}

/// Per-page advisory conditions. Reported, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindWarning {
    #[error("template wants {marker} but the document has no '{key}' value")]
    MissingValue { key: String, marker: String },
    #[error("document value '{0}' is not used by any placeholder in the template")]
    UnusedValue(String),
}

/// A bound page plus everything worth telling the user about it.
#[derive(Debug, Clone)]
pub struct Bound {
    pub html: String,
    pub warnings: Vec<BindWarning>,
}

/// Bind a record into a template.
///
/// Entries are processed in the given order and never short-circuit: a
/// missing value only warns, and later entries still run. The template
/// itself is untouched — substitution happens on a fresh copy.
pub fn bind(template: &str, record: &DocumentRecord, bindings: &[Binding]) -> Bound {
    let mut page = template.to_string();
    let mut warnings = Vec::new();
    let mut consumed: BTreeSet<&str> = BTreeSet::new();

    for binding in bindings {
        let marker = binding.marker();
        if !page.contains(&marker) {
            // An unfilled entry is not the template's problem; only the
            // reverse direction is flagged, below.
            continue;
        }
        match record.get(&binding.key) {
            Some(value) => {
                page = page.replace(&marker, value);
                consumed.insert(binding.key.as_str());
            }
            None => warnings.push(BindWarning::MissingValue {
                key: binding.key.clone(),
                marker,
            }),
        }
    }

    // Completeness check, separate from the binding loop: every record
    // value that was substituted nowhere gets flagged once.
    for key in record.keys() {
        if !consumed.contains(key) {
            warnings.push(BindWarning::UnusedValue(key.to_string()));
        }
    }

    Bound { html: page, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> DocumentRecord {
        let mut record = DocumentRecord::default();
        for (key, value) in pairs {
            record.insert(key.to_string(), value.to_string());
        }
        record
    }

    #[test]
    fn canonical_bindings_fill_title_and_content() {
        let record = record(&[("title", "Home"), ("html", "<p>Hi</p>")]);
        let bound = bind(
            "<!--TITLE--><!--CONTENT-->",
            &record,
            &canonical_bindings(),
        );
        assert_eq!(bound.html, "Home<p>Hi</p>");
        assert!(bound.warnings.is_empty());
    }

    #[test]
    fn marker_name_defaults_to_uppercased_key() {
        assert_eq!(Binding::new("title").marker(), "<!--TITLE-->");
        assert_eq!(
            Binding::with_marker("html", "CONTENT").marker(),
            "<!--CONTENT-->"
        );
    }

    #[test]
    fn all_occurrences_are_replaced() {
        let record = record(&[("title", "X")]);
        let bound = bind(
            "<!--TITLE--> and <!--TITLE--> and <!--TITLE-->",
            &record,
            &[Binding::new("title")],
        );
        assert_eq!(bound.html, "X and X and X");
    }

    #[test]
    fn absent_marker_is_silent_whether_or_not_key_exists() {
        let with_key = record(&[("title", "Home")]);
        let bound = bind("<p>static</p>", &with_key, &[Binding::new("title")]);
        assert_eq!(bound.html, "<p>static</p>");
        // the value went unused, which the completeness pass reports
        assert_eq!(
            bound.warnings,
            vec![BindWarning::UnusedValue("title".to_string())]
        );

        let without_key = DocumentRecord::default();
        let bound = bind("<p>static</p>", &without_key, &[Binding::new("title")]);
        assert_eq!(bound.html, "<p>static</p>");
        assert!(bound.warnings.is_empty());
    }

    #[test]
    fn present_marker_with_missing_value_warns_and_keeps_marker() {
        let bound = bind(
            "<!--TITLE-->body",
            &DocumentRecord::default(),
            &[Binding::new("title")],
        );
        assert_eq!(bound.html, "<!--TITLE-->body");
        assert_eq!(
            bound.warnings,
            vec![BindWarning::MissingValue {
                key: "title".to_string(),
                marker: "<!--TITLE-->".to_string(),
            }]
        );
    }

    #[test]
    fn missing_value_does_not_stop_later_bindings() {
        let record = record(&[("html", "<p>Hi</p>")]);
        let bound = bind(
            "<!--TITLE--><!--CONTENT-->",
            &record,
            &canonical_bindings(),
        );
        assert_eq!(bound.html, "<!--TITLE--><p>Hi</p>");
        assert_eq!(bound.warnings.len(), 1);
    }

    #[test]
    fn values_are_substituted_verbatim_without_escaping() {
        let record = record(&[("title", "<b>&ampersand</b>")]);
        let bound = bind("<!--TITLE-->", &record, &[Binding::new("title")]);
        assert_eq!(bound.html, "<b>&ampersand</b>");
    }

    // The unused-value completeness check is a deliberate design choice:
    // the historical generator declared this warning but never emitted it.
    #[test]
    fn unconsumed_record_value_warns() {
        let record = record(&[("title", "Home"), ("html", "<p>Hi</p>"), ("author", "Ben")]);
        let bound = bind(
            "<!--TITLE--><!--CONTENT-->",
            &record,
            &canonical_bindings(),
        );
        assert_eq!(
            bound.warnings,
            vec![BindWarning::UnusedValue("author".to_string())]
        );
    }

    #[test]
    fn binding_is_idempotent() {
        let record = record(&[("title", "Home")]);
        let bindings = [Binding::new("title"), Binding::new("missing")];
        let template = "<!--TITLE--> <!--MISSING--> <!--UNBOUND-->";
        let first = bind(template, &record, &bindings);
        let second = bind(template, &record, &bindings);
        assert_eq!(first.html, second.html);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn arbitrary_extra_bindings_are_supported() {
        let record = record(&[("title", "T"), ("author", "A")]);
        let bindings = [
            Binding::new("title"),
            Binding::new("author"),
            Binding::with_marker("author", "BYLINE"),
        ];
        let bound = bind("<!--TITLE--> by <!--BYLINE-->", &record, &bindings);
        assert_eq!(bound.html, "T by A");
        assert!(bound.warnings.is_empty());
    }
}
