//! Benchmark corpora for `keydiff`.
//!
//! Each corpus is a deterministic, synthetic pair of locale documents: a
//! reference tree of namespaced messages and a translation that drops every
//! seventh key and adds a few of its own.
//!
//! # Examples
//!
//! ```
//! let corpus = keydiff_benches::available_corpora()
//!     .iter()
//!     .find(|c| c.name() == "small")
//!     .expect("registered corpus");
//! let dataset = corpus.load();
//! assert!(!dataset.diff().is_empty());
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use keydiff_core::{KeyDiff, Node};
use serde_json::{json, Map as JsonMap, Value as JsonValue};

/// Shape parameters of a synthetic locale pair.
#[derive(Clone, Copy, Debug)]
pub struct Corpus {
    name: &'static str,
    namespaces: usize,
    keys_per_namespace: usize,
    list_len: usize,
}

const CORPORA: &[Corpus] = &[
    Corpus { name: "small", namespaces: 8, keys_per_namespace: 16, list_len: 3 },
    Corpus { name: "site", namespaces: 64, keys_per_namespace: 48, list_len: 6 },
    Corpus { name: "large", namespaces: 256, keys_per_namespace: 128, list_len: 12 },
];

/// Returns every registered corpus.
#[must_use]
pub fn available_corpora() -> &'static [Corpus] {
    CORPORA
}

impl Corpus {
    /// Name used as the benchmark identifier.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the reference and translated documents.
    #[must_use]
    pub fn load(&self) -> Dataset {
        let mut reference = JsonMap::new();
        let mut target = JsonMap::new();
        let mut counter = 0usize;

        for ns in 0..self.namespaces {
            let mut ref_ns = JsonMap::new();
            let mut tgt_ns = JsonMap::new();
            for key in 0..self.keys_per_namespace {
                counter += 1;
                let name = format!("message_{key}");
                let value = if key % 5 == 0 {
                    json!({ "title": format!("Title {key}"), "body": format!("Body {key}") })
                } else {
                    json!(format!("Text {ns}.{key}"))
                };
                ref_ns.insert(name.clone(), value.clone());
                if counter % 7 != 0 {
                    tgt_ns.insert(name, value);
                }
            }
            let items: Vec<JsonValue> =
                (0..self.list_len).map(|i| json!({ "label": format!("Item {i}") })).collect();
            let mut translated_items = items.clone();
            if ns % 3 == 0 {
                translated_items.pop();
            }
            ref_ns.insert("items".to_string(), JsonValue::Array(items));
            tgt_ns.insert("items".to_string(), JsonValue::Array(translated_items));
            if ns % 4 == 0 {
                tgt_ns.insert("legacy".to_string(), json!("unused"));
            }
            reference.insert(format!("namespace_{ns}"), JsonValue::Object(ref_ns));
            target.insert(format!("namespace_{ns}"), JsonValue::Object(tgt_ns));
        }

        Dataset {
            reference: Node::from_json_value(JsonValue::Object(reference)),
            target: Node::from_json_value(JsonValue::Object(target)),
        }
    }
}

/// A reference document and its translation.
#[derive(Clone, Debug)]
pub struct Dataset {
    reference: Node,
    target: Node,
}

impl Dataset {
    /// The reference locale.
    #[must_use]
    pub fn reference(&self) -> &Node {
        &self.reference
    }

    /// The translated locale.
    #[must_use]
    pub fn target(&self) -> &Node {
        &self.target
    }

    /// Diffs the reference against the translation.
    #[must_use]
    pub fn diff(&self) -> KeyDiff {
        self.reference.diff(&self.target)
    }
}
