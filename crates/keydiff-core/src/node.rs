use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Number as JsonNumber, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use crate::{
    diff::{Path, PathSegment},
    KeyDiff, LoadError,
};

/// Represents a localization document as a tree of objects, arrays and leaves.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, kept exactly as parsed.
    Number(JsonNumber),
    /// JSON string.
    String(String),
    /// JSON array.
    Array(Vec<Node>),
    /// JSON object. Keys are kept ordered; source order never matters here.
    Object(BTreeMap<String, Node>),
}

impl Node {
    /// Parses a JSON string into a document.
    ///
    /// ```
    /// # use keydiff_core::Node;
    /// let node = Node::from_json_str("{\"hello\":\"world\"}")?;
    /// assert!(matches!(node, Node::Object(_)));
    /// # Ok::<(), keydiff_core::LoadError>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, LoadError> {
        if input.trim().is_empty() {
            return Err(LoadError::Empty);
        }
        let value: JsonValue = serde_json::from_str(input)?;
        Ok(Self::from_json_value(value))
    }

    /// Parses a YAML string into a document.
    ///
    /// ```
    /// # use keydiff_core::Node;
    /// let node = Node::from_yaml_str("---\ngreeting: hello\n")?;
    /// assert!(matches!(node, Node::Object(_)));
    /// # Ok::<(), keydiff_core::LoadError>(())
    /// ```
    pub fn from_yaml_str(input: &str) -> Result<Self, LoadError> {
        if input.trim().is_empty() {
            return Err(LoadError::Empty);
        }
        let value: YamlValue = serde_yaml::from_str(input)?;
        Self::from_yaml_value(value)
    }

    /// Converts a serde JSON value into a [`Node`].
    #[must_use]
    pub fn from_json_value(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(v) => Self::Bool(v),
            JsonValue::Number(num) => Self::Number(num),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(values) => {
                Self::Array(values.into_iter().map(Self::from_json_value).collect())
            }
            JsonValue::Object(map) => Self::Object(
                map.into_iter().map(|(key, value)| (key, Self::from_json_value(value))).collect(),
            ),
        }
    }

    fn from_yaml_value(value: YamlValue) -> Result<Self, LoadError> {
        match value {
            YamlValue::Null => Ok(Self::Null),
            YamlValue::Bool(v) => Ok(Self::Bool(v)),
            YamlValue::Number(num) => {
                if let Some(i) = num.as_i64() {
                    return Ok(Self::Number(JsonNumber::from(i)));
                }
                if let Some(u) = num.as_u64() {
                    return Ok(Self::Number(JsonNumber::from(u)));
                }
                num.as_f64()
                    .and_then(JsonNumber::from_f64)
                    .map(Self::Number)
                    .ok_or_else(|| LoadError::NonFiniteNumber { value: num.to_string() })
            }
            YamlValue::String(s) => Ok(Self::String(s)),
            YamlValue::Sequence(seq) => {
                let mut items = Vec::with_capacity(seq.len());
                for value in seq {
                    items.push(Self::from_yaml_value(value)?);
                }
                Ok(Self::Array(items))
            }
            YamlValue::Mapping(map) => {
                let mut object = BTreeMap::new();
                for (key, value) in map {
                    let key = match key {
                        YamlValue::String(s) => s,
                        other => {
                            return Err(LoadError::NonStringYamlKey {
                                found: format!("{other:?}"),
                            });
                        }
                    };
                    object.insert(key, Self::from_yaml_value(value)?);
                }
                Ok(Self::Object(object))
            }
            YamlValue::Tagged(tagged) => {
                Err(LoadError::UnsupportedYamlTag { tag: tagged.tag.to_string() })
            }
        }
    }

    /// Returns a short name for the node's structural kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Enumerates every leaf together with its path, in document order.
    ///
    /// Empty objects and arrays contribute no entries.
    ///
    /// ```
    /// # use keydiff_core::Node;
    /// let node = Node::from_json_str("{\"nav\":{\"home\":\"Home\"},\"tags\":[\"a\",\"b\"]}")?;
    /// let paths: Vec<String> = node.leaves().iter().map(|(path, _)| path.to_string()).collect();
    /// assert_eq!(paths, ["nav.home", "tags[0]", "tags[1]"]);
    /// # Ok::<(), keydiff_core::LoadError>(())
    /// ```
    #[must_use]
    pub fn leaves(&self) -> Vec<(Path, &Node)> {
        let mut leaves = Vec::new();
        let mut path = Path::new();
        collect_leaves(self, &mut path, &mut leaves);
        leaves
    }

    /// Counts the distinct rendered leaf paths reachable from this node.
    ///
    /// Leaves whose paths render identically (key `"a.b"` next to nested
    /// `a` → `b`) count as a single entry.
    ///
    /// ```
    /// # use keydiff_core::Node;
    /// let node = Node::from_json_str("{\"a\":1,\"b\":{\"c\":2,\"d\":{}}}")?;
    /// assert_eq!(node.leaf_count(), 2);
    /// # Ok::<(), keydiff_core::LoadError>(())
    /// ```
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().iter().map(|(path, _)| path.to_string()).collect::<BTreeSet<_>>().len()
    }

    /// Compares the key structure of `self` (the reference) against `target`.
    ///
    /// ```
    /// # use keydiff_core::Node;
    /// let en = Node::from_json_str("{\"title\":\"Hello\",\"cta\":\"Go\"}")?;
    /// let ar = Node::from_json_str("{\"title\":\"مرحبا\"}")?;
    /// let diff = en.diff(&ar);
    /// assert_eq!(diff.missing_strings(), ["cta"]);
    /// assert!(diff.extra().is_empty());
    /// # Ok::<(), keydiff_core::LoadError>(())
    /// ```
    #[must_use]
    pub fn diff(&self, target: &Self) -> KeyDiff {
        crate::diff::diff_nodes(self, target)
    }
}

fn collect_leaves<'a>(node: &'a Node, path: &mut Path, out: &mut Vec<(Path, &'a Node)>) {
    match node {
        Node::Array(values) => {
            for (index, value) in values.iter().enumerate() {
                path.push(PathSegment::index(index));
                collect_leaves(value, path, out);
                path.pop();
            }
        }
        Node::Object(map) => {
            for (key, value) in map {
                path.push(PathSegment::key(key.as_str()));
                collect_leaves(value, path, out);
                path.pop();
            }
        }
        leaf => out.push((path.clone(), leaf)),
    }
}
