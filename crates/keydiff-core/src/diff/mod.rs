//! Key-structure diff between a reference document and a target document.
//!
//! The walk is driven by the reference: objects are compared key by key,
//! arrays index by index, and leaves are never compared by value. When the
//! target holds a different container kind at some path, the mismatch is
//! collapsed into a single `missing` entry at that path and the walk does
//! not descend any further into it.

mod array;
mod object;
mod path;

pub use path::{path_from_segments, Path, PathSegment};

use serde::Serialize;
use tracing::{debug, trace};

use crate::Node;

/// Result of comparing two documents: paths missing from the target and paths
/// only the target has.
///
/// Both lists are sorted lexicographically by their rendered form.
///
/// ```
/// # use keydiff_core::Node;
/// let en = Node::from_json_str("{\"x\":[1,2,3]}")?;
/// let ar = Node::from_json_str("{\"x\":[1,2]}")?;
/// let diff = en.diff(&ar);
/// assert_eq!(diff.missing_strings(), ["x[2]"]);
/// assert!(diff.extra().is_empty());
/// # Ok::<(), keydiff_core::LoadError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KeyDiff {
    missing: Vec<Path>,
    extra: Vec<Path>,
}

impl KeyDiff {
    /// Builds a diff from unsorted path lists, sorting both.
    #[must_use]
    pub fn from_paths(mut missing: Vec<Path>, mut extra: Vec<Path>) -> Self {
        missing.sort_by_cached_key(ToString::to_string);
        extra.sort_by_cached_key(ToString::to_string);
        Self { missing, extra }
    }

    /// Paths present in the reference but absent (or of another container
    /// kind) in the target.
    #[must_use]
    pub fn missing(&self) -> &[Path] {
        &self.missing
    }

    /// Paths present only in the target.
    #[must_use]
    pub fn extra(&self) -> &[Path] {
        &self.extra
    }

    /// Rendered form of [`KeyDiff::missing`].
    #[must_use]
    pub fn missing_strings(&self) -> Vec<String> {
        self.missing.iter().map(ToString::to_string).collect()
    }

    /// Rendered form of [`KeyDiff::extra`].
    #[must_use]
    pub fn extra_strings(&self) -> Vec<String> {
        self.extra.iter().map(ToString::to_string).collect()
    }

    /// Indicates whether the documents share the same key structure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Accumulates paths while walking both documents.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    missing: Vec<Path>,
    extra: Vec<Path>,
}

impl Collector {
    fn missing(&mut self, path: Path) {
        self.missing.push(path);
    }

    fn extra(&mut self, path: Path) {
        self.extra.push(path);
    }

    fn finish(self) -> KeyDiff {
        KeyDiff::from_paths(self.missing, self.extra)
    }
}

pub(crate) fn diff_nodes(reference: &Node, target: &Node) -> KeyDiff {
    let mut collector = Collector::default();
    diff_impl(reference, target, &Path::new(), &mut collector);
    let diff = collector.finish();
    debug!(missing = diff.missing.len(), extra = diff.extra.len(), "compared documents");
    diff
}

pub(crate) fn diff_impl(reference: &Node, target: &Node, path: &Path, out: &mut Collector) {
    match (reference, target) {
        (Node::Object(lhs), Node::Object(rhs)) => object::diff_objects(lhs, rhs, path, out),
        (Node::Array(lhs), Node::Array(rhs)) => array::diff_arrays(lhs, rhs, path, out),
        (Node::Object(_) | Node::Array(_), other) => {
            trace!(%path, expected = reference.kind(), found = other.kind(), "container mismatch");
            out.missing(path.clone());
        }
        // Leaves are only checked for presence by their parent.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Node {
        Node::from_json_str(input).expect("test JSON parses")
    }

    fn diff(reference: &str, target: &str) -> (Vec<String>, Vec<String>) {
        let result = parse(reference).diff(&parse(target));
        (result.missing_strings(), result.extra_strings())
    }

    #[test]
    fn identical_documents_have_no_differences() {
        let doc = "{\"a\":{\"b\":[1,{\"c\":true}]},\"d\":null}";
        assert!(parse(doc).diff(&parse(doc)).is_empty());
    }

    #[test]
    fn missing_subtree_collapses_to_its_root() {
        let (missing, extra) = diff("{\"a\":1,\"b\":{\"c\":2}}", "{\"a\":1}");
        assert_eq!(missing, ["b"]);
        assert!(extra.is_empty());
    }

    #[test]
    fn shorter_target_array_reports_missing_indices() {
        let (missing, extra) = diff("{\"x\":[1,2,3]}", "{\"x\":[1,2]}");
        assert_eq!(missing, ["x[2]"]);
        assert!(extra.is_empty());
    }

    #[test]
    fn longer_target_array_reports_extra_indices() {
        let (missing, extra) = diff("{\"x\":[1]}", "{\"x\":[1,2,3]}");
        assert!(missing.is_empty());
        assert_eq!(extra, ["x[1]", "x[2]"]);
    }

    #[test]
    fn empty_reference_reports_target_keys_as_extra() {
        let (missing, extra) = diff("{}", "{\"y\":1}");
        assert!(missing.is_empty());
        assert_eq!(extra, ["y"]);
    }

    #[test]
    fn object_replaced_by_leaf_is_missing_once() {
        let (missing, extra) = diff("{\"menu\":{\"a\":1,\"b\":2}}", "{\"menu\":\"flat\"}");
        assert_eq!(missing, ["menu"]);
        assert!(extra.is_empty());
    }

    #[test]
    fn object_replaced_by_array_is_missing_once() {
        let (missing, extra) = diff("{\"menu\":{\"a\":1}}", "{\"menu\":[1,2]}");
        assert_eq!(missing, ["menu"]);
        assert!(extra.is_empty());
    }

    #[test]
    fn array_replaced_by_object_is_missing_once() {
        let (missing, _) = diff("{\"steps\":[\"one\"]}", "{\"steps\":{\"0\":\"one\"}}");
        assert_eq!(missing, ["steps"]);
    }

    #[test]
    fn leaf_replaced_by_container_is_not_reported() {
        let (missing, extra) = diff("{\"title\":\"Hi\"}", "{\"title\":{\"short\":\"Hi\"}}");
        assert!(missing.is_empty());
        assert!(extra.is_empty());
    }

    #[test]
    fn leaf_values_are_never_compared() {
        let (missing, extra) = diff("{\"a\":\"Hello\",\"b\":1}", "{\"a\":\"مرحبا\",\"b\":null}");
        assert!(missing.is_empty());
        assert!(extra.is_empty());
    }

    #[test]
    fn mismatched_roots_report_the_root_path() {
        let result = parse("{\"a\":1}").diff(&parse("[1]"));
        assert_eq!(result.missing().len(), 1);
        assert!(result.missing()[0].is_empty());
        assert_eq!(result.missing_strings(), [""]);
    }

    #[test]
    fn root_arrays_render_bare_indices() {
        let (missing, extra) = diff("[{\"a\":1},{\"b\":2}]", "[{\"a\":1,\"z\":0}]");
        assert_eq!(missing, ["[1]"]);
        assert_eq!(extra, ["[0].z"]);
    }

    #[test]
    fn nested_paths_are_sorted_lexicographically() {
        let (missing, extra) = diff(
            "{\"z\":{\"b\":1,\"a\":1},\"m\":[{\"k\":1}],\"a\":{\"y\":1}}",
            "{\"m\":[{}],\"q\":1,\"b\":2}",
        );
        assert_eq!(missing, ["a", "m[0].k", "z"]);
        assert_eq!(extra, ["b", "q"]);
    }

    #[test]
    fn sorting_uses_rendered_strings() {
        let (missing, _) = diff("{\"x\":[0,1,2,3,4,5,6,7,8,9,10,11]}", "{\"x\":[0,1,2,3,4,5,6,7,8]}");
        assert_eq!(missing, ["x[10]", "x[11]", "x[9]"]);
    }
}
