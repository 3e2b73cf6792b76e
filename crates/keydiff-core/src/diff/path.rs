use std::fmt;

use serde::{Serialize, Serializer};

/// Represents a single element within a document path.
///
/// ```
/// # use keydiff_core::diff::PathSegment;
/// let key = PathSegment::key("name");
/// let index = PathSegment::index(2);
/// assert!(matches!(key, PathSegment::Key(_)));
/// assert!(matches!(index, PathSegment::Index(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key lookup.
    Key(String),
    /// Array index lookup.
    Index(usize),
}

impl PathSegment {
    /// Creates a key segment.
    #[must_use]
    pub fn key<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self::Key(value.into())
    }

    /// Creates an index segment.
    #[must_use]
    pub fn index(value: usize) -> Self {
        Self::Index(value)
    }
}

/// Location of a key within a document, rendered as `a.b[2].c`.
///
/// Keys are joined with `.` and indices are written as `[i]`. A separator is
/// only emitted once something has been written, so root-level keys render
/// bare and the root itself renders as the empty string.
///
/// ```
/// # use keydiff_core::diff::{Path, PathSegment};
/// let path = Path::new()
///     .with_segment(PathSegment::key("a"))
///     .with_segment(PathSegment::key("b"))
///     .with_segment(PathSegment::index(2))
///     .with_segment(PathSegment::key("c"));
/// assert_eq!(path.to_string(), "a.b[2].c");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new segment, returning the extended path.
    #[must_use]
    pub fn with_segment(mut self, segment: PathSegment) -> Self {
        self.0.push(segment);
        self
    }

    /// Indicates whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pushes a new segment in-place.
    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    /// Pops the last segment off the path.
    ///
    /// ```
    /// # use keydiff_core::diff::{Path, PathSegment};
    /// let mut path = Path::from(PathSegment::index(0));
    /// assert!(path.pop().is_some());
    /// assert!(path.is_empty());
    /// ```
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }
}

impl From<PathSegment> for Path {
    fn from(value: PathSegment) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => {
                    if written {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                    // An empty root key leaves nothing behind to separate from.
                    written |= !key.is_empty();
                }
                PathSegment::Index(index) => {
                    write!(f, "[{index}]")?;
                    written = true;
                }
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Builds a path from an iterator of segments.
///
/// ```
/// # use keydiff_core::diff::{path_from_segments, PathSegment};
/// let path = path_from_segments([PathSegment::key("items"), PathSegment::index(1)]);
/// assert_eq!(path.to_string(), "items[1]");
/// ```
#[must_use]
pub fn path_from_segments<I>(segments: I) -> Path
where
    I: IntoIterator<Item = PathSegment>,
{
    Path(segments.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_empty() {
        assert_eq!(Path::new().to_string(), "");
    }

    #[test]
    fn root_index_has_no_leading_separator() {
        let path = path_from_segments([PathSegment::index(0), PathSegment::key("title")]);
        assert_eq!(path.to_string(), "[0].title");
    }

    #[test]
    fn nested_indices_are_adjacent() {
        let path = path_from_segments([
            PathSegment::key("grid"),
            PathSegment::index(1),
            PathSegment::index(3),
        ]);
        assert_eq!(path.to_string(), "grid[1][3]");
    }

    #[test]
    fn empty_root_key_does_not_emit_separator() {
        let path = path_from_segments([PathSegment::key(""), PathSegment::key("x")]);
        assert_eq!(path.to_string(), "x");
    }

    #[test]
    fn serializes_as_rendered_string() {
        let path = path_from_segments([PathSegment::key("foo"), PathSegment::index(3)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"foo[3]\"");
    }
}
