//! Bracket-notation paths for locating values in nested structures.
//!
//! This module provides [`JsonPath`] and [`PathSegment`]. Every segment renders
//! as `[segment]`, so the root renders as the empty string and a field inside
//! the first element of `users` renders as `[users][0][id]`.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A segment of a JSON path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A mapping key (e.g. `[user]`).
    Field(String),
    /// A sequence index (e.g. `[0]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "[{}]", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// A path to a value in a decoded JSON tree.
///
/// Paths are immutable and share their prefix: `push_field` and `push_index`
/// link a new segment onto the existing path in constant time, so sibling
/// branches of a validation reuse the same parent.
///
/// # Example
///
/// ```rust
/// use shapecheck::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("id");
///
/// assert_eq!(path.to_string(), "[users][0][id]");
/// assert_eq!(JsonPath::root().to_string(), "");
/// ```
#[derive(Clone, Default)]
pub struct JsonPath {
    tail: Option<Arc<PathNode>>,
}

struct PathNode {
    parent: JsonPath,
    segment: PathSegment,
    len: usize,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self::root().push_field(name)
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self::root().push_index(idx)
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    fn push(&self, segment: PathSegment) -> Self {
        Self {
            tail: Some(Arc::new(PathNode {
                parent: self.clone(),
                segment,
                len: self.len() + 1,
            })),
        }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.tail.as_ref().map_or(0, |node| node.len)
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Returns an iterator over the path segments, from the root outwards.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        let mut segments = Vec::with_capacity(self.len());
        let mut cursor = self.tail.as_deref();
        while let Some(node) = cursor {
            segments.push(&node.segment);
            cursor = node.parent.tail.as_deref();
        }
        segments.into_iter().rev()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        self.tail.as_ref().map(|node| node.parent.clone())
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.tail.as_ref().map(|node| &node.segment)
    }
}

impl PartialEq for JsonPath {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.segments().eq(other.segments())
    }
}

impl Eq for JsonPath {}

impl Hash for JsonPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.segments().for_each(|segment| segment.hash(state));
    }
}

impl fmt::Debug for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JsonPath")
            .field(&self.segments().collect::<Vec<_>>())
            .finish()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments()
            .try_for_each(|segment| write!(f, "{}", segment))
    }
}

impl FromIterator<PathSegment> for JsonPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::root(), |path, segment| path.push(segment))
    }
}

impl Drop for PathNode {
    // Unlinks long parent chains iteratively.
    fn drop(&mut self) {
        let mut next = self.parent.tail.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.tail.take(),
                Err(_) => break,
            }
        }
    }
}
