//! The [`Path`] type: parsed access paths into nested values.

use std::fmt;

use smallvec::SmallVec;

/// Inline capacity for path segments; paths deeper than this spill to the heap.
const INLINE_SEGMENTS: usize = 8;

/// A parsed access path into a nested [`serde_json::Value`].
///
/// A path is an ordered sequence of string segments. When parsed from a
/// string, `.` separates keys and `[n]` indexes sequences; bracket form is
/// normalized to a dotted numeric segment before splitting, so
/// `"a.b[0].c"` and `"a.b.0.c"` parse to the same path. Parsing never
/// fails; empty segments are discarded.
///
/// A path can also be built from an already-split sequence of segments
/// with [`Path::from_segments`], bypassing string parsing entirely.
///
/// # Examples
///
/// ```
/// use dtomap::resolve::Path;
///
/// let bracketed = Path::parse("user.skills[0]");
/// let dotted = Path::parse("user.skills.0");
/// assert_eq!(bracketed, dotted);
///
/// let split = Path::from_segments(["user", "skills", "0"]);
/// assert_eq!(split, bracketed);
///
/// assert_eq!(bracketed.to_string(), "user.skills.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: SmallVec<[String; INLINE_SEGMENTS]>,
}

impl Path {
    /// Parses a dot/bracket path string.
    ///
    /// Bracket indexing is normalized to dotted segments, and empty
    /// segments (from leading/trailing/doubled separators) are discarded.
    /// An empty input yields the empty path, which resolves to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtomap::resolve::Path;
    ///
    /// assert_eq!(Path::parse("a.b[0].c").len(), 4);
    /// assert_eq!(Path::parse("a.b[0].c"), Path::parse("a.b.0.c"));
    /// assert!(Path::parse("").is_empty());
    /// ```
    pub fn parse(path: &str) -> Self {
        let mut segments = SmallVec::new();
        let mut current = String::new();
        for character in path.chars() {
            match character {
                '.' | '[' | ']' => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(character),
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        Self { segments }
    }

    /// Builds a path from an already-split ordered sequence of segments.
    ///
    /// Segments are taken as given; no normalization is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtomap::resolve::Path;
    ///
    /// let path = Path::from_segments(["meta", "created"]);
    /// assert_eq!(path, Path::parse("meta.created"));
    /// ```
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segments as a slice.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.segments.iter()
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl FromIterator<String> for Path {
    fn from_iter<I: IntoIterator<Item = String>>(segments: I) -> Self {
        Self::from_segments(segments)
    }
}

impl<'a> FromIterator<&'a str> for Path {
    fn from_iter<I: IntoIterator<Item = &'a str>>(segments: I) -> Self {
        Self::from_segments(segments)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.segments.join("."))
    }
}
