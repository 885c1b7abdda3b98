//! Namespace paths — dot-segmented hierarchical identifiers.

use smol_str::SmolStr;
use std::fmt;

/// The separator between namespace segments in source notation.
pub const SEGMENT_SEPARATOR: char = '.';

/// A dot-segmented namespace path such as `acme.shop.services`.
///
/// `NamespacePath` is the sole scoping primitive of the crate. Every
/// qualified name (package, type, member) is compared through the
/// [`is_or_inside_of`](NamespacePath::is_or_inside_of) prefix relation.
///
/// Construction never fails: any string splits into segments. A
/// malformed query therefore fails to *match* anything downstream
/// rather than failing to parse.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct NamespacePath {
    segments: Vec<SmolStr>,
}

impl NamespacePath {
    /// The root path, enclosing everything.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted path. The empty string is the root.
    pub fn new(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self {
            segments: path.split(SEGMENT_SEPARATOR).map(SmolStr::new).collect(),
        }
    }

    /// Check whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path's segments, outermost first.
    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    /// The number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments (same as [`is_root`](Self::is_root)).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The "is-or-inside-of" relation: `self` equals `other` or is a
    /// strict descendant of it under segmentation.
    ///
    /// Everything is or is inside of the root.
    pub fn is_or_inside_of(&self, other: &NamespacePath) -> bool {
        self.segments.len() >= other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| a == b)
    }

    /// The enclosing path, dropping the last segment.
    ///
    /// Returns `None` for the root.
    pub fn parent(&self) -> Option<NamespacePath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Extend the path with one more segment.
    pub fn child(&self, name: &str) -> NamespacePath {
        let mut segments = self.segments.clone();
        segments.push(SmolStr::new(name));
        Self { segments }
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(SmolStr::as_str)
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespacePath({self})")
    }
}

impl From<&str> for NamespacePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for NamespacePath {
    fn from(path: String) -> Self {
        Self::new(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let root = NamespacePath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
        assert_eq!(NamespacePath::new(""), root);
    }

    #[test]
    fn test_display_round_trip() {
        let path = NamespacePath::new("acme.shop.services");
        assert_eq!(path.to_string(), "acme.shop.services");
        assert_eq!(path.len(), 3);
        assert_eq!(path.segments().len(), 3);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_is_or_inside_of() {
        let root = NamespacePath::root();
        let shop = NamespacePath::new("acme.shop");
        let services = NamespacePath::new("acme.shop.services");
        let other = NamespacePath::new("acme.other");

        assert!(shop.is_or_inside_of(&shop)); // equality counts
        assert!(services.is_or_inside_of(&shop));
        assert!(services.is_or_inside_of(&root));
        assert!(!shop.is_or_inside_of(&services)); // not the other way
        assert!(!other.is_or_inside_of(&shop));
    }

    #[test]
    fn test_prefix_must_align_on_segments() {
        // "acme.shopping" is not inside "acme.shop" even though the
        // string is a prefix.
        let shop = NamespacePath::new("acme.shop");
        let shopping = NamespacePath::new("acme.shopping");
        assert!(!shopping.is_or_inside_of(&shop));
    }

    #[test]
    fn test_parent_and_child() {
        let services = NamespacePath::new("acme.shop.services");
        assert_eq!(services.parent(), Some(NamespacePath::new("acme.shop")));
        assert_eq!(NamespacePath::new("acme").parent(), Some(NamespacePath::root()));
        assert_eq!(NamespacePath::root().parent(), None);

        assert_eq!(
            NamespacePath::new("acme.shop").child("services"),
            services
        );
        assert_eq!(services.last(), Some("services"));
    }

    #[test]
    fn test_signature_strings_still_segment() {
        // Queries carry member signatures; the trailing segment keeps the
        // parameter list but the prefix relation still works.
        let query = NamespacePath::new("acme.shop.services.OpService.plus(int)");
        let package = NamespacePath::new("acme.shop.services");
        assert!(query.is_or_inside_of(&package));
        assert_eq!(query.last(), Some("plus(int)"));
    }
}
