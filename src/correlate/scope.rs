//! Scope filtering — narrowing each view to the configured search scope.
//!
//! Scoping runs in two directions. At index time, a symbol belongs to
//! the universe when its package sits at or under the search scope. At
//! query time the relation flips: a file or class can answer a
//! qualified lookup when the *query* sits at or under its package,
//! since a lookup's leading namespace may be scoped above or below the
//! indexed root.

use crate::base::NamespacePath;
use crate::model::source::SourceFile;

/// True if a symbol declared under `package` belongs to the universe
/// rooted at `scope`.
pub fn in_search_scope(package: &NamespacePath, scope: &NamespacePath) -> bool {
    package.is_or_inside_of(scope)
}

/// True if a declaration under `package` can answer a lookup for
/// `query`.
pub fn covers_query(package: &NamespacePath, query: &NamespacePath) -> bool {
    query.is_or_inside_of(package)
}

/// Filter parsed files down to the search scope, preserving order.
pub fn scoped_sources(files: Vec<SourceFile>, scope: &NamespacePath) -> Vec<SourceFile> {
    files
        .into_iter()
        .filter(|file| in_search_scope(&file.package, scope))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("acme.shop", "acme.shop", true)]
    #[case("acme.shop.services", "acme.shop", true)]
    #[case("acme.shop", "acme.shop.services", false)]
    #[case("acme.other", "acme.shop", false)]
    #[case("acme.shop", "", true)]
    fn test_in_search_scope(#[case] package: &str, #[case] scope: &str, #[case] expected: bool) {
        assert_eq!(
            in_search_scope(&NamespacePath::new(package), &NamespacePath::new(scope)),
            expected
        );
    }

    #[rstest]
    #[case("acme.shop.services", "acme.shop.services.OpService.plus", true)]
    #[case("acme.shop.services", "acme.shop.services", true)]
    #[case("acme.shop.services", "acme.shop.otherpkg.OpService.plus", false)]
    fn test_covers_query(#[case] package: &str, #[case] query: &str, #[case] expected: bool) {
        assert_eq!(
            covers_query(&NamespacePath::new(package), &NamespacePath::new(query)),
            expected
        );
    }

    #[test]
    fn test_scoped_sources_keeps_order_and_drops_outsiders() {
        let files = vec![
            SourceFile::new("services", "acme.shop.services"),
            SourceFile::new("stray", "acme.other"),
            SourceFile::new("converters", "acme.shop.converters"),
        ];

        let scoped = scoped_sources(files, &NamespacePath::new("acme.shop"));
        let names: Vec<&str> = scoped.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["services", "converters"]);
    }
}
