//! Lookup of build-generated source files.

use std::path::{Path, PathBuf};

/// Sorted set of build-generated module paths.
///
/// Sorted once on construction; lookups are a binary search over the exact
/// OS string. No case or separator normalization happens here.
#[derive(Debug, Clone, Default)]
pub struct GeneratedSet {
    paths: Vec<PathBuf>,
}

impl GeneratedSet {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        paths.dedup_by(|a, b| a.as_os_str() == b.as_os_str());
        Self { paths }
    }

    /// Check whether `candidate` is a generated file.
    pub fn contains(&self, candidate: &Path) -> bool {
        self.paths
            .binary_search_by(|p| p.as_os_str().cmp(candidate.as_os_str()))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for GeneratedSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_regardless_of_input_order() {
        let set = GeneratedSet::new(["/p/z.ts", "/p/a.ts", "/p/m.ts"]);
        assert!(set.contains(Path::new("/p/a.ts")));
        assert!(set.contains(Path::new("/p/m.ts")));
        assert!(set.contains(Path::new("/p/z.ts")));
        assert!(!set.contains(Path::new("/p/b.ts")));
    }

    #[test]
    fn test_exact_match_only() {
        let set = GeneratedSet::new(["/p/Gen.ts"]);
        assert!(!set.contains(Path::new("/p/gen.ts")));
        assert!(!set.contains(Path::new("/p/./Gen.ts")));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: GeneratedSet = ["/a.ts", "/a.ts", "/b.ts"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty() {
        let set = GeneratedSet::default();
        assert!(set.is_empty());
        assert!(!set.contains(Path::new("/a.ts")));
    }
}
