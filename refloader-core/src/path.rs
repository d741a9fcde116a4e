//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: paths are folded, compared and
//! re-rooted purely by their components.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components away.
///
/// A `..` directly under the root is dropped, like `path.resolve` does. A
/// leading `..` on a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `path` against `base`. Absolute paths are only normalized.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Longest directory shared by every path.
///
/// Compares whole components of each path's parent directory, so `/src/ab`
/// and `/src/abc` share `/src`, never `/src/ab`. Returns `None` when there are
/// no paths.
pub fn common_dir<'a, I>(paths: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut iter = paths.into_iter();
    let first = iter.next()?;
    let mut common: Vec<Component<'a>> = first
        .parent()
        .unwrap_or(Path::new(""))
        .components()
        .collect();

    for path in iter {
        let dir = path.parent().unwrap_or(Path::new(""));
        let shared = common
            .iter()
            .zip(dir.components())
            .take_while(|(a, b)| *a == b)
            .count();
        common.truncate(shared);
    }

    Some(common.iter().collect())
}

/// Express `path` relative to the directory `base`.
///
/// Both paths are expected to be absolute and normalized.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path: Vec<Component<'_>> = path.components().collect();
    let base: Vec<Component<'_>> = base.components().collect();
    let shared = path
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in shared..base.len() {
        out.push("..");
    }
    for component in &path[shared..] {
        out.push(component);
    }
    out
}

/// Render a relative path as an explicit `./`-prefixed module id.
///
/// Segments are always joined with `/`, whatever the host separator is.
pub fn to_module_id(relative: &Path) -> String {
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    format!("./{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("../a/b/..")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("a/../..")), PathBuf::from(".."));
    }

    #[test]
    fn test_resolve() {
        let base = Path::new("/project/src");
        assert_eq!(
            resolve(base, Path::new("lib/a.ts")),
            PathBuf::from("/project/src/lib/a.ts")
        );
        assert_eq!(
            resolve(base, Path::new("../defs/x.d.ts")),
            PathBuf::from("/project/defs/x.d.ts")
        );
        assert_eq!(
            resolve(base, Path::new("/elsewhere/b.ts")),
            PathBuf::from("/elsewhere/b.ts")
        );
    }

    #[test]
    fn test_common_dir() {
        let paths = [
            Path::new("/p/src/a.ts"),
            Path::new("/p/src/inner/b.ts"),
            Path::new("/p/src/inner/deep/c.ts"),
        ];
        assert_eq!(common_dir(paths), Some(PathBuf::from("/p/src")));
    }

    #[test]
    fn test_common_dir_does_not_split_segments() {
        let paths = [Path::new("/p/ab/a.ts"), Path::new("/p/abc/b.ts")];
        assert_eq!(common_dir(paths), Some(PathBuf::from("/p")));
    }

    #[test]
    fn test_common_dir_single_file_is_its_directory() {
        assert_eq!(
            common_dir([Path::new("/p/src/a.ts")]),
            Some(PathBuf::from("/p/src"))
        );
    }

    #[test]
    fn test_common_dir_empty() {
        assert_eq!(common_dir(std::iter::empty::<&Path>()), None);
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(
            relative_to(Path::new("/out/js/a"), Path::new("/out")),
            PathBuf::from("js/a")
        );
        assert_eq!(
            relative_to(Path::new("/out/js/a"), Path::new("/out/loader")),
            PathBuf::from("../js/a")
        );
        assert_eq!(
            relative_to(Path::new("/x/a"), Path::new("/x")),
            PathBuf::from("a")
        );
    }

    #[test]
    fn test_to_module_id() {
        assert_eq!(to_module_id(Path::new("js/a")), "./js/a");
        assert_eq!(to_module_id(Path::new("../js/a")), "./../js/a");
    }

    fn absolute_path() -> impl Strategy<Value = PathBuf> {
        prop::collection::vec("[a-c]{1,2}", 0..5)
            .prop_map(|segments| Path::new("/").join(segments.join("/")))
    }

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(path in "(/)?([a-c]{1,2}|\\.|\\.\\.)(/([a-c]{1,2}|\\.|\\.\\.)){0,5}") {
            let once = normalize(Path::new(&path));
            prop_assert_eq!(normalize(&once), once);
        }

        /// Property: joining a relative path back onto its base yields the original
        #[test]
        fn relative_to_round_trips(path in absolute_path(), base in absolute_path()) {
            let relative = relative_to(&path, &base);
            prop_assert_eq!(resolve(&base, &relative), path);
        }

        /// Property: the common directory is an ancestor of every path
        #[test]
        fn common_dir_is_ancestor(paths in prop::collection::vec(absolute_path(), 1..6)) {
            let common = common_dir(paths.iter().map(PathBuf::as_path)).unwrap();
            for path in &paths {
                prop_assert!(path.starts_with(&common));
            }
        }
    }
}
