use std::path::{Path, PathBuf};

/// Looks for `filename` in `start` directory's ancestors
///
/// Returns the `filename` path and matching ancestor if found
pub(crate) fn search<'a, F: FnMut(&PathBuf) -> bool>(
    start: &'a Path,
    filename: &str,
    mut f: F,
) -> Option<(&'a Path, PathBuf)> {
    start
        .ancestors()
        .map(|p| (p, p.join(filename)))
        .find(|(_, arg)| f(arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_ancestors() {
        let (ancestor, found) =
            search(Path::new("a/b/c"), "file", |p| p == Path::new("a/file")).unwrap();
        assert_eq!(ancestor, Path::new("a"));
        assert_eq!(found, PathBuf::from("a/file"));
    }

    #[test]
    fn search_not_found() {
        assert!(search(Path::new("a/b"), "file", |_| false).is_none());
    }
}
