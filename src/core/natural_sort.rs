//! Natural ordering for paths.
//!
//! Components compare with [`natord`], so runs of digits compare by numeric
//! value and `file2` sorts before `file10`. Comparing one component at a time
//! keeps a directory's contents grouped right after the directory itself.

use std::cmp::Ordering;
use std::path::Path;

pub fn natural_path_cmp(a: &Path, b: &Path) -> Ordering {
    let mut left = a.components();
    let mut right = b.components();

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let (l, r) = (l.as_os_str(), r.as_os_str());
                // natord skips whitespace, so distinct names can tie.
                let ordering = natord::compare(&l.to_string_lossy(), &r.to_string_lossy())
                    .then_with(|| l.cmp(r));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sorted(names: &[&str]) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = names.iter().map(|n| Path::new("/r").join(n)).collect();
        paths.sort_by(|a, b| natural_path_cmp(a, b));
        paths
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_numbers_sort_by_value() {
        assert_eq!(names(&sorted(&["2", "10", "3"])), vec!["2", "3", "10"]);
        assert_eq!(
            names(&sorted(&["file10.txt", "file2.txt", "file1.txt"])),
            vec!["file1.txt", "file2.txt", "file10.txt"]
        );
    }

    #[test]
    fn test_text_is_case_sensitive() {
        assert_eq!(names(&sorted(&["b", "a", "B", "A"])), vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn test_long_digit_runs() {
        let big = "123456789012345678901234567890";
        let bigger = "923456789012345678901234567890";
        assert_eq!(names(&sorted(&[bigger, big])), vec![big, bigger]);
    }

    #[test]
    fn test_whitespace_does_not_make_names_equal() {
        assert_ne!(
            natural_path_cmp(Path::new("/r/a b"), Path::new("/r/ab")),
            Ordering::Equal
        );
        assert_eq!(
            names(&sorted(&["ab", "a b"])),
            names(&sorted(&["a b", "ab"]))
        );
    }

    #[test]
    fn test_parent_sorts_before_children() {
        assert_eq!(
            natural_path_cmp(Path::new("/r/a"), Path::new("/r/a/x")),
            Ordering::Less
        );
        assert_eq!(
            natural_path_cmp(Path::new("/r/a/x"), Path::new("/r/a")),
            Ordering::Greater
        );
        assert_eq!(
            natural_path_cmp(Path::new("/r/a"), Path::new("/r/a")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_paths_group_children_under_parent() {
        let mut paths = vec![
            PathBuf::from("/r/a-b"),
            PathBuf::from("/r/a/x"),
            PathBuf::from("/r/a"),
            PathBuf::from("/r/10"),
            PathBuf::from("/r/9"),
        ];
        paths.sort_by(|a, b| natural_path_cmp(a, b));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/r/9"),
                PathBuf::from("/r/10"),
                PathBuf::from("/r/a"),
                PathBuf::from("/r/a/x"),
                PathBuf::from("/r/a-b"),
            ]
        );
    }
}
