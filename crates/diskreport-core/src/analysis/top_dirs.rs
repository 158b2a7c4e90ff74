/// Top-N directories by the bytes held directly inside them.
use crate::model::{DirectoryAggregates, DirectoryTotal};
use std::cmp::Ordering;

/// Rank directories by aggregate size and keep the largest `n`.
///
/// Ties are broken by path so the ranking is stable across runs.
/// Uses `select_nth_unstable_by` (O(n) average) to bring the top-N
/// to the front, then sorts only those N entries.
pub fn top_directories(aggregates: &DirectoryAggregates, n: usize) -> Vec<DirectoryTotal> {
    if n == 0 {
        return Vec::new();
    }

    let mut totals: Vec<DirectoryTotal> = aggregates
        .iter()
        .map(|(path, size)| DirectoryTotal {
            path: path.to_path_buf(),
            size,
        })
        .collect();

    if totals.len() > n {
        totals.select_nth_unstable_by(n - 1, rank);
        totals.truncate(n);
    }
    totals.sort_unstable_by(rank);
    totals
}

/// Largest first, then by path ascending.
fn rank(a: &DirectoryTotal, b: &DirectoryTotal) -> Ordering {
    b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn aggregates(entries: &[(&str, u64)]) -> DirectoryAggregates {
        let mut agg = DirectoryAggregates::new();
        for &(dir, size) in entries {
            agg.add(Path::new(dir), size);
        }
        agg
    }

    #[test]
    fn test_top_directories_sorted_and_truncated() {
        let agg = aggregates(&[("/a", 10), ("/b", 300), ("/c", 20), ("/d", 5)]);
        let top = top_directories(&agg, 2);
        assert_eq!(
            top,
            vec![
                DirectoryTotal {
                    path: PathBuf::from("/b"),
                    size: 300
                },
                DirectoryTotal {
                    path: PathBuf::from("/c"),
                    size: 20
                },
            ]
        );
    }

    #[test]
    fn test_ties_break_by_path() {
        let agg = aggregates(&[("/z", 7), ("/m", 7), ("/a", 7)]);
        let paths: Vec<PathBuf> = top_directories(&agg, 2).into_iter().map(|d| d.path).collect();
        assert_eq!(paths, vec![PathBuf::from("/a"), PathBuf::from("/m")]);
    }

    #[test]
    fn test_fewer_than_n() {
        let agg = aggregates(&[("/one", 1)]);
        assert_eq!(top_directories(&agg, 10).len(), 1);
        assert!(top_directories(&agg, 0).is_empty());
    }

    #[test]
    fn test_aggregates_accumulate() {
        let mut agg = DirectoryAggregates::new();
        agg.visit(Path::new("/empty"));
        agg.add(Path::new("/x"), 4);
        agg.add(Path::new("/x"), 6);
        agg.visit(Path::new("/x"));
        assert_eq!(agg.get(Path::new("/x")), Some(10));
        assert_eq!(agg.get(Path::new("/empty")), Some(0));
        assert_eq!(agg.len(), 2);
    }
}
