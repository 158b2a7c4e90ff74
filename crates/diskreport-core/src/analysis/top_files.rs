/// Bounded top-K tracker for the largest files seen in a stream.
///
/// The buffer never holds more than K records, so memory stays O(K) no
/// matter how many files the walk visits. Records are appended unsorted
/// until the buffer fills, sorted once at that point, and from then on a
/// record is only admitted if it is strictly larger than the current
/// smallest.
///
/// # Ties
///
/// The earliest-seen file wins. A newcomer equal in size to the smallest
/// retained record is discarded, and among equal sizes records keep their
/// insertion order.
use crate::model::FileRecord;

#[derive(Debug, Clone)]
pub struct TopFiles {
    capacity: usize,
    records: Vec<FileRecord>,
}

impl TopFiles {
    /// Create a tracker that keeps at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // Room for the one extra element that exists briefly on admission.
            records: Vec::with_capacity(capacity.saturating_add(1).min(1_024)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` once the buffer holds K records and is kept sorted.
    pub fn is_full(&self) -> bool {
        self.records.len() == self.capacity
    }

    /// Offer a record. Returns `true` if it was retained.
    pub fn offer(&mut self, record: FileRecord) -> bool {
        let len = self.records.len();
        if self.capacity == 0 {
            false
        } else if len + 1 < self.capacity {
            self.records.push(record);
            true
        } else if len + 1 == self.capacity {
            self.records.push(record);
            sort_descending(&mut self.records);
            true
        } else {
            let smallest = self.records[len - 1].size;
            if record.size <= smallest {
                return false;
            }
            // Equivalent to append + stable sort: the new record goes after
            // every retained record of equal or greater size.
            let pos = self.records.partition_point(|r| r.size >= record.size);
            self.records.insert(pos, record);
            self.records.pop();
            true
        }
    }

    /// Consume the tracker, returning the records largest first.
    ///
    /// A buffer that never filled is sorted here.
    pub fn into_sorted_vec(mut self) -> Vec<FileRecord> {
        if !self.is_full() {
            sort_descending(&mut self.records);
        }
        self.records
    }
}

/// Stable sort, largest first.
fn sort_descending(records: &mut [FileRecord]) {
    records.sort_by(|a, b| b.size.cmp(&a.size));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rec(name: &str, size: u64) -> FileRecord {
        FileRecord::new(PathBuf::from(name), size, None)
    }

    fn sizes(records: &[FileRecord]) -> Vec<u64> {
        records.iter().map(|r| r.size).collect()
    }

    fn names(records: &[FileRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.path.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_keeps_three_largest() {
        let mut top = TopFiles::new(3);
        for (i, size) in [5, 3, 8, 1, 9, 2].into_iter().enumerate() {
            top.offer(rec(&format!("f{i}"), size));
        }
        assert_eq!(top.len(), 3);
        assert_eq!(sizes(&top.into_sorted_vec()), vec![9, 8, 5]);
    }

    #[test]
    fn test_unfilled_buffer_is_sorted_on_finish() {
        let mut top = TopFiles::new(20);
        for size in [4, 10, 7] {
            top.offer(rec("f", size));
        }
        assert!(!top.is_full());
        assert_eq!(sizes(&top.into_sorted_vec()), vec![10, 7, 4]);
    }

    #[test]
    fn test_sorted_once_full() {
        let mut top = TopFiles::new(3);
        top.offer(rec("a", 1));
        top.offer(rec("b", 3));
        top.offer(rec("c", 2));
        assert!(top.is_full());
        assert!(!top.offer(rec("d", 1)));
        assert!(top.offer(rec("e", 2)));
        assert_eq!(names(&top.into_sorted_vec()), vec!["b", "c", "e"]);
    }

    #[test]
    fn test_rejects_equal_to_smallest() {
        let mut top = TopFiles::new(2);
        top.offer(rec("first", 5));
        top.offer(rec("second", 7));
        assert!(!top.offer(rec("late", 5)));
        assert_eq!(names(&top.into_sorted_vec()), vec!["second", "first"]);
    }

    #[test]
    fn test_earliest_seen_wins_ties() {
        let mut top = TopFiles::new(3);
        top.offer(rec("a", 5));
        top.offer(rec("b", 5));
        top.offer(rec("c", 1));
        // Admitted, evicts "c"; goes after the existing 5s.
        assert!(top.offer(rec("d", 5)));
        assert_eq!(names(&top.into_sorted_vec()), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_capacity_zero_keeps_nothing() {
        let mut top = TopFiles::new(0);
        assert!(!top.offer(rec("a", 100)));
        assert!(top.is_empty());
        assert!(top.into_sorted_vec().is_empty());
    }

    #[test]
    fn test_capacity_one() {
        let mut top = TopFiles::new(1);
        for size in [3, 9, 4, 9] {
            top.offer(rec("f", size));
        }
        assert_eq!(sizes(&top.into_sorted_vec()), vec![9]);
    }

    /// Against a brute-force reference: the kept set is exactly the first
    /// K of a stable descending sort of everything offered.
    #[test]
    fn test_matches_full_sort() {
        let stream: Vec<u64> = (0..500u64).map(|i| (i * 7919) % 97).collect();
        for k in [1usize, 2, 5, 20, 97, 600] {
            let mut top = TopFiles::new(k);
            let mut all = Vec::new();
            for (i, &size) in stream.iter().enumerate() {
                let r = rec(&format!("f{i}"), size);
                all.push(r.clone());
                top.offer(r);
            }
            all.sort_by(|a, b| b.size.cmp(&a.size));
            all.truncate(k);
            let kept = top.into_sorted_vec();
            assert_eq!(kept.len(), k.min(stream.len()));
            assert_eq!(kept, all, "k = {k}");
        }
    }
}
