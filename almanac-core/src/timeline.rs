use crate::record::{Project, Reminder, Timestamp};
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// A record that lives on a timeline: ordered by `key`, removed by `(key, identity)`.
pub trait TimelineRecord: Clone {
    type Key: Ord;
    type Identity: PartialEq + ?Sized;

    fn key(&self) -> &Self::Key;
    fn identity(&self) -> &Self::Identity;
}

impl TimelineRecord for Reminder {
    type Key = Timestamp;
    type Identity = str;

    fn key(&self) -> &Timestamp {
        &self.due_at
    }

    fn identity(&self) -> &str {
        &self.text
    }
}

impl TimelineRecord for Project {
    type Key = String;
    type Identity = str;

    fn key(&self) -> &String {
        &self.start
    }

    fn identity(&self) -> &str {
        &self.name
    }
}

/// Heap entry. `seq` is the insertion sequence; it breaks key ties and makes every entry
/// distinct so the ordering is total even for duplicate records.
#[derive(Debug)]
struct Entry<R> {
    seq: u64,
    record: R,
}

impl<R: TimelineRecord> Entry<R> {
    fn sort_key(&self) -> (&R::Key, u64) {
        (self.record.key(), self.seq)
    }
}

impl<R: TimelineRecord> PartialEq for Entry<R> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R: TimelineRecord> Eq for Entry<R> {}

impl<R: TimelineRecord> PartialOrd for Entry<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: TimelineRecord> Ord for Entry<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Multiset of records kept in a binary min-heap (no IO, no locks).
///
/// The heap makes insertion `O(log n)`. Reads always export a fully sorted copy, and
/// removal filters the backing array and re-heapifies it.
#[derive(Debug)]
pub struct TimeOrderedCollection<R: TimelineRecord> {
    heap: BinaryHeap<Reverse<Entry<R>>>,
    next_seq: u64,
}

impl<R: TimelineRecord> Default for TimeOrderedCollection<R> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<R: TimelineRecord> TimeOrderedCollection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` under its key. Identical records coexist.
    pub fn add(&mut self, record: R) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { seq, record }));
    }

    /// Removes every entry whose key equals `key` and whose identity equals `identity`.
    /// Returns how many were removed; zero is not an error.
    pub fn remove_matching(&mut self, key: &R::Key, identity: &R::Identity) -> usize {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let before = entries.len();
        entries.retain(|Reverse(entry)| {
            !(entry.record.key() == key && entry.record.identity() == identity)
        });
        let removed = before - entries.len();
        self.heap = BinaryHeap::from(entries);
        removed
    }

    /// Copy of every record ascending by key; equal keys keep insertion order.
    pub fn snapshot_sorted(&self) -> Vec<R> {
        let mut entries: Vec<&Entry<R>> = self.heap.iter().map(|Reverse(entry)| entry).collect();
        entries.sort_unstable();
        entries
            .into_iter()
            .map(|entry| entry.record.clone())
            .collect()
    }

    /// Record with the smallest key, if any.
    pub fn peek_earliest(&self) -> Option<&R> {
        self.heap.peek().map(|Reverse(entry)| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
