//! Ordered set of known words with prefix lookup.

use std::collections::BTreeSet;
use std::ops::Bound;

use parking_lot::RwLock;

/// Thread-safe, grow-only set of distinct words.
///
/// Inserts take the write lock, queries share the read lock.
#[derive(Debug, Default)]
pub struct WordIndex {
    words: RwLock<BTreeSet<String>>,
}

impl WordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `words` to the index. Words already present are left as they are.
    ///
    /// Returns the number of words that were not known before.
    pub fn insert<'a, I>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = self.words.write();
        let mut added = 0;
        for word in words {
            if !set.contains(word) {
                set.insert(word.to_owned());
                added += 1;
            }
        }
        added
    }

    /// All known words starting with `prefix`, in ascending byte order.
    ///
    /// Seeks to the first word `>= prefix` and walks forward until the prefix no
    /// longer matches, so the cost is O(log n + k) for k results.
    pub fn query(&self, prefix: &str) -> Vec<String> {
        let set = self.words.read();
        set.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|word| word.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }
}
