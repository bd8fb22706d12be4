// src/models/frequency_table.rs
use std::collections::HashMap;

/// Occurrence counts for distinct words, built once from a word list and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Builds a table by counting every word in the list.
    #[inline]
    #[must_use]
    pub fn from_words(words: &[String]) -> Self {
        let mut table = Self::new();
        for word in words {
            table.record(word);
        }
        table
    }

    #[inline]
    pub fn record(&mut self, word: &str) {
        *self.counts.entry(word.to_owned()).or_insert(0) += 1;
    }

    /// Occurrences of `word`, zero when absent.
    #[inline]
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries sorted lexicographically by word, ready for reporting.
    #[inline]
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_unstable_by_key(|entry| entry.0);
        entries
    }
}
