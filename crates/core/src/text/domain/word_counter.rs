use std::collections::HashMap;

/// Frequency table over normalized tokens. Built in a single pass and
/// immutable afterwards from the caller's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, u64>,
}

impl WordFrequencyTable {
    pub fn from_tokens(tokens: impl Iterator<Item = String>) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Ranked view: count descending, then token ascending for ties.
    /// Deterministic across runs for the same input.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}
