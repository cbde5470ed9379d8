use std::collections::HashMap;

use itertools::Itertools;

use crate::error::HuffmanError;

/// Symbol occurrence counts of the text being encoded. Once built it is only
/// read; the tree builder and the report both borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable(HashMap<char, u64>);

impl FrequencyTable {
    /// Builds a table from raw counts, rejecting zero counts: a symbol that
    /// never occurs has no place in the tree and would break the weight
    /// ordering of the merge queue.
    pub fn new(counts: impl IntoIterator<Item = (char, u64)>) -> Result<Self, HuffmanError> {
        let counts: HashMap<char, u64> = counts.into_iter().collect();

        if let Some((&symbol, _)) = counts.iter().find(|(_, &count)| count == 0) {
            return Err(HuffmanError::MalformedFrequency { symbol });
        }

        Ok(Self(counts))
    }

    /// Tallies the occurrences of every symbol in `content`. Counting cannot
    /// produce zeros, so no validation is needed on this path.
    pub fn from_text(content: &str) -> Self {
        let counts = content
            .chars()
            .into_grouping_map_by(|&ch| ch)
            .fold(0_u64, |acc, _key, _value| acc + 1);

        Self(counts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.0.get(&symbol).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.0.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
