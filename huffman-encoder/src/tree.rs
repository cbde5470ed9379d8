use std::cmp::Ordering;

use itertools::Itertools;

use crate::{error::HuffmanError, frequency::FrequencyTable};

/// A node of the Huffman tree. Every internal node owns exactly two children;
/// the symbols live only in the leaves. Nodes are never mutated after the
/// build completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// Builds the Huffman tree for the given frequencies: the two nodes of
    /// lowest weight are merged under a new internal node until a single root
    /// remains. A table with one distinct symbol yields that leaf as the root.
    pub fn build(frequencies: &FrequencyTable) -> Result<Node, HuffmanError> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let queue = MergeQueue::from_frequencies(frequencies);
        queue.merge().ok_or(HuffmanError::EmptyInput)
    }
}

struct Entry {
    seq: u64,
    node: Node,
}

// The queue is kept sorted descending so the lowest entry pops off the end.
// Equal weights resolve first-created-first-out: leaves are numbered in
// ascending symbol order before any merge, and every merged node takes the
// next number. This makes the built tree a pure function of the table.
fn cmp_entry_desc(a: &Entry, b: &Entry) -> Ordering {
    (b.node.weight(), b.seq).cmp(&(a.node.weight(), a.seq))
}

struct MergeQueue {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl MergeQueue {
    fn from_frequencies(frequencies: &FrequencyTable) -> Self {
        let entries = frequencies
            .iter()
            .sorted_by_key(|&(symbol, _)| symbol)
            .enumerate()
            .map(|(seq, (symbol, count))| Entry {
                seq: seq as u64,
                node: Node::Leaf {
                    symbol,
                    weight: count,
                },
            })
            .collect_vec();

        let next_seq = entries.len() as u64;
        let mut queue = MergeQueue { entries, next_seq };
        queue.entries.sort_unstable_by(cmp_entry_desc);
        queue
    }

    fn merge(mut self) -> Option<Node> {
        loop {
            let result = self.pop_lowest()?;
            match result {
                PopResult::Pair { first, second } => {
                    let weight = first.node.weight() + second.node.weight();

                    let node = Node::Internal {
                        weight,
                        left: Box::new(first.node),
                        right: Box::new(second.node),
                    };

                    self.insert(node);
                }
                PopResult::Single(entry) => {
                    return Some(entry.node);
                }
            }
        }
    }

    fn pop_lowest(&mut self) -> Option<PopResult> {
        let first = self.entries.pop()?;

        let item_result = match self.entries.pop() {
            Some(second) => PopResult::Pair { first, second },
            None => PopResult::Single(first),
        };

        Some(item_result)
    }

    fn insert(&mut self, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { seq, node });
        self.entries.sort_unstable_by(cmp_entry_desc);
    }
}

enum PopResult {
    Pair { first: Entry, second: Entry },
    Single(Entry),
}
