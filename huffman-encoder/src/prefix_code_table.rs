use std::collections::HashMap;

use crate::tree::Node;

pub type CodeMap = HashMap<char, String>;

/// Walks the tree depth-first and returns the prefix code of every leaf
/// symbol: '0' for a left edge, '1' for a right edge. A root that is itself a
/// leaf (one distinct symbol in the input) gets the code "0" so that even a
/// one-symbol alphabet has a non-empty, repeatable code.
pub fn generate_codes(root: &Node) -> CodeMap {
    let mut codes = CodeMap::new();
    let mut prefix = String::new();
    collect_codes(root, &mut prefix, &mut codes);
    codes
}

fn collect_codes(node: &Node, prefix: &mut String, codes: &mut CodeMap) {
    match node {
        Node::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                "0".to_owned()
            } else {
                prefix.clone()
            };
            codes.insert(*symbol, code);
        }
        Node::Internal { left, right, .. } => {
            prefix.push('0');
            collect_codes(left, prefix, codes);
            prefix.pop();

            prefix.push('1');
            collect_codes(right, prefix, codes);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rstest::rstest;

    use crate::{
        frequency::FrequencyTable,
        prefix_code_table::{generate_codes, CodeMap},
        tree::Node,
    };

    fn codes_for(mapping: impl IntoIterator<Item = (char, u64)>) -> (FrequencyTable, CodeMap) {
        let frequencies = FrequencyTable::new(mapping).unwrap();
        let root = Node::build(&frequencies).unwrap();
        let codes = generate_codes(&root);
        (frequencies, codes)
    }

    fn assert_prefix_free(codes: &CodeMap) {
        for ((a, code_a), (b, code_b)) in codes.iter().tuple_combinations() {
            assert!(
                !code_a.starts_with(code_b.as_str()) && !code_b.starts_with(code_a.as_str()),
                "codes for {a:?} and {b:?} overlap: {code_a} vs {code_b}"
            );
        }
    }

    #[test]
    fn test_code_generation() {
        // char_mapping test data comes from
        // https://opendsa-server.cs.vt.edu/ODSA/Books/CS3/html/Huffman.html
        let char_mapping = [
            ('C', 32),
            ('D', 42),
            ('E', 120),
            ('K', 7),
            ('L', 42),
            ('M', 24),
            ('U', 37),
            ('Z', 2),
        ];

        let (frequencies, codes) = codes_for(char_mapping);

        // every symbol of the table gets exactly one code, and no other
        // symbol appears
        assert_eq!(codes.len(), frequencies.len());
        for (symbol, _) in frequencies.iter() {
            assert!(codes.contains_key(&symbol), "no code for {symbol:?}");
        }

        assert_prefix_free(&codes);

        // the weighted code length of this distribution is 785 bits for any
        // optimal tree, whichever way ties were broken
        let weighted: u64 = frequencies
            .iter()
            .map(|(symbol, count)| count * codes[&symbol].len() as u64)
            .sum();
        assert_eq!(weighted, 785);
    }

    #[test]
    fn test_weighted_length_is_optimal() {
        let char_mapping = [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];

        let (frequencies, codes) = codes_for(char_mapping);

        let weighted: u64 = frequencies
            .iter()
            .map(|(symbol, count)| count * codes[&symbol].len() as u64)
            .sum();
        assert_eq!(weighted, 224);
    }

    #[test]
    fn test_single_symbol_still_gets_a_code() {
        let (_, codes) = codes_for([('x', 7)]);

        assert_eq!(codes, CodeMap::from([('x', "0".to_owned())]));
    }

    #[rstest]
    #[case(&[('a', 3), ('b', 5)])]
    #[case(&[('y', 1), ('x', 100)])]
    fn test_two_symbols_get_single_bit_codes(#[case] mapping: &[(char, u64)]) {
        let (_, codes) = codes_for(mapping.iter().copied());

        let mut values: Vec<_> = codes.values().map(String::as_str).collect();
        values.sort_unstable();
        assert_eq!(values, ["0", "1"]);
    }

    #[test]
    fn test_code_assignment_is_deterministic() {
        let char_mapping = [('e', 4), ('t', 4), ('h', 2), (' ', 4), ('q', 1)];

        let (_, first) = codes_for(char_mapping);
        let (_, second) = codes_for(char_mapping);

        assert_eq!(first, second);
    }
}
