use rustc_hash::FxHashMap;

/// Occurrence count of every distinct character in a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<char, u32>,
}

impl FrequencyTable {
    /// Count of `c`, or None if it never occurred.
    pub fn get(&self, c: char) -> Option<u32> {
        self.counts.get(&c).copied()
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of characters counted.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&f| f as u64).sum()
    }

    /// Unordered iteration over (char, count).
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(&c, &f)| (c, f))
    }

    /// All entries sorted by character. This is the order leaves are handed to the tree builder.
    pub fn sorted(&self) -> Vec<(char, u32)> {
        let mut entries = self.iter().collect::<Vec<(char, u32)>>();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}

/// Returns a frequency count of the corpus.
pub fn freqs(corpus: &str) -> FrequencyTable {
    let mut counts = FxHashMap::default();
    corpus.chars().for_each(|c| tally(&mut counts, c));
    FrequencyTable { counts }
}

/// Bump the count of `c`. Counts saturate at u32::MAX, matching the tree's weight sums.
fn tally(counts: &mut FxHashMap<char, u32>, c: char) {
    let count = counts.entry(c).or_insert(0);
    *count = count.saturating_add(1);
}

#[cfg(test)]
mod test {
    use super::{freqs, tally};
    use rustc_hash::FxHashMap;

    #[test]
    fn empty_corpus_test() {
        let table = freqs("");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn count_test() {
        let table = freqs("abracadabra");
        assert_eq!(table.len(), 5);
        assert_eq!(table.get('a'), Some(5));
        assert_eq!(table.get('b'), Some(2));
        assert_eq!(table.get('r'), Some(2));
        assert_eq!(table.get('c'), Some(1));
        assert_eq!(table.get('d'), Some(1));
        assert_eq!(table.get('z'), None);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn count_saturates_test() {
        let mut counts = FxHashMap::default();
        counts.insert('a', u32::MAX - 1);
        tally(&mut counts, 'a');
        tally(&mut counts, 'a');
        tally(&mut counts, 'b');
        assert_eq!(counts.get(&'a'), Some(&u32::MAX));
        assert_eq!(counts.get(&'b'), Some(&1));
    }

    #[test]
    fn sorted_by_char_test() {
        let table = freqs("cbaé c");
        assert_eq!(
            table.sorted(),
            vec![(' ', 1), ('a', 1), ('b', 1), ('c', 2), ('é', 1)]
        );
    }
}
