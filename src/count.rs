//! Frequency counting and top-N selection.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::korean::{KoreanTag, TaggedToken};

/// Default number of entries reported per section.
pub const DEFAULT_TOP_N: usize = 10;

/// Counts keys while remembering the order in which they were first seen.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u32)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> u32 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///Sort entries according to frequency into Vec<(K, u32)>.
    ///Ties keep first-seen order.
    /// # Example
    /// ```
    /// use bilingual_wordfreq::count::FrequencyTable;
    /// let table: FrequencyTable<&str> = ["one", "two", "two", "three", "three", "three"]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(table.sorted(), vec![("three", 3), ("two", 2), ("one", 1)]);
    /// ```
    pub fn sorted(&self) -> Vec<(K, u32)> {
        let mut vec_sorted = self.entries.clone();
        vec_sorted.sort_by(|a, b| b.1.cmp(&a.1));
        vec_sorted
    }

    /// The `n` most frequent entries, count descending, ties first-seen.
    pub fn top_n(&self, n: usize) -> Vec<(K, u32)> {
        let mut top = self.sorted();
        top.truncate(n);
        top
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

/// One row of an untagged top-N list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

/// One row of a tagged top-N list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedCount {
    pub word: String,
    pub tag: KoreanTag,
    pub count: u32,
}

///Takes a slice of words and counts the quantity of each word.
pub fn count_words(words: &[String]) -> FrequencyTable<String> {
    words.iter().cloned().collect()
}

/// Counts identical (morpheme, tag) pairs, optionally dropping particles first.
pub fn count_tagged(
    tokens: &[TaggedToken],
    exclude_josa: bool,
) -> FrequencyTable<(String, KoreanTag)> {
    tokens
        .iter()
        .filter(|t| !(exclude_josa && t.tag == KoreanTag::Josa))
        .map(|t| (t.word.clone(), t.tag))
        .collect()
}

pub fn top_words(words: &[String], n: usize) -> Vec<WordCount> {
    count_words(words)
        .top_n(n)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

fn tagged_rows(table: FrequencyTable<(String, KoreanTag)>, n: usize) -> Vec<TaggedCount> {
    table
        .top_n(n)
        .into_iter()
        .map(|((word, tag), count)| TaggedCount { word, tag, count })
        .collect()
}

pub fn top_tagged(tokens: &[TaggedToken], n: usize) -> Vec<TaggedCount> {
    tagged_rows(count_tagged(tokens, false), n)
}

pub fn top_tagged_excluding_josa(tokens: &[TaggedToken], n: usize) -> Vec<TaggedCount> {
    tagged_rows(count_tagged(tokens, true), n)
}
