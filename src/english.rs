use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::clean::clean_line;
use crate::lemmatizer::{Lemmatizer, PosCategory};
use crate::stopwords::StopWords;
use crate::tagger::pos_tag;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

///Splits a cleaned line into word tokens.
/// # Example
/// ```
/// use bilingual_wordfreq::english::tokenize;
/// assert_eq!(tokenize("the fox  runs"), vec!["the", "fox", "runs"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    WORD.find_iter(line).map(|m| m.as_str().to_string()).collect()
}

/// Clean → tokenize → tag → stop-word filter → lemmatize, line by line.
#[derive(Debug)]
pub struct EnglishPipeline<'a> {
    stop_words: &'a StopWords,
    lemmatizer: Lemmatizer,
}

impl<'a> EnglishPipeline<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self {
            stop_words,
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Appends the lemmas of one raw line to `out`.
    ///
    /// The whole line is tagged before filtering so stop words still act as
    /// context. The stop-word check uses the surface form.
    pub fn process_line(&self, line: &str, out: &mut Vec<String>) {
        let cleaned = clean_line(line);
        let tokens = tokenize(&cleaned);
        for (token, tag) in pos_tag(&tokens) {
            if self.stop_words.contains(token) {
                continue;
            }
            let category = PosCategory::from_tag(tag);
            out.push(self.lemmatizer.lemmatize(token, category));
        }
    }

    /// Runs every line of `text` through the pipeline into one flat sequence.
    pub fn process_text(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for line in text.lines() {
            self.process_line(line, &mut tokens);
        }
        debug!("English pipeline produced {} tokens", tokens.len());
        tokens
    }
}
