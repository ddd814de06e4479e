//! Korean morphological pipeline built on lindera with the embedded ko-dic
//! (mecab-ko) dictionary.
//!
//! ko-dic tags are fine grained (`NNG`, `JKS`, `EF`, ...). They are folded
//! into the coarse categories of [`KoreanTag`] so that, for example, every
//! case marker and auxiliary particle reports as `Josa`.

use std::fmt;

use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;
use log::debug;
use serde::Serialize;

use crate::clean::clean_line;
use crate::error::{Error, Result};
use crate::stopwords::StopWords;

const DICTIONARY: &str = "embedded://ko-dic";

/// ko-dic detail column holding the decomposition of inflected entries.
const EXPRESSION_FIELD: usize = 7;

/// Coarse Korean part-of-speech category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KoreanTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Exclamation,
    Josa,
    PreEomi,
    Eomi,
    Suffix,
    Prefix,
    Number,
    Foreign,
    Punctuation,
    Unknown,
}

impl KoreanTag {
    /// Maps a ko-dic tag onto its category. Compound tags such as
    /// `XSV+EP` are classified by their first component.
    /// # Example
    /// ```
    /// use bilingual_wordfreq::korean::KoreanTag;
    /// assert_eq!(KoreanTag::from_kodic("JKS"), KoreanTag::Josa);
    /// assert_eq!(KoreanTag::from_kodic("NNG"), KoreanTag::Noun);
    /// ```
    pub fn from_kodic(pos: &str) -> Self {
        let head = pos.split('+').next().unwrap_or_default();
        match head {
            "VV" | "VX" => KoreanTag::Verb,
            "VA" | "VCP" | "VCN" => KoreanTag::Adjective,
            "MAG" | "MAJ" => KoreanTag::Adverb,
            "MM" => KoreanTag::Determiner,
            "IC" => KoreanTag::Exclamation,
            "EP" => KoreanTag::PreEomi,
            "SN" => KoreanTag::Number,
            "SL" | "SH" => KoreanTag::Foreign,
            "NP" | "NR" | "XR" => KoreanTag::Noun,
            "UNK" => KoreanTag::Unknown,
            _ if head.starts_with("NN") => KoreanTag::Noun,
            _ if head.starts_with('J') => KoreanTag::Josa,
            _ if head.starts_with('E') => KoreanTag::Eomi,
            _ if head.starts_with("XS") => KoreanTag::Suffix,
            _ if head.starts_with("XP") => KoreanTag::Prefix,
            _ if head.starts_with('S') => KoreanTag::Punctuation,
            _ => KoreanTag::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KoreanTag::Noun => "Noun",
            KoreanTag::Verb => "Verb",
            KoreanTag::Adjective => "Adjective",
            KoreanTag::Adverb => "Adverb",
            KoreanTag::Determiner => "Determiner",
            KoreanTag::Exclamation => "Exclamation",
            KoreanTag::Josa => "Josa",
            KoreanTag::PreEomi => "PreEomi",
            KoreanTag::Eomi => "Eomi",
            KoreanTag::Suffix => "Suffix",
            KoreanTag::Prefix => "Prefix",
            KoreanTag::Number => "Number",
            KoreanTag::Foreign => "Foreign",
            KoreanTag::Punctuation => "Punctuation",
            KoreanTag::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for KoreanTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A morpheme with its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: KoreanTag,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: KoreanTag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

/// Analysis switches; both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KoreanOptions {
    /// Split fused laughter jamo and shorten long repetitions (`욬ㅋㅋㅋ` -> `요ㅋㅋ`).
    pub normalize: bool,
    /// Report predicates in dictionary form (`있` + `다` -> `있다`).
    pub stem: bool,
}

impl Default for KoreanOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            stem: true,
        }
    }
}

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const FINAL_COUNT: u32 = 28;

/// Final consonants that chat text fuses onto a syllable, with the jamo they stand for.
const FUSED_FINALS: [(u32, char); 2] = [(24, 'ㅋ'), (27, 'ㅎ')];

fn is_jamo(c: char) -> bool {
    ('ㄱ'..='ㅣ').contains(&c)
}

/// `욬` followed by `ㅋ` becomes `요` + `ㅋ`.
fn split_fused(c: char, next: Option<char>) -> Option<(char, char)> {
    let code = u32::from(c);
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let last = (code - SYLLABLE_BASE) % FINAL_COUNT;
    let (_, jamo) = FUSED_FINALS.iter().find(|(index, _)| *index == last)?;
    if next != Some(*jamo) {
        return None;
    }
    char::from_u32(code - last).map(|open| (open, *jamo))
}

/// Normalizes informal Korean text.
///
/// A laughter consonant fused into the preceding syllable is split off when
/// the same jamo follows (`안녕하세욬ㅋㅋ` -> `안녕하세요ㅋㅋㅋ`). Then runs of
/// three or more identical jamo, and runs of four or more of any other
/// character, shrink to two. Three-syllable repetitions such as `하하하` stay.
/// # Example
/// ```
/// use bilingual_wordfreq::korean::normalize;
/// assert_eq!(normalize("ㅋㅋㅋㅋ 좋아요"), "ㅋㅋ 좋아요");
/// assert_eq!(normalize("하하하"), "하하하");
/// ```
pub fn normalize(line: &str) -> String {
    let mut split = Vec::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match split_fused(c, chars.peek().copied()) {
            Some((open, jamo)) => split.extend([open, jamo]),
            None => split.push(c),
        }
    }

    let mut out = String::with_capacity(line.len());
    let mut chars = split.into_iter().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }
        let limit = if is_jamo(c) { 3 } else { 4 };
        let keep = if run >= limit { 2 } else { run };
        out.extend(std::iter::repeat_n(c, keep));
    }
    out
}

#[derive(Debug)]
struct Morpheme {
    surface: String,
    pos: String,
    expression: Option<String>,
}

impl Morpheme {
    fn head_pos(&self) -> &str {
        self.pos.split('+').next().unwrap_or_default()
    }

    /// Root and category when the morpheme opens a predicate.
    fn predicate_root(&self) -> Option<(String, KoreanTag)> {
        let tag = match self.head_pos() {
            "VV" | "VX" | "XSV" => KoreanTag::Verb,
            "VA" | "VCP" | "VCN" | "XSA" => KoreanTag::Adjective,
            _ => return None,
        };
        // inflected entries like 했 (XSV+EP) carry their root in the expression: 하/XSV/*+았/EP/*
        let root = match (&self.expression, self.pos.contains('+')) {
            (Some(expr), true) => expr
                .split('+')
                .next()
                .and_then(|part| part.split('/').next())
                .unwrap_or(&self.surface)
                .to_string(),
            _ => self.surface.clone(),
        };
        Some((root, tag))
    }

    fn is_ending(&self) -> bool {
        self.head_pos().starts_with('E')
    }

    /// Noun or root that a `XSV`/`XSA` suffix turns into a predicate (공부 + 하다).
    fn is_predicate_base(&self) -> bool {
        matches!(self.head_pos(), "NNG" | "NNP" | "XR")
    }

    fn is_derivational(&self) -> bool {
        matches!(self.head_pos(), "XSV" | "XSA")
    }
}

/// Tags analyzed morphemes. With `stem`, a predicate is reported in
/// dictionary form with its endings folded in, and a noun directly followed
/// by a 하다-style suffix joins the predicate.
fn tag_morphemes(morphemes: Vec<Morpheme>, stem: bool) -> Vec<TaggedToken> {
    let mut out: Vec<TaggedToken> = Vec::with_capacity(morphemes.len());
    let mut last_was_base = false;
    let mut iter = morphemes.into_iter().peekable();
    while let Some(morpheme) = iter.next() {
        if stem {
            if let Some((root, tag)) = morpheme.predicate_root() {
                let mut word = format!("{root}다");
                if last_was_base && morpheme.is_derivational() {
                    if let Some(base) = out.pop() {
                        word = format!("{}{word}", base.word);
                    }
                }
                out.push(TaggedToken::new(word, tag));
                while iter.next_if(Morpheme::is_ending).is_some() {}
                last_was_base = false;
                continue;
            }
        }
        last_was_base = morpheme.is_predicate_base();
        let tag = KoreanTag::from_kodic(&morpheme.pos);
        out.push(TaggedToken::new(morpheme.surface, tag));
    }
    out
}

/// Clean → normalize → analyze → stem → stop-word filter, line by line.
pub struct KoreanPipeline<'a> {
    tokenizer: Tokenizer,
    stop_words: &'a StopWords,
    options: KoreanOptions,
}

impl fmt::Debug for KoreanPipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KoreanPipeline")
            .field("stop_words", &self.stop_words.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> KoreanPipeline<'a> {
    /// Loads the embedded ko-dic dictionary.
    pub fn new(stop_words: &'a StopWords, options: KoreanOptions) -> Result<Self> {
        let dictionary =
            load_dictionary(DICTIONARY).map_err(|e| Error::Analyzer(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        let tokenizer = Tokenizer::new(segmenter);
        Ok(Self {
            tokenizer,
            stop_words,
            options,
        })
    }

    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>> {
        let mut tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(|e| Error::Analyzer(e.to_string()))?;
        let mut morphemes = Vec::with_capacity(tokens.len());
        for token in tokens.iter_mut() {
            let surface = token.surface.as_ref().to_string();
            if surface.trim().is_empty() {
                continue;
            }
            let details = token.details();
            let pos = details.first().copied().unwrap_or("UNK").to_string();
            let expression = details
                .get(EXPRESSION_FIELD)
                .filter(|e| **e != "*")
                .map(|e| e.to_string());
            morphemes.push(Morpheme {
                surface,
                pos,
                expression,
            });
        }
        Ok(morphemes)
    }

    /// Appends the tagged morphemes of one raw line to `out`.
    pub fn process_line(&self, line: &str, out: &mut Vec<TaggedToken>) -> Result<()> {
        let mut cleaned = clean_line(line);
        if cleaned.is_empty() {
            return Ok(());
        }
        if self.options.normalize {
            cleaned = normalize(&cleaned);
        }
        let morphemes = self.analyze(&cleaned)?;
        out.extend(
            tag_morphemes(morphemes, self.options.stem)
                .into_iter()
                .filter(|t| !self.stop_words.contains(&t.word)),
        );
        Ok(())
    }

    /// Runs every line of `text` through the pipeline into one flat sequence.
    pub fn process_text(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let mut tokens = Vec::new();
        for line in text.lines() {
            self.process_line(line, &mut tokens)?;
        }
        debug!("Korean pipeline produced {} tokens", tokens.len());
        Ok(tokens)
    }
}
