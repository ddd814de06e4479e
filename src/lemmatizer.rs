//! English lemmatization.
//!
//! A lemma is looked up in a table of irregular forms first. Otherwise the
//! detachment rules for the word's category produce candidate base forms,
//! and the first candidate whose Snowball stem agrees with the stem of the
//! inflected word wins. When nothing agrees the word is its own lemma.

use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

/// Coarse word class used to pick the detachment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Noun,
    Verb,
    Adverb,
    Adjective,
}

impl PosCategory {
    /// Maps a Penn-style tag onto a category by its first letter.
    /// Unknown tags fall back to [`PosCategory::Noun`].
    /// # Example
    /// ```
    /// use bilingual_wordfreq::lemmatizer::PosCategory;
    /// assert_eq!(PosCategory::from_tag("VBZ"), PosCategory::Verb);
    /// assert_eq!(PosCategory::from_tag("DT"), PosCategory::Noun);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('N') => PosCategory::Noun,
            Some('V') => PosCategory::Verb,
            Some('R') => PosCategory::Adverb,
            Some('J') => PosCategory::Adjective,
            _ => PosCategory::Noun,
        }
    }
}

pub struct Lemmatizer {
    stemmer: Stemmer,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lemmatizer").finish_non_exhaustive()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Reduces `word` (lowercase) to its dictionary form for `category`.
    /// # Example
    /// ```
    /// use bilingual_wordfreq::lemmatizer::{Lemmatizer, PosCategory};
    /// let lemmatizer = Lemmatizer::new();
    /// assert_eq!(lemmatizer.lemmatize("runs", PosCategory::Verb), "run");
    /// assert_eq!(lemmatizer.lemmatize("cities", PosCategory::Noun), "city");
    /// ```
    pub fn lemmatize(&self, word: &str, category: PosCategory) -> String {
        if let Some(base) = irregular(word, category) {
            return base.to_string();
        }
        if category == PosCategory::Adjective && is_plain_adjective(word) {
            return word.to_string();
        }
        let stem = self.stemmer.stem(word);
        candidates(word, category)
            .into_iter()
            .find(|candidate| {
                let candidate_stem = self.stemmer.stem(candidate);
                match category {
                    // comparatives keep their suffix under Snowball
                    PosCategory::Adjective => stem.starts_with(candidate_stem.as_ref()),
                    _ => candidate_stem == stem,
                }
            })
            .unwrap_or_else(|| word.to_string())
    }
}

fn candidates(word: &str, category: PosCategory) -> Vec<String> {
    let mut out = Vec::new();
    if word.chars().count() <= 2 {
        return out;
    }
    match category {
        PosCategory::Noun => plural_candidates(word, &mut out),
        PosCategory::Verb => {
            plural_candidates(word, &mut out);
            if let Some(base) = word.strip_suffix("ied") {
                out.push(format!("{base}y"));
            }
            for suffix in ["ing", "ed"] {
                if let Some(base) = word.strip_suffix(suffix) {
                    if base.chars().count() >= 2 {
                        inflected_bases(base, &mut out);
                    }
                }
            }
        }
        PosCategory::Adjective => {
            for suffix in ["iest", "ier"] {
                if let Some(base) = word.strip_suffix(suffix) {
                    out.push(format!("{base}y"));
                }
            }
            for suffix in ["est", "er"] {
                if let Some(base) = word.strip_suffix(suffix) {
                    if base.chars().count() >= 2 {
                        inflected_bases(base, &mut out);
                    }
                }
            }
        }
        PosCategory::Adverb => {}
    }
    out
}

/// `-s` / `-es` / `-ies` endings shared by plural nouns and third-person verbs.
fn plural_candidates(word: &str, out: &mut Vec<String>) {
    if let Some(base) = word.strip_suffix("ies") {
        if base.chars().count() > 1 {
            out.push(format!("{base}y"));
        }
    }
    if ["sses", "xes", "zzes", "ches", "shes"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        out.push(word[..word.len() - 2].to_string());
    }
    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
    {
        out.push(word[..word.len() - 1].to_string());
    }
    if let Some(base) = word.strip_suffix("es") {
        out.push(base.to_string());
    }
}

/// Bases for a word stripped of `-ed` / `-ing` / `-er` / `-est`, most plausible first.
fn inflected_bases(base: &str, out: &mut Vec<String>) {
    if let Some(single) = undouble(base) {
        out.push(single);
    }
    if needs_e(base) {
        out.push(format!("{base}e"));
        out.push(base.to_string());
    } else {
        out.push(base.to_string());
        out.push(format!("{base}e"));
    }
}

/// `stopp` -> `stop`, `bigg` -> `big`.
fn undouble(base: &str) -> Option<String> {
    let mut rev = base.chars().rev();
    let last = rev.next()?;
    let prev = rev.next()?;
    if last == prev && matches!(last, 'b' | 'd' | 'g' | 'm' | 'n' | 'p' | 'r' | 't') {
        let mut single = base.to_string();
        single.pop();
        Some(single)
    } else {
        None
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether a base that lost `-ed` / `-ing` most likely ended in a silent `e`.
fn needs_e(base: &str) -> bool {
    let chars: Vec<char> = base.chars().collect();
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    let before = if n >= 3 { Some(chars[n - 3]) } else { None };
    let consonant_before = before.is_some_and(|c| !is_vowel(c));

    let by_ending = match last {
        'v' | 'c' | 'z' => true,
        'u' => !is_vowel(prev),
        'l' => matches!(prev, 'b' | 'c' | 'd' | 'f' | 'g' | 'k' | 'p' | 't' | 'z'),
        'g' => {
            matches!(prev, 'r' | 'd')
                || (prev == 'n' && before.is_some_and(|c| matches!(c, 'a' | 'e' | 'u')))
        }
        't' => {
            (prev == 'a' && !matches!(before, Some('e' | 'o' | 'a')))
                || (prev == 'u' && n >= 4 && consonant_before)
        }
        'd' => n >= 4 && matches!(prev, 'i' | 'u' | 'o') && consonant_before,
        'r' => n >= 4 && matches!(prev, 'i' | 'u' | 'a' | 'o') && consonant_before,
        'n' => prev == 'i' && n >= 5 && consonant_before,
        'm' => base.ends_with("com") || (prev == 'u' && n >= 4 && consonant_before),
        's' => is_vowel(prev) && !(matches!(prev, 'u' | 'a') && consonant_before),
        _ => false,
    };
    by_ending || ends_in_short_syllable(&chars)
}

/// One-syllable base ending consonant-vowel-consonant (`hop`, `mak`, `writ`).
fn ends_in_short_syllable(chars: &[char]) -> bool {
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    if is_vowel(last) || matches!(last, 'w' | 'x' | 'y') || !is_vowel(prev) {
        return false;
    }
    if n >= 3 && is_vowel(chars[n - 3]) {
        return false;
    }
    chars[..n - 2].iter().all(|c| !is_vowel(*c))
}

/// Adjectives that merely end like a comparative or superlative.
fn is_plain_adjective(word: &str) -> bool {
    matches!(
        word,
        "honest"
            | "modest"
            | "earnest"
            | "clever"
            | "proper"
            | "bitter"
            | "tender"
            | "slender"
            | "eager"
            | "sober"
            | "former"
            | "inner"
            | "outer"
            | "upper"
            | "utter"
            | "silver"
            | "super"
            | "other"
    )
}

fn irregular(word: &str, category: PosCategory) -> Option<&'static str> {
    let base = match category {
        PosCategory::Verb => match word {
            "am" | "are" | "is" | "was" | "were" | "been" | "being" => "be",
            "has" | "had" | "having" => "have",
            "does" | "did" | "done" | "doing" => "do",
            "goes" | "went" | "gone" => "go",
            "made" => "make",
            "said" => "say",
            "got" | "gotten" => "get",
            "knew" | "known" => "know",
            "thought" => "think",
            "told" => "tell",
            "found" => "find",
            "gave" | "given" => "give",
            "left" => "leave",
            "felt" => "feel",
            "began" | "begun" => "begin",
            "ran" => "run",
            "wrote" | "written" => "write",
            "became" => "become",
            "came" => "come",
            "saw" | "seen" => "see",
            "took" | "taken" => "take",
            "kept" => "keep",
            "brought" => "bring",
            "bought" => "buy",
            "meant" => "mean",
            "met" => "meet",
            "paid" => "pay",
            "sat" => "sit",
            "stood" => "stand",
            "understood" => "understand",
            "lost" => "lose",
            "heard" => "hear",
            "held" => "hold",
            "led" => "lead",
            "taught" => "teach",
            "caught" => "catch",
            "fell" | "fallen" => "fall",
            "drove" | "driven" => "drive",
            "ate" | "eaten" => "eat",
            "spoke" | "spoken" => "speak",
            "chose" | "chosen" => "choose",
            "grew" | "grown" => "grow",
            "threw" | "thrown" => "throw",
            "flew" | "flown" => "fly",
            "drew" | "drawn" => "draw",
            "sent" => "send",
            "spent" => "spend",
            "built" => "build",
            "slept" => "sleep",
            "forgot" | "forgotten" => "forget",
            "hid" | "hidden" => "hide",
            "broke" | "broken" => "break",
            "died" | "dying" => "die",
            "lying" => "lie",
            "tying" => "tie",
            "used" | "using" | "uses" => "use",
            "created" | "creating" | "creates" => "create",
            "added" | "adding" => "add",
            _ => return None,
        },
        PosCategory::Noun => match word {
            "men" => "man",
            "women" => "woman",
            "children" => "child",
            "feet" => "foot",
            "teeth" => "tooth",
            "mice" => "mouse",
            "geese" => "goose",
            "lives" => "life",
            "wives" => "wife",
            "knives" => "knife",
            "wolves" => "wolf",
            "leaves" => "leaf",
            "halves" => "half",
            "selves" => "self",
            "shelves" => "shelf",
            "thieves" => "thief",
            "heroes" => "hero",
            "potatoes" => "potato",
            "tomatoes" => "tomato",
            "echoes" => "echo",
            "buses" => "bus",
            "news" => "news",
            "series" => "series",
            "species" => "species",
            _ => return None,
        },
        PosCategory::Adjective => match word {
            "better" | "best" => "good",
            "worse" | "worst" => "bad",
            "further" | "farther" | "furthest" | "farthest" => "far",
            "older" | "oldest" | "elder" | "eldest" => "old",
            "bigger" => "big",
            "larger" | "largest" => "large",
            "smaller" | "smallest" => "small",
            _ => return None,
        },
        PosCategory::Adverb => match word {
            "better" | "best" => "well",
            "further" | "farther" => "far",
            "harder" | "hardest" => "hard",
            _ => return None,
        },
    };
    Some(base)
}
