//! Heuristic English part-of-speech tagger.
//!
//! Produces Penn-Treebank-style labels (`NN`, `NNS`, `VBZ`, `JJ`, `RB`, ...)
//! from a closed-class lexicon, a table of irregular verb forms, suffix rules
//! and a one-token left context. Only the first letter of a tag matters to
//! the lemmatizer, so the tagger aims at getting the coarse class right.

/// Tags every token of a sentence. The output is aligned with the input.
/// # Example
/// ```
/// use bilingual_wordfreq::tagger::pos_tag;
/// let tokens = ["the", "fox", "runs"];
/// let tagged = pos_tag(&tokens);
/// assert_eq!(tagged, vec![("the", "DT"), ("fox", "NN"), ("runs", "VBZ")]);
/// ```
pub fn pos_tag<'a, S: AsRef<str>>(tokens: &'a [S]) -> Vec<(&'a str, &'static str)> {
    let mut tagged: Vec<(&'a str, &'static str)> = Vec::with_capacity(tokens.len());
    let mut prev: Option<(&str, &'static str)> = None;
    for token in tokens {
        let word = token.as_ref();
        let tag = lexicon(word).unwrap_or_else(|| guess(word, prev));
        tagged.push((word, tag));
        prev = Some((word, tag));
    }
    tagged
}

fn lexicon(word: &str) -> Option<&'static str> {
    let tag = match word {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "every" | "each" | "some"
        | "any" | "no" | "all" | "both" | "another" | "either" | "neither" => "DT",
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "into" | "about" | "as"
        | "like" | "through" | "after" | "over" | "between" | "out" | "against" | "during"
        | "without" | "before" | "under" | "around" | "among" | "because" | "if" | "while"
        | "since" | "until" | "than" | "though" | "although" | "whether" | "upon" | "onto"
        | "off" | "within" | "behind" | "across" | "toward" | "towards" => "IN",
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "myself" | "yourself" | "himself" | "herself" | "itself" | "ourselves"
        | "yourselves" | "themselves" => "PRP",
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => "PRP$",
        "and" | "or" | "but" | "nor" | "yet" | "so" => "CC",
        "can" | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must" => {
            "MD"
        }
        "to" => "TO",
        "which" | "whatever" | "whichever" => "WDT",
        "what" | "who" | "whom" => "WP",
        "whose" => "WP$",
        "when" | "where" | "why" | "how" => "WRB",
        "there" => "EX",
        "not" | "never" | "very" | "too" | "also" | "just" | "only" | "then" | "now" | "here"
        | "still" | "even" | "again" | "always" | "often" | "already" | "ever" | "soon"
        | "almost" | "back" | "away" | "together" | "once" | "rather" | "quite" | "perhaps" => {
            "RB"
        }
        "up" | "down" => "RP",
        "be" => "VB",
        "am" | "are" | "have" | "do" => "VBP",
        "is" | "has" | "does" => "VBZ",
        "was" | "were" | "had" | "did" => "VBD",
        "been" | "done" => "VBN",
        "being" | "having" | "doing" => "VBG",
        "went" | "came" | "saw" | "took" | "made" | "said" | "got" | "knew" | "thought"
        | "told" | "found" | "gave" | "left" | "felt" | "began" | "ran" | "wrote" | "became"
        | "kept" | "brought" | "bought" | "meant" | "met" | "paid" | "sat" | "stood" | "lost"
        | "heard" | "held" | "led" | "taught" | "caught" | "fell" | "drove" | "ate" | "spoke"
        | "chose" | "grew" | "threw" | "flew" | "drew" | "sent" | "spent" | "built" | "slept"
        | "dropped" | "loved" | "died" => "VBD",
        "gone" | "seen" | "taken" | "given" | "known" | "written" | "begun" | "spoken"
        | "chosen" | "grown" | "thrown" | "flown" | "drawn" | "eaten" | "fallen" | "driven"
        | "forgotten" | "gotten" | "hidden" | "broken" => "VBN",
        "good" | "bad" | "new" | "old" | "great" | "big" | "small" | "little" | "long"
        | "high" | "young" | "right" | "important" | "few" | "many" | "much" | "other"
        | "same" | "different" | "own" | "last" | "first" | "next" | "early" | "late"
        | "whole" | "true" | "sure" | "free" | "clear" | "real" | "best" | "better"
        | "worst" | "worse" => "JJ",
        "larger" | "bigger" | "smaller" | "older" | "greater" | "higher" | "longer"
        | "younger" | "stronger" | "faster" | "easier" | "harder" | "nicer" | "wider" => "JJR",
        "largest" | "biggest" | "smallest" | "oldest" | "greatest" | "highest" | "longest"
        | "youngest" | "strongest" | "fastest" | "easiest" | "hardest" | "nicest" | "widest" => {
            "JJS"
        }
        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine"
        | "ten" | "twenty" | "thirty" | "hundred" | "thousand" | "million" => "CD",
        "oh" | "yes" | "hey" | "wow" => "UH",
        "thing" | "something" | "nothing" | "anything" | "everything" | "morning"
        | "evening" | "king" | "ring" | "spring" | "string" | "wing" | "ceiling" | "news"
        | "need" | "speed" | "seed" => "NN",
        _ => return None,
    };
    Some(tag)
}

/// Words after which an `-er` word is read as a comparative (`much cheaper`, `were taller`).
fn introduces_comparative(word: &str) -> bool {
    matches!(
        word,
        "much"
            | "far"
            | "even"
            | "still"
            | "slightly"
            | "is"
            | "are"
            | "was"
            | "were"
            | "be"
            | "been"
            | "am"
            | "become"
            | "becomes"
            | "became"
            | "seem"
            | "seems"
            | "seemed"
            | "getting"
    )
}

fn guess(word: &str, prev: Option<(&str, &'static str)>) -> &'static str {
    let len = word.chars().count();
    let (prev_word, prev) = match prev {
        Some((w, t)) => (Some(w), Some(t)),
        None => (None, None),
    };
    let after_modal = matches!(prev, Some("MD" | "TO"));
    let after_aux = matches!(
        prev,
        Some("VBZ" | "VBP" | "VBD" | "VB") // has / have / had / was
    );
    let after_subject = matches!(prev, Some("PRP"));

    if len > 3 && word.ends_with("ly") {
        return "RB";
    }
    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && word.ends_with("ed") {
        return if after_aux { "VBN" } else { "VBD" };
    }
    if after_modal {
        return "VB";
    }
    if len > 4 && word.ends_with("er") && prev_word.is_some_and(introduces_comparative) {
        return "JJR";
    }
    if len > 4 && word.ends_with("est") {
        return "JJS";
    }
    const ADJ_SUFFIXES: [&str; 10] = [
        "ous", "ful", "able", "ible", "ive", "less", "ical", "ic", "ish", "ary",
    ];
    if len > 4 && ADJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "JJ";
    }
    const NOUN_SUFFIXES: [&str; 11] = [
        "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ship", "hood", "ance", "ence",
    ];
    if len > 4 && NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "NN";
    }
    if len > 2
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return match prev {
            Some("NN" | "NNS" | "NNP" | "PRP" | "WP" | "EX") => "VBZ",
            _ => "NNS",
        };
    }
    if after_subject {
        return "VBP";
    }
    "NN"
}
