use std::sync::LazyLock;

use regex::Regex;

/// Everything except the ASCII space, Hangul compatibility jamo, Hangul syllables and Latin letters.
static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^ ㄱ-ㅣ가-힣a-zA-Z]+").expect("valid noise pattern"));

/// Cleans one raw line of text.
///
/// Removes every character that is not a space, Hangul or a Latin letter,
/// trims the result and lowercases it. Applying it twice yields the same line.
/// # Example
/// ```
/// use bilingual_wordfreq::clean::clean_line;
/// assert_eq!(clean_line("  The fox, 2 runs!\n"), "the fox  runs");
/// assert_eq!(clean_line("고양이는 집에 있다."), "고양이는 집에 있다");
/// ```
pub fn clean_line(line: &str) -> String {
    NOISE.replace_all(line, "").trim().to_lowercase()
}
