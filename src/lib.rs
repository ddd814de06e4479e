//! Word-frequency statistics for an English/Korean text pair.
//!
//! Each file runs through its own linear pipeline
//! (clean → tokenize → tag → filter → count) and the three top-N tables are
//! collected into a [`Report`]:
//! - English lemmas,
//! - Korean (morpheme, tag) pairs including particles (Josa),
//! - the same excluding particles.
//!
//! ```no_run
//! use bilingual_wordfreq::{Config, run, ExportFormat};
//! let config = Config::new("speech_en.txt", "speech_ko.txt", "stopwords_ko.txt");
//! let report = run(&config).unwrap();
//! println!("{}", report.render(ExportFormat::Txt).unwrap());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use whatlang::Lang;

pub mod clean;
pub mod count;
pub mod english;
pub mod error;
pub mod korean;
pub mod lemmatizer;
pub mod report;
pub mod stopwords;
pub mod tagger;

pub use count::DEFAULT_TOP_N;
pub use english::EnglishPipeline;
pub use error::{Error, Result};
pub use korean::{KoreanOptions, KoreanPipeline, KoreanTag, TaggedToken};
pub use report::{ExportFormat, Report};
pub use stopwords::StopWords;

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub english_path: PathBuf,
    pub korean_path: PathBuf,
    /// Whitespace-separated Korean stop words.
    pub korean_stopwords_path: PathBuf,
    pub top_n: usize,
    pub export_format: ExportFormat,
    pub korean: KoreanOptions,
    /// Fail instead of warning when a file is not detected as its expected language.
    pub strict_lang: bool,
}

impl Config {
    pub fn new(
        english_path: impl Into<PathBuf>,
        korean_path: impl Into<PathBuf>,
        korean_stopwords_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            english_path: english_path.into(),
            korean_path: korean_path.into(),
            korean_stopwords_path: korean_stopwords_path.into(),
            top_n: DEFAULT_TOP_N,
            export_format: ExportFormat::default(),
            korean: KoreanOptions::default(),
            strict_lang: false,
        }
    }
}

/// Reads the whole file as UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Warns (or fails in strict mode) when `text` is not detected as `expected`.
/// Blank texts are never checked.
pub fn check_language(path: &Path, text: &str, expected: Lang, strict: bool) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let detected = whatlang::detect_lang(text);
    if detected == Some(expected) {
        return Ok(());
    }
    let detected = detected.map_or_else(|| "no language".to_string(), |l| l.eng_name().to_string());
    if strict {
        return Err(Error::Language {
            path: path.to_path_buf(),
            expected: expected.eng_name(),
            detected,
        });
    }
    warn!(
        "{}: expected {} text, detected {}",
        path.display(),
        expected.eng_name(),
        detected
    );
    Ok(())
}

/// Runs both pipelines over in-memory texts.
pub fn analyze_texts(
    english_text: &str,
    korean_text: &str,
    english_stop_words: &StopWords,
    korean_stop_words: &StopWords,
    config: &Config,
) -> Result<Report> {
    let english_tokens = EnglishPipeline::new(english_stop_words).process_text(english_text);
    let korean_tokens =
        KoreanPipeline::new(korean_stop_words, config.korean)?.process_text(korean_text)?;

    Ok(Report {
        top_n: config.top_n,
        english: count::top_words(&english_tokens, config.top_n),
        korean_with_josa: count::top_tagged(&korean_tokens, config.top_n),
        korean_without_josa: count::top_tagged_excluding_josa(&korean_tokens, config.top_n),
    })
}

/// Loads the inputs named in `config` and produces the report.
pub fn run(config: &Config) -> Result<Report> {
    let english_stop_words = stopwords::english();
    let korean_stop_words = stopwords::load_korean(&config.korean_stopwords_path)?;

    let english_text = read_text(&config.english_path)?;
    check_language(&config.english_path, &english_text, Lang::Eng, config.strict_lang)?;
    let korean_text = read_text(&config.korean_path)?;
    check_language(&config.korean_path, &korean_text, Lang::Kor, config.strict_lang)?;

    analyze_texts(
        &english_text,
        &korean_text,
        &english_stop_words,
        &korean_stop_words,
        config,
    )
}
