#![forbid(unsafe_code)]
//! # Bilingual word-frequency CLI
//!
//! Command-line interface for the `bilingual_wordfreq` crate.
//! Reports the most frequent English lemmas and Korean morphemes of a
//! translated text pair.
//!
//! ## Example
//! ```bash
//! cargo run --release -- speech_en.txt speech_ko.txt stopwords_ko.txt --top 10 --export-format json
//! ```
//!
//! See `--help` for all available options. Set `RUST_LOG=debug` for pipeline details.

use std::path::PathBuf;
use std::process;

use bilingual_wordfreq::{Config, DEFAULT_TOP_N, ExportFormat, KoreanOptions, run};
use clap::Parser;
use log::error;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// English source text (UTF-8)
    english: PathBuf,

    /// Korean source text (UTF-8)
    korean: PathBuf,

    /// Korean stop-word file (whitespace-separated)
    korean_stopwords: PathBuf,

    /// Number of entries per section
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Output format (txt, csv, tsv, json)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Do not collapse repeated characters in Korean text
    #[arg(long, default_value_t = false)]
    no_normalize: bool,

    /// Keep Korean predicates as analyzed instead of in dictionary form
    #[arg(long, default_value_t = false)]
    no_stem: bool,

    /// Abort if a file is not detected as its expected language
    #[arg(long, default_value_t = false)]
    strict_lang: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config {
        top_n: cli.top,
        export_format: cli.export_format,
        korean: KoreanOptions {
            normalize: !cli.no_normalize,
            stem: !cli.no_stem,
        },
        strict_lang: cli.strict_lang,
        ..Config::new(cli.english, cli.korean, cli.korean_stopwords)
    };

    match run(&config).and_then(|report| report.render(config.export_format)) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
