use std::fmt::Write as _;

use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;

use crate::count::{TaggedCount, WordCount};
use crate::error::{Error, Result};

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Txt,
    Csv,
    Tsv,
    Json,
}

/// The three top-N sections of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub top_n: usize,
    pub english: Vec<WordCount>,
    pub korean_with_josa: Vec<TaggedCount>,
    pub korean_without_josa: Vec<TaggedCount>,
}

const SECTION_ENGLISH: &str = "english";
const SECTION_WITH_JOSA: &str = "korean_with_josa";
const SECTION_WITHOUT_JOSA: &str = "korean_without_josa";

impl Report {
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Txt => Ok(self.to_txt()),
            ExportFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| Error::Export(e.to_string()))
            }
            ExportFormat::Csv => self.to_delimited(b','),
            ExportFormat::Tsv => self.to_delimited(b'\t'),
        }
    }

    fn to_txt(&self) -> String {
        let n = self.top_n;
        let mut out = String::new();
        let _ = writeln!(out, "Top {n} English words:");
        for row in &self.english {
            let _ = writeln!(out, "  {}\t{}", row.word, row.count);
        }
        let _ = writeln!(out, "\nTop {n} Korean words with POS tags (including Josa):");
        write_tagged(&mut out, &self.korean_with_josa);
        let _ = writeln!(out, "\nTop {n} Korean words with POS tags (excluding Josa):");
        write_tagged(&mut out, &self.korean_without_josa);
        out
    }

    fn to_delimited(&self, delimiter: u8) -> Result<String> {
        let mut wtr = WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());
        let export_err = |e: csv::Error| Error::Export(e.to_string());

        wtr.write_record(["section", "word", "tag", "count"])
            .map_err(export_err)?;
        for row in &self.english {
            let count = row.count.to_string();
            wtr.write_record([SECTION_ENGLISH, row.word.as_str(), "", count.as_str()])
                .map_err(export_err)?;
        }
        for (section, rows) in [
            (SECTION_WITH_JOSA, &self.korean_with_josa),
            (SECTION_WITHOUT_JOSA, &self.korean_without_josa),
        ] {
            for row in rows {
                let count = row.count.to_string();
                wtr.write_record([section, row.word.as_str(), row.tag.label(), count.as_str()])
                    .map_err(export_err)?;
            }
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| Error::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
    }
}

fn write_tagged(out: &mut String, rows: &[TaggedCount]) {
    for row in rows {
        let _ = writeln!(out, "  {} ({}): {} Times", row.word, row.tag, row.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::korean::KoreanTag;

    fn sample() -> Report {
        Report {
            top_n: 2,
            english: vec![
                WordCount {
                    word: "fox".into(),
                    count: 2,
                },
                WordCount {
                    word: "run".into(),
                    count: 1,
                },
            ],
            korean_with_josa: vec![
                TaggedCount {
                    word: "는".into(),
                    tag: KoreanTag::Josa,
                    count: 3,
                },
                TaggedCount {
                    word: "고양이".into(),
                    tag: KoreanTag::Noun,
                    count: 2,
                },
            ],
            korean_without_josa: vec![TaggedCount {
                word: "고양이".into(),
                tag: KoreanTag::Noun,
                count: 2,
            }],
        }
    }

    #[test]
    fn txt_sections_in_order() {
        let out = sample().render(ExportFormat::Txt).unwrap();
        let i_en = out.find("Top 2 English words:").unwrap();
        let i_with = out
            .find("Top 2 Korean words with POS tags (including Josa):")
            .unwrap();
        let i_without = out
            .find("Top 2 Korean words with POS tags (excluding Josa):")
            .unwrap();
        assert!(i_en < i_with && i_with < i_without);
        assert!(out.contains("\n  fox\t2\n"));
        assert!(out.contains("  는 (Josa): 3 Times"));
        assert!(out[i_without..].contains("  고양이 (Noun): 2 Times"));
        assert!(!out[i_without..].contains("(Josa)"));
    }

    #[test]
    fn json_shape() {
        let out = sample().render(ExportFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["top_n"], 2);
        assert_eq!(v["english"][0]["word"], "fox");
        assert_eq!(v["english"][0]["count"], 2);
        assert_eq!(v["korean_with_josa"][0]["tag"], "Josa");
        assert_eq!(v["korean_without_josa"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn csv_and_tsv_rows() {
        let csv = sample().render(ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "section,word,tag,count");
        assert_eq!(lines[1], "english,fox,,2");
        assert_eq!(lines[3], "korean_with_josa,는,Josa,3");
        assert_eq!(lines.len(), 6);

        let tsv = sample().render(ExportFormat::Tsv).unwrap();
        assert!(tsv.starts_with("section\tword\ttag\tcount\n"));
        assert!(tsv.contains("korean_without_josa\t고양이\tNoun\t2"));
    }
}
