// LRC 歌词解析
//
// 时间标签只用于识别歌词行，解析后全部丢弃，不做排序
// 每种语言的文件都按固定的行序排列译文和注音：
// - 日文: 日文 / 中文 / 罗马音 三行一组
// - 中文: 歌词 / 拼音
// - 英文: 英文 / 中文

mod chinese;
mod english;
mod japanese;
mod line;

pub use chinese::ChineseLrcParser;
pub use english::EnglishLrcParser;
pub use japanese::JapaneseLrcParser;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum LyricRecord {
    Japanese {
        japanese: String,
        chinese: String,
        romaji: String,
    },
    Chinese {
        lyric: String,
        pinyin: String,
    },
    English {
        english: String,
        chinese: String,
    },
}

impl LyricRecord {
    pub fn language(&self) -> Language {
        match self {
            LyricRecord::Japanese { .. } => Language::Japanese,
            LyricRecord::Chinese { .. } => Language::Chinese,
            LyricRecord::English { .. } => Language::English,
        }
    }
}

pub trait LrcParser {
    fn language(&self) -> Language;

    // 保持文件中的顺序
    fn parse(&self, lines: &[&str]) -> Vec<LyricRecord>;
}

// 换行符不统一 (CR+LF / LF / CR)
pub fn split_lines(content: &str) -> Vec<&str> {
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

    REGEX_NEW_LINE.split(content).collect()
}

pub fn parse_lrc(language: Language, content: &str) -> Vec<LyricRecord> {
    language.parser().parse(&split_lines(content))
}
