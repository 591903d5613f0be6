use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    language::Language,
    lrc::{
        line::{lyric_texts, CREDIT_MARKERS_WITH_PRODUCER},
        LrcParser, LyricRecord,
    },
};

// 歌词行之后紧跟其拼音行
pub struct ChineseLrcParser;

impl LrcParser for ChineseLrcParser {
    fn language(&self) -> Language {
        Language::Chinese
    }

    fn parse(&self, lines: &[&str]) -> Vec<LyricRecord> {
        // 只由字母、数字、空白和撇号组成
        static REGEX_PINYIN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s']+$").unwrap());

        let mut records = Vec::new();
        let mut lyric: Option<&str> = None;
        let mut pinyin = "";

        for text in lyric_texts(lines, CREDIT_MARKERS_WITH_PRODUCER) {
            if REGEX_PINYIN.is_match(text) {
                if lyric.is_some() {
                    pinyin = text;
                } else {
                    debug!("Pinyin line without lyric is dropped: {:?}", text);
                }
                continue;
            }

            if let Some(lyric) = lyric.take() {
                records.push(LyricRecord::Chinese {
                    lyric: lyric.to_owned(),
                    pinyin: pinyin.to_owned(),
                });
            }
            pinyin = "";
            lyric = Some(text);
        }

        if let Some(lyric) = lyric {
            records.push(LyricRecord::Chinese {
                lyric: lyric.to_owned(),
                pinyin: pinyin.to_owned(),
            });
        }

        records
    }
}
