use log::debug;

use crate::{
    language::Language,
    lrc::{
        line::{lyric_texts, CREDIT_MARKERS_WITH_PRODUCER},
        LrcParser, LyricRecord,
    },
    utility::contains_ideograph,
};

// 英文行之后紧跟中文译文，译文行结束一组
pub struct EnglishLrcParser;

impl LrcParser for EnglishLrcParser {
    fn language(&self) -> Language {
        Language::English
    }

    fn parse(&self, lines: &[&str]) -> Vec<LyricRecord> {
        let mut records = Vec::new();
        let mut english = "";

        for text in lyric_texts(lines, CREDIT_MARKERS_WITH_PRODUCER) {
            if contains_ideograph(text) {
                // 前面没有英文行时英文为空
                records.push(LyricRecord::English {
                    english: english.to_owned(),
                    chinese: text.to_owned(),
                });
                english = "";
            } else {
                if !english.is_empty() {
                    debug!("English line without translation is replaced: {:?}", english);
                }
                english = text;
            }
        }

        if !english.is_empty() {
            records.push(LyricRecord::English {
                english: english.to_owned(),
                chinese: String::new(),
            });
        }

        records
    }
}
