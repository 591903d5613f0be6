use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    lrc::{ChineseLrcParser, EnglishLrcParser, JapaneseLrcParser, LrcParser},
    utility::{contains_ideograph, contains_kana, contains_latin},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    Japanese,
    Chinese,
    English,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Japanese, Language::Chinese, Language::English];

    pub fn parser(self) -> &'static dyn LrcParser {
        match self {
            Language::Japanese => &JapaneseLrcParser,
            Language::Chinese => &ChineseLrcParser,
            Language::English => &EnglishLrcParser,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Japanese => "japanese",
            Language::Chinese => "chinese",
            Language::English => "english",
        }
    }

    // 总结输出用
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Japanese => "日文",
            Language::Chinese => "中文",
            Language::English => "英文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// 扫描整个文件内容判断语言
// 日文歌词中夹有中文译文，所以先检查假名: 假名 > 汉字 > 拉丁字母
pub fn detect(content: &str) -> Option<Language> {
    if contains_kana(content) {
        Some(Language::Japanese)
    } else if contains_ideograph(content) {
        Some(Language::Chinese)
    } else if contains_latin(content) {
        Some(Language::English)
    } else {
        None
    }
}
