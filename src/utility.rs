pub mod zip;

// 歌词文件的文字种别
// 范围与 LRC 歌词本的语言检测一致，比一般的 CJK 判定更窄
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharType {
    LatinAlphabet,
    Hiragana,
    Katakana,
    Ideograph,
    Other,
}

impl CharType {
    pub fn from(c: char) -> Self {
        let u = c as u32;

        if 0x0041 <= u && u <= 0x005a || 0x0061 <= u && u <= 0x007a {
            Self::LatinAlphabet
        } else if 0x3040 <= u && u <= 0x309f {
            Self::Hiragana
        } else if 0x30a0 <= u && u <= 0x30ff {
            Self::Katakana
        } else if 0x4e00 <= u && u <= 0x9fff {
            Self::Ideograph
        } else {
            Self::Other
        }
    }

    pub fn is_kana(&self) -> bool {
        matches!(self, Self::Hiragana | Self::Katakana)
    }
}

pub fn contains_kana(s: &str) -> bool {
    s.chars().any(|c| CharType::from(c).is_kana())
}

pub fn contains_ideograph(s: &str) -> bool {
    s.chars().any(|c| CharType::from(c) == CharType::Ideograph)
}

pub fn contains_latin(s: &str) -> bool {
    s.chars().any(|c| CharType::from(c) == CharType::LatinAlphabet)
}
