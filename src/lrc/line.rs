use once_cell::sync::Lazy;
use regex::Regex;

// 作词 / 作曲 / 编曲 等制作信息行
pub(super) const CREDIT_MARKERS: &[&str] = &["作词", "作曲", "编曲", "by:"];
pub(super) const CREDIT_MARKERS_WITH_PRODUCER: &[&str] = &["作词", "作曲", "编曲", "制作人", "by:"];

#[derive(Debug, PartialEq, Eq)]
pub(super) enum LrcLine<'a> {
    Blank,
    Credit,
    // [mm:ss.xx] 之后的文本 (可能为空)
    Timed(&'a str),
    // [ti:...] 等其他标签
    Other,
}

impl<'a> LrcLine<'a> {
    pub(super) fn classify(line: &'a str, credit_markers: &[&str]) -> Self {
        static REGEX_TIMESTAMP: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\[\d+:\d+\.\d+\]\s*").unwrap());

        let line = line.trim();

        if line.is_empty() {
            return Self::Blank;
        }

        if line.starts_with('[') && credit_markers.iter().any(|m| line.contains(m)) {
            return Self::Credit;
        }

        match REGEX_TIMESTAMP.find(line) {
            Some(m) => Self::Timed(&line[m.end()..]),
            None => Self::Other,
        }
    }
}

// 去掉时间标签后的非空歌词文本
pub(super) fn lyric_texts<'a>(lines: &[&'a str], credit_markers: &[&str]) -> Vec<&'a str> {
    lines
        .iter()
        .filter_map(|&line| match LrcLine::classify(line, credit_markers) {
            LrcLine::Timed(text) if !text.is_empty() => Some(text),
            _ => None,
        })
        .collect()
}
