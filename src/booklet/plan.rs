use serde::Serialize;

use crate::{language::Language, song::Song};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    // 目录中的序号 (从 1 开始)
    pub number: usize,
    pub title: String,
    pub language: Language,
    pub page: usize,
}

// 各歌曲的起始页码 (近似值)
//
// 假设每首歌从新页开始且只占一页: 第一首为 first_page，之后每首加 1
// 页脚 PAGE 域把目录也算在内，所以默认的 first_page 为 2 (目录只占一页时一致)
// 超过一页的歌曲会使后面的实际页码偏移，目录不会随之修正
// 准确的页码需要真正的排版引擎，页脚的 PAGE 域显示实际页码
pub fn plan_pages(songs: &[Song], first_page: usize) -> Vec<TocEntry> {
    songs
        .iter()
        .filter(|song| !song.lines.is_empty())
        .enumerate()
        .map(|(i, song)| TocEntry {
            number: i + 1,
            title: song.title.clone(),
            language: song.language,
            page: first_page + i,
        })
        .collect()
}
