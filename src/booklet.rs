// 歌词本的组装
//
// 两遍处理:
// 1. plan: 决定歌曲顺序和 (近似的) 起始页码
// 2. renderer: 根据预先算好的页码生成目录和各歌曲的节

mod plan;
mod renderer;
mod style;

pub use plan::{plan_pages, TocEntry};
pub use renderer::render_booklet;
pub use style::BookletStyle;

use std::collections::BTreeMap;

use log::warn;
use serde::Serialize;

use crate::{language::Language, song::Song};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booklet {
    #[serde(skip)]
    pub songs: Vec<Song>,
    pub language_counts: BTreeMap<Language, usize>,
    pub toc: Vec<TocEntry>,
    pub toc_page_refs: BTreeMap<String, usize>,
}

impl Booklet {
    pub fn build(songs: Vec<Song>, first_page: usize) -> Booklet {
        // 没有歌词行的歌曲不收录
        let songs: Vec<Song> = songs.into_iter().filter(|s| !s.lines.is_empty()).collect();

        let mut language_counts: BTreeMap<Language, usize> =
            Language::ALL.iter().map(|&language| (language, 0)).collect();
        for song in &songs {
            *language_counts.entry(song.language).or_insert(0) += 1;
        }

        let toc = plan_pages(&songs, first_page);

        // 同名歌曲 (例: a.lrc 与 a.LRC) 用目录序号区分，保证每首歌都有页码
        let mut toc_page_refs = BTreeMap::new();
        for entry in &toc {
            let key = if toc_page_refs.contains_key(&entry.title) {
                let key = format!("{} ({})", entry.title, entry.number);
                warn!("Duplicate song title '{}', page ref stored as '{}'", entry.title, key);
                key
            } else {
                entry.title.clone()
            };
            toc_page_refs.insert(key, entry.page);
        }

        Booklet {
            songs,
            language_counts,
            toc,
            toc_page_refs,
        }
    }

    pub fn count(&self, language: Language) -> usize {
        self.language_counts.get(&language).copied().unwrap_or(0)
    }
}
