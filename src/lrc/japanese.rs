use log::warn;

use crate::{
    language::Language,
    lrc::{
        line::{lyric_texts, CREDIT_MARKERS},
        LrcParser, LyricRecord,
    },
    utility::{contains_ideograph, contains_kana},
};

const GROUP_SIZE: usize = 3;

// 日文 / 中文 / 罗马音 三行一组
// 分组只按位置进行，行数不是 3 的倍数时后面的组会错位
pub struct JapaneseLrcParser;

impl LrcParser for JapaneseLrcParser {
    fn language(&self) -> Language {
        Language::Japanese
    }

    fn parse(&self, lines: &[&str]) -> Vec<LyricRecord> {
        let mut records = Vec::new();
        let mut group = Vec::with_capacity(GROUP_SIZE);

        for text in lyric_texts(lines, CREDIT_MARKERS) {
            group.push(text);

            if group.len() == GROUP_SIZE {
                records.push(flush_group(&group));
                group.clear();
            }
        }

        // 不完整的最后一组: 按位置填入，缺的补空，不重新分类
        if !group.is_empty() {
            records.push(LyricRecord::Japanese {
                japanese: group[0].to_owned(),
                chinese: group.get(1).copied().unwrap_or_default().to_owned(),
                romaji: group.get(2).copied().unwrap_or_default().to_owned(),
            });
        }

        records
    }
}

fn flush_group(group: &[&str]) -> LyricRecord {
    let mut slots = [group[0], group[1], group[2]];

    // 第一行没有假名时按内容重新分类，后出现的行覆盖先出现的
    if !contains_kana(group[0]) {
        let mut assigned = [0usize; GROUP_SIZE];

        for &text in group {
            let slot = if contains_kana(text) {
                0
            } else if contains_ideograph(text) {
                1
            } else {
                2
            };
            slots[slot] = text;
            assigned[slot] += 1;
        }

        // 多行属于同一文字种别时无法确定顺序，保留上面的结果并报告
        if assigned != [1; GROUP_SIZE] {
            warn!(
                "Ambiguous japanese lyric group {:?}, kept as japanese={:?} chinese={:?} romaji={:?}",
                group, slots[0], slots[1], slots[2]
            );
        }
    }

    let [japanese, chinese, romaji] = slots;
    LyricRecord::Japanese {
        japanese: japanese.to_owned(),
        chinese: chinese.to_owned(),
        romaji: romaji.to_owned(),
    }
}
