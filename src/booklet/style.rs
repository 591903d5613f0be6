use serde::{Deserialize, Serialize};

use crate::docx::{PageSetup, Rgb, StyleSheet};

// 歌词本的版式和字体设定
// 通过 Config 显式传给渲染器，不使用全局状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookletStyle {
    pub font_family: String,

    // A5
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    pub margin_bottom_mm: f32,
    pub margin_left_mm: f32,
    pub columns: u32,
    pub column_gap_twips: u32,

    pub toc_title: String,
    pub toc_title_size_pt: f32,
    pub toc_entry_size_pt: f32,
    pub song_title_size_pt: f32,

    pub lyric_size_pt: f32,
    pub romaji_size_pt: f32,
    pub pinyin_size_pt: f32,
    pub translation_size_pt: f32,
    pub phonetic_color: Rgb,
    pub translation_color: Rgb,

    pub first_page: usize,
    pub footer_page_number: bool,
}

impl Default for BookletStyle {
    fn default() -> Self {
        Self {
            font_family: "霞鹜新晰黑".to_owned(),

            page_width_mm: 148.0,
            page_height_mm: 210.0,
            margin_top_mm: 6.0,
            margin_right_mm: 8.0,
            margin_bottom_mm: 6.0,
            margin_left_mm: 8.0,
            columns: 2,
            column_gap_twips: 8,

            toc_title: "多语言歌词本目录".to_owned(),
            toc_title_size_pt: 10.0,
            toc_entry_size_pt: 8.0,
            song_title_size_pt: 9.0,

            lyric_size_pt: 8.0,
            romaji_size_pt: 6.5,
            pinyin_size_pt: 7.0,
            translation_size_pt: 7.5,
            phonetic_color: Rgb(100, 100, 100),
            translation_color: Rgb(50, 50, 150),

            // 目录占第 1 页
            first_page: 2,
            footer_page_number: true,
        }
    }
}

impl BookletStyle {
    pub fn page_setup(&self) -> PageSetup {
        PageSetup {
            width_mm: self.page_width_mm,
            height_mm: self.page_height_mm,
            margin_top_mm: self.margin_top_mm,
            margin_right_mm: self.margin_right_mm,
            margin_bottom_mm: self.margin_bottom_mm,
            margin_left_mm: self.margin_left_mm,
            columns: self.columns,
            column_gap_twips: self.column_gap_twips,
        }
    }

    pub fn style_sheet(&self) -> StyleSheet {
        StyleSheet {
            font_family: self.font_family.clone(),
            normal_size_pt: self.lyric_size_pt,
            title_size_pt: self.toc_title_size_pt,
            heading_size_pt: self.song_title_size_pt,
            footer_page_number: self.footer_page_number,
        }
    }
}
