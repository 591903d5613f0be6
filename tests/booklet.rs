use std::path::PathBuf;

use lrc_booklet::{
    booklet::{plan_pages, render_booklet, Booklet, BookletStyle},
    docx::{Alignment, ParagraphStyle},
    language::Language,
    lrc::LyricRecord,
    song::Song,
};

fn song(title: &str, language: Language, lines: Vec<LyricRecord>) -> Song {
    Song {
        title: title.to_owned(),
        source_path: PathBuf::from(format!("lrc_files/{}.lrc", title)),
        language,
        lines,
    }
}

fn sample_songs() -> Vec<Song> {
    vec![
        song(
            "夜に駆ける",
            Language::Japanese,
            vec![LyricRecord::Japanese {
                japanese: "沈むように".to_owned(),
                chinese: "像是要沉没一般".to_owned(),
                romaji: "shizumu you ni".to_owned(),
            }],
        ),
        song(
            "月亮代表我的心",
            Language::Chinese,
            vec![
                LyricRecord::Chinese {
                    lyric: "你问我爱你有多深".to_owned(),
                    pinyin: "ni wen wo ai ni you duo shen".to_owned(),
                },
                LyricRecord::Chinese {
                    lyric: "我爱你有几分".to_owned(),
                    pinyin: String::new(),
                },
            ],
        ),
        song(
            "Yesterday",
            Language::English,
            vec![LyricRecord::English {
                english: "Yesterday".to_owned(),
                chinese: "昨天".to_owned(),
            }],
        ),
    ]
}

#[test]
fn test_plan_pages() {
    let toc = plan_pages(&sample_songs(), 1);

    let pages: Vec<_> = toc.iter().map(|e| (e.number, e.title.as_str(), e.page)).collect();
    assert_eq!(
        pages,
        vec![(1, "夜に駆ける", 1), (2, "月亮代表我的心", 2), (3, "Yesterday", 3)]
    );

    let toc = plan_pages(&sample_songs(), 5);
    assert_eq!(toc.last().map(|e| e.page), Some(7));
}

#[test]
fn test_build_counts_and_page_refs() {
    let mut songs = sample_songs();
    songs.push(song("empty", Language::English, vec![]));

    let booklet = Booklet::build(songs, 1);

    assert_eq!(booklet.songs.len(), 3);
    assert_eq!(booklet.toc.len(), 3);
    assert_eq!(booklet.count(Language::Japanese), 1);
    assert_eq!(booklet.count(Language::Chinese), 1);
    assert_eq!(booklet.count(Language::English), 1);
    assert_eq!(booklet.toc_page_refs.get("月亮代表我的心"), Some(&2));
    assert!(!booklet.toc_page_refs.contains_key("empty"));
}

#[test]
fn test_counts_include_missing_languages() {
    let songs = sample_songs()
        .into_iter()
        .filter(|s| s.language == Language::Chinese)
        .collect();
    let booklet = Booklet::build(songs, 1);

    assert_eq!(booklet.language_counts.len(), 3);
    assert_eq!(booklet.count(Language::Japanese), 0);
    assert_eq!(booklet.count(Language::Chinese), 1);
}

#[test]
fn test_render_sections() {
    let style = BookletStyle::default();
    let booklet = Booklet::build(sample_songs(), style.first_page);
    let document = render_booklet(&booklet, &style);

    // 目录 + 3 首歌
    assert_eq!(document.sections.len(), 4);
    assert!(document.sections.iter().all(|s| s.page.columns == 2));
    // 目录标题 + 3 条目录, 各歌曲: 标题 + 歌词行 + 空行
    assert_eq!(document.paragraphs().count(), 4 + 4 + 5 + 4);

    let toc = &document.sections[0];
    assert_eq!(toc.paragraphs[0].style, Some(ParagraphStyle::Title));
    assert_eq!(toc.paragraphs[0].text(), "多语言歌词本目录");
    let entries: Vec<_> = toc.paragraphs[1..].iter().map(|p| p.text()).collect();
    assert_eq!(
        entries,
        vec![
            "1. 夜に駆ける\t第 2 页",
            "2. 月亮代表我的心\t第 3 页",
            "3. Yesterday\t第 4 页",
        ]
    );

    assert_eq!(toc.paragraphs[0].alignment, Some(Alignment::Center));
    assert!(toc.paragraphs[1..].iter().all(|p| p.alignment.is_none()));

    let japanese = &document.sections[1];
    assert_eq!(japanese.paragraphs[0].style, Some(ParagraphStyle::Heading1));
    assert_eq!(japanese.paragraphs[0].text(), "夜に駆ける");
    assert_eq!(japanese.paragraphs[1].text(), "沈むように  shizumu you ni");
    assert_eq!(japanese.paragraphs[1].runs[1].size_pt, Some(style.romaji_size_pt));
    assert_eq!(japanese.paragraphs[2].text(), "像是要沉没一般");
    assert_eq!(
        japanese.paragraphs[2].runs[0].color,
        Some(style.translation_color)
    );

    // 空拼音不输出行
    let chinese: Vec<_> = document.sections[2]
        .paragraphs
        .iter()
        .map(|p| p.text())
        .collect();
    assert_eq!(
        chinese,
        vec![
            "月亮代表我的心",
            "你问我爱你有多深",
            "ni wen wo ai ni you duo shen",
            "我爱你有几分",
            "\n",
        ]
    );

    // 各歌曲标题居中，歌词行不设对齐
    for section in &document.sections[1..] {
        assert_eq!(section.paragraphs[0].alignment, Some(Alignment::Center));
        assert!(section.paragraphs[1..].iter().all(|p| p.alignment.is_none()));
    }

    let english: Vec<_> = document.sections[3]
        .paragraphs
        .iter()
        .map(|p| p.text())
        .collect();
    assert_eq!(english, vec!["Yesterday", "Yesterday", "昨天", "\n"]);
}

#[test]
fn test_style_is_threaded_into_document() {
    let style = BookletStyle {
        font_family: "Noto Serif CJK SC".to_owned(),
        columns: 1,
        ..BookletStyle::default()
    };
    let booklet = Booklet::build(sample_songs(), style.first_page);
    let document = render_booklet(&booklet, &style);

    assert_eq!(document.styles.font_family, "Noto Serif CJK SC");
    assert!(document.sections.iter().all(|s| s.page.columns == 1));
}

#[test]
fn test_default_first_page_follows_toc_page() {
    let style = BookletStyle::default();
    assert!(style.footer_page_number);
    // 页脚 PAGE 域从目录页开始计数
    assert_eq!(style.first_page, 2);

    let booklet = Booklet::build(sample_songs(), style.first_page);
    assert_eq!(booklet.toc[0].page, 2);
    assert_eq!(booklet.toc_page_refs.get("夜に駆ける"), Some(&2));

    let document = render_booklet(&booklet, &style);
    assert!(document.sections[0].paragraphs[1].text().ends_with("第 2 页"));
}

#[test]
fn test_duplicate_titles_keep_every_page_ref() {
    let line = || {
        vec![LyricRecord::English {
            english: "Hello".to_owned(),
            chinese: String::new(),
        }]
    };
    let mut songs = vec![
        song("hello", Language::English, line()),
        song("hello", Language::English, line()),
        song("world", Language::English, line()),
    ];
    songs[1].source_path = PathBuf::from("lrc_files/hello.LRC");

    let booklet = Booklet::build(songs, 2);

    assert_eq!(booklet.toc.len(), 3);
    assert_eq!(booklet.toc_page_refs.len(), 3);
    assert_eq!(booklet.toc_page_refs.get("hello"), Some(&2));
    assert_eq!(booklet.toc_page_refs.get("hello (2)"), Some(&3));
    assert_eq!(booklet.toc_page_refs.get("world"), Some(&4));
}
