use crate::{
    booklet::{Booklet, BookletStyle},
    docx::{Alignment, Document, Paragraph, ParagraphStyle, Run, Section},
    lrc::LyricRecord,
};

// 目录一节，之后每首歌一节 (新页开始，双栏)
pub fn render_booklet(booklet: &Booklet, style: &BookletStyle) -> Document {
    let mut document = Document::new(style.style_sheet());
    let page = style.page_setup();

    let toc = document.add_section(page.clone());
    toc.push(
        Paragraph::heading(
            ParagraphStyle::Title,
            style.toc_title.as_str(),
            style.toc_title_size_pt,
        )
        .align(Alignment::Center),
    );
    for entry in &booklet.toc {
        toc.push(
            Paragraph::new()
                .space_before(1.0)
                .space_after(1.0)
                .run(
                    Run::new(format!("{}. {}", entry.number, entry.title))
                        .size(style.toc_entry_size_pt),
                )
                .run(Run::new("\t"))
                .run(Run::new(format!("第 {} 页", entry.page)).size(style.toc_entry_size_pt)),
        );
    }

    for song in booklet.songs.iter().filter(|s| !s.lines.is_empty()) {
        let section = document.add_section(page.clone());
        section.push(
            Paragraph::heading(
                ParagraphStyle::Heading1,
                song.title.as_str(),
                style.song_title_size_pt,
            )
            .align(Alignment::Center),
        );

        for record in &song.lines {
            render_record(section, record, style);
        }

        // 歌曲之间的空行
        section.push(Paragraph::new().run(Run::new("\n")));
    }

    document
}

// 第一行为原文，第二行为译文或注音 (字号较小)
fn render_record(section: &mut Section, record: &LyricRecord, style: &BookletStyle) {
    match record {
        LyricRecord::Japanese {
            japanese,
            chinese,
            romaji,
        } => {
            // 罗马音与日文同一行
            let mut primary = Paragraph::new()
                .space_after(0.0)
                .run(Run::new(japanese.as_str()).size(style.lyric_size_pt));
            if !romaji.is_empty() {
                primary = primary.run(
                    Run::new(format!("  {}", romaji))
                        .size(style.romaji_size_pt)
                        .color(style.phonetic_color),
                );
            }
            section.push(primary);

            push_secondary(
                section,
                chinese,
                Run::new(chinese.as_str())
                    .size(style.translation_size_pt)
                    .color(style.translation_color),
            );
        }
        LyricRecord::Chinese { lyric, pinyin } => {
            section.push(
                Paragraph::new()
                    .space_after(0.0)
                    .run(Run::new(lyric.as_str()).size(style.lyric_size_pt)),
            );

            push_secondary(
                section,
                pinyin,
                Run::new(pinyin.as_str())
                    .size(style.pinyin_size_pt)
                    .color(style.phonetic_color),
            );
        }
        LyricRecord::English { english, chinese } => {
            section.push(
                Paragraph::new()
                    .space_after(0.0)
                    .run(Run::new(english.as_str()).size(style.lyric_size_pt)),
            );

            push_secondary(
                section,
                chinese,
                Run::new(chinese.as_str())
                    .size(style.translation_size_pt)
                    .color(style.translation_color),
            );
        }
    }
}

fn push_secondary(section: &mut Section, text: &str, run: Run) {
    if text.is_empty() {
        return;
    }
    section.push(Paragraph::new().space_after(3.0).run(run));
}
