use std::io::Cursor;

use anyhow::Result;
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::docx::model::{
    mm_to_twips, pt_to_half_points, pt_to_twips, Document, PageSetup, Paragraph, Run, StyleSheet,
};

pub(super) const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(super) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(super) const FOOTER_RELATIONSHIP_ID: &str = "rIdFooter1";

struct XmlBuilder {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlBuilder {
    fn new() -> Result<Self> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn value(&mut self, name: &str, value: &str) -> Result<()> {
        self.empty(name, &[("w:val", value)])
    }

    // 保留首尾空格 (罗马音前的两个空格)
    fn text(&mut self, text: &str) -> Result<()> {
        self.start("w:t", &[("xml:space", "preserve")])?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end("w:t")
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }
}

pub(super) fn document_xml(document: &Document) -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.start("w:document", &[("xmlns:w", NS_W), ("xmlns:r", NS_R)])?;
    xml.start("w:body", &[])?;

    let footer = document.styles.footer_page_number;
    let section_count = document.sections.len();

    for (i, section) in document.sections.iter().enumerate() {
        for paragraph in &section.paragraphs {
            write_paragraph(&mut xml, paragraph)?;
        }

        // 最后一节以外的节属性写在该节末尾的段落里
        if i + 1 < section_count {
            xml.start("w:p", &[])?;
            xml.start("w:pPr", &[])?;
            write_section_properties(&mut xml, &section.page, footer)?;
            xml.end("w:pPr")?;
            xml.end("w:p")?;
        }
    }

    match document.sections.last() {
        Some(section) => write_section_properties(&mut xml, &section.page, footer)?,
        None => xml.empty("w:p", &[])?,
    }

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.finish())
}

fn write_paragraph(xml: &mut XmlBuilder, paragraph: &Paragraph) -> Result<()> {
    xml.start("w:p", &[])?;

    xml.start("w:pPr", &[])?;
    if let Some(style) = paragraph.style {
        xml.value("w:pStyle", style.style_id())?;
    }
    if paragraph.space_before_pt.is_some() || paragraph.space_after_pt.is_some() {
        let before = paragraph.space_before_pt.map(|pt| pt_to_twips(pt).to_string());
        let after = paragraph.space_after_pt.map(|pt| pt_to_twips(pt).to_string());
        let mut attributes = Vec::new();
        if let Some(before) = &before {
            attributes.push(("w:before", before.as_str()));
        }
        if let Some(after) = &after {
            attributes.push(("w:after", after.as_str()));
        }
        xml.empty("w:spacing", &attributes)?;
    }
    if let Some(alignment) = paragraph.alignment {
        xml.value("w:jc", alignment.as_ooxml())?;
    }
    xml.end("w:pPr")?;

    for run in &paragraph.runs {
        write_run(xml, run)?;
    }

    xml.end("w:p")
}

fn write_run(xml: &mut XmlBuilder, run: &Run) -> Result<()> {
    xml.start("w:r", &[])?;

    if run.size_pt.is_some() || run.color.is_some() {
        xml.start("w:rPr", &[])?;
        if let Some(color) = run.color {
            xml.value("w:color", &color.to_hex())?;
        }
        if let Some(size) = run.size_pt {
            let half_points = pt_to_half_points(size).to_string();
            xml.value("w:sz", &half_points)?;
            xml.value("w:szCs", &half_points)?;
        }
        xml.end("w:rPr")?;
    }

    let mut buffer = String::new();
    for c in run.text.chars() {
        match c {
            '\t' | '\n' => {
                if !buffer.is_empty() {
                    xml.text(&buffer)?;
                    buffer.clear();
                }
                xml.empty(if c == '\t' { "w:tab" } else { "w:br" }, &[])?;
            }
            c => buffer.push(c),
        }
    }
    if !buffer.is_empty() {
        xml.text(&buffer)?;
    }

    xml.end("w:r")
}

fn write_section_properties(xml: &mut XmlBuilder, page: &PageSetup, footer: bool) -> Result<()> {
    xml.start("w:sectPr", &[])?;

    if footer {
        xml.empty(
            "w:footerReference",
            &[("w:type", "default"), ("r:id", FOOTER_RELATIONSHIP_ID)],
        )?;
    }
    xml.value("w:type", "nextPage")?;
    xml.empty(
        "w:pgSz",
        &[
            ("w:w", &mm_to_twips(page.width_mm).to_string()),
            ("w:h", &mm_to_twips(page.height_mm).to_string()),
        ],
    )?;

    let top = mm_to_twips(page.margin_top_mm).to_string();
    let bottom = mm_to_twips(page.margin_bottom_mm).to_string();
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", &top),
            ("w:right", &mm_to_twips(page.margin_right_mm).to_string()),
            ("w:bottom", &bottom),
            ("w:left", &mm_to_twips(page.margin_left_mm).to_string()),
            ("w:header", &top),
            ("w:footer", &bottom),
            ("w:gutter", "0"),
        ],
    )?;
    xml.empty(
        "w:cols",
        &[
            ("w:num", &page.columns.to_string()),
            ("w:space", &page.column_gap_twips.to_string()),
            ("w:equalWidth", "1"),
        ],
    )?;

    xml.end("w:sectPr")
}

fn write_fonts(xml: &mut XmlBuilder, font_family: &str) -> Result<()> {
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", font_family),
            ("w:hAnsi", font_family),
            ("w:eastAsia", font_family),
            ("w:cs", font_family),
        ],
    )
}

// 字体由样式表统一指定，各段落不再单独设置
pub(super) fn styles_xml(styles: &StyleSheet) -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.start("w:styles", &[("xmlns:w", NS_W)])?;

    let normal_size = pt_to_half_points(styles.normal_size_pt).to_string();
    xml.start("w:docDefaults", &[])?;
    xml.start("w:rPrDefault", &[])?;
    xml.start("w:rPr", &[])?;
    write_fonts(&mut xml, &styles.font_family)?;
    xml.value("w:sz", &normal_size)?;
    xml.value("w:szCs", &normal_size)?;
    xml.end("w:rPr")?;
    xml.end("w:rPrDefault")?;
    xml.empty("w:pPrDefault", &[])?;
    xml.end("w:docDefaults")?;

    xml.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    xml.value("w:name", "Normal")?;
    xml.empty("w:qFormat", &[])?;
    xml.end("w:style")?;

    for (style_id, name, size_pt) in [
        ("Title", "Title", styles.title_size_pt),
        ("Heading1", "heading 1", styles.heading_size_pt),
    ] {
        let size = pt_to_half_points(size_pt).to_string();

        xml.start("w:style", &[("w:type", "paragraph"), ("w:styleId", style_id)])?;
        xml.value("w:name", name)?;
        xml.value("w:basedOn", "Normal")?;
        xml.value("w:next", "Normal")?;
        xml.empty("w:qFormat", &[])?;
        xml.start("w:pPr", &[])?;
        xml.empty("w:keepNext", &[])?;
        xml.empty("w:spacing", &[("w:before", "60"), ("w:after", "60")])?;
        xml.value("w:jc", "center")?;
        if style_id == "Heading1" {
            xml.value("w:outlineLvl", "0")?;
        }
        xml.end("w:pPr")?;
        xml.start("w:rPr", &[])?;
        write_fonts(&mut xml, &styles.font_family)?;
        xml.empty("w:b", &[])?;
        xml.value("w:sz", &size)?;
        xml.value("w:szCs", &size)?;
        xml.end("w:rPr")?;
        xml.end("w:style")?;
    }

    xml.end("w:styles")?;
    Ok(xml.finish())
}

enum FieldPart {
    Char(&'static str),
    Instruction(&'static str),
    Text(&'static str),
}

// 页脚居中的 PAGE 域，页码由文字处理软件计算
pub(super) fn footer_xml(styles: &StyleSheet) -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.start("w:ftr", &[("xmlns:w", NS_W), ("xmlns:r", NS_R)])?;
    xml.start("w:p", &[])?;
    xml.start("w:pPr", &[])?;
    xml.value("w:jc", "center")?;
    xml.end("w:pPr")?;

    let size = pt_to_half_points(styles.normal_size_pt * 0.75).to_string();
    for part in [
        FieldPart::Char("begin"),
        FieldPart::Instruction(" PAGE "),
        FieldPart::Char("separate"),
        FieldPart::Text("1"),
        FieldPart::Char("end"),
    ] {
        xml.start("w:r", &[])?;
        xml.start("w:rPr", &[])?;
        xml.value("w:sz", &size)?;
        xml.end("w:rPr")?;
        match part {
            FieldPart::Char(kind) => xml.empty("w:fldChar", &[("w:fldCharType", kind)])?,
            FieldPart::Instruction(instruction) => {
                xml.start("w:instrText", &[("xml:space", "preserve")])?;
                xml.writer.write_event(Event::Text(BytesText::new(instruction)))?;
                xml.end("w:instrText")?;
            }
            FieldPart::Text(text) => xml.text(text)?,
        }
        xml.end("w:r")?;
    }

    xml.end("w:p")?;
    xml.end("w:ftr")?;
    Ok(xml.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::model::{Alignment, Paragraph, Rgb, Run};

    fn paragraph_xml(paragraph: &Paragraph) -> String {
        let mut xml = XmlBuilder {
            writer: Writer::new(Cursor::new(Vec::new())),
        };
        write_paragraph(&mut xml, paragraph).unwrap();
        String::from_utf8(xml.finish()).unwrap()
    }

    #[test]
    fn test_run_tab_and_escape() {
        let paragraph = Paragraph::new().run(Run::new("1. Tom & Jerry <live>\t第 1 页").size(8.0));
        let xml = paragraph_xml(&paragraph);

        assert!(xml.contains("Tom &amp; Jerry &lt;live&gt;"));
        assert!(xml.contains("<w:tab/>"));
        assert!(xml.contains(r#"<w:sz w:val="16"/>"#));
        assert!(xml.contains("第 1 页"));
    }

    #[test]
    fn test_paragraph_properties() {
        let paragraph = Paragraph::new()
            .align(Alignment::Center)
            .space_after(3.0)
            .run(Run::new("  romaji").size(6.5).color(Rgb(100, 100, 100)));
        let xml = paragraph_xml(&paragraph);

        assert!(xml.contains(r#"<w:spacing w:after="60"/>"#));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(r#"<w:color w:val="646464"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="13"/>"#));
        assert!(xml.contains(r#"<w:t xml:space="preserve">  romaji</w:t>"#));
    }
}
