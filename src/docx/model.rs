use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
}

impl Alignment {
    pub(super) fn as_ooxml(self) -> &'static str {
        match self {
            Alignment::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Title,
    Heading1,
}

impl ParagraphStyle {
    pub(super) fn style_id(self) -> &'static str {
        match self {
            ParagraphStyle::Title => "Title",
            ParagraphStyle::Heading1 => "Heading1",
        }
    }
}

// 文本中的 '\t' 写为制表符，'\n' 写为换行
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub size_pt: Option<f32>,
    pub color: Option<Rgb>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size_pt: None,
            color: None,
        }
    }

    pub fn size(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub alignment: Option<Alignment>,
    pub space_before_pt: Option<f32>,
    pub space_after_pt: Option<f32>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(style: ParagraphStyle, text: impl Into<String>, size_pt: f32) -> Self {
        Self {
            style: Some(style),
            runs: vec![Run::new(text).size(size_pt)],
            ..Self::default()
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_before(mut self, pt: f32) -> Self {
        self.space_before_pt = Some(pt);
        self
    }

    pub fn space_after(mut self, pt: f32) -> Self {
        self.space_after_pt = Some(pt);
        self
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    pub margin_bottom_mm: f32,
    pub margin_left_mm: f32,
    pub columns: u32,
    // 栏间距 (单位: 1/20 pt)
    pub column_gap_twips: u32,
}

// 每节从新的一页开始
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub page: PageSetup,
    pub paragraphs: Vec<Paragraph>,
}

impl Section {
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            paragraphs: Vec::new(),
        }
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub font_family: String,
    pub normal_size_pt: f32,
    pub title_size_pt: f32,
    pub heading_size_pt: f32,
    // 页脚页码 (PAGE 域)
    pub footer_page_number: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub styles: StyleSheet,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(styles: StyleSheet) -> Self {
        Self {
            styles,
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, page: PageSetup) -> &mut Section {
        self.sections.push(Section::new(page));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.sections.iter().flat_map(|s| s.paragraphs.iter())
    }
}

pub(super) fn mm_to_twips(mm: f32) -> u32 {
    (mm * 1440.0 / 25.4).round() as u32
}

pub(super) fn pt_to_twips(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

pub(super) fn pt_to_half_points(pt: f32) -> u32 {
    (pt * 2.0).round() as u32
}
