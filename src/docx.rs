// 最小限的 WordprocessingML (.docx) 文档
//
// 只描述内容和样式意图 (字体、字号、颜色、对齐、分栏)
// 换行、分页、字体嵌入等排版都交给打开文档的文字处理软件

pub mod model;
mod package;
mod xml;

pub use model::{
    Alignment, Document, PageSetup, Paragraph, ParagraphStyle, Rgb, Run, Section, StyleSheet,
};
pub use package::write_docx;
