use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::{
    docx::{
        model::Document,
        xml::{document_xml, footer_xml, styles_xml, FOOTER_RELATIONSHIP_ID},
    },
    utility::zip::ZipPackageWriter,
};

static CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/settings.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml"/><Override PartName="/word/footer1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml"/></Types>"#;

static PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

static SETTINGS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:defaultTabStop w:val="420"/><w:characterSpacingControl w:val="compressPunctuation"/></w:settings>"#;

fn document_rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rIdStyles" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rIdSettings" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings" Target="settings.xml"/><Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer" Target="footer1.xml"/></Relationships>"#,
        FOOTER_RELATIONSHIP_ID
    )
}

// 包内各部件 (路径, 内容)
pub fn package_parts(document: &Document) -> Result<Vec<(&'static str, Vec<u8>)>> {
    Ok(vec![
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes().to_vec()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes().to_vec()),
        (
            "word/_rels/document.xml.rels",
            document_rels_xml().into_bytes(),
        ),
        (
            "word/document.xml",
            document_xml(document).context("Failed to build document.xml")?,
        ),
        (
            "word/styles.xml",
            styles_xml(&document.styles).context("Failed to build styles.xml")?,
        ),
        ("word/settings.xml", SETTINGS_XML.as_bytes().to_vec()),
        (
            "word/footer1.xml",
            footer_xml(&document.styles).context("Failed to build footer1.xml")?,
        ),
    ])
}

// 先写入同一目录下的临时文件再改名，写入失败时不会留下不完整的文件
pub fn write_docx(document: &Document, path: &Path) -> Result<()> {
    let parts = package_parts(document)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create directory {}", directory.display()))?;

    let temp = NamedTempFile::new_in(directory)
        .with_context(|| format!("Failed to create temporary file in {}", directory.display()))?;

    {
        let mut package = ZipPackageWriter::new(temp.as_file());
        for (name, data) in &parts {
            package.add_entry(name, data)?;
        }
        let mut file = package.finish()?;
        file.flush().context("Failed to flush package")?;
    }
    temp.as_file()
        .sync_all()
        .context("Failed to sync package")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move package to {}", path.display()))?;

    Ok(())
}
