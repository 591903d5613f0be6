use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    error::BookletError,
    language::{detect, Language},
    lrc::{parse_lrc, LyricRecord},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub source_path: PathBuf,
    pub language: Language,
    pub lines: Vec<LyricRecord>,
}

impl Song {
    pub fn load(path: &Path) -> Result<Song, BookletError> {
        let title = song_title(path);
        let content = read_lrc_file(path)?;

        let language = detect(&content).ok_or_else(|| BookletError::LanguageUndetected {
            title: title.clone(),
        })?;

        let lines = parse_lrc(language, &content);
        if lines.is_empty() {
            return Err(BookletError::EmptyParseResult { title, language });
        }

        Ok(Song {
            title,
            source_path: path.to_owned(),
            language,
            lines,
        })
    }
}

// 文件名 (不含扩展名) 即歌名
pub fn song_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// UTF-8 为主，带 BOM 的 UTF-16 也能读取
// 含有无效字节序列的文件视为无法读取
pub fn read_lrc_file(path: &Path) -> Result<String, BookletError> {
    let read_error = |source: io::Error| BookletError::FileRead {
        path: path.to_owned(),
        source,
    };

    let bytes = fs::read(path).map_err(read_error)?;

    let (encoding, bom_length) =
        encoding_rs::Encoding::for_bom(&bytes).unwrap_or((encoding_rs::UTF_8, 0));
    let content = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_length..])
        .ok_or_else(|| {
            read_error(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("not valid {}", encoding.name()),
            ))
        })?;

    Ok(content.into_owned())
}
