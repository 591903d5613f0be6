use std::{io, path::PathBuf};

use thiserror::Error;

use crate::language::Language;

// 单个文件的错误只跳过该文件，目录级和保存时的错误中止整个处理
#[derive(Debug, Error)]
pub enum BookletError {
    #[error("failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine the language of '{title}'")]
    LanguageUndetected { title: String },

    #[error("no lyric lines found in '{title}' ({language})")]
    EmptyParseResult { title: String, language: Language },

    #[error("no input: no .lrc files found in {}", dir.display())]
    NoInputFiles { dir: PathBuf },

    #[error("no input: none of the .lrc files in {} could be parsed", dir.display())]
    NoSongsParsed { dir: PathBuf },

    #[error("failed to write {}: {detail}", path.display())]
    DocumentWrite { path: PathBuf, detail: String },
}
