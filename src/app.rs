use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use log::{info, warn};
use tempfile::NamedTempFile;

use crate::{
    booklet::{render_booklet, Booklet, TocEntry},
    config::Config,
    docx::write_docx,
    error::BookletError,
    language::Language,
    song::Song,
};

#[derive(Debug)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub index_path: Option<PathBuf>,
    pub found_files: usize,
    pub skipped_files: usize,
    pub language_counts: BTreeMap<Language, usize>,
    pub toc: Vec<TocEntry>,
}

// 按文件名排序，保证每次运行顺序相同
pub fn find_lrc_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?
            .path();

        let is_lrc = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("lrc"))
            .unwrap_or(false);
        if is_lrc && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

// 单个文件的错误只记录并跳过
pub fn load_songs(files: &[PathBuf], pb: &ProgressBar) -> (Vec<Song>, Vec<BookletError>) {
    let mut songs = Vec::new();
    let mut skipped = Vec::new();

    for path in files.iter().progress_with(pb.clone()) {
        match Song::load(path) {
            Ok(song) => {
                pb.println(format!(
                    "处理: {} ({}) - {}行歌词",
                    song.title,
                    song.language,
                    song.lines.len()
                ));
                songs.push(song);
            }
            Err(e) => {
                warn!("Skipped {}: {}", path.display(), e);
                skipped.push(e);
            }
        }
    }

    pb.finish_and_clear();
    (songs, skipped)
}

// 目录和各语言数量的索引: <stem>.index.json
// 扩展名中带点，不会与输出文档同名
pub fn index_path(output_path: &Path) -> PathBuf {
    output_path.with_extension("index.json")
}

fn write_index(booklet: &Booklet, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(booklet)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(directory)
        .with_context(|| format!("Failed to create temporary file in {}", directory.display()))?;
    temp.write_all(json.as_bytes()).context("Failed to write index")?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move index to {}", path.display()))?;

    Ok(())
}

pub fn run(config: &Config) -> Result<RunSummary> {
    let files = find_lrc_files(&config.input_dir)?;
    if files.is_empty() {
        return Err(BookletError::NoInputFiles {
            dir: config.input_dir.clone(),
        }
        .into());
    }
    info!("Found {} lrc files in {}", files.len(), config.input_dir.display());

    let pb = if config.show_progress {
        create_progress_bar(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let (songs, skipped) = load_songs(&files, &pb);

    if songs.is_empty() {
        return Err(BookletError::NoSongsParsed {
            dir: config.input_dir.clone(),
        }
        .into());
    }

    let booklet = Booklet::build(songs, config.style.first_page);
    let document = render_booklet(&booklet, &config.style);

    write_docx(&document, &config.output_path).map_err(|e| BookletError::DocumentWrite {
        path: config.output_path.clone(),
        detail: format!("{:#}", e),
    })?;
    info!("Wrote {}", config.output_path.display());

    // 文档已经写好，索引写入失败只警告
    let index_path = index_path(&config.output_path);
    let index_path = match write_index(&booklet, &index_path) {
        Ok(()) => Some(index_path),
        Err(e) => {
            warn!("Failed to write index {}: {:#}", index_path.display(), e);
            None
        }
    };

    Ok(RunSummary {
        output_path: config.output_path.clone(),
        index_path,
        found_files: files.len(),
        skipped_files: skipped.len(),
        language_counts: booklet.language_counts,
        toc: booklet.toc,
    })
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
    ) {
        pb.set_style(style.progress_chars("#-"));
    }
    pb
}
