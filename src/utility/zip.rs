use std::io::{self, Write};

use anyhow::{Context, Result};
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

pub struct ZipPackageWriter<W: Write + io::Seek> {
    archive: ZipWriter<W>,
}

impl<W: Write + io::Seek> ZipPackageWriter<W> {
    pub fn new(writer: W) -> ZipPackageWriter<W> {
        ZipPackageWriter {
            archive: ZipWriter::new(writer),
        }
    }

    pub fn add_entry(&mut self, path: &str, data: &[u8]) -> Result<()> {
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        self.archive
            .start_file(path, options)
            .with_context(|| format!("Failed to start {}", path))?;
        self.archive
            .write_all(data)
            .with_context(|| format!("Failed to write {}", path))?;

        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.archive.finish().context("Failed to finish archive")
    }
}
