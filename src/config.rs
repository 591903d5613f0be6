use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};

use crate::booklet::BookletStyle;

pub static DEFAULT_INPUT_DIR: &str = "lrc_files";
pub static DEFAULT_OUTPUT_PATH: &str = "output/多语言歌词本.docx";

// 放在歌词目录中，覆盖部分版式设定
pub static STYLE_FILE_NAME: &str = "booklet.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub style: BookletStyle,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH)
    }
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            style: BookletStyle::default(),
            show_progress: false,
        }
    }

    // 没有参数时使用固定的输入输出路径
    // None: 只显示了帮助
    pub fn from_args(args: &[String]) -> Result<Option<Config>> {
        let mut opts = getopts::Options::new();
        opts.optflag("h", "help", "print this help");

        let matches = match opts.parse(args) {
            Ok(m) => m,
            Err(f) => bail!(f),
        };

        if matches.opt_present("h") {
            let brief = format!(
                "Usage: lrc-booklet [INPUT_DIR] [OUTPUT_PATH]\n\n\
                 INPUT_DIR defaults to '{}', OUTPUT_PATH to '{}'.",
                DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH
            );
            print!("{}", opts.usage(&brief));
            return Ok(None);
        }

        if 2 < matches.free.len() {
            bail!("Too many arguments: {:?}", &matches.free[2..]);
        }

        let input_dir = matches
            .free
            .get(0)
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_INPUT_DIR);
        let output_path = matches
            .free
            .get(1)
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_OUTPUT_PATH);

        Ok(Some(Config::new(input_dir, output_path)))
    }

    pub fn style_path(&self) -> PathBuf {
        self.input_dir.join(STYLE_FILE_NAME)
    }

    // 未设定的字段使用默认值
    pub fn load_style(&mut self) -> Result<()> {
        let path = self.style_path();
        if !path.exists() {
            return Ok(());
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.style = serde_json::from_str(&json)
            .with_context(|| format!("Invalid style file: {}", path.display()))?;

        Ok(())
    }
}
