use std::{env, fs, process::ExitCode};

use anyhow::{Context, Result};
use log::{error, LevelFilter};

use lrc_booklet::{
    app::{run, RunSummary},
    config::Config,
    error::BookletError,
    language::Language,
};

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<BookletError>() {
                Some(BookletError::NoInputFiles { dir }) => {
                    println!("\n警告: 未找到任何.lrc歌词文件！");
                    println!("请将歌词文件放入 '{}' 文件夹中", dir.display());
                }
                Some(BookletError::NoSongsParsed { .. }) => {
                    println!("错误: 没有找到可处理的歌词文件！");
                }
                _ => {}
            }
            error!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(mut config) = Config::from_args(&args)? else {
        return Ok(());
    };
    config.show_progress = true;

    println!("{}", "=".repeat(50));
    println!("多语言歌词本生成器 - 支持中日英三种语言");
    println!("{}", "=".repeat(50));
    println!("正在检测歌词文件...");

    // 第一次运行时创建歌词目录
    fs::create_dir_all(&config.input_dir)
        .with_context(|| format!("Failed to create directory {}", config.input_dir.display()))?;
    config.load_style()?;

    let summary = run(&config)?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let count = |language: Language| {
        summary
            .language_counts
            .get(&language)
            .copied()
            .unwrap_or(0)
    };

    println!("\n{}", "=".repeat(50));
    println!(
        "找到 {} 个歌词文件，跳过 {} 个",
        summary.found_files, summary.skipped_files
    );
    println!("成功生成歌词本: {}", summary.output_path.display());
    if let Some(index_path) = &summary.index_path {
        println!("目录索引: {}", index_path.display());
    }
    println!(
        "包含歌曲: {} {} 首, {} {} 首, {} {} 首",
        Language::Japanese.display_name(),
        count(Language::Japanese),
        Language::Chinese.display_name(),
        count(Language::Chinese),
        Language::English.display_name(),
        count(Language::English),
    );
    println!("{}", "=".repeat(50));
    println!("\n打印提示：");
    println!("1. 纸张大小: A5");
    println!("2. 每张纸打印页数: 2 (双面打印时更省纸)");
    println!("3. 缩放比例: 100%");
    println!("\n操作完成！");
}
