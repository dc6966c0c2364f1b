//! rsextract 命令行入口
//! 功能说明：
//! 1. 读取指定文本文件并执行结构化数据提取
//! 2. 未指定文件时使用内置演示文本
//! 3. 支持自定义模式库JSON与结构化JSON结果输出
//!
//! 运行命令：
//! cargo run --features cli -- [FILE] [--patterns patterns.json] [--json]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env, Target};

use rsextract::{read_text_file, DataExtractor, PatternLoader, RsxResult};

/// 内置演示文本（未指定输入文件时使用）
const SAMPLE_TEXT: &str = "\
Email: user@example.com
Another Email: firstname.lastname@company.co.uk

Website: https://www.example.com
Subdomain URL: https://subdomain.example.org/page

Phone1: (123) 456-7890
Phone2: 123-456-7890
Phone3: 123.456.7890

Price: $19.99 and $1,234.56

Card1: 1234 5678 9012 3456
Card2: 1234-5678-9012-3456

Time1: 14:30
Time2: 2:30 PM

HTML: <p>This is a paragraph</p>
More HTML: <div class=\"example\">Example</div>
Image: <img src=\"image.jpg\" alt=\"description\">
";

#[derive(Parser, Debug)]
#[command(
    name = "rsextract",
    version,
    about = "Extract structured data (emails, URLs, phones, ...) from unstructured text"
)]
struct Cli {
    /// 待提取的文本文件路径（缺省使用内置演示文本）
    file: Option<PathBuf>,

    /// 自定义模式库JSON文件路径（缺省使用内置标准模式库）
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// 以结构化JSON输出提取结果
    #[arg(long)]
    json: bool,
}

/// 执行流程：
/// 1. 构建提取器（自定义模式库 / 内置标准库）
/// 2. 加载输入文本（文件 / 演示文本）
/// 3. 执行提取并输出结果（格式化报告 / JSON）
fn run(cli: &Cli) -> RsxResult<()> {
    // ========== 1. 构建提取器 ==========
    let extractor = match &cli.patterns {
        Some(path) => DataExtractor::new(&PatternLoader::from_json_file(path)?)?,
        None => DataExtractor::with_builtin(),
    };

    // ========== 2. 加载输入文本 ==========
    let text = match &cli.file {
        Some(path) => read_text_file(path)?,
        None => {
            println!("No file provided. Using sample data for demonstration.");
            SAMPLE_TEXT.to_string()
        }
    };

    // ========== 3. 执行提取 ==========
    let extraction = extractor.extract(&text);

    // ========== 4. 输出结果 ==========
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&extraction)?);
    } else {
        println!("{}", extraction);
        if cli.file.is_none() {
            println!("To process a file, run: rsextract <FILE>");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // 日志系统初始化（RUST_LOG控制级别）
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stdout)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
