//! Cardify - 把粘贴的文本切分为阅读练习卡片
//!
//! 从文件或标准输入读取文本，卡片输出到标准输出，日志输出到标准错误

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio::io::AsyncReadExt;

use cardify::application::{PreviewCards, PreviewCardsHandler, SegmentedText};
use cardify::config::{load_config, load_config_from_path, print_config, validate_config};
use cardify::infrastructure::RuleBasedTextSegmenter;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 每行一张卡片
    Lines,
    /// JSON 数组
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "cardify", version, about = "Split pasted text into bounded-length reading cards")]
struct Cli {
    /// 输入文件（省略时读取标准输入）
    input: Option<PathBuf>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 覆盖 segmentation.min_chars
    #[arg(long)]
    min: Option<usize>,

    /// 覆盖 segmentation.target_chars
    #[arg(long)]
    target: Option<usize>,

    /// 覆盖 segmentation.max_chars
    #[arg(long)]
    max: Option<usize>,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config_from_path(Some(path)),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    if let Some(min) = cli.min {
        config.segmentation.min_chars = min;
    }
    if let Some(target) = cli.target {
        config.segmentation.target_chars = target;
    }
    if let Some(max) = cli.max {
        config.segmentation.max_chars = max;
    }
    validate_config(&config).map_err(|e| anyhow::anyhow!("Invalid options: {}", e))?;

    // 初始化日志（输出到 stderr）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.filter_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    print_config(&config);

    let text = match &cli.input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let handler = PreviewCardsHandler::new(Arc::new(RuleBasedTextSegmenter::new()), config.segmentation);
    let cards = handler.handle(PreviewCards { text }).await?;

    print_cards(&cards, cli.format)?;

    Ok(())
}

fn print_cards(cards: &[SegmentedText], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Lines => {
            for card in cards {
                // 卡片内的换行折叠为空格，保证一行一张
                println!("{}", card.content.split_whitespace().collect::<Vec<_>>().join(" "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(cards)?);
        }
    }
    Ok(())
}
