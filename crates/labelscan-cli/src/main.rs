use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use labelscan_core::{scan_and_write, OutputFormat, ScanOptions, DEFAULT_MODEL_PATH};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）；不带任何参数即扫描默认模型文件
#[derive(Parser, Debug)]
#[command(name = "labelscan", version, about = "Dump keyword-bearing ASCII labels embedded in a model file")]
struct Cli {
    /// 模型文件路径
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// 规则文件路径（TOML），覆盖关键字与长度边界；缺省使用内置固定规则
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 输出格式：text 或 json
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    info!(model = ?cli.model, rules = ?cli.rules, "starting scan");

    let opts = ScanOptions { model_path: cli.model, rules_path: cli.rules, format: cli.format.into() };

    // stdout 只承载扫描结果，日志走 stderr
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan_and_write(&mut out, &opts)
        .with_context(|| format!("scan of {} failed", opts.model_path.display()))?;
    out.flush().context("flush stdout")?;

    info!(
        bytes_scanned = stats.bytes_scanned,
        candidates_total = stats.candidates_total,
        outputs_written = stats.outputs_written,
        "scan finished"
    );

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
