//! 扫描选项与统计信息（模块）
use std::path::PathBuf;

use crate::rules::DEFAULT_MODEL_PATH;

/// 输出格式
/// - Text：首行 `model size: N bytes`，随后每行 `<offset>: <text>`
/// - Json：单个 JSON 对象，包含文件大小与命中列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 待扫描的模型文件路径（相对于当前工作目录）
    pub model_path: PathBuf,
    /// 规则文件路径（TOML）；为空则使用内置的固定关键字与长度边界
    pub rules_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            rules_path: None,
            format: OutputFormat::Text,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub bytes_scanned: usize,
    /// 正则命中的片段总数（去重、关键字过滤之前）
    pub candidates_total: usize,
    pub outputs_written: usize,
}
