//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// 模型文件不存在、无权限或读取失败
    #[error("cannot read model file {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 规则文件无法读取或内容非法
    #[error("invalid rules file {path}: {reason}")]
    Rules { path: PathBuf, reason: String },

    /// 规则本身非法（长度边界、关键字），与来源无关
    #[error("invalid scan rules: {reason}")]
    InvalidRules { reason: String },

    /// 写出结果失败（例如 stdout 被关闭）
    #[error("failed to write scan output")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize scan report")]
    Serialize(#[from] serde_json::Error),
}
