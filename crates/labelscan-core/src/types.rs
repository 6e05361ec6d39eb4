//! 公共类型（对外暴露）
use serde::Serialize;

/// 输出项结构（JSON 输出中 `matches` 数组的单个元素）
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputItem<'a> {
    pub offset: usize,
    pub text: &'a str,
}

/// JSON 输出的顶层结构
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport<'a> {
    pub model_size: usize,
    pub matches: Vec<OutputItem<'a>>,
}
