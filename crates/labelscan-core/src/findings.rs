//! 命中项与文本渲染
use crate::types::OutputItem;

/// 单次命中：匹配片段在源缓冲区中的起始偏移与裁剪后的文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub start_offset: usize,
    pub value: String,
}

impl Finding {
    /// 渲染为文本输出行（不含换行）；偏移右对齐到 8 个字符宽
    pub fn render_line(&self) -> String {
        format!("{:>8}: {}", self.start_offset, self.value)
    }

    pub(crate) fn as_item(&self) -> OutputItem<'_> {
        OutputItem { offset: self.start_offset, text: &self.value }
    }
}

/// 文本输出的首行
pub(crate) fn render_size_line(size: usize) -> String {
    format!("model size: {size} bytes")
}
