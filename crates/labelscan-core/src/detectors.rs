//! 标签片段检测器（Bytes）
use regex::bytes::Regex;

use crate::error::ScanError;
use crate::rules::RuleSpec;

/// 字节级检测器：匹配“字母开头，后接字母/空格/连字符”的 ASCII 片段
pub(crate) struct LabelDetector {
    pub(crate) pattern: Regex,
}

impl LabelDetector {
    /// 由长度边界构建；默认边界得到 `[A-Za-z][A-Za-z \-]{2,30}`
    pub(crate) fn from_spec(spec: &RuleSpec) -> Result<Self, ScanError> {
        spec.validate()?;
        let pat = label_pattern(spec.min_len, spec.max_len);
        let pattern = Regex::new(&pat).map_err(|e| ScanError::InvalidRules { reason: e.to_string() })?;
        Ok(Self { pattern })
    }
}

fn label_pattern(min_len: usize, max_len: usize) -> String {
    // (?-u)：按字节匹配，字符类只覆盖 ASCII
    format!(r"(?-u)[A-Za-z][A-Za-z \-]{{{},{}}}", min_len - 1, max_len - 1)
}
