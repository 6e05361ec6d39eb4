//! 固定规则与可选的规则文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::error::ScanError;

/// 默认扫描的模型文件（相对于当前工作目录）
pub const DEFAULT_MODEL_PATH: &str = "assets/models/food_classifier.tflite";

/// 关键字片段（区分大小写的子串包含）；按模型字符串表经验调出，视为字面常量
pub const DEFAULT_KEYWORDS: &[&str] = &["Burger", "Pizza", "Donut", "Chicken", "club", "sand", "food"];

/// 命中片段的长度下界/上界（字节，含首字母）
pub const MIN_LABEL_LEN: usize = 3;
pub const MAX_LABEL_LEN: usize = 31;

/// 规则文件结构，所有字段可缺省
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    #[serde(default)]
    keywords: Option<Vec<String>>,
    #[serde(default)]
    min_len: Option<usize>,
    #[serde(default)]
    max_len: Option<usize>,
}

/// 归一化后的规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub keywords: Vec<String>,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for RuleSpec {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            min_len: MIN_LABEL_LEN,
            max_len: MAX_LABEL_LEN,
        }
    }
}

impl RuleSpec {
    /// 未提供规则文件时使用固定规则，否则加载并以固定值补齐缺省字段
    pub fn resolve(path: Option<&Path>) -> Result<Self, ScanError> {
        match path {
            Some(p) => load_rule_spec(p),
            None => Ok(Self::default()),
        }
    }

    /// 校验长度边界与关键字；代码中直接构造的规则同样经过此处
    pub fn validate(&self) -> Result<(), ScanError> {
        let invalid = |reason: String| -> Result<(), ScanError> { Err(ScanError::InvalidRules { reason }) };
        if self.min_len == 0 {
            return invalid("min_len must be at least 1".into());
        }
        if self.max_len < self.min_len {
            return invalid(format!("max_len ({}) is smaller than min_len ({})", self.max_len, self.min_len));
        }
        if self.keywords.iter().any(|k| k.is_empty()) {
            return invalid("keywords must not contain empty strings".into());
        }
        Ok(())
    }
}

/// 从 TOML 规则文件加载并归一化为 RuleSpec
pub(crate) fn load_rule_spec(path: &Path) -> Result<RuleSpec, ScanError> {
    let invalid = |reason: String| ScanError::Rules { path: path.to_path_buf(), reason };

    let txt = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let parsed: RuleFile = toml::from_str(&txt).map_err(|e| invalid(e.to_string()))?;

    let defaults = RuleSpec::default();
    let spec = RuleSpec {
        keywords: parsed.keywords.unwrap_or(defaults.keywords),
        min_len: parsed.min_len.unwrap_or(defaults.min_len),
        max_len: parsed.max_len.unwrap_or(defaults.max_len),
    };

    // 规则来自文件时，错误信息带上文件路径
    match spec.validate() {
        Ok(()) => Ok(spec),
        Err(ScanError::InvalidRules { reason }) => Err(invalid(reason)),
        Err(e) => Err(e),
    }
}
