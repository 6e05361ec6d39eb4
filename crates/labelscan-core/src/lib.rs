//! 模型标签扫描库
//!
//! 设计要点：
//! - 把模型文件当作不透明的字节块整读入内存，不解析任何模型格式。
//! - 在 `regex::bytes` 上匹配“字母开头、字母/空格/连字符组成”的 ASCII 片段。
//! - 单次扫描内按文本去重，只保留首次出现的偏移。
//! - 仅输出包含任一关键字片段（区分大小写的子串包含）的命中。

mod options;
mod types;
mod error;
mod findings;
mod detectors;
mod prefilter;
mod rules;
mod engine_bytes;
mod scan;

pub use options::{OutputFormat, ScanOptions, ScanStats};
pub use types::{OutputItem, ScanReport};
pub use error::ScanError;
pub use findings::Finding;
pub use rules::{RuleSpec, DEFAULT_KEYWORDS, DEFAULT_MODEL_PATH, MAX_LABEL_LEN, MIN_LABEL_LEN};
pub use engine_bytes::scan_buffer;
pub use scan::scan_and_write;
