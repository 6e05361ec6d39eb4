//! 字节级扫描引擎（整读，单遍扫描）
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::detectors::LabelDetector;
use crate::error::ScanError;
use crate::findings::Finding;
use crate::prefilter::KeywordFilter;
use crate::rules::RuleSpec;

/// 读取整个文件到内存；文件句柄在返回前释放
pub(crate) fn read_model(path: &Path) -> Result<Vec<u8>, ScanError> {
    let access = |source| ScanError::FileAccess { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(access)?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(access)?;
    Ok(buf)
}

/// 扫描结果：命中列表 + 去重前的候选数
pub(crate) struct BufferScan {
    pub(crate) findings: Vec<Finding>,
    pub(crate) candidates_total: usize,
}

pub(crate) fn scan_buffer_with(buf: &[u8], detector: &LabelDetector, filter: &KeywordFilter) -> BufferScan {
    let mut seen: HashSet<String> = HashSet::new();
    let mut findings: Vec<Finding> = Vec::new();
    let mut candidates_total = 0usize;

    // find_iter 自左向右、不重叠，命中天然按偏移升序
    for m in detector.pattern.find_iter(buf) {
        candidates_total += 1;

        let text = decode_ascii(m.as_bytes());
        let text = text.trim();
        if text.is_empty() || seen.contains(text) {
            continue;
        }
        if !filter.matches(text) {
            continue;
        }

        seen.insert(text.to_string());
        findings.push(Finding { start_offset: m.start(), value: text.to_string() });
    }

    BufferScan { findings, candidates_total }
}

/// 按给定规则扫描一段内存缓冲区，返回按首次出现顺序排列的命中
pub fn scan_buffer(buf: &[u8], spec: &RuleSpec) -> Result<Vec<Finding>, ScanError> {
    let detector = LabelDetector::from_spec(spec)?;
    let filter = KeywordFilter::from_spec(spec)?;
    Ok(scan_buffer_with(buf, &detector, &filter).findings)
}

/// ASCII 解码：丢弃非 ASCII 字节，不报错
fn decode_ascii(raw: &[u8]) -> String {
    raw.iter().filter(|b| b.is_ascii()).map(|&b| b as char).collect()
}
