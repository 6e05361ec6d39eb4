//! 扫描主流程：读文件 → 扫描 → 按格式写出
use std::io::Write;

use crate::detectors::LabelDetector;
use crate::engine_bytes::{read_model, scan_buffer_with};
use crate::error::ScanError;
use crate::findings::{render_size_line, Finding};
use crate::options::{OutputFormat, ScanOptions, ScanStats};
use crate::prefilter::KeywordFilter;
use crate::rules::RuleSpec;
use crate::types::ScanReport;

/// 扫描 `opts.model_path` 并将结果写入 `out`
/// 稳定性保证：输出只取决于文件内容与规则，命中按首次出现的偏移升序
pub fn scan_and_write(out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanStats, ScanError> {
    // 规则先于模型文件解析，规则错误不会产生任何输出
    let spec = RuleSpec::resolve(opts.rules_path.as_deref())?;
    let detector = LabelDetector::from_spec(&spec)?;
    let filter = KeywordFilter::from_spec(&spec)?;

    let buf = read_model(&opts.model_path)?;
    let mut stats = ScanStats { bytes_scanned: buf.len(), ..ScanStats::default() };

    let res = scan_buffer_with(&buf, &detector, &filter);
    stats.candidates_total = res.candidates_total;
    stats.outputs_written = res.findings.len();

    match opts.format {
        OutputFormat::Text => {
            writeln!(out, "{}", render_size_line(buf.len()))?;
            for f in &res.findings {
                writeln!(out, "{}", f.render_line())?;
            }
        }
        OutputFormat::Json => {
            let report = ScanReport {
                model_size: buf.len(),
                matches: res.findings.iter().map(Finding::as_item).collect(),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(stats)
}
