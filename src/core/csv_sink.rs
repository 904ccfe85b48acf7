use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::Context;
use crate::models::csv_layout::CsvLayout;
use crate::models::run_metrics::RunMetrics;

/// 只追加的结果csv，表头在循环开始前写入
pub struct CsvSink {
    dir: PathBuf,
    prefix: String,
    layout: CsvLayout,
}

impl CsvSink {
    pub fn new(dir: &Path, prefix: &str, layout: CsvLayout) -> Self {
        CsvSink {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
            layout,
        }
    }

    pub fn layout(&self) -> CsvLayout {
        self.layout
    }

    pub fn path_for(&self, endpoint: &str, method: &str) -> PathBuf {
        self.dir.join(self.layout.file_name(&self.prefix, endpoint, method))
    }

    /// 新建文件并写表头，已有文件会被清空
    pub fn create(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("创建输出目录失败: {}", parent.display()))?;
        }
        let header: Vec<String> = self.layout.header().iter().map(|h| h.to_string()).collect();
        fs::write(path, csv_line(&header))
            .with_context(|| format!("写入csv表头失败: {}", path.display()))?;
        Ok(())
    }

    /// 追加一行。指标为空时不写，返回false
    pub fn append(&self, path: &Path, endpoint: &str, method: &str, metrics: &RunMetrics) -> anyhow::Result<bool> {
        if metrics.is_empty() {
            return Ok(false);
        }
        let line = csv_line(&format_row(self.layout, endpoint, method, metrics));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("打开csv失败: {}", path.display()))?;
        // 整行一次写入
        file.write_all(line.as_bytes())
            .with_context(|| format!("写入csv失败: {}", path.display()))?;
        Ok(true)
    }
}

/// 按布局的列顺序展开一行，缺失的指标写空字符串
pub fn format_row(layout: CsvLayout, endpoint: &str, method: &str, metrics: &RunMetrics) -> Vec<String> {
    let mut row = Vec::new();
    if layout.is_shared() {
        row.push(endpoint.to_string());
        row.push(method.to_string());
    }
    for column in layout.metric_columns() {
        let value = column
            .source
            .and_then(|metric| metrics.get(metric))
            .map(|v| v.to_string())
            .unwrap_or_default();
        row.push(value);
    }
    row
}

pub(crate) fn csv_line(fields: &[String]) -> String {
    let mut line = fields.iter().map(|f| csv_escape(f)).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
