use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Context};

/// 读回来的一份结果csv
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("读取结果文件失败: {}", path.display()))?;
        Self::parse(path, &raw)
    }

    pub fn parse(source: &Path, raw: &str) -> anyhow::Result<Self> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let mut records = parse_records(raw)
            .with_context(|| format!("解析结果文件失败: {}", source.display()))?
            .into_iter();
        let headers = match records.next() {
            Some(headers) => headers,
            None => bail!("结果文件为空: {}", source.display()),
        };
        Ok(ResultTable {
            source: source.to_path_buf(),
            headers,
            rows: records.collect(),
        })
    }

    /// 按行顺序取出一列，缺列时报错
    pub fn column(&self, name: &str) -> anyhow::Result<Vec<&str>> {
        let index = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("{} 缺少列 {}", self.source.display(), name))?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
            .collect())
    }
}

// 支持引号转义和引号内换行，跳过空行
fn parse_records(raw: &str) -> anyhow::Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                if !(record.len() == 1 && record[0].is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        bail!("引号没有闭合");
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}
