use std::path::PathBuf;

/// 一次完整压测流程的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub endpoints_run: usize,
    pub rows_written: usize,
    // 输出里什么都没解析出来的接口
    pub skipped: Vec<(String, String)>,
    pub files: Vec<PathBuf>,
}

impl RunSummary {
    pub(crate) fn record_file(&mut self, path: PathBuf) {
        if !self.files.contains(&path) {
            self.files.push(path);
        }
    }
}
