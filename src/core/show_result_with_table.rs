use prettytable::{format, row, Table};
use crate::models::run_metrics::{Metric, RunMetrics};
use crate::models::result::RunSummary;

pub(crate) fn metrics_table(metrics: &RunMetrics) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["指标", "值"]);
    for (metric, value) in metrics.fields() {
        let shown = match metric {
            Metric::TransferPerSec => format!("{:.2} B/s", value),
            _ => format!("{:.3}", value),
        };
        table.add_row(row![metric.key(), shown]);
    }
    table
}

pub fn show_result_with_table(endpoint: &str, method: &str, metrics: &RunMetrics) {
    println!("{} {} 压测结果:", method, endpoint);
    metrics_table(metrics).printstd();
}

pub fn show_summary_with_table(summary: &RunSummary) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["接口数", "写入行数", "未解析接口数"]);
    table.add_row(row![summary.endpoints_run, summary.rows_written, summary.skipped.len()]);
    println!("汇总:");
    table.printstd();
    for file in &summary.files {
        println!("  {}", file.display());
    }
}
