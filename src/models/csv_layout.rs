use clap::ValueEnum;
use crate::models::run_metrics::{Metric, ThroughputForm};

/// csv中的一列指标，source为None的列永远写空
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub source: Option<Metric>,
}

const fn column(header: &'static str, source: Metric) -> Column {
    Column { header, source: Some(source) }
}

pub const THREAD_STATS_COLUMNS: [Column; 6] = [
    column("Requests/sec_Avg", Metric::ReqPerSecAvg),
    column("Requests/sec_Stdev", Metric::ReqPerSecStdev),
    column("Requests/sec_Max", Metric::ReqPerSecMax),
    column("Latency_Avg(ms)", Metric::LatencyAvgMs),
    column("Latency_Stdev(ms)", Metric::LatencyStdevMs),
    column("Latency_Max(ms)", Metric::LatencyMaxMs),
];

pub const SUMMARY_COLUMNS: [Column; 6] = [
    column("Requests/sec", Metric::RequestsPerSec),
    Column { header: "Latency_Min(ms)", source: None },
    column("Latency_Max(ms)", Metric::LatencyMaxMs),
    column("Latency_Mean(ms)", Metric::LatencyAvgMs),
    column("Latency_Stdev(ms)", Metric::LatencyStdevMs),
    column("Transfer/sec", Metric::TransferPerSec),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CsvLayout {
    /// 每个接口+方法一个文件
    PerEndpoint,
    /// 所有接口写进同一个文件，行首带 Endpoint,Method
    Shared,
    /// 同一个文件，使用 Requests/sec 与 Transfer/sec 汇总列
    Summary,
}

impl CsvLayout {
    pub fn metric_columns(&self) -> &'static [Column] {
        match self {
            CsvLayout::PerEndpoint | CsvLayout::Shared => &THREAD_STATS_COLUMNS,
            CsvLayout::Summary => &SUMMARY_COLUMNS,
        }
    }

    /// 行首是否带接口和方法
    pub fn is_shared(&self) -> bool {
        !matches!(self, CsvLayout::PerEndpoint)
    }

    pub fn header(&self) -> Vec<&'static str> {
        let mut header = Vec::new();
        if self.is_shared() {
            header.push("Endpoint");
            header.push("Method");
        }
        header.extend(self.metric_columns().iter().map(|c| c.header));
        header
    }

    pub fn file_name(&self, prefix: &str, path: &str, method: &str) -> String {
        if self.is_shared() {
            format!("{}.csv", prefix)
        } else {
            format!("{}_{}_{}.csv", prefix, sanitize_path(path), method)
        }
    }

    pub fn throughput_form(&self) -> ThroughputForm {
        match self {
            CsvLayout::PerEndpoint | CsvLayout::Shared => ThroughputForm::ThreadStats,
            CsvLayout::Summary => ThroughputForm::Summary,
        }
    }
}

fn sanitize_path(path: &str) -> String {
    path.replace(['/', '\\'], "_")
}
