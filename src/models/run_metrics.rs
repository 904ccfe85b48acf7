/// 单次wrk运行可以产出的指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    LatencyAvgMs,
    LatencyStdevMs,
    LatencyMaxMs,
    ReqPerSecAvg,
    ReqPerSecStdev,
    ReqPerSecMax,
    RequestsPerSec,
    TransferPerSec,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::LatencyAvgMs,
        Metric::LatencyStdevMs,
        Metric::LatencyMaxMs,
        Metric::ReqPerSecAvg,
        Metric::ReqPerSecStdev,
        Metric::ReqPerSecMax,
        Metric::RequestsPerSec,
        Metric::TransferPerSec,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::LatencyAvgMs => "Latency_Avg(ms)",
            Metric::LatencyStdevMs => "Latency_Stdev(ms)",
            Metric::LatencyMaxMs => "Latency_Max(ms)",
            Metric::ReqPerSecAvg => "Req/Sec_Avg",
            Metric::ReqPerSecStdev => "Req/Sec_Stdev",
            Metric::ReqPerSecMax => "Req/Sec_Max",
            Metric::RequestsPerSec => "Requests/sec",
            Metric::TransferPerSec => "Transfer/sec",
        }
    }
}

/// 延迟，单位统一为毫秒
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyStats {
    pub avg_ms: f64,
    pub stdev_ms: f64,
    pub max_ms: f64,
}

/// 每线程的Req/Sec统计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadStats {
    pub avg: f64,
    pub stdev: f64,
    pub max: f64,
}

/// 汇总行 Requests/sec 和 Transfer/sec(字节)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub requests_per_sec: f64,
    pub transfer_bytes_per_sec: Option<f64>,
}

/// 吞吐量的两种写法互斥，优先尝试哪一种
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThroughputForm {
    ThreadStats,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Throughput {
    ThreadStats(ThreadStats),
    Summary(Summary),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    pub latency: Option<LatencyStats>,
    pub throughput: Option<Throughput>,
}

impl RunMetrics {
    pub fn is_empty(&self) -> bool {
        self.latency.is_none() && self.throughput.is_none()
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::LatencyAvgMs => self.latency.map(|l| l.avg_ms),
            Metric::LatencyStdevMs => self.latency.map(|l| l.stdev_ms),
            Metric::LatencyMaxMs => self.latency.map(|l| l.max_ms),
            Metric::ReqPerSecAvg => self.thread_stats().map(|t| t.avg),
            Metric::ReqPerSecStdev => self.thread_stats().map(|t| t.stdev),
            Metric::ReqPerSecMax => self.thread_stats().map(|t| t.max),
            Metric::RequestsPerSec => self.summary().map(|s| s.requests_per_sec),
            Metric::TransferPerSec => self.summary().and_then(|s| s.transfer_bytes_per_sec),
        }
    }

    /// 只包含已解析出的字段
    pub fn fields(&self) -> Vec<(Metric, f64)> {
        Metric::ALL
            .iter()
            .filter_map(|m| self.get(*m).map(|v| (*m, v)))
            .collect()
    }

    fn thread_stats(&self) -> Option<ThreadStats> {
        match self.throughput {
            Some(Throughput::ThreadStats(t)) => Some(t),
            _ => None,
        }
    }

    fn summary(&self) -> Option<Summary> {
        match self.throughput {
            Some(Throughput::Summary(s)) => Some(s),
            _ => None,
        }
    }
}
