use lazy_static::lazy_static;
use regex::{Captures, Regex};
use crate::models::run_metrics::{LatencyStats, RunMetrics, Summary, ThreadStats, Throughput, ThroughputForm};

const THREAD_STATS_LABEL: &str = "Req/Sec";
const SUMMARY_LABEL: &str = "Requests/sec:";

lazy_static! {
    static ref LATENCY: Regex = Regex::new(
        r"Latency\s+([\d.]+)([a-z]+)\s+([\d.]+)([a-z]+)\s+([\d.]+)([a-z]+)"
    ).expect("latency regex");
    static ref THREAD_STATS: Regex = Regex::new(
        r"Req/Sec\s+([\d.]+)([A-Za-z]?)\s+([\d.]+)([A-Za-z]?)\s+([\d.]+)([A-Za-z]?)"
    ).expect("req/sec regex");
    static ref REQUESTS_PER_SEC: Regex = Regex::new(r"Requests/sec:\s+([\d.]+)").expect("requests/sec regex");
    static ref TRANSFER_PER_SEC: Regex = Regex::new(r"Transfer/sec:\s+([\d.]+)([KMGT]?B)?").expect("transfer/sec regex");
}

/// 解析一次wrk输出。匹配不到的部分直接缺省，不会报错
pub fn parse_wrk_output(output: &str, form: ThroughputForm) -> RunMetrics {
    RunMetrics {
        latency: parse_latency(output),
        throughput: parse_throughput(output, form),
    }
}

/// 延迟换算成毫秒
pub fn parse_latency(output: &str) -> Option<LatencyStats> {
    let caps = LATENCY.captures(output)?;
    Some(LatencyStats {
        avg_ms: latency_ms(&caps, 1)?,
        stdev_ms: latency_ms(&caps, 3)?,
        max_ms: latency_ms(&caps, 5)?,
    })
}

/// Req/Sec 一行，去掉 k/M/G 后缀
pub fn parse_thread_stats(output: &str) -> Option<ThreadStats> {
    let caps = THREAD_STATS.captures(output)?;
    Some(ThreadStats {
        avg: scaled_count(&caps, 1)?,
        stdev: scaled_count(&caps, 3)?,
        max: scaled_count(&caps, 5)?,
    })
}

/// Requests/sec: 与可选的 Transfer/sec:，流量换算成字节
pub fn parse_summary(output: &str) -> Option<Summary> {
    let caps = REQUESTS_PER_SEC.captures(output)?;
    let requests_per_sec = caps[1].parse::<f64>().ok()?;
    let transfer_bytes_per_sec = TRANSFER_PER_SEC.captures(output).and_then(|caps| {
        let value = caps[1].parse::<f64>().ok()?;
        let factor = match caps.get(2).map(|m| m.as_str()) {
            None | Some("B") => 1.0,
            Some("KB") => 1024.0,
            Some("MB") => 1024.0 * 1024.0,
            Some("GB") => 1024.0 * 1024.0 * 1024.0,
            Some("TB") => 1024.0 * 1024.0 * 1024.0 * 1024.0,
            Some(_) => return None,
        };
        Some(value * factor)
    });
    Some(Summary { requests_per_sec, transfer_bytes_per_sec })
}

/// 两种吞吐量写法只取一种：优先的标签不存在时才看另一种
pub fn parse_throughput(output: &str, form: ThroughputForm) -> Option<Throughput> {
    let thread_stats = || parse_thread_stats(output).map(Throughput::ThreadStats);
    let summary = || parse_summary(output).map(Throughput::Summary);
    match form {
        ThroughputForm::ThreadStats if output.contains(THREAD_STATS_LABEL) => thread_stats(),
        ThroughputForm::Summary if output.contains(SUMMARY_LABEL) => summary(),
        ThroughputForm::ThreadStats => summary(),
        ThroughputForm::Summary => thread_stats(),
    }
}

fn latency_ms(caps: &Captures, index: usize) -> Option<f64> {
    let value = caps[index].parse::<f64>().ok()?;
    match &caps[index + 1] {
        "us" => Some(value / 1000.0),
        "ms" => Some(value),
        "s" => Some(value * 1000.0),
        "m" => Some(value * 60_000.0),
        "h" => Some(value * 3_600_000.0),
        _ => None,
    }
}

fn scaled_count(caps: &Captures, index: usize) -> Option<f64> {
    let value = caps[index].parse::<f64>().ok()?;
    match &caps[index + 1] {
        "" => Some(value),
        "k" | "K" => Some(value * 1e3),
        "M" => Some(value * 1e6),
        "G" => Some(value * 1e9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::run_metrics::Metric;

    const WRK_OUTPUT: &str = "\
Running 10s test @ http://localhost:8080/items
  8 threads and 100 connections
  Thread Stats   Avg      Stdev     Max   +/- Stdev
    Latency     2.31ms    1.02ms  25.40ms   85.12%
    Req/Sec     5.45k   412.33     6.80k    70.25%
  Latency Distribution
     50%    2.10ms
     75%    2.70ms
     90%    3.40ms
     99%    6.01ms
  434020 requests in 10.01s, 62.08MB read
Requests/sec:  43359.64
Transfer/sec:      6.20MB
";

    #[test]
    fn test_scenario_latency_and_req_sec() {
        let text = "Latency   12.50ms   3.20ms   45.10ms\nReq/Sec    250.30   10.2   300.5\n";
        let metrics = parse_wrk_output(text, ThroughputForm::ThreadStats);
        assert_eq!(
            metrics.fields(),
            vec![
                (Metric::LatencyAvgMs, 12.50),
                (Metric::LatencyStdevMs, 3.20),
                (Metric::LatencyMaxMs, 45.10),
                (Metric::ReqPerSecAvg, 250.30),
                (Metric::ReqPerSecStdev, 10.2),
                (Metric::ReqPerSecMax, 300.5),
            ]
        );
    }

    #[test]
    fn test_scenario_microseconds() {
        let metrics = parse_wrk_output("Latency   500.00us   200.00us   1.20ms", ThroughputForm::ThreadStats);
        assert_eq!(
            metrics.latency,
            Some(LatencyStats { avg_ms: 0.5, stdev_ms: 0.2, max_ms: 1.20 })
        );
        assert!(metrics.throughput.is_none());
    }

    #[test]
    fn test_microseconds_in_each_position() {
        let stats = parse_latency("Latency 12.00ms 300.00us 4.00ms").unwrap();
        assert_eq!(stats, LatencyStats { avg_ms: 12.0, stdev_ms: 0.3, max_ms: 4.0 });
        let stats = parse_latency("Latency 7.00ms 3.00ms 900.00us").unwrap();
        assert_eq!(stats.max_ms, 0.9);
        let stats = parse_latency("Latency 1.50s 0.50s 2.00m").unwrap();
        assert_eq!(stats, LatencyStats { avg_ms: 1500.0, stdev_ms: 500.0, max_ms: 120_000.0 });
    }

    #[test]
    fn test_unknown_latency_unit_drops_group() {
        assert!(parse_latency("Latency 1.00ms 2.00xs 3.00ms").is_none());
    }

    #[test]
    fn test_req_sec_suffixes() {
        let stats = parse_thread_stats("Req/Sec     5.45k   412.33     6.80k    70.25%").unwrap();
        assert_eq!(stats, ThreadStats { avg: 5450.0, stdev: 412.33, max: 6800.0 });
        let stats = parse_thread_stats("Req/Sec   1.20M   12k   2.00M").unwrap();
        assert_eq!(stats, ThreadStats { avg: 1_200_000.0, stdev: 12_000.0, max: 2_000_000.0 });
        assert!(parse_thread_stats("Req/Sec   1.20x   12   2.00").is_none());
    }

    #[test]
    fn test_transfer_units() {
        let summary = parse_summary("Requests/sec:  100.00\nTransfer/sec:   2.00KB").unwrap();
        assert_eq!(summary, Summary { requests_per_sec: 100.0, transfer_bytes_per_sec: Some(2048.0) });
        let summary = parse_summary("Requests/sec:  100.00\nTransfer/sec:   1.50MB").unwrap();
        assert_eq!(summary.transfer_bytes_per_sec, Some(1.5 * 1024.0 * 1024.0));
        let summary = parse_summary("Requests/sec:  100.00\nTransfer/sec:   512.00").unwrap();
        assert_eq!(summary.transfer_bytes_per_sec, Some(512.0));
        let summary = parse_summary("Requests/sec:  100.00\nTransfer/sec:   512.00B").unwrap();
        assert_eq!(summary.transfer_bytes_per_sec, Some(512.0));
        let summary = parse_summary("Requests/sec:  100.00").unwrap();
        assert_eq!(summary.transfer_bytes_per_sec, None);
        assert!(parse_summary("Transfer/sec:   1.50MB").is_none());
    }

    #[test]
    fn test_throughput_forms_are_exclusive() {
        let metrics = parse_wrk_output(WRK_OUTPUT, ThroughputForm::ThreadStats);
        assert_eq!(metrics.get(Metric::ReqPerSecAvg), Some(5450.0));
        assert_eq!(metrics.get(Metric::RequestsPerSec), None);

        let metrics = parse_wrk_output(WRK_OUTPUT, ThroughputForm::Summary);
        assert_eq!(metrics.get(Metric::RequestsPerSec), Some(43359.64));
        assert_eq!(metrics.get(Metric::TransferPerSec), Some(6.20 * 1024.0 * 1024.0));
        assert_eq!(metrics.get(Metric::ReqPerSecAvg), None);
        assert_eq!(metrics.get(Metric::LatencyMaxMs), Some(25.40));
    }

    #[test]
    fn test_falls_back_when_preferred_label_missing() {
        let metrics = parse_wrk_output("Requests/sec:  900.10", ThroughputForm::ThreadStats);
        assert_eq!(metrics.get(Metric::RequestsPerSec), Some(900.10));
        let metrics = parse_wrk_output("Req/Sec 1.00 2.00 3.00", ThroughputForm::Summary);
        assert_eq!(metrics.get(Metric::ReqPerSecMax), Some(3.0));
        // 标签存在但格式不对时不回退
        let metrics = parse_wrk_output("Req/Sec broken\nRequests/sec:  900.10", ThroughputForm::ThreadStats);
        assert!(metrics.throughput.is_none());
    }

    #[test]
    fn test_unrelated_text_is_empty() {
        let metrics = parse_wrk_output("unable to connect to localhost:8080 Connection refused", ThroughputForm::ThreadStats);
        assert!(metrics.is_empty());
        assert!(parse_wrk_output("", ThroughputForm::Summary).is_empty());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = parse_wrk_output(WRK_OUTPUT, ThroughputForm::ThreadStats);
        let second = parse_wrk_output(WRK_OUTPUT, ThroughputForm::ThreadStats);
        assert_eq!(first, second);
    }
}
