use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use tracing::info;
use crate::core::csv_sink::csv_line;
use crate::core::plot_comparison::{draw_comparison, register_chart_font};
use crate::core::read_results::ResultTable;
use crate::models::args::{CompareArgs, OutputKind};

/// 参与对比的一个指标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonMetric {
    pub column: &'static str,
    pub ylabel: &'static str,
    pub slug: &'static str,
}

pub const COMPARISON_METRICS: [ComparisonMetric; 6] = [
    ComparisonMetric { column: "Requests/sec_Avg", ylabel: "Requests/sec (Average)", slug: "requests_sec_avg" },
    ComparisonMetric { column: "Requests/sec_Stdev", ylabel: "Requests/sec (Standard Deviation)", slug: "requests_sec_stdev" },
    ComparisonMetric { column: "Requests/sec_Max", ylabel: "Requests/sec (Max)", slug: "requests_sec_max" },
    ComparisonMetric { column: "Latency_Avg(ms)", ylabel: "Latency (ms) Average", slug: "latency_avg" },
    ComparisonMetric { column: "Latency_Stdev(ms)", ylabel: "Latency (ms) Standard Deviation", slug: "latency_stdev" },
    ComparisonMetric { column: "Latency_Max(ms)", ylabel: "Latency (ms) Max", slug: "latency_max" },
];

impl ComparisonMetric {
    pub fn output_name(&self, kind: OutputKind) -> String {
        match kind {
            OutputKind::Image => format!("{}_comparison.jpg", self.slug),
            OutputKind::Csv => format!("{}_comparison.csv", self.slug),
        }
    }
}

/// 合并后的一行：接口、原始值、框架名
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPoint {
    pub endpoint: String,
    pub raw: String,
    pub value: Option<f64>,
    pub framework: String,
}

/// 打上框架名后按顺序拼接，不排序不对齐
pub fn combine(sets: &[(&str, &ResultTable)], column: &str) -> anyhow::Result<Vec<ComparisonPoint>> {
    let mut points = Vec::new();
    for (framework, table) in sets {
        let endpoints = table.column("Endpoint")?;
        let values = table.column(column)?;
        for (endpoint, raw) in endpoints.into_iter().zip(values) {
            points.push(ComparisonPoint {
                endpoint: endpoint.to_string(),
                raw: raw.to_string(),
                value: raw.trim().parse::<f64>().ok(),
                framework: framework.to_string(),
            });
        }
    }
    Ok(points)
}

pub fn write_comparison_csv(points: &[ComparisonPoint], metric: &ComparisonMetric, path: &Path) -> anyhow::Result<()> {
    let header = vec!["Endpoint".to_string(), metric.column.to_string(), "Framework".to_string()];
    let mut content = csv_line(&header);
    for point in points {
        content.push_str(&csv_line(&[point.endpoint.clone(), point.raw.clone(), point.framework.clone()]));
    }
    fs::write(path, content).with_context(|| format!("写入对比csv失败: {}", path.display()))?;
    Ok(())
}

/// 读两份结果，每个指标输出一张图或一份csv
pub fn run_compare(args: &CompareArgs) -> anyhow::Result<Vec<PathBuf>> {
    let left = ResultTable::load(&args.left)?;
    let right = ResultTable::load(&args.right)?;
    let sets = [(args.left_label.as_str(), &left), (args.right_label.as_str(), &right)];

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("创建输出目录失败: {}", args.out_dir.display()))?;

    if args.output == OutputKind::Image {
        register_chart_font(args.font.as_deref())?;
    }

    let mut outputs = Vec::new();
    for metric in COMPARISON_METRICS.iter() {
        let points = combine(&sets, metric.column)?;
        let path = args.out_dir.join(metric.output_name(args.output));
        match args.output {
            OutputKind::Image => {
                draw_comparison(&points, metric, &path)?;
                println!("The {} comparison chart has been saved as '{}'.", metric.column, path.display());
            }
            OutputKind::Csv => {
                write_comparison_csv(&points, metric, &path)?;
                println!("The combined graph data for {} has been saved as '{}'.", metric.column, path.display());
            }
        }
        outputs.push(path);
    }
    info!(outputs = outputs.len(), "comparison finished");
    Ok(outputs)
}
