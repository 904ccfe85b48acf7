use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context};
use plotters::prelude::*;
use plotters::style::register_font;
use tracing::{debug, warn};
use crate::core::compare::{ComparisonMetric, ComparisonPoint};

const FONT_FAMILY: &str = "sans-serif";

const FONT_CANDIDATES: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub(crate) fn find_font(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => FONT_CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file()),
    }
}

/// 图上的文字需要一个ttf字体，整个进程注册一次
pub fn register_chart_font(explicit: Option<&Path>) -> anyhow::Result<()> {
    let path = find_font(explicit).ok_or_else(|| anyhow!("没有找到可用的ttf字体，请用 --font 指定"))?;
    let bytes = std::fs::read(&path).with_context(|| format!("读取字体失败: {}", path.display()))?;
    // 字体数据需要'static
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("无效的字体文件: {}", path.display()))?;
    debug!(font = %path.display(), "chart font registered");
    Ok(())
}

/// x轴上的接口，按合并后首次出现的顺序
pub fn endpoint_categories(points: &[ComparisonPoint]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for point in points {
        if !categories.contains(&point.endpoint) {
            categories.push(point.endpoint.clone());
        }
    }
    categories
}

/// 每个框架一条线，空值跳过
pub fn framework_series(points: &[ComparisonPoint], categories: &[String]) -> Vec<(String, Vec<(usize, f64)>)> {
    let mut series: Vec<(String, Vec<(usize, f64)>)> = Vec::new();
    for point in points {
        let index = match series.iter().position(|(name, _)| *name == point.framework) {
            Some(index) => index,
            None => {
                series.push((point.framework.clone(), Vec::new()));
                series.len() - 1
            }
        };
        if let (Some(value), Some(x)) = (point.value, categories.iter().position(|c| *c == point.endpoint)) {
            series[index].1.push((x, value));
        }
    }
    series
}

fn y_range(series: &[(String, Vec<(usize, f64)>)]) -> (f64, f64) {
    let values = series.iter().flat_map(|(_, data)| data.iter().map(|(_, y)| *y));
    let (min, max) = values.fold((0.0f64, 0.0f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if max <= min {
        (min, min + 1.0)
    } else {
        (min, max * 1.1)
    }
}

pub fn draw_comparison(points: &[ComparisonPoint], metric: &ComparisonMetric, path: &Path) -> anyhow::Result<()> {
    let categories = endpoint_categories(points);
    if categories.is_empty() {
        warn!(metric = metric.column, "no rows to plot, drawing empty chart");
    }
    // 没有数据时也保留一个空的分段，坐标轴照常画
    let segments = categories.len().max(1);
    let series = framework_series(points, &categories);
    let (y_min, y_max) = y_range(&series);
    let plot_err = |e: &dyn std::fmt::Display| anyhow!("绘制 {} 失败: {}", path.display(), e);

    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} Comparison (Combined)", metric.column), (FONT_FAMILY, 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0usize..segments).into_segmented(), y_min..y_max)
        .map_err(|e| plot_err(&e))?;

    let x_label = |x: &SegmentValue<usize>| match x {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => categories.get(*i).cloned().unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(segments)
        .x_label_formatter(&x_label)
        .x_desc("Endpoint")
        .y_desc(metric.ylabel)
        .draw()
        .map_err(|e| plot_err(&e))?;

    for (index, (framework, data)) in series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let line: Vec<(SegmentValue<usize>, f64)> =
            data.iter().map(|(x, y)| (SegmentValue::CenterOf(*x), *y)).collect();
        chart
            .draw_series(LineSeries::new(line.clone(), color.stroke_width(2)))
            .map_err(|e| plot_err(&e))?
            .label(framework.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart
            .draw_series(line.into_iter().map(|point| Circle::new(point, 4, color.filled())))
            .map_err(|e| plot_err(&e))?;
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| plot_err(&e))?;
    }
    root.present().map_err(|e| plot_err(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(endpoint: &str, value: Option<f64>, framework: &str) -> ComparisonPoint {
        ComparisonPoint {
            endpoint: endpoint.to_string(),
            raw: value.map(|v| v.to_string()).unwrap_or_default(),
            value,
            framework: framework.to_string(),
        }
    }

    #[test]
    fn test_series_follow_first_appearance() {
        let points = vec![
            point("/items", Some(1.0), ".NET"),
            point("/users", Some(2.0), ".NET"),
            point("/orders", None, "Express.js"),
            point("/items", Some(3.0), "Express.js"),
        ];
        let categories = endpoint_categories(&points);
        assert_eq!(categories, vec!["/items", "/users", "/orders"]);
        let series = framework_series(&points, &categories);
        assert_eq!(
            series,
            vec![
                (".NET".to_string(), vec![(0, 1.0), (1, 2.0)]),
                ("Express.js".to_string(), vec![(0, 3.0)]),
            ]
        );
        assert_eq!(y_range(&series), (0.0, 3.0 * 1.1));
    }

    #[test]
    fn test_explicit_font_wins() {
        let font = Path::new("/opt/fonts/custom.ttf");
        assert_eq!(find_font(Some(font)), Some(font.to_path_buf()));
        assert!(register_chart_font(Some(Path::new("/nonexistent/font.ttf"))).is_err());
    }

    #[test]
    fn test_y_range_without_values() {
        assert_eq!(y_range(&[]), (0.0, 1.0));
    }
}
