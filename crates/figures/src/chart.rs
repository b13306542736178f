use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

// matplotlib's default colour cycle
static SERIES_COLORS: [RGBColor; 5] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
];

/// A labelled curve ready for plotting.
pub struct FigureSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl FigureSeries {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Points that can be placed on logarithmic axes.
    fn positive_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|&(x, y)| x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0)
    }
}

/// Axis bounds covering every positive finite point, padded multiplicatively
/// so curves do not touch the frame.
fn log_bounds(series: &[FigureSeries]) -> Option<((f64, f64), (f64, f64))> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for (x, y) in s.positive_points() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        return None;
    }
    if y_min == y_max {
        y_min /= 2.0;
        y_max *= 2.0;
    }

    Some(((x_min, x_max), (y_min / 1.2, y_max * 1.2)))
}

/// Renders `series` on log-log axes and writes the chart to `path` as PNG.
///
/// Non-finite and non-positive points are dropped. An empty set of series
/// draws nothing and returns successfully.
pub fn render_log_log(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[FigureSeries],
) -> Result<(), Box<dyn Error>> {
    let Some(((x_min, x_max), (y_min, y_max))) = log_bounds(series) else {
        return Ok(());
    };

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = &SERIES_COLORS[i % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(s.positive_points(), color))?
            .label(&s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Renders `series` with a logarithmic time axis and a linear y axis.
///
/// Points with non-finite coordinates or non-positive times are dropped.
pub fn render_semilog_x(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[FigureSeries],
) -> Result<(), Box<dyn Error>> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            if x.is_finite() && y.is_finite() && x > 0.0 {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return Ok(());
    }
    if y_min == y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let margin = 0.1 * (y_max - y_min);
    let (y_min, y_max) = (y_min - margin, y_max + margin);

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = &SERIES_COLORS[i % SERIES_COLORS.len()];
        let points = s
            .points
            .iter()
            .copied()
            .filter(|&(x, y)| x.is_finite() && y.is_finite() && x > 0.0);
        chart
            .draw_series(LineSeries::new(points, color))?
            .label(&s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
