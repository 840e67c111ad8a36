//! Time-series line charts.
//!
//! [`render_timeseries`] turns a dataset into a [`ChartHandle`]: the markers
//! (one per row, ascending x), a smoothed path through them and the fixed
//! styling every dashboard chart shares. The handle is plain data; it can be
//! serialized or drawn into terminal lines with [`ChartHandle::render_lines`].

use std::fmt;

use benin_core::Dataset;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Line colour used when a view does not pick one (flag green).
pub const DEFAULT_COLOR: &str = "#008751";
pub const LINE_WIDTH: u8 = 4;
pub const TITLE_FONT_SIZE: u8 = 20;
pub const PLOT_BACKGROUND: Rgb = Rgb(255, 255, 255);

const SAMPLES_PER_SEGMENT: usize = 8;
const MIN_PLOT_WIDTH: usize = 10;
const MIN_PLOT_HEIGHT: usize = 3;
const EMPTY_LABEL: &str = "◌ aucune donnée à afficher";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("dataset {dataset} has no column {field}")]
    UnknownField { dataset: String, field: String },

    #[error("invalid colour {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

/// 24-bit colour, serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_hex(hex: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidColor(hex.to_string());
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    Linear,
    Spline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: u8,
    pub shape: LineShape,
    pub markers: bool,
    pub background: Rgb,
    pub title_font_size: u8,
}

impl LineStyle {
    fn dashboard(color: Rgb) -> Self {
        Self {
            color,
            width: LINE_WIDTH,
            shape: LineShape::Spline,
            markers: true,
            background: PLOT_BACKGROUND,
            title_font_size: TITLE_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// A renderable line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartHandle {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    pub style: LineStyle,
    /// One marker per dataset row, ascending x.
    pub markers: Vec<ChartPoint>,
    /// Interpolated samples through the markers; empty below two markers.
    pub path: Vec<ChartPoint>,
}

/// Build a line chart for `y_field` against `x_field`.
pub fn render_timeseries(
    dataset: &Dataset,
    x_field: &str,
    y_field: &str,
    title: &str,
    color: &str,
) -> Result<ChartHandle, ChartError> {
    let column = |field: &str| {
        dataset.column(field).ok_or_else(|| ChartError::UnknownField {
            dataset: dataset.name().to_string(),
            field: field.to_string(),
        })
    };
    let xs = column(x_field)?;
    let ys = column(y_field)?;
    let color = Rgb::from_hex(color)?;

    let mut markers: Vec<ChartPoint> = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| ChartPoint { x, y })
        .collect();
    markers.sort_by(|a, b| a.x.total_cmp(&b.x));
    let path = spline_path(&markers);

    Ok(ChartHandle {
        title: title.to_string(),
        x_field: x_field.to_string(),
        y_field: y_field.to_string(),
        style: LineStyle::dashboard(color),
        markers,
        path,
    })
}

/// Uniform Catmull-Rom samples passing through every marker.
fn spline_path(points: &[ChartPoint]) -> Vec<ChartPoint> {
    if points.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;
    let mut path = Vec::with_capacity(last * SAMPLES_PER_SEGMENT + 1);
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];
        for step in 0..SAMPLES_PER_SEGMENT {
            let t = step as f64 / SAMPLES_PER_SEGMENT as f64;
            path.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }
    path.push(points[last]);
    path
}

fn catmull_rom(p0: ChartPoint, p1: ChartPoint, p2: ChartPoint, p3: ChartPoint, t: f64) -> ChartPoint {
    let t2 = t * t;
    let t3 = t2 * t;
    let blend = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    ChartPoint {
        x: blend(p0.x, p1.x, p2.x, p3.x),
        y: blend(p0.y, p1.y, p2.y, p3.y),
    }
}

impl ChartHandle {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// `(x_min, x_max, y_min, y_max)` over markers and path, widened so that
    /// neither range is zero.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.markers.iter().chain(self.path.iter());
        let first = points.next()?;
        let (mut x0, mut x1, mut y0, mut y1) = (first.x, first.x, first.y, first.y);
        for p in points {
            x0 = x0.min(p.x);
            x1 = x1.max(p.x);
            y0 = y0.min(p.y);
            y1 = y1.max(p.y);
        }
        if x1 - x0 < f64::EPSILON {
            x0 -= 1.0;
            x1 += 1.0;
        }
        if y1 - y0 < f64::EPSILON {
            let pad = (y0.abs() * 0.1).max(1.0);
            y0 -= pad;
            y1 += pad;
        }
        Some((x0, x1, y0, y1))
    }

    /// Draw the chart as text: title, plot area with a y scale, x axis with
    /// the first and last x values, and a legend.
    pub fn render_lines(&self, width: usize, height: usize) -> Vec<String> {
        let width = width.max(MIN_PLOT_WIDTH);
        let height = height.max(MIN_PLOT_HEIGHT);
        let mut lines = vec![self.title.clone()];

        let Some((x0, x1, y0, y1)) = self.bounds() else {
            lines.push(format!("  {EMPTY_LABEL}"));
            return lines;
        };

        let cell = |p: &ChartPoint| {
            let col = ((p.x - x0) / (x1 - x0) * (width - 1) as f64).round();
            let row = ((p.y - y0) / (y1 - y0) * (height - 1) as f64).round();
            let col = col.clamp(0.0, (width - 1) as f64) as usize;
            let row = row.clamp(0.0, (height - 1) as f64) as usize;
            (col, height - 1 - row)
        };

        let mut grid = vec![vec![' '; width]; height];
        for pair in self.path.windows(2) {
            let (c0, r0) = cell(&pair[0]);
            let (c1, r1) = cell(&pair[1]);
            let steps = c0.abs_diff(c1).max(r0.abs_diff(r1)).max(1);
            for s in 0..=steps {
                let f = s as f64 / steps as f64;
                let c = (c0 as f64 + (c1 as f64 - c0 as f64) * f).round() as usize;
                let r = (r0 as f64 + (r1 as f64 - r0 as f64) * f).round() as usize;
                grid[r][c] = '·';
            }
        }
        for marker in &self.markers {
            let (c, r) = cell(marker);
            grid[r][c] = '●';
        }

        let top = format_value(y1);
        let bottom = format_value(y0);
        let label_width = top.chars().count().max(bottom.chars().count());
        for (idx, row) in grid.iter().enumerate() {
            let label = if idx == 0 {
                top.as_str()
            } else if idx == height - 1 {
                bottom.as_str()
            } else {
                ""
            };
            let tick = if label.is_empty() { '│' } else { '┤' };
            let body: String = row.iter().collect();
            lines.push(format!("{label:>label_width$} {tick}{}", body.trim_end()));
        }
        lines.push(format!("{:>label_width$} └{}", "", "─".repeat(width)));

        let left = format_value(x0);
        let right = format_value(x1);
        let gap = width.saturating_sub(left.chars().count() + right.chars().count());
        lines.push(format!(
            "{:>label_width$}  {left}{}{right}",
            "",
            " ".repeat(gap)
        ));
        lines.push(format!(
            "● {} / {}  ({}, {} px, {})",
            self.y_field,
            self.x_field,
            self.style.color,
            self.style.width,
            match self.style.shape {
                LineShape::Spline => "spline",
                LineShape::Linear => "linéaire",
            }
        ));
        lines
    }
}

fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1} M", value / 1_000_000.0)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
