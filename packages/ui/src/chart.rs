//! Plot geometry shared by the line and bar charts.
//!
//! Everything here is in SVG user units of a fixed view box; the charts
//! scale to their container through `viewBox`.

const EPSILON: f64 = 1e-9;

/// View box and padding around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
            left: 80.0,
            right: 16.0,
            top: 16.0,
            bottom: 48.0,
        }
    }
}

impl Frame {
    /// Same frame with a taller bottom margin for rotated category labels.
    pub fn with_bottom(self, bottom: f64) -> Self {
        Self { bottom, ..self }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// y coordinate of the zero line.
    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.right
    }

    /// Width of one category slot when `count` categories share the plot.
    pub fn slot_width(&self, count: usize) -> f64 {
        self.plot_width() / count.max(1) as f64
    }

    /// Horizontal center of category `index` out of `count`.
    pub fn x_center(&self, index: usize, count: usize) -> f64 {
        self.left + self.slot_width(count) * (index as f64 + 0.5)
    }

    /// Vertical position of `value` on an axis running from 0 to `axis_max`.
    pub fn y_of(&self, value: f64, axis_max: f64) -> f64 {
        if !axis_max.is_finite() || axis_max <= 0.0 || !value.is_finite() {
            return self.baseline();
        }
        let ratio = (value / axis_max).clamp(0.0, 1.0);
        self.baseline() - ratio * self.plot_height()
    }
}

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 + EPSILON {
        1.0
    } else if normalized <= 2.0 + EPSILON {
        2.0
    } else if normalized <= 2.5 + EPSILON {
        2.5
    } else if normalized <= 5.0 + EPSILON {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced ticks from 0 covering `max`, about `target` intervals.
///
/// All-zero (or empty) data still gets a unit axis so the chart has a scale.
pub fn y_ticks(max: f64, target: usize) -> Vec<f64> {
    let max = if max.is_finite() && max > 0.0 { max } else { 1.0 };
    let step = nice_step(max / target.max(1) as f64);
    let count = ((max / step) - EPSILON).ceil().max(1.0) as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// SVG path through `points`.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        d.push_str(&format!("{cmd}{x:.1},{y:.1}"));
    }
    d
}

/// Closed SVG path between `points` and the horizontal line at `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "M{:.1},{baseline:.1} L{} L{:.1},{baseline:.1} Z",
        first.0,
        line_path(points).trim_start_matches('M'),
        last.0,
    )
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    s.chars().take(max).collect::<String>() + "…"
}
