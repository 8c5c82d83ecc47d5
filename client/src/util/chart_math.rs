//! Geometry for the SVG progress ring and the engagement bar chart.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

/// Pixel height of the tallest possible bar.
pub const BAR_MAX_PX: f64 = 180.0;

/// Circle parameters for a ring of `size` px drawn with a `stroke` px line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    /// `stroke-dashoffset` that leaves `progress` percent of the ring drawn.
    pub dash_offset: f64,
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

pub fn ring_geometry(progress: f64, size: f64, stroke: f64) -> RingGeometry {
    let center = size / 2.0;
    let radius = (center - stroke / 2.0).max(0.0);
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let dash_offset = circumference * (1.0 - clamp_percent(progress) / 100.0);
    RingGeometry { center, radius, circumference, dash_offset }
}

/// Bar height for a percentage value.
pub fn percent_bar_px(percent: f64) -> f64 {
    clamp_percent(percent) / 100.0 * BAR_MAX_PX
}

/// Bar height for `value` scaled against the largest value in the series.
pub fn relative_bar_px(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0) * BAR_MAX_PX
}
