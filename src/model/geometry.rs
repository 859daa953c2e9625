use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBounds {
    pub min: f64,
    pub max: f64,
}

impl ScoreBounds {
    pub fn twenty_point() -> Self {
        Self {
            min: 0.0,
            max: 20.0,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub max_score: f64,
    pub marks: Vec<f64>,
    pub mark_label_inset: f64,
    pub mark_label_rise: f64,
    pub point_label_drop: f64,
}

impl ChartGeometry {
    pub fn default_v1() -> Self {
        Self {
            width: 400.0,
            height: 200.0,
            padding: 40.0,
            max_score: 20.0,
            marks: vec![0.0, 5.0, 10.0, 15.0, 20.0],
            mark_label_inset: 10.0,
            mark_label_rise: 4.0,
            point_label_drop: 20.0,
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.padding
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding
    }

    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Vertical mapping shared by data points and gridlines: 0 sits on the
    /// plot bottom, `max_score` on the plot top.
    pub fn y_for(&self, value: f64) -> f64 {
        self.plot_bottom() - (value / self.max_score) * self.plot_height()
    }

    pub fn mark_label_x(&self) -> f64 {
        self.padding - self.mark_label_inset
    }

    /// Baseline of a gridline's mark label, just below the line at `y`.
    pub fn mark_label_y(&self, y: f64) -> f64 {
        y + self.mark_label_rise
    }

    pub fn point_label_y(&self) -> f64 {
        self.plot_bottom() + self.point_label_drop
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/geometry.rs"]
mod tests;
