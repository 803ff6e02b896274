// Renderer-agnostic chart description, serialized as JSON for the UI layer.
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dash,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub dash: LineDash,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<NaiveDate>,
    /// `None` renders as a gap.
    pub y: Vec<Option<f64>>,
    pub line: Line,
    pub mode: String,
}

impl Trace {
    pub fn lines(name: impl Into<String>, x: Vec<NaiveDate>, y: Vec<Option<f64>>, color: &str, dash: LineDash) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            line: Line {
                color: color.to_string(),
                dash,
            },
            mode: "lines".to_string(),
        }
    }

    /// A flat reference line at `level` across every date in `x`.
    pub fn constant(name: impl Into<String>, x: Vec<NaiveDate>, level: f64, color: &str, dash: LineDash) -> Self {
        let y = vec![Some(level); x.len()];
        Self::lines(name, x, y, color, dash)
    }
}

/// Position in paper coordinates (0..1 of the plot area).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub position: Anchor,
    pub background: String,
    pub border_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub show_grid: bool,
    pub grid_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bands {
    pub mean: f64,
    pub std_dev: f64,
    pub band_width: f64,
    pub upper: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub hover_mode: String,
    pub show_legend: bool,
    pub legend_position: Anchor,
    pub background: String,
    pub bands: Bands,
    pub traces: Vec<Trace>,
    pub annotation: Annotation,
}

impl ChartSpec {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
