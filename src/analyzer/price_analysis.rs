use crate::analyzer::chart::{Anchor, Annotation, Axis, Bands, ChartSpec, LineDash, Trace};
use crate::analyzer::stats;
use crate::model::{Series, Summary};

/// Trait defining the interface for a forward PE analyzer.
pub trait Analyzer {
    fn summarize(&self, series: &Series) -> Summary;
    /// Builds the chart with mean and `mean ± band_width·σ` reference lines.
    /// The series must not be empty.
    fn analyze(&self, series: &Series, symbol: &str, band_width: f64) -> ChartSpec;
}

/// Implementation of the forward PE analyzer.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyzerImpl {
    fn default() -> Self {
        Self::new()
    }
}

fn axis(title: &str) -> Axis {
    Axis {
        title: title.to_string(),
        show_grid: true,
        grid_color: "LightGray".to_string(),
    }
}

impl Analyzer for AnalyzerImpl {
    /// Mean, population standard deviation and extremes, ignoring missing values.
    fn summarize(&self, series: &Series) -> Summary {
        let values = series.values();
        Summary {
            count: series.len(),
            missing: series.len() - values.len(),
            mean: stats::mean(&values),
            std_dev: stats::std_dev(&values),
            max: stats::max(&values),
            min: stats::min(&values),
        }
    }

    fn analyze(&self, series: &Series, symbol: &str, band_width: f64) -> ChartSpec {
        debug_assert!(!series.is_empty(), "analyze called with an empty series");

        let values = series.values();
        let mean = stats::mean(&values).unwrap_or(f64::NAN);
        let std_dev = stats::std_dev(&values).unwrap_or(f64::NAN);
        let offset = band_width * std_dev;
        let bands = Bands {
            mean,
            std_dev,
            band_width,
            upper: mean + offset,
            lower: mean - offset,
        };

        // Undated rows count toward the statistics but have no place on the axis.
        let (dates, raw): (Vec<_>, Vec<_>) = series.dated().into_iter().unzip();
        let traces = vec![
            Trace::lines("Forward PE", dates.clone(), raw, "blue", LineDash::Solid),
            Trace::constant("Mean", dates.clone(), bands.mean, "red", LineDash::Dash),
            Trace::constant(format!("Mean + {}σ", band_width), dates.clone(), bands.upper, "gray", LineDash::Dot),
            Trace::constant(format!("Mean - {}σ", band_width), dates, bands.lower, "gray", LineDash::Dot),
        ];

        ChartSpec {
            title: format!("{} Forward PE Ratio Analysis", symbol),
            x_axis: axis("Date"),
            y_axis: axis("Forward PE Ratio"),
            hover_mode: "x unified".to_string(),
            show_legend: true,
            legend_position: Anchor { x: 0.01, y: 0.99 },
            background: "white".to_string(),
            annotation: Annotation {
                text: format!("Mean: {:.2}\nStd Dev: {:.2}", mean, std_dev),
                position: Anchor { x: 0.02, y: 0.98 },
                background: "rgba(255,255,255,0.8)".to_string(),
                border_color: "gray".to_string(),
            },
            bands,
            traces,
        }
    }
}
