//! Pure transformations from API payloads into the shapes the components draw.
//!
//! Nothing in here touches the DOM or the network, so every builder can be
//! exercised directly from tests.

pub mod fees;
pub mod format;
pub mod forex;
pub mod insights;
pub mod loan_risk;
pub mod segmentation;

/// One named series of values, aligned with the chart's categories.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Axis titles.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    pub x: String,
    pub y: String,
}

impl Axes {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub axes: Axes,
    pub categories: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl BarChart {
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub axes: Axes,
    pub categories: Vec<String>,
    pub dataset: Dataset,
    /// Fill the area under the line.
    pub area: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterGroup {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub axes: Axes,
    pub groups: Vec<ScatterGroup>,
}

/// Everything the chart component knows how to draw.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartSpec {
    Bar(BarChart),
    Line(LineChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Bar(chart) => &chart.title,
            ChartSpec::Line(chart) => &chart.title,
            ChartSpec::Scatter(chart) => &chart.title,
        }
    }
}

impl From<BarChart> for ChartSpec {
    fn from(chart: BarChart) -> Self {
        ChartSpec::Bar(chart)
    }
}

impl From<LineChart> for ChartSpec {
    fn from(chart: LineChart) -> Self {
        ChartSpec::Line(chart)
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(chart: ScatterChart) -> Self {
        ChartSpec::Scatter(chart)
    }
}

/// Pre-formatted table cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell under `header` in row `row`.
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| *h == header)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// A labelled headline figure.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryItem {
    pub label: String,
    pub value: String,
}

impl SummaryItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
