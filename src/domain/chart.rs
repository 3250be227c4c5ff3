// Chart domain models - Composed series ready for a renderer
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesKind {
    Raw,
    MovingAverage,
}

impl SeriesKind {
    pub fn id(self) -> &'static str {
        match self {
            SeriesKind::Raw => "raw",
            SeriesKind::MovingAverage => "moving-average",
        }
    }
}

/// Theme color slot a series is stroked with. Resolved by the render adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Main,
    MovingAverage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub color_role: ColorRole,
    pub background_color: String,
    pub line_width: f64,
    pub tension: f64,
    pub point_radius: f64,
    pub y_axis_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub kind: SeriesKind,
    pub label: String,
    pub points: Vec<ChartPoint>,
    /// Paint position; 0 is drawn first and ends up beneath later series.
    pub draw_order: u32,
    pub style: SeriesStyle,
}

impl Series {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

/// Everything a renderer needs to plot one capture: the shared time axis
/// and the series in draw sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<f64>,
    pub series: Vec<Series>,
}

impl ChartPayload {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series(&self, kind: SeriesKind) -> Option<&Series> {
        self.series.iter().find(|s| s.kind == kind)
    }

    /// Series ordered as the legend lists them: the reverse of draw order,
    /// so the top-most line comes first.
    pub fn legend_order(&self) -> Vec<&Series> {
        let mut ordered: Vec<&Series> = self.series.iter().collect();
        ordered.sort_by(|a, b| b.draw_order.cmp(&a.draw_order));
        ordered
    }
}
