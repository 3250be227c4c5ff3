// Render adapter - Maps a chart payload and theme onto the chart widget's configuration
use crate::domain::chart::{ChartPayload, ChartPoint, ColorRole, Series};
use crate::presentation::theme::{ResolvedTheme, ThemeOptions};
use serde::Serialize;

pub const X_AXIS_TITLE: &str = "Time in Seconds";
pub const Y_AXIS_TITLE: &str = "Ms Between Presents";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderConfig {
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<f64>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: &'static str,
    pub label: String,
    pub data: Vec<ChartPoint>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: f64,
    pub tension: f64,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
    pub point_radius: f64,
    /// Widget draw order: lower values are painted on top.
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub color: String,
    pub border_color: String,
    pub interaction: Interaction,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Every dataset's value at the nearest index along x
    Index,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: InteractionMode,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
    pub datalabels: DataLabels,
    pub zoom: ZoomPlugin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataLabels {
    pub display: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    Xy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomPlugin {
    pub pan: Pan,
    pub zoom: Zoom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pan {
    pub enabled: bool,
    pub mode: AxisMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zoom {
    pub wheel: Toggle,
    pub pinch: Toggle,
    pub mode: AxisMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Scale,
    pub y: Scale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub title: Title,
}

pub fn render_config(payload: &ChartPayload, theme: &ThemeOptions) -> RenderConfig {
    let theme = theme.resolve();
    let count = payload.series.len() as u32;

    RenderConfig {
        data: ChartData {
            labels: payload.labels.clone(),
            datasets: payload
                .series
                .iter()
                .map(|s| dataset(s, count, &theme))
                .collect(),
        },
        options: chart_options(&theme),
    }
}

fn dataset(series: &Series, count: u32, theme: &ResolvedTheme) -> Dataset {
    let border_color = match series.style.color_role {
        ColorRole::Main => theme.main_color.clone(),
        ColorRole::MovingAverage => theme.moving_average_color.clone(),
    };

    Dataset {
        id: series.id(),
        label: series.label.clone(),
        data: series.points.clone(),
        border_color,
        background_color: series.style.background_color.clone(),
        border_width: series.style.line_width,
        tension: series.style.tension,
        y_axis_id: series.style.y_axis_id.clone(),
        point_radius: series.style.point_radius,
        // First painted series gets the highest widget order
        order: count.saturating_sub(series.draw_order).max(1),
    }
}

fn chart_options(theme: &ResolvedTheme) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        color: theme.text_color.clone(),
        border_color: theme.border_color.clone(),
        interaction: Interaction {
            mode: InteractionMode::Index,
            intersect: false,
        },
        plugins: Plugins {
            // Legend lists the top-most series first
            legend: Legend { reverse: true },
            title: Title {
                display: true,
                text: None,
            },
            datalabels: DataLabels { display: false },
            zoom: ZoomPlugin {
                pan: Pan {
                    enabled: true,
                    mode: AxisMode::Xy,
                },
                zoom: Zoom {
                    wheel: Toggle { enabled: true },
                    pinch: Toggle { enabled: true },
                    mode: AxisMode::Xy,
                },
            },
        },
        scales: Scales {
            x: Scale {
                scale_type: ScaleType::Linear,
                position: Some("bottom".to_string()),
                title: Title {
                    display: true,
                    text: Some(X_AXIS_TITLE.to_string()),
                },
            },
            y: Scale {
                scale_type: ScaleType::Linear,
                position: None,
                title: Title {
                    display: true,
                    text: Some(Y_AXIS_TITLE.to_string()),
                },
            },
        },
    }
}
