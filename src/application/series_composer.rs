// Series composer - Turns a capture record into the series a display mode asks for
use crate::domain::capture::CaptureRecord;
use crate::domain::chart::{ChartPayload, ChartPoint, ColorRole, Series, SeriesKind, SeriesStyle};
use crate::domain::display_mode::DisplayMode;
use crate::domain::moving_average::{smooth, window_seconds, DEFAULT_WINDOW};

pub const RAW_LABEL: &str = "Ms Between Presents";

const RAW_BACKGROUND: &str = "rgba(75, 192, 192, 0.1)";
const AVERAGE_BACKGROUND: &str = "rgba(255, 99, 132, 0.2)";
const LINE_TENSION: f64 = 0.1;
const Y_AXIS_ID: &str = "y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesComposer {
    window: usize,
}

impl Default for SeriesComposer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl SeriesComposer {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    /// Label for the smoothed series, e.g. "5-Second Moving Average"
    pub fn average_label(&self) -> String {
        format!("{}-Second Moving Average", window_seconds(self.window))
    }

    pub fn compose(&self, record: &CaptureRecord, mode: DisplayMode) -> ChartPayload {
        let labels = record.time_in_seconds().to_vec();
        let mut series = Vec::new();

        // Raw goes first so it is painted beneath the average
        if mode.shows_raw() {
            series.push(self.raw_series(record, series.len() as u32));
        }
        if mode.shows_average() {
            series.push(self.average_series(record, series.len() as u32));
        }

        ChartPayload { labels, series }
    }

    fn raw_series(&self, record: &CaptureRecord, draw_order: u32) -> Series {
        Series {
            kind: SeriesKind::Raw,
            label: RAW_LABEL.to_string(),
            points: zip_points(record.time_in_seconds(), record.ms_between_presents()),
            draw_order,
            style: SeriesStyle {
                color_role: ColorRole::Main,
                background_color: RAW_BACKGROUND.to_string(),
                line_width: 1.0,
                tension: LINE_TENSION,
                point_radius: 0.0,
                y_axis_id: Y_AXIS_ID.to_string(),
            },
        }
    }

    fn average_series(&self, record: &CaptureRecord, draw_order: u32) -> Series {
        let smoothed = smooth(record.ms_between_presents(), self.window);
        Series {
            kind: SeriesKind::MovingAverage,
            label: self.average_label(),
            points: zip_points(record.time_in_seconds(), &smoothed),
            draw_order,
            style: SeriesStyle {
                color_role: ColorRole::MovingAverage,
                background_color: AVERAGE_BACKGROUND.to_string(),
                line_width: 2.0,
                tension: LINE_TENSION,
                point_radius: 0.0,
                y_axis_id: Y_AXIS_ID.to_string(),
            },
        }
    }
}

/// Compose with the default 10-sample window
pub fn compose(record: &CaptureRecord, mode: DisplayMode) -> ChartPayload {
    SeriesComposer::default().compose(record, mode)
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<ChartPoint> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| ChartPoint { x, y })
        .collect()
}
