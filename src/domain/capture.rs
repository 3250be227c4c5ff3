// Capture domain model
use thiserror::Error;

/// Why a capture could not be turned into a [`CaptureRecord`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid capture selection {0:?}")]
    InvalidSelection(String),

    #[error("capture {0:?} not found")]
    NotFound(String),

    #[error("failed to read capture {id:?}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed capture {id:?}: {reason}")]
    Malformed { id: String, reason: String },
}

impl LoadError {
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// One benchmarking run's frame-pacing time series.
///
/// `time_in_seconds[i]` is the timestamp of the present whose interval is
/// `ms_between_presents[i]`; both vectors always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRecord {
    id: String,
    time_in_seconds: Vec<f64>,
    ms_between_presents: Vec<f64>,
}

impl CaptureRecord {
    pub fn new(
        id: impl Into<String>,
        time_in_seconds: Vec<f64>,
        ms_between_presents: Vec<f64>,
    ) -> Result<Self, LoadError> {
        let id = id.into();

        if time_in_seconds.len() != ms_between_presents.len() {
            return Err(LoadError::malformed(
                id,
                format!(
                    "TimeInSeconds has {} samples but MsBetweenPresents has {}",
                    time_in_seconds.len(),
                    ms_between_presents.len()
                ),
            ));
        }

        // NaN timestamps are left alone, only an explicit step backwards is rejected
        if let Some(i) = time_in_seconds.windows(2).position(|w| w[1] < w[0]) {
            return Err(LoadError::malformed(
                id,
                format!("TimeInSeconds decreases at index {}", i + 1),
            ));
        }

        Ok(Self {
            id,
            time_in_seconds,
            ms_between_presents,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn time_in_seconds(&self) -> &[f64] {
        &self.time_in_seconds
    }

    pub fn ms_between_presents(&self) -> &[f64] {
        &self.ms_between_presents
    }

    pub fn len(&self) -> usize {
        self.time_in_seconds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_in_seconds.is_empty()
    }
}
