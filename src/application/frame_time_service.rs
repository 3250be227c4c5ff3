// Frame-time graph service - Selection-driven load, smooth and compose pipeline
use crate::application::capture_repository::CaptureRepository;
use crate::application::series_composer::SeriesComposer;
use crate::domain::capture::{CaptureRecord, LoadError};
use crate::domain::chart::ChartPayload;
use crate::domain::display_mode::DisplayMode;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineStatus {
    Idle,
    Loading { selection_id: String },
    Ready { selection_id: String },
    Failed { selection_id: String, reason: String },
}

/// What the chart should currently show.
///
/// `payload` is the last payload that composed successfully. It survives a
/// failed load, so a bad selection never blanks a good chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphView {
    pub status: PipelineStatus,
    pub mode: DisplayMode,
    pub payload: Option<Arc<ChartPayload>>,
}

#[derive(Debug)]
pub enum SelectOutcome {
    Ready(Arc<ChartPayload>),
    Failed(LoadError),
    /// A newer selection started while this one was loading; its result was dropped.
    Stale,
}

struct PipelineState {
    generation: u64,
    mode: DisplayMode,
    record: Option<Arc<CaptureRecord>>,
}

pub struct FrameTimeGraphService {
    repository: Arc<dyn CaptureRepository>,
    composer: SeriesComposer,
    state: Mutex<PipelineState>,
    view_tx: watch::Sender<GraphView>,
}

impl FrameTimeGraphService {
    pub fn new(
        repository: Arc<dyn CaptureRepository>,
        composer: SeriesComposer,
        mode: DisplayMode,
    ) -> Self {
        let (view_tx, _) = watch::channel(GraphView {
            status: PipelineStatus::Idle,
            mode,
            payload: None,
        });

        Self {
            repository,
            composer,
            state: Mutex::new(PipelineState {
                generation: 0,
                mode,
                record: None,
            }),
            view_tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<GraphView> {
        self.view_tx.subscribe()
    }

    pub fn view(&self) -> GraphView {
        self.view_tx.borrow().clone()
    }

    pub async fn list_captures(&self) -> Result<Vec<String>, LoadError> {
        self.repository.list_captures().await
    }

    /// Load and display a capture. Only the most recent selection is ever applied.
    pub async fn select(&self, selection_id: &str) -> SelectOutcome {
        let generation = {
            let mut state = self.lock_state();
            state.generation += 1;
            self.view_tx.send_modify(|view| {
                view.status = PipelineStatus::Loading {
                    selection_id: selection_id.to_string(),
                };
            });
            state.generation
        };

        tracing::debug!("Loading capture {} (generation {})", selection_id, generation);
        let result = self.repository.load(selection_id).await;

        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::debug!(
                "Discarding stale capture {} (generation {}, current {})",
                selection_id,
                generation,
                state.generation
            );
            return SelectOutcome::Stale;
        }

        match result {
            Ok(record) => {
                let record = Arc::new(record);
                let payload = Arc::new(self.composer.compose(&record, state.mode));
                tracing::debug!(
                    "Capture {} ready: {} samples, {} series",
                    selection_id,
                    record.len(),
                    payload.series.len()
                );
                state.record = Some(record);

                self.view_tx.send_modify(|view| {
                    view.status = PipelineStatus::Ready {
                        selection_id: selection_id.to_string(),
                    };
                    view.payload = Some(payload.clone());
                });
                SelectOutcome::Ready(payload)
            }
            Err(e) => {
                tracing::warn!("Failed to load capture {}: {}", selection_id, e);
                self.view_tx.send_modify(|view| {
                    view.status = PipelineStatus::Failed {
                        selection_id: selection_id.to_string(),
                        reason: e.to_string(),
                    };
                });
                SelectOutcome::Failed(e)
            }
        }
    }

    /// Switch display mode, recomposing the displayed capture without reloading it.
    pub fn set_mode(&self, mode: impl Into<DisplayMode>) -> Option<Arc<ChartPayload>> {
        let mode = mode.into();
        let mut state = self.lock_state();
        state.mode = mode;

        let payload = state
            .record
            .as_ref()
            .map(|record| Arc::new(self.composer.compose(record, mode)));

        self.view_tx.send_modify(|view| {
            view.mode = mode;
            if let Some(payload) = &payload {
                view.payload = Some(payload.clone());
            }
        });
        payload
    }

    fn lock_state(&self) -> MutexGuard<'_, PipelineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
