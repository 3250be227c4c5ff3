// JSON capture repository - Reads frame-pacing captures from a directory of JSON files
use crate::application::capture_repository::CaptureRepository;
use crate::domain::capture::{CaptureRecord, LoadError};
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonCaptureRepository {
    capture_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CaptureFile {
    runs: Vec<CaptureRun>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CaptureRun {
    capture_data: CaptureData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CaptureData {
    time_in_seconds: Vec<Option<f64>>,
    ms_between_presents: Vec<Option<f64>>,
}

impl JsonCaptureRepository {
    pub fn new(capture_dir: impl Into<PathBuf>) -> Self {
        Self {
            capture_dir: capture_dir.into(),
        }
    }

    /// A selection names a single file inside the capture directory
    fn resolve(&self, selection_id: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(selection_id);
        let mut components = relative.components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.capture_dir.join(relative)),
            _ => Err(LoadError::InvalidSelection(selection_id.to_string())),
        }
    }

    fn parse(selection_id: &str, bytes: &[u8]) -> Result<CaptureRecord, LoadError> {
        let file: CaptureFile = serde_json::from_slice(bytes)
            .map_err(|e| LoadError::malformed(selection_id, e.to_string()))?;

        let run = file
            .runs
            .into_iter()
            .next()
            .ok_or_else(|| LoadError::malformed(selection_id, "Runs is empty"))?;

        CaptureRecord::new(
            selection_id,
            missing_as_nan(run.capture_data.time_in_seconds),
            missing_as_nan(run.capture_data.ms_between_presents),
        )
    }
}

/// Dropped samples are written as `null`; keep their slot so the chart shows a gap
fn missing_as_nan(column: Vec<Option<f64>>) -> Vec<f64> {
    column.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

#[async_trait]
impl CaptureRepository for JsonCaptureRepository {
    async fn load(&self, selection_id: &str) -> Result<CaptureRecord, LoadError> {
        let path = self.resolve(selection_id)?;
        tracing::debug!("Reading capture {}", path.display());

        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(selection_id.to_string()),
            _ => LoadError::Io {
                id: selection_id.to_string(),
                source: e,
            },
        })?;

        Self::parse(selection_id, &bytes)
    }

    async fn list_captures(&self) -> Result<Vec<String>, LoadError> {
        let dir_id = self.capture_dir.display().to_string();
        let io_error = |source: std::io::Error| LoadError::Io {
            id: dir_id.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.capture_dir)
            .await
            .map_err(io_error)?;

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            if !is_json || !entry.file_type().await.map_err(io_error)?.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                ids.push(name.to_string());
            }
        }

        ids.sort();
        tracing::debug!("Found {} captures in {}", ids.len(), dir_id);
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::series_composer::compose;
    use crate::domain::chart::SeriesKind;
    use crate::domain::display_mode::DisplayMode;
    use std::fs;
    use tempfile::TempDir;

    const GOOD_CAPTURE: &str = r#"{
        "Info": { "ProcessName": "game.exe" },
        "Runs": [
            {
                "CaptureData": {
                    "TimeInSeconds": [0.0, 0.5, 1.0],
                    "MsBetweenPresents": [16.6, 17.1, 15.9],
                    "MsGPUActive": [10.0, 11.0, 9.0]
                }
            },
            {
                "CaptureData": {
                    "TimeInSeconds": [0.0],
                    "MsBetweenPresents": [99.0]
                }
            }
        ]
    }"#;

    fn repo_with(files: &[(&str, &str)]) -> (TempDir, JsonCaptureRepository) {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        let repo = JsonCaptureRepository::new(dir.path());
        (dir, repo)
    }

    #[tokio::test]
    async fn test_load_uses_first_run() {
        let (_dir, repo) = repo_with(&[("good.json", GOOD_CAPTURE)]);

        let record = repo.load("good.json").await.unwrap();
        assert_eq!(record.id(), "good.json");
        assert_eq!(record.time_in_seconds(), &[0.0, 0.5, 1.0]);
        assert_eq!(record.ms_between_presents(), &[16.6, 17.1, 15.9]);
    }

    #[tokio::test]
    async fn test_null_samples_load_as_nan_gaps() {
        let (_dir, repo) = repo_with(&[(
            "gap.json",
            r#"{ "Runs": [ { "CaptureData": { "TimeInSeconds": [0.0, 0.5, 1.0], "MsBetweenPresents": [16.0, null, 15.0] } } ] }"#,
        )]);

        let record = repo.load("gap.json").await.unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.ms_between_presents()[0], 16.0);
        assert!(record.ms_between_presents()[1].is_nan());
        assert_eq!(record.ms_between_presents()[2], 15.0);

        let payload = compose(&record, DisplayMode::RawPlusAverage);
        let raw = payload.series(SeriesKind::Raw).unwrap();
        assert_eq!(raw.points[1].x, 0.5);
        assert!(raw.points[1].y.is_nan());

        let avg = payload.series(SeriesKind::MovingAverage).unwrap();
        assert_eq!(avg.points[0].y, 16.0);
        assert!(avg.points[1].y.is_nan());
        assert!(avg.points[2].y.is_nan());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let (_dir, repo) = repo_with(&[]);
        let err = repo.load("absent.json").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(id) if id == "absent.json"));
    }

    #[tokio::test]
    async fn test_malformed_shapes() {
        let (_dir, repo) = repo_with(&[
            ("no_runs.json", r#"{ "Info": {} }"#),
            ("empty_runs.json", r#"{ "Runs": [] }"#),
            ("no_data.json", r#"{ "Runs": [ { "CaptureData": { "TimeInSeconds": [0.0] } } ] }"#),
            (
                "mismatch.json",
                r#"{ "Runs": [ { "CaptureData": { "TimeInSeconds": [0.0, 0.5], "MsBetweenPresents": [16.0] } } ] }"#,
            ),
            ("garbage.json", "not json at all"),
        ]);

        for id in [
            "no_runs.json",
            "empty_runs.json",
            "no_data.json",
            "mismatch.json",
            "garbage.json",
        ] {
            let err = repo.load(id).await.unwrap_err();
            assert!(
                matches!(&err, LoadError::Malformed { id: got, .. } if got == id),
                "{}: unexpected error {:?}",
                id,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_rejects_selections_outside_capture_dir() {
        let (_dir, repo) = repo_with(&[("good.json", GOOD_CAPTURE)]);

        for id in ["", "../good.json", "/etc/passwd", "nested/good.json", "."] {
            let err = repo.load(id).await.unwrap_err();
            assert!(matches!(err, LoadError::InvalidSelection(_)), "{:?}: {:?}", id, err);
        }
    }

    #[tokio::test]
    async fn test_list_captures_returns_sorted_json_files() {
        let (dir, repo) = repo_with(&[
            ("b.json", GOOD_CAPTURE),
            ("a.json", GOOD_CAPTURE),
            ("notes.txt", "ignored"),
        ]);
        fs::create_dir(dir.path().join("sub.json")).unwrap();

        assert_eq!(
            repo.list_captures().await.unwrap(),
            vec!["a.json".to_string(), "b.json".to_string()]
        );
    }

    #[tokio::test]
    async fn test_list_captures_missing_dir_is_io_error() {
        let repo = JsonCaptureRepository::new("/nonexistent/frametime-captures");
        assert!(matches!(
            repo.list_captures().await,
            Err(LoadError::Io { .. })
        ));
    }
}
