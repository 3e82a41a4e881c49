//! Generation report persistence.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Outcome of one completed driver step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub completed_at: DateTime<Utc>,
}

/// Summary of a generation run, persisted inside the generated project
/// for diagnosis. The report is written only after every step succeeded;
/// a failed run leaves no report behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub project_name: String,
    pub app_name: String,
    pub entities: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub steps: Vec<StepRecord>,
}

impl GenerationReport {
    /// Directory under the generated project holding the report.
    pub const REPORT_DIR: &'static str = ".djforge";

    pub fn new(
        project_name: impl Into<String>,
        app_name: impl Into<String>,
        entities: Vec<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            app_name: app_name.into(),
            entities,
            started_at: Utc::now(),
            finished_at: None,
            steps: Vec::new(),
        }
    }

    /// Record a completed step.
    pub fn record(&mut self, name: impl Into<String>) {
        self.steps.push(StepRecord {
            name: name.into(),
            completed_at: Utc::now(),
        });
    }

    /// Persist the report as pretty JSON under `<project>/.djforge/`.
    pub fn save(&mut self, project_dir: &Path) -> ScaffoldResult<PathBuf> {
        self.finished_at = Some(Utc::now());

        let dir = project_dir.join(Self::REPORT_DIR);
        fs::create_dir_all(&dir)?;
        let path = dir.join("generation.json");
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ScaffoldError::Report(e.to_string()))?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Load a previously saved report.
    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ScaffoldError::Report(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut report = GenerationReport::new(
            "library",
            "catalog",
            vec!["Author".to_string(), "Book".to_string()],
        );
        report.record("start_project");
        report.record("models");

        let path = report.save(dir.path()).unwrap();
        assert!(path.ends_with(".djforge/generation.json"));

        let loaded = GenerationReport::load(&path).unwrap();
        assert_eq!(loaded.project_name, "library");
        assert_eq!(loaded.entities.len(), 2);
        assert_eq!(loaded.steps.len(), 2);
        assert!(loaded.finished_at.is_some());
    }
}
