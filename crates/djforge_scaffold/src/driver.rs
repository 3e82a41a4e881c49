//! Scaffolding driver: sequences tool invocations and generators.

use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use djforge_gen::{
    AdminGenerator, DockerGenerator, GeneratorConfig, ModelsGenerator, SerializersGenerator,
    SettingsPatcher, UrlsGenerator, ViewsGenerator,
};
use djforge_spec::ProjectSpec;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::report::GenerationReport;
use crate::tool::ProjectTool;

/// Subdirectories created under the app, each seeded with an empty
/// package marker so it is importable.
const APP_PACKAGES: [&str; 3] = ["models", "serializers", "views"];

/// Drives the full generation sequence against an explicit output root.
///
/// The process working directory is never touched: subprocesses receive
/// their working directory explicitly and every generator gets the project
/// directory passed in. Steps run strictly in order; the first failure
/// aborts the run and files already written stay on disk.
pub struct ScaffoldDriver<T: ProjectTool> {
    tool: T,
    config: GeneratorConfig,
}

impl<T: ProjectTool> ScaffoldDriver<T> {
    pub fn new(tool: T, config: GeneratorConfig) -> Self {
        Self { tool, config }
    }

    /// Generate the project skeleton for `spec` under `output_root`.
    ///
    /// With `replace` set, an existing project directory is deleted first
    /// (with a warning); otherwise it is an error.
    pub fn generate(
        &self,
        spec: &ProjectSpec,
        output_root: &Path,
        replace: bool,
    ) -> ScaffoldResult<GenerationReport> {
        let result = self.run(spec, output_root, replace);
        if let Err(e) = &result {
            error!("Failed to generate project: {}", e);
        }
        result
    }

    fn run(
        &self,
        spec: &ProjectSpec,
        output_root: &Path,
        replace: bool,
    ) -> ScaffoldResult<GenerationReport> {
        let project_dir = output_root.join(&spec.project_name);
        let mut report = GenerationReport::new(
            &spec.project_name,
            &spec.app_name,
            spec.entities.iter().map(|e| e.name.clone()).collect(),
        );

        if project_dir.exists() {
            if !replace {
                return Err(ScaffoldError::OutputExists(project_dir));
            }
            warn!(
                "Project directory {:?} already exists. Removing...",
                project_dir
            );
            fs::remove_dir_all(&project_dir)?;
        }

        info!("Creating project skeleton '{}'", spec.project_name);
        self.tool.start_project(&spec.project_name, output_root)?;
        report.record("start_project");

        info!("Creating app '{}'", spec.app_name);
        self.tool.start_app(&spec.app_name, &project_dir)?;
        report.record("start_app");

        let app_dir = project_dir.join(&spec.app_name);
        self.create_app_packages(&app_dir)?;
        report.record("app_packages");

        DockerGenerator::new(&self.config).generate(&project_dir)?;
        report.record("container_files");

        SettingsPatcher::new(&self.config).apply(&project_dir, spec)?;
        report.record("settings");

        UrlsGenerator::generate(&project_dir, spec)?;
        report.record("urls");

        ModelsGenerator::generate(&app_dir, &spec.entities)?;
        report.record("models");

        SerializersGenerator::generate(&app_dir, &spec.entities)?;
        report.record("serializers");

        ViewsGenerator::generate(&app_dir, &spec.project_name, &spec.entities)?;
        report.record("views");

        AdminGenerator::generate(&app_dir, &spec.entities)?;
        report.record("admin");

        report.save(&project_dir)?;
        info!("Project '{}' generated successfully", spec.project_name);
        Ok(report)
    }

    fn create_app_packages(&self, app_dir: &Path) -> ScaffoldResult<()> {
        for package in APP_PACKAGES {
            let dir = app_dir.join(package);
            fs::create_dir_all(&dir)?;
            fs::write(dir.join("__init__.py"), "")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTool;
    use djforge_spec::{EntitySpec, FieldKind, FieldSpec};

    fn sample_spec() -> ProjectSpec {
        ProjectSpec {
            project_name: "demo".to_string(),
            app_name: "shop".to_string(),
            entities: vec![EntitySpec {
                name: "Product".to_string(),
                fields: vec![FieldSpec {
                    name: "title".to_string(),
                    kind: FieldKind::Char { max_length: 100 },
                    unique: false,
                }],
                meta: None,
            }],
        }
    }

    #[test]
    fn test_existing_output_without_replace_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("demo")).unwrap();

        let tool = MockTool::new();
        let driver = ScaffoldDriver::new(tool, GeneratorConfig::default());
        let err = driver
            .generate(&sample_spec(), dir.path(), false)
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::OutputExists(_)));
        // The tool must not have been invoked at all.
        assert!(driver.tool.calls().is_empty());
    }

    #[test]
    fn test_replace_removes_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("demo").join("stale.txt");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "left over").unwrap();

        let driver = ScaffoldDriver::new(MockTool::new(), GeneratorConfig::default());
        driver.generate(&sample_spec(), dir.path(), true).unwrap();

        assert!(!stale.exists());
        assert!(dir.path().join("demo/manage.py").exists());
    }

    #[test]
    fn test_project_tool_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();

        let driver = ScaffoldDriver::new(
            MockTool::new().fail_start_project(),
            GeneratorConfig::default(),
        );
        let err = driver
            .generate(&sample_spec(), dir.path(), false)
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::ToolFailed { .. }));
        assert!(!driver.tool.was_called("start_app"));
    }

    #[test]
    fn test_app_tool_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();

        let driver = ScaffoldDriver::new(
            MockTool::new().fail_start_app(),
            GeneratorConfig::default(),
        );
        let err = driver
            .generate(&sample_spec(), dir.path(), false)
            .unwrap_err();

        match err {
            ScaffoldError::ToolFailed { tool, stderr } => {
                assert_eq!(tool, "python");
                assert!(stderr.contains("startapp"));
            }
            other => panic!("unexpected error: {other}"),
        }
        // No rollback: the partially scaffolded project stays on disk.
        assert!(dir.path().join("demo/manage.py").exists());
    }
}
