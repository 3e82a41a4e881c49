//! Mock scaffolding tool for testing.
//!
//! Materializes a minimal Django-shaped skeleton without invoking the real
//! tools, captures calls for verification and can simulate tool failures.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::tool::ProjectTool;

/// Captured call information for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall {
    pub method: String,
    pub name: String,
}

/// Mock project tool for tests.
///
/// `start_project` writes `manage.py` plus a settings package containing
/// the `INSTALLED_APPS` marker, so the settings patcher has something real
/// to work against; `start_app` creates the bare app directory.
#[derive(Default)]
pub struct MockTool {
    captured_calls: RefCell<Vec<CapturedCall>>,
    fail_start_project: bool,
    fail_start_app: bool,
    omit_installed_apps_marker: bool,
}

impl MockTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `start_project` fail like a non-zero tool exit.
    pub fn fail_start_project(mut self) -> Self {
        self.fail_start_project = true;
        self
    }

    /// Make `start_app` fail like a non-zero tool exit.
    pub fn fail_start_app(mut self) -> Self {
        self.fail_start_app = true;
        self
    }

    /// Write a settings file without the `INSTALLED_APPS` marker.
    pub fn omit_installed_apps_marker(mut self) -> Self {
        self.omit_installed_apps_marker = true;
        self
    }

    /// Get all captured calls.
    pub fn calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.borrow().clone()
    }

    /// Check if a specific method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.captured_calls
            .borrow()
            .iter()
            .any(|c| c.method == method)
    }

    fn record(&self, method: &str, name: &str) {
        self.captured_calls.borrow_mut().push(CapturedCall {
            method: method.to_string(),
            name: name.to_string(),
        });
    }
}

impl ProjectTool for MockTool {
    fn start_project(&self, project_name: &str, cwd: &Path) -> ScaffoldResult<()> {
        self.record("start_project", project_name);
        if self.fail_start_project {
            return Err(ScaffoldError::ToolFailed {
                tool: "django-admin".to_string(),
                stderr: "simulated startproject failure".to_string(),
            });
        }

        let project_dir = cwd.join(project_name);
        let package_dir = project_dir.join(project_name);
        fs::create_dir_all(&package_dir)?;

        fs::write(project_dir.join("manage.py"), MANAGE_PY)?;
        fs::write(package_dir.join("__init__.py"), "")?;
        let settings = if self.omit_installed_apps_marker {
            "DEBUG = True\n".to_string()
        } else {
            settings_skeleton(project_name)
        };
        fs::write(package_dir.join("settings.py"), settings)?;
        fs::write(package_dir.join("urls.py"), "urlpatterns = []\n")?;
        Ok(())
    }

    fn start_app(&self, app_name: &str, project_dir: &Path) -> ScaffoldResult<()> {
        self.record("start_app", app_name);
        if self.fail_start_app {
            return Err(ScaffoldError::ToolFailed {
                tool: "python".to_string(),
                stderr: "simulated startapp failure".to_string(),
            });
        }

        let app_dir = project_dir.join(app_name);
        fs::create_dir_all(&app_dir)?;
        fs::write(app_dir.join("__init__.py"), "")?;
        fs::write(
            app_dir.join("apps.py"),
            format!("from django.apps import AppConfig\n\nclass {}Config(AppConfig):\n    name = '{}'\n", app_name, app_name),
        )?;
        fs::write(
            app_dir.join("admin.py"),
            "from django.contrib import admin\n",
        )?;
        Ok(())
    }
}

const MANAGE_PY: &str = "#!/usr/bin/env python\nimport sys\n\nif __name__ == '__main__':\n    from django.core.management import execute_from_command_line\n    execute_from_command_line(sys.argv)\n";

fn settings_skeleton(project_name: &str) -> String {
    format!(
        r#"
SECRET_KEY = 'test-secret-key'
DEBUG = True
ROOT_URLCONF = '{project_name}.urls'

INSTALLED_APPS = [
    'django.contrib.admin',
    'django.contrib.auth',
    'django.contrib.contenttypes',
    'django.contrib.sessions',
    'django.contrib.messages',
    'django.contrib.staticfiles',
]
"#
    )
}
