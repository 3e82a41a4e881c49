//! External scaffolding tool invocation.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Capability the driver depends on to create the base project skeleton.
///
/// Production code talks to `django-admin` and `manage.py`; tests inject
/// [`crate::mock::MockTool`] instead.
pub trait ProjectTool {
    /// Create the base project skeleton named `project_name` inside `cwd`.
    fn start_project(&self, project_name: &str, cwd: &Path) -> ScaffoldResult<()>;

    /// Create an app named `app_name` inside the project directory.
    fn start_app(&self, app_name: &str, project_dir: &Path) -> ScaffoldResult<()>;
}

/// The real Django scaffolding tools, invoked as synchronous subprocesses.
///
/// Invocations block until the tool exits; there is no timeout or retry.
pub struct DjangoAdmin;

impl DjangoAdmin {
    /// Check whether `django-admin` is runnable on this system.
    pub fn is_available() -> bool {
        Command::new("django-admin")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn run(tool: &str, args: &[&str], cwd: &Path) -> ScaffoldResult<()> {
        info!("Running {} {} in {:?}", tool, args.join(" "), cwd);

        let output = Command::new(tool)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| ScaffoldError::ToolSpawn {
                tool: tool.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ScaffoldError::ToolFailed {
                tool: tool.to_string(),
                stderr,
            });
        }

        Ok(())
    }
}

impl ProjectTool for DjangoAdmin {
    fn start_project(&self, project_name: &str, cwd: &Path) -> ScaffoldResult<()> {
        Self::run("django-admin", &["startproject", project_name], cwd)
    }

    fn start_app(&self, app_name: &str, project_dir: &Path) -> ScaffoldResult<()> {
        Self::run("python", &["manage.py", "startapp", app_name], project_dir)
    }
}
