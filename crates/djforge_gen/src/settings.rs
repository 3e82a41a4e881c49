//! Settings file patching.

use std::path::Path;

use tracing::debug;

use djforge_spec::ProjectSpec;

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::fsutil::{read_source, write_stripped};

/// Marker line the project scaffolding tool emits in `settings.py`.
const INSTALLED_APPS_MARKER: &str = "INSTALLED_APPS = [";

/// Patches the scaffolded `settings.py`: registers the app and the REST
/// framework in `INSTALLED_APPS`, then appends pagination defaults and the
/// database connection block naming the compose `db` service.
pub struct SettingsPatcher<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SettingsPatcher<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Apply the patch to `<project>/<project>/settings.py`.
    ///
    /// A settings file without the `INSTALLED_APPS` marker fails hard: an
    /// unregistered app would only surface as a runtime error in the
    /// generated project.
    pub fn apply(&self, project_dir: &Path, spec: &ProjectSpec) -> GenResult<()> {
        let settings_path = project_dir.join(&spec.project_name).join("settings.py");
        debug!("Patching settings at {:?}", settings_path);

        let mut content = read_source(&settings_path)?;

        let marker_pos = content
            .find(INSTALLED_APPS_MARKER)
            .ok_or_else(|| GenError::MarkerNotFound(settings_path.clone()))?;
        let insert_at = marker_pos + INSTALLED_APPS_MARKER.len();
        content.insert_str(
            insert_at,
            &format!("\n    'rest_framework',\n    '{}',", spec.app_name),
        );

        content.push_str(&self.extra_settings());
        write_stripped(&settings_path, &content)
    }

    fn extra_settings(&self) -> String {
        format!(
            r#"

REST_FRAMEWORK = {{
    'DEFAULT_PAGINATION_CLASS': 'rest_framework.pagination.PageNumberPagination',
    'PAGE_SIZE': 10
}}

DATABASES = {{
    'default': {{
        'ENGINE': 'django.db.backends.postgresql',
        'NAME': '{name}',
        'USER': '{user}',
        'PASSWORD': '{password}',
        'HOST': 'db',
        'PORT': {port},
    }}
}}
"#,
            name = self.config.db_name,
            user = self.config.db_user,
            password = self.config.db_password,
            port = self.config.db_port
        )
    }
}
