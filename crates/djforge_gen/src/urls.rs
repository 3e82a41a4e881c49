//! URL routing generation.

use std::path::Path;

use tracing::debug;

use djforge_spec::ProjectSpec;

use crate::error::GenResult;
use crate::fsutil::write_stripped;

/// Generator for the app-level router module and the project-level URL
/// configuration.
pub struct UrlsGenerator;

impl UrlsGenerator {
    /// Write `<app>/urls.py` and rewrite `<project>/urls.py`.
    pub fn generate(project_dir: &Path, spec: &ProjectSpec) -> GenResult<()> {
        let app_urls_path = project_dir.join(&spec.app_name).join("urls.py");
        debug!("Writing app urls {:?}", app_urls_path);
        write_stripped(&app_urls_path, &Self::app_urls(spec))?;

        let project_urls_path = project_dir.join(&spec.project_name).join("urls.py");
        debug!("Rewriting project urls {:?}", project_urls_path);
        write_stripped(&project_urls_path, &Self::project_urls(&spec.app_name))
    }

    fn app_urls(spec: &ProjectSpec) -> String {
        let mut content = String::from(
            "from django.urls import path, include\n\
             from rest_framework.routers import DefaultRouter\n\
             from .views.home import home\n",
        );

        for entity in &spec.entities {
            content.push_str(&format!(
                "from .views.{} import {}ViewSet\n",
                entity.module_name(),
                entity.name
            ));
        }

        content.push_str("\nrouter = DefaultRouter()\n");
        for entity in &spec.entities {
            // Route names are pluralized by plain suffix concatenation.
            content.push_str(&format!(
                "router.register(r'{}s', {}ViewSet)\n",
                entity.module_name(),
                entity.name
            ));
        }

        content.push_str(
            "\nurlpatterns = [\n    path('', home, name='home'),\n    path('api/', include(router.urls)),\n]\n",
        );
        content
    }

    fn project_urls(app_name: &str) -> String {
        format!(
            r#"
from django.contrib import admin
from django.urls import path, include

urlpatterns = [
    path('admin/', admin.site.urls),
    path('', include('{app_name}.urls')),
]
"#
        )
    }
}
