//! Admin registration generation.

use std::path::Path;

use tracing::debug;

use djforge_spec::EntitySpec;

use crate::error::GenResult;
use crate::fsutil::write_stripped;

/// Generator for `<app>/admin.py`, registering every entity model with the
/// admin site.
pub struct AdminGenerator;

impl AdminGenerator {
    pub fn generate(app_dir: &Path, entities: &[EntitySpec]) -> GenResult<()> {
        let path = app_dir.join("admin.py");
        debug!("Writing admin module {:?}", path);

        let mut content = String::from("from django.contrib import admin\n");
        for entity in entities {
            content.push_str(&format!("from .models import {}\n", entity.name));
        }
        content.push('\n');
        for entity in entities {
            content.push_str(&format!("admin.site.register({})\n", entity.name));
        }

        write_stripped(&path, &content)
    }
}
