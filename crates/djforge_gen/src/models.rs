//! Model module generation.

use std::path::Path;

use tracing::debug;

use djforge_spec::{EntitySpec, FieldKind, FieldSpec};

use crate::error::GenResult;
use crate::fsutil::write_stripped;

/// Generator for per-entity model modules and the models package index.
pub struct ModelsGenerator;

impl ModelsGenerator {
    /// Write one model module per entity into `<app>/models/` and
    /// regenerate `__init__.py` so every entity is re-exported.
    pub fn generate(app_dir: &Path, entities: &[EntitySpec]) -> GenResult<()> {
        let models_dir = app_dir.join("models");
        let mut exports = Vec::new();

        for entity in entities {
            let path = models_dir.join(format!("{}.py", entity.module_name()));
            debug!("Writing model module {:?}", path);
            write_stripped(&path, &Self::model_module(entity))?;
            exports.push(format!(
                "from .{} import {}",
                entity.module_name(),
                entity.name
            ));
        }

        write_stripped(&models_dir.join("__init__.py"), &exports.join("\n"))
    }

    fn model_module(entity: &EntitySpec) -> String {
        let mut content = format!(
            "from django.db import models\nfrom django.utils import timezone\n\nclass {}(models.Model):\n",
            entity.name
        );

        for field in &entity.fields {
            content.push_str(&format!(
                "    {} = models.{}\n",
                field.name,
                Self::field_declaration(field)
            ));
        }

        if let Some(meta) = entity.meta.as_ref().filter(|m| !m.is_empty()) {
            content.push_str("\n    class Meta:\n");
            if let Some(name) = &meta.verbose_name {
                content.push_str(&format!("        verbose_name = '{}'\n", name));
            }
            if let Some(plural) = &meta.verbose_name_plural {
                content.push_str(&format!("        verbose_name_plural = '{}'\n", plural));
            }
        }

        content.push_str("\n    def __str__(self):\n        return str(self.id)\n");
        content
    }

    /// The declaration call for one field, dispatched on its kind.
    ///
    /// Emitted after the `models.` prefix, e.g.
    /// `CharField(max_length=100, unique=True)`.
    pub fn field_declaration(field: &FieldSpec) -> String {
        let mut args: Vec<String> = Vec::new();

        match &field.kind {
            FieldKind::Char { max_length } => {
                args.push(format!("max_length={max_length}"));
                if field.unique {
                    args.push("unique=True".to_string());
                }
            }
            FieldKind::DateTime { default_now } => {
                if *default_now {
                    args.push("default=timezone.now".to_string());
                }
            }
            FieldKind::OneToOne(relation) | FieldKind::ForeignKey(relation) => {
                args.push(format!("'{}'", relation.target));
                args.push("on_delete=models.CASCADE".to_string());
                if let Some(related) = &relation.related_name {
                    args.push(format!("related_name='{related}'"));
                }
            }
            FieldKind::ManyToMany(relation) => {
                args.push(format!("'{}'", relation.target));
                if let Some(related) = &relation.related_name {
                    args.push(format!("related_name='{related}'"));
                }
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Integer | FieldKind::Boolean => {}
        }

        if field.is_primary_key() {
            args.push("primary_key=True".to_string());
        }

        format!("{}({})", field.kind.declaration_name(), args.join(", "))
    }
}
