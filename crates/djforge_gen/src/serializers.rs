//! Serializer module generation.

use std::path::Path;

use tracing::debug;

use djforge_spec::EntitySpec;

use crate::error::GenResult;
use crate::fsutil::write_stripped;

/// Generator for per-entity serializer modules.
pub struct SerializersGenerator;

impl SerializersGenerator {
    /// Write one serializer module per entity into `<app>/serializers/`.
    pub fn generate(app_dir: &Path, entities: &[EntitySpec]) -> GenResult<()> {
        let serializers_dir = app_dir.join("serializers");

        for entity in entities {
            let path = serializers_dir.join(format!("{}.py", entity.module_name()));
            debug!("Writing serializer module {:?}", path);
            write_stripped(&path, &Self::serializer_module(entity))?;
        }
        Ok(())
    }

    fn serializer_module(entity: &EntitySpec) -> String {
        format!(
            r#"
from rest_framework import serializers
from ..models import {name}

class {name}Serializer(serializers.ModelSerializer):
    class Meta:
        model = {name}
        fields = '__all__'
"#,
            name = entity.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_serializer_module_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("serializers")).unwrap();

        let entities = vec![EntitySpec {
            name: "Book".to_string(),
            fields: Vec::new(),
            meta: None,
        }];

        SerializersGenerator::generate(dir.path(), &entities).unwrap();

        let module = fs::read_to_string(dir.path().join("serializers/book.py")).unwrap();
        assert!(module.contains("from ..models import Book"));
        assert!(module.contains("class BookSerializer(serializers.ModelSerializer):"));
        assert!(module.contains("model = Book"));
        assert!(module.contains("fields = '__all__'"));
    }
}
