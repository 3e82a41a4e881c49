//! View module generation.

use std::path::Path;

use tracing::debug;

use djforge_spec::EntitySpec;

use crate::error::GenResult;
use crate::fsutil::write_stripped;

/// Generator for per-entity CRUD view sets plus the static home view.
pub struct ViewsGenerator;

impl ViewsGenerator {
    /// Write one view module per entity and the `home` view into
    /// `<app>/views/`.
    pub fn generate(app_dir: &Path, project_name: &str, entities: &[EntitySpec]) -> GenResult<()> {
        let views_dir = app_dir.join("views");

        for entity in entities {
            let path = views_dir.join(format!("{}.py", entity.module_name()));
            debug!("Writing view module {:?}", path);
            write_stripped(&path, &Self::viewset_module(entity))?;
        }

        write_stripped(&views_dir.join("home.py"), &Self::home_module(project_name))
    }

    fn viewset_module(entity: &EntitySpec) -> String {
        format!(
            r#"
from rest_framework import viewsets
from ..models import {name}
from ..serializers.{module} import {name}Serializer

class {name}ViewSet(viewsets.ModelViewSet):
    queryset = {name}.objects.all()
    serializer_class = {name}Serializer
"#,
            name = entity.name,
            module = entity.module_name()
        )
    }

    fn home_module(project_name: &str) -> String {
        format!(
            r#"
from django.http import HttpResponse
from django.shortcuts import render

def home(request):
    return HttpResponse("""
        <h1>Welcome to {project_name}</h1>
        <p>Available endpoints:</p>
        <ul>
            <li><a href="/admin/">Admin Interface</a></li>
            <li><a href="/api/">API Root</a></li>
        </ul>
    """)
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_viewset_module_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("views")).unwrap();

        let entities = vec![EntitySpec {
            name: "Author".to_string(),
            fields: Vec::new(),
            meta: None,
        }];

        ViewsGenerator::generate(dir.path(), "library", &entities).unwrap();

        let module = fs::read_to_string(dir.path().join("views/author.py")).unwrap();
        assert!(module.contains("from ..serializers.author import AuthorSerializer"));
        assert!(module.contains("class AuthorViewSet(viewsets.ModelViewSet):"));
        assert!(module.contains("queryset = Author.objects.all()"));
        assert!(module.contains("serializer_class = AuthorSerializer"));
    }

    #[test]
    fn test_home_view_lists_endpoints() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("views")).unwrap();

        ViewsGenerator::generate(dir.path(), "library", &[]).unwrap();

        let home = fs::read_to_string(dir.path().join("views/home.py")).unwrap();
        assert!(home.contains("<h1>Welcome to library</h1>"));
        assert!(home.contains(r#"<a href="/admin/">"#));
        assert!(home.contains(r#"<a href="/api/">"#));
    }
}
