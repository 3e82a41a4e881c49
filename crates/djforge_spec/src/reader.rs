//! Project description reading and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::{EntityMeta, EntitySpec, FieldKind, FieldSpec, ProjectSpec, Relation};

/// Reader for XML project descriptions.
pub struct SpecReader;

impl SpecReader {
    /// Read and validate a project description from a file.
    pub fn from_path(path: impl AsRef<Path>) -> SpecResult<ProjectSpec> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }

        debug!("Reading project description from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse and validate a project description from XML text.
    pub fn from_str(xml: &str) -> SpecResult<ProjectSpec> {
        let doc: ProjectDoc = quick_xml::de::from_str(xml)?;
        doc.try_into()
    }
}

// Raw document layer. Every element is optional here so that presence
// rules surface as named validation errors instead of serde failures.

#[derive(Debug, Deserialize)]
struct ProjectDoc {
    name: Option<String>,
    app: Option<AppDoc>,
}

#[derive(Debug, Deserialize)]
struct AppDoc {
    name: Option<String>,
    entities: Option<EntitiesDoc>,
}

#[derive(Debug, Deserialize)]
struct EntitiesDoc {
    #[serde(rename = "entity", default)]
    entities: Vec<EntityDoc>,
}

#[derive(Debug, Deserialize)]
struct EntityDoc {
    name: Option<String>,
    fields: Option<FieldsDoc>,
    meta: Option<MetaDoc>,
}

#[derive(Debug, Deserialize)]
struct FieldsDoc {
    #[serde(rename = "field", default)]
    fields: Vec<FieldDoc>,
}

#[derive(Debug, Deserialize)]
struct FieldDoc {
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    max_length: Option<u32>,
    unique: Option<bool>,
    reference: Option<String>,
    related_name: Option<String>,
    default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetaDoc {
    verbose_name: Option<String>,
    verbose_name_plural: Option<String>,
}

impl TryFrom<ProjectDoc> for ProjectSpec {
    type Error = SpecError;

    fn try_from(doc: ProjectDoc) -> SpecResult<Self> {
        let project_name = doc
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| SpecError::MissingElement("project name".to_string()))?;

        let app = doc
            .app
            .ok_or_else(|| SpecError::MissingElement("app".to_string()))?;
        let app_name = app
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| SpecError::MissingElement("app name".to_string()))?;

        let raw_entities = app.entities.map(|e| e.entities).unwrap_or_default();
        if raw_entities.is_empty() {
            return Err(SpecError::NoEntities);
        }

        let entities = raw_entities
            .into_iter()
            .map(EntitySpec::try_from)
            .collect::<SpecResult<Vec<_>>>()?;

        Ok(ProjectSpec {
            project_name,
            app_name,
            entities,
        })
    }
}

impl TryFrom<EntityDoc> for EntitySpec {
    type Error = SpecError;

    fn try_from(doc: EntityDoc) -> SpecResult<Self> {
        let name = doc
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| SpecError::MissingElement("entity name".to_string()))?;

        let fields = doc
            .fields
            .map(|f| f.fields)
            .unwrap_or_default()
            .into_iter()
            .map(FieldSpec::try_from)
            .collect::<SpecResult<Vec<_>>>()?;

        let meta = doc.meta.map(|m| EntityMeta {
            verbose_name: m.verbose_name,
            verbose_name_plural: m.verbose_name_plural,
        });

        Ok(EntitySpec { name, fields, meta })
    }
}

impl TryFrom<FieldDoc> for FieldSpec {
    type Error = SpecError;

    fn try_from(doc: FieldDoc) -> SpecResult<Self> {
        let name = doc
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| SpecError::MissingElement("field name".to_string()))?;
        let kind_name = doc
            .kind
            .ok_or_else(|| SpecError::MissingElement(format!("type on field '{}'", name)))?;

        let kind = match kind_name.as_str() {
            "CharField" => FieldKind::Char {
                max_length: doc.max_length.ok_or(SpecError::MissingFieldAttribute {
                    field: name.clone(),
                    element: "max_length",
                })?,
            },
            "TextField" => FieldKind::Text,
            "EmailField" => FieldKind::Email,
            "IntegerField" => FieldKind::Integer,
            "BooleanField" => FieldKind::Boolean,
            "DateTimeField" => FieldKind::DateTime {
                default_now: doc.default.as_deref() == Some("timezone.now"),
            },
            "OneToOneField" | "ForeignKey" | "ManyToManyField" => {
                let relation = Relation {
                    target: doc.reference.ok_or(SpecError::MissingFieldAttribute {
                        field: name.clone(),
                        element: "reference",
                    })?,
                    related_name: doc.related_name,
                };
                match kind_name.as_str() {
                    "OneToOneField" => FieldKind::OneToOne(relation),
                    "ForeignKey" => FieldKind::ForeignKey(relation),
                    _ => FieldKind::ManyToMany(relation),
                }
            }
            other => {
                return Err(SpecError::UnsupportedFieldType {
                    field: name,
                    kind: other.to_string(),
                })
            }
        };

        Ok(FieldSpec {
            name,
            kind,
            unique: doc.unique.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<django_project>
    <name>testproject</name>
    <app>
        <name>testapp</name>
        <entities>
            <entity>
                <name>TestModel</name>
                <fields>
                    <field>
                        <name>title</name>
                        <type>CharField</type>
                        <max_length>100</max_length>
                    </field>
                </fields>
            </entity>
        </entities>
    </app>
</django_project>"#;

    #[test]
    fn test_parse_minimal_document() {
        let spec = SpecReader::from_str(MINIMAL).unwrap();
        assert_eq!(spec.project_name, "testproject");
        assert_eq!(spec.app_name, "testapp");
        assert_eq!(spec.entities.len(), 1);

        let entity = &spec.entities[0];
        assert_eq!(entity.name, "TestModel");
        assert_eq!(entity.fields.len(), 1);
        assert_eq!(entity.fields[0].kind, FieldKind::Char { max_length: 100 });
        assert!(!entity.fields[0].unique);
    }

    #[test]
    fn test_parse_full_document() {
        let xml = r#"
<django_project>
    <name>library</name>
    <app>
        <name>catalog</name>
        <entities>
            <entity>
                <name>Author</name>
                <fields>
                    <field>
                        <name>email</name>
                        <type>EmailField</type>
                        <unique>true</unique>
                    </field>
                    <field>
                        <name>joined</name>
                        <type>DateTimeField</type>
                        <default>timezone.now</default>
                    </field>
                </fields>
                <meta>
                    <verbose_name>Author</verbose_name>
                    <verbose_name_plural>Authors</verbose_name_plural>
                </meta>
            </entity>
            <entity>
                <name>Book</name>
                <fields>
                    <field>
                        <name>author</name>
                        <type>ForeignKey</type>
                        <reference>Author</reference>
                        <related_name>books</related_name>
                    </field>
                    <field>
                        <name>tags</name>
                        <type>ManyToManyField</type>
                        <reference>Tag</reference>
                    </field>
                </fields>
            </entity>
        </entities>
    </app>
</django_project>"#;

        let spec = SpecReader::from_str(xml).unwrap();
        assert_eq!(spec.entities.len(), 2);

        let author = &spec.entities[0];
        assert!(author.fields[0].unique);
        assert_eq!(
            author.fields[1].kind,
            FieldKind::DateTime { default_now: true }
        );
        let meta = author.meta.as_ref().unwrap();
        assert_eq!(meta.verbose_name.as_deref(), Some("Author"));

        let book = &spec.entities[1];
        let relation = book.fields[0].kind.relation().unwrap();
        assert_eq!(relation.target, "Author");
        assert_eq!(relation.related_name.as_deref(), Some("books"));
        assert!(book.fields[1].kind.relation().unwrap().related_name.is_none());
    }

    #[test]
    fn test_unrecognized_default_is_ignored() {
        let xml = r#"
<django_project>
    <name>p</name>
    <app>
        <name>a</name>
        <entities>
            <entity>
                <name>E</name>
                <fields>
                    <field>
                        <name>seen</name>
                        <type>DateTimeField</type>
                        <default>now()</default>
                    </field>
                </fields>
            </entity>
        </entities>
    </app>
</django_project>"#;
        let spec = SpecReader::from_str(xml).unwrap();
        assert_eq!(
            spec.entities[0].fields[0].kind,
            FieldKind::DateTime { default_now: false }
        );
    }

    #[test]
    fn test_missing_project_name() {
        let xml = "<django_project><app><name>a</name></app></django_project>";
        let err = SpecReader::from_str(xml).unwrap_err();
        assert!(matches!(err, SpecError::MissingElement(ref e) if e == "project name"));
    }

    #[test]
    fn test_missing_app_name() {
        let xml = "<django_project><name>p</name><app><entities/></app></django_project>";
        let err = SpecReader::from_str(xml).unwrap_err();
        assert!(matches!(err, SpecError::MissingElement(ref e) if e == "app name"));
    }

    #[test]
    fn test_no_entities() {
        let xml =
            "<django_project><name>p</name><app><name>a</name><entities/></app></django_project>";
        let err = SpecReader::from_str(xml).unwrap_err();
        assert!(matches!(err, SpecError::NoEntities));
    }

    #[test]
    fn test_malformed_document() {
        let err = SpecReader::from_str("<django_project><name>p</unclosed>").unwrap_err();
        assert!(matches!(err, SpecError::Parse(_)));
    }

    #[test]
    fn test_unsupported_field_type() {
        let xml = r#"
<django_project>
    <name>p</name>
    <app>
        <name>a</name>
        <entities>
            <entity>
                <name>E</name>
                <fields>
                    <field><name>blob</name><type>BinaryField</type></field>
                </fields>
            </entity>
        </entities>
    </app>
</django_project>"#;
        let err = SpecReader::from_str(xml).unwrap_err();
        match err {
            SpecError::UnsupportedFieldType { field, kind } => {
                assert_eq!(field, "blob");
                assert_eq!(kind, "BinaryField");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_char_field_requires_max_length() {
        let xml = r#"
<django_project>
    <name>p</name>
    <app>
        <name>a</name>
        <entities>
            <entity>
                <name>E</name>
                <fields>
                    <field><name>title</name><type>CharField</type></field>
                </fields>
            </entity>
        </entities>
    </app>
</django_project>"#;
        let err = SpecReader::from_str(xml).unwrap_err();
        assert!(matches!(
            err,
            SpecError::MissingFieldAttribute { element: "max_length", .. }
        ));
    }

    #[test]
    fn test_relation_requires_reference() {
        let xml = r#"
<django_project>
    <name>p</name>
    <app>
        <name>a</name>
        <entities>
            <entity>
                <name>E</name>
                <fields>
                    <field><name>owner</name><type>OneToOneField</type></field>
                </fields>
            </entity>
        </entities>
    </app>
</django_project>"#;
        let err = SpecReader::from_str(xml).unwrap_err();
        assert!(matches!(
            err,
            SpecError::MissingFieldAttribute { element: "reference", .. }
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.xml");
        std::fs::write(&path, MINIMAL).unwrap();

        let spec = SpecReader::from_path(&path).unwrap();
        assert_eq!(spec.project_name, "testproject");
    }

    #[test]
    fn test_from_path_not_found() {
        let err = SpecReader::from_path("no-such-file.xml").unwrap_err();
        assert!(matches!(err, SpecError::NotFound(_)));
    }
}
