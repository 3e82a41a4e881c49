//! Data model for project descriptions.

use serde::{Deserialize, Serialize};

/// A parsed project description.
///
/// Built once by [`crate::reader::SpecReader`] and consumed read-only by
/// every generator afterwards. Invariants enforced at parse time:
/// `project_name` and `app_name` are non-empty and there is at least one
/// entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub project_name: String,
    pub app_name: String,
    pub entities: Vec<EntitySpec>,
}

/// One entity, translated into a generated model plus matching serializer
/// and view module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
    pub meta: Option<EntityMeta>,
}

impl EntitySpec {
    /// Module name used for the entity's generated files.
    pub fn module_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Optional admin-facing display names for an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMeta {
    pub verbose_name: Option<String>,
    pub verbose_name_plural: Option<String>,
}

impl EntityMeta {
    pub fn is_empty(&self) -> bool {
        self.verbose_name.is_none() && self.verbose_name_plural.is_none()
    }
}

/// One named, typed attribute of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub unique: bool,
}

impl FieldSpec {
    /// A field literally named `id` of a non-relational kind is the
    /// entity's primary key.
    pub fn is_primary_key(&self) -> bool {
        self.name == "id" && !self.kind.is_relational()
    }
}

/// Target of a relational field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relation {
    /// Name of the referenced entity.
    pub target: String,
    /// Optional inverse-relation accessor name.
    pub related_name: Option<String>,
}

/// Closed set of recognized field kinds with kind-specific payloads.
///
/// Parsing rejects anything outside this set, so generators never see an
/// unrecognized kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Bounded text with a mandatory length limit.
    Char { max_length: u32 },
    Text,
    Email,
    Integer,
    Boolean,
    /// `default_now` is set when the document requests the recognized
    /// `timezone.now` default.
    DateTime { default_now: bool },
    OneToOne(Relation),
    ForeignKey(Relation),
    ManyToMany(Relation),
}

impl FieldKind {
    /// The Django declaration name emitted for this kind.
    pub fn declaration_name(&self) -> &'static str {
        match self {
            FieldKind::Char { .. } => "CharField",
            FieldKind::Text => "TextField",
            FieldKind::Email => "EmailField",
            FieldKind::Integer => "IntegerField",
            FieldKind::Boolean => "BooleanField",
            FieldKind::DateTime { .. } => "DateTimeField",
            FieldKind::OneToOne(_) => "OneToOneField",
            FieldKind::ForeignKey(_) => "ForeignKey",
            FieldKind::ManyToMany(_) => "ManyToManyField",
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            FieldKind::OneToOne(_) | FieldKind::ForeignKey(_) | FieldKind::ManyToMany(_)
        )
    }

    /// The relation payload for relational kinds.
    pub fn relation(&self) -> Option<&Relation> {
        match self {
            FieldKind::OneToOne(r) | FieldKind::ForeignKey(r) | FieldKind::ManyToMany(r) => Some(r),
            _ => None,
        }
    }
}
