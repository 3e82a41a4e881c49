//! # djforge_spec
//!
//! Parsing and validation of XML project descriptions for DjangoForge.
//!
//! A project description names a Django project, one app, and the entities
//! the app manages. Parsing produces an immutable [`ProjectSpec`] that the
//! generator crates consume read-only; all presence and field-type
//! validation happens here, before anything touches the filesystem.
//!
//! ## Example
//!
//! ```rust,no_run
//! use djforge_spec::SpecReader;
//!
//! let spec = SpecReader::from_path("project.xml").unwrap();
//! for entity in &spec.entities {
//!     println!("{} ({} fields)", entity.name, entity.fields.len());
//! }
//! ```

pub mod error;
pub mod models;
pub mod reader;

pub use error::{SpecError, SpecResult};
pub use models::*;
pub use reader::SpecReader;
