//! # djforge_gen
//!
//! Text generators for DjangoForge: container files, settings patch, URL
//! routing, per-entity model/serializer/view modules and admin
//! registration.
//!
//! Every generator is pure string assembly over an already-parsed
//! [`djforge_spec::ProjectSpec`]; the only conditional logic is the
//! field-kind dispatch in the model generator. Generators write into an
//! explicit project directory handed to them by the scaffolding driver —
//! none of them inspects or mutates the process working directory.

pub mod admin;
pub mod config;
pub mod docker;
pub mod error;
pub mod fsutil;
pub mod models;
pub mod serializers;
pub mod settings;
pub mod urls;
pub mod views;

pub use admin::AdminGenerator;
pub use config::GeneratorConfig;
pub use docker::DockerGenerator;
pub use error::{GenError, GenResult};
pub use models::ModelsGenerator;
pub use serializers::SerializersGenerator;
pub use settings::SettingsPatcher;
pub use urls::UrlsGenerator;
pub use views::ViewsGenerator;
