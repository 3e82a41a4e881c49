//! # djforge_scaffold
//!
//! The scaffolding driver for DjangoForge: invokes the external project
//! and app scaffolding tools, creates the app subpackages and runs every
//! text generator in fixed order.
//!
//! External tools are modeled as the [`ProjectTool`] capability so tests
//! can substitute [`mock::MockTool`] without invoking real tooling. The
//! driver threads an explicit output root through every step; the process
//! working directory is never mutated.
//!
//! ## Example
//!
//! ```rust,no_run
//! use djforge_gen::GeneratorConfig;
//! use djforge_scaffold::{DjangoAdmin, ScaffoldDriver};
//! use djforge_spec::SpecReader;
//! use std::path::Path;
//!
//! let spec = SpecReader::from_path("project.xml").unwrap();
//! let driver = ScaffoldDriver::new(DjangoAdmin, GeneratorConfig::from_env());
//! driver.generate(&spec, Path::new("."), false).unwrap();
//! ```

pub mod driver;
pub mod error;
pub mod mock;
pub mod report;
pub mod tool;

pub use driver::ScaffoldDriver;
pub use error::{ScaffoldError, ScaffoldResult};
pub use report::{GenerationReport, StepRecord};
pub use tool::{DjangoAdmin, ProjectTool};
