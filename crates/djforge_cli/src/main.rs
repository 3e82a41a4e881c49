//! DjangoForge CLI - Main entry point.
//!
//! Reads an XML project description and generates a runnable Django
//! project skeleton: settings, URL routing, per-entity model/serializer/
//! view modules, admin registration and container files.
//!
//! Exit codes:
//! - 0: Success (including help / missing input document)
//! - 1: Any failure

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use djforge_gen::GeneratorConfig;
use djforge_scaffold::{DjangoAdmin, ScaffoldDriver};
use djforge_spec::SpecReader;

/// DjangoForge - Django project generator
#[derive(Parser)]
#[command(name = "djforge")]
#[command(version, about = "DjangoForge - generate a Django project from an XML description")]
#[command(long_about = r#"
DjangoForge reads an XML description of a web application's data model
(project name, app name, entities with typed fields) and generates a
runnable Django project: settings, URL routing, per-entity model,
serializer and view modules, admin registration, and container files
(Dockerfile, docker-compose.yml, requirements.txt).

The project and app skeletons are created with the django-admin and
manage.py scaffolding tools, which must be available on PATH.
"#)]
struct Cli {
    /// Path to the XML project description
    input: Option<PathBuf>,

    /// Output root directory for the generated project
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Replace an existing project directory instead of failing
    #[arg(long)]
    force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let Some(input) = cli.input.clone() else {
        // No input document given: print usage and exit cleanly.
        let _ = Cli::command().print_long_help();
        return ExitCode::SUCCESS;
    };

    if !input.exists() {
        error!("Project description not found: {}", input.display());
        return ExitCode::FAILURE;
    }

    match run(&cli, &input) {
        Ok(project_name) => {
            info!("Django project '{}' generated successfully!", project_name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, input: &Path) -> Result<String> {
    let spec = SpecReader::from_path(input).context("Failed to parse project description")?;

    let driver = ScaffoldDriver::new(DjangoAdmin, GeneratorConfig::from_env());
    driver
        .generate(&spec, &cli.output, cli.force)
        .context("Failed to generate project")?;

    update_readme(&cli.output)?;
    Ok(spec.project_name)
}

/// Rewrite the top-level README: previous content is preserved under an
/// "Original File" heading, followed by the tool's usage text under
/// "Modified File". The first run writes the usage text alone.
fn update_readme(output_root: &Path) -> Result<()> {
    let readme_path = output_root.join("README.md");
    let previous = fs::read_to_string(&readme_path).ok();

    let usage = Cli::command().render_long_help().to_string();
    let content = match previous {
        Some(original) if !original.is_empty() => format!(
            "Original File:\n{}\nModified File:\n{}",
            original,
            usage.trim()
        ),
        _ => usage.trim().to_string(),
    };

    fs::write(&readme_path, content)
        .with_context(|| format!("Failed to write {}", readme_path.display()))?;
    Ok(())
}
