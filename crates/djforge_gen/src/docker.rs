//! Container and dependency manifest generation.

use std::path::Path;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GenResult;
use crate::fsutil::write_stripped;

/// Generator for the Dockerfile, the compose file and the pinned
/// requirements manifest. Content is fixed-shape, parameterized only by
/// the configured versions and database credentials.
pub struct DockerGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DockerGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Write all three container files into the project directory.
    pub fn generate(&self, project_dir: &Path) -> GenResult<()> {
        debug!("Generating container files in {:?}", project_dir);

        write_stripped(&project_dir.join("Dockerfile"), &self.dockerfile())?;
        write_stripped(
            &project_dir.join("docker-compose.yml"),
            &self.compose_file(),
        )?;
        write_stripped(&project_dir.join("requirements.txt"), &self.requirements())?;
        Ok(())
    }

    fn dockerfile(&self) -> String {
        format!(
            r#"
FROM {image}

ENV PYTHONUNBUFFERED=1
WORKDIR /app

COPY requirements.txt .
RUN pip install -r requirements.txt

COPY . .
"#,
            image = self.config.docker_image
        )
    }

    fn compose_file(&self) -> String {
        format!(
            r#"
services:
  web:
    build: .
    command: python manage.py runserver 0.0.0.0:8000
    volumes:
      - .:/app
    ports:
      - "8000:8000"
    depends_on:
      - db
    environment:
      - DATABASE_URL=postgres://{user}:{password}@db:{port}/{name}

  db:
    image: postgres:13
    volumes:
      - postgres_data:/var/lib/postgresql/data
    environment:
      - POSTGRES_DB={name}
      - POSTGRES_USER={user}
      - POSTGRES_PASSWORD={password}

volumes:
  postgres_data:
"#,
            user = self.config.db_user,
            password = self.config.db_password,
            port = self.config.db_port,
            name = self.config.db_name
        )
    }

    fn requirements(&self) -> String {
        format!(
            r#"
Django=={django}
djangorestframework=={drf}
asgiref=={asgiref}
sqlparse=={sqlparse}
psycopg2-binary>=2.9,<3.0
"#,
            django = self.config.django_version,
            drf = self.config.drf_version,
            asgiref = self.config.asgiref_version,
            sqlparse = self.config.sqlparse_version
        )
    }
}
