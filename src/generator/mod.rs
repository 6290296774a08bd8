//! Project scaffolding
//!
//! The wizard only knows the [`ProjectGenerator`] contract. [`GoProjectGenerator`]
//! is the implementation the binary ships with: it lays out a package oriented
//! Go module on disk.

pub mod templates;

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

/// Kind of project being scaffolded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Api,
    Cli,
}

/// HTTP framework for API projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    GinGonic,
    Echo,
    Fiber,
    None,
}

/// Database driver for API projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    PostgreSQL,
    MySql,
    MongoDb,
    None,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Api => "API",
            ProjectType::Cli => "CLI",
        }
    }
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::GinGonic => "Gin Gonic",
            Framework::Echo => "Echo",
            Framework::Fiber => "Fiber",
            Framework::None => "None",
        }
    }

    /// Go module required by the framework, if any
    pub fn go_module(&self) -> Option<&'static str> {
        match self {
            Framework::GinGonic => Some("github.com/gin-gonic/gin"),
            Framework::Echo => Some("github.com/labstack/echo/v4"),
            Framework::Fiber => Some("github.com/gofiber/fiber/v2"),
            Framework::None => None,
        }
    }
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::PostgreSQL => "PostgreSQL",
            Database::MySql => "MySQL",
            Database::MongoDb => "MongoDB",
            Database::None => "None",
        }
    }

    /// Go module providing the driver, if any
    pub fn go_module(&self) -> Option<&'static str> {
        match self {
            Database::PostgreSQL => Some("github.com/lib/pq"),
            Database::MySql => Some("github.com/go-sql-driver/mysql"),
            Database::MongoDb => Some("go.mongodb.org/mongo-driver"),
            Database::None => None,
        }
    }

    pub fn default_port(&self) -> Option<u16> {
        match self {
            Database::PostgreSQL => Some(5432),
            Database::MySql => Some(3306),
            Database::MongoDb => Some(27017),
            Database::None => None,
        }
    }
}

/// Everything the wizard collected, handed to the generator in one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    pub project_type: ProjectType,
    pub framework: Option<Framework>,
    pub database: Option<Database>,
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("project name is empty")]
    EmptyName,

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Materialises a [`ProjectRequest`] somewhere. Called once per wizard run,
/// off the event loop thread.
pub trait ProjectGenerator: Send + Sync {
    fn create(&self, request: &ProjectRequest) -> Result<(), GeneratorError>;
}

/// Writes a Go module under `root/<project name>`
#[derive(Debug, Clone)]
pub struct GoProjectGenerator {
    root: PathBuf,
}

impl GoProjectGenerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Package directories for a project kind, relative to the project root
    pub fn layout(project_type: ProjectType) -> &'static [&'static str] {
        match project_type {
            ProjectType::Api => &["cmd", "cmd/app", "internal/config", "pkg", "pkg/db", "api"],
            ProjectType::Cli => &["cmd", "cmd/app", "internal/config", "pkg"],
        }
    }

    /// Relative path and contents of every file the request produces
    pub fn files(request: &ProjectRequest) -> Vec<(PathBuf, String)> {
        let name = request.name.as_str();
        let framework = request.framework.unwrap_or(Framework::None);

        let mut files = vec![
            (
                PathBuf::from("cmd/app/main.go"),
                templates::main_go(framework, name),
            ),
            (PathBuf::from("go.mod"), templates::go_mod(request)),
            (PathBuf::from("README.md"), templates::readme(name)),
        ];

        if let Some(database) = request.database.filter(|db| *db != Database::None) {
            if let Some(config) = templates::config_go(database) {
                files.push((PathBuf::from("internal/config/config.go"), config));
            }
            if let Some(db) = templates::db_go(database, name) {
                files.push((PathBuf::from("pkg/db/db.go"), db));
            }
        }

        files
    }
}

impl ProjectGenerator for GoProjectGenerator {
    fn create(&self, request: &ProjectRequest) -> Result<(), GeneratorError> {
        if request.name.trim().is_empty() {
            return Err(GeneratorError::EmptyName);
        }

        let project_dir = self.root.join(&request.name);
        info!(
            project = %request.name,
            kind = request.project_type.as_str(),
            dir = %project_dir.display(),
            "Scaffolding project"
        );

        for dir in Self::layout(request.project_type) {
            let path = project_dir.join(dir);
            fs::create_dir_all(&path).map_err(|source| GeneratorError::CreateDir {
                path: path.clone(),
                source,
            })?;
        }

        for (relative, contents) in Self::files(request) {
            let path = project_dir.join(&relative);
            debug!(file = %path.display(), "Writing file");
            fs::write(&path, contents).map_err(|source| GeneratorError::WriteFile {
                path: path.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn request(
        project_type: ProjectType,
        framework: Option<Framework>,
        database: Option<Database>,
    ) -> ProjectRequest {
        ProjectRequest {
            name: "shop".to_string(),
            project_type,
            framework,
            database,
        }
    }

    #[test]
    fn test_cli_layout_has_no_api_packages() {
        let layout = GoProjectGenerator::layout(ProjectType::Cli);
        assert!(layout.contains(&"cmd/app"));
        assert!(!layout.contains(&"api"));
        assert!(!layout.contains(&"pkg/db"));
    }

    #[test]
    fn test_files_without_database() {
        let files = GoProjectGenerator::files(&request(ProjectType::Cli, None, None));
        let paths: Vec<_> = files
            .iter()
            .map(|(p, _)| p.to_string_lossy().to_string())
            .collect();
        assert_eq!(paths, vec!["cmd/app/main.go", "go.mod", "README.md"]);
    }

    #[test]
    fn test_files_with_database() {
        let files = GoProjectGenerator::files(&request(
            ProjectType::Api,
            Some(Framework::Echo),
            Some(Database::MySql),
        ));
        assert_eq!(files.len(), 5);
        assert!(files.iter().any(|(p, _)| p == Path::new("internal/config/config.go")));
        assert!(files.iter().any(|(p, _)| p == Path::new("pkg/db/db.go")));
    }

    #[test]
    fn test_database_none_writes_no_driver_files() {
        let files = GoProjectGenerator::files(&request(
            ProjectType::Api,
            Some(Framework::Fiber),
            Some(Database::None),
        ));
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Framework::GinGonic.as_str(), "Gin Gonic");
        assert_eq!(Database::MySql.as_str(), "MySQL");
        assert_eq!(Database::MongoDb.as_str(), "MongoDB");
        assert_eq!(ProjectType::Api.as_str(), "API");
    }
}
