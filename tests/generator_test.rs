use std::fs;

use boilerplate_cli::generator::{
    Database, Framework, GeneratorError, GoProjectGenerator, ProjectGenerator, ProjectRequest,
    ProjectType,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn request(
    name: &str,
    project_type: ProjectType,
    framework: Option<Framework>,
    database: Option<Database>,
) -> ProjectRequest {
    ProjectRequest {
        name: name.to_string(),
        project_type,
        framework,
        database,
    }
}

#[test]
fn test_cli_project_tree() {
    let temp = TempDir::new().unwrap();
    let generator = GoProjectGenerator::new(temp.path());

    generator
        .create(&request("shop", ProjectType::Cli, None, None))
        .unwrap();

    let root = temp.path().join("shop");
    for dir in ["cmd", "cmd/app", "internal/config", "pkg"] {
        assert!(root.join(dir).is_dir(), "missing {}", dir);
    }
    assert!(!root.join("api").exists());
    assert!(!root.join("pkg/db").exists());

    let main_go = fs::read_to_string(root.join("cmd/app/main.go")).unwrap();
    assert!(main_go.contains("fmt.Println"));
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module shop\n\ngo 1.20\n"
    );
    assert!(fs::read_to_string(root.join("README.md"))
        .unwrap()
        .starts_with("# shop"));
    assert!(!root.join("internal/config/config.go").exists());
}

#[test]
fn test_api_project_with_fiber_and_postgres() {
    let temp = TempDir::new().unwrap();
    let generator = GoProjectGenerator::new(temp.path());

    generator
        .create(&request(
            "api1",
            ProjectType::Api,
            Some(Framework::Fiber),
            Some(Database::PostgreSQL),
        ))
        .unwrap();

    let root = temp.path().join("api1");
    for dir in ["cmd/app", "internal/config", "pkg/db", "api"] {
        assert!(root.join(dir).is_dir(), "missing {}", dir);
    }

    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module api1\n\ngo 1.20\nrequire github.com/gofiber/fiber/v2 latest\nrequire github.com/lib/pq latest\n"
    );

    let main_go = fs::read_to_string(root.join("cmd/app/main.go")).unwrap();
    assert!(main_go.contains("github.com/gofiber/fiber/v2"));
    assert!(main_go.contains("api1"));
    assert!(!main_go.contains("{{.ProjectName}}"));

    let config_go = fs::read_to_string(root.join("internal/config/config.go")).unwrap();
    assert!(config_go.contains("5432"));
    let db_go = fs::read_to_string(root.join("pkg/db/db.go")).unwrap();
    assert!(db_go.contains("github.com/lib/pq"));
}

#[test]
fn test_api_project_with_mongo_and_no_framework() {
    let temp = TempDir::new().unwrap();
    let generator = GoProjectGenerator::new(temp.path());

    generator
        .create(&request(
            "store",
            ProjectType::Api,
            Some(Framework::None),
            Some(Database::MongoDb),
        ))
        .unwrap();

    let root = temp.path().join("store");
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module store\n\ngo 1.20\nrequire go.mongodb.org/mongo-driver latest\n"
    );
    assert!(fs::read_to_string(root.join("pkg/db/db.go"))
        .unwrap()
        .contains("mongo.NewClient"));
    assert!(fs::read_to_string(root.join("internal/config/config.go"))
        .unwrap()
        .contains("27017"));
}

#[test]
fn test_database_none_writes_no_db_files() {
    let temp = TempDir::new().unwrap();
    let generator = GoProjectGenerator::new(temp.path());

    generator
        .create(&request(
            "plain",
            ProjectType::Api,
            Some(Framework::Echo),
            Some(Database::None),
        ))
        .unwrap();

    let root = temp.path().join("plain");
    assert!(root.join("pkg/db").is_dir());
    assert!(!root.join("pkg/db/db.go").exists());
    assert!(!root.join("internal/config/config.go").exists());
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module plain\n\ngo 1.20\nrequire github.com/labstack/echo/v4 latest\n"
    );
}

#[test]
fn test_empty_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    let generator = GoProjectGenerator::new(temp.path());

    let err = generator
        .create(&request("  ", ProjectType::Cli, None, None))
        .unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyName));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_unwritable_root_reports_path() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let generator = GoProjectGenerator::new(&blocker);
    let err = generator
        .create(&request("shop", ProjectType::Cli, None, None))
        .unwrap_err();

    match err {
        GeneratorError::CreateDir { path, .. } => assert!(path.starts_with(&blocker)),
        other => panic!("unexpected error: {}", other),
    }
}
