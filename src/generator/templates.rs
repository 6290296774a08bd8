//! Go source and manifest templates
//!
//! Templates use `{{.Name}}` placeholders that are replaced with plain string
//! substitution; no template engine is involved.

use super::{Database, Framework, ProjectRequest};

const PROJECT_NAME: &str = "{{.ProjectName}}";
const DEFAULT_PORT: &str = "{{.DefaultPort}}";
const DRIVER_IMPORT: &str = "{{.DriverImport}}";

const GO_VERSION: &str = "1.20";

const GIN_MAIN: &str = r#"package main

import (
	"github.com/gin-gonic/gin"
)

func main() {
	r := gin.Default()
	r.GET("/", func(c *gin.Context) {
		c.JSON(200, gin.H{
			"message": "Hello World from {{.ProjectName}} on Gin!",
		})
	})
	r.Run(":8080")
}
"#;

const ECHO_MAIN: &str = r#"package main

import (
	"net/http"

	"github.com/labstack/echo/v4"
)

func main() {
	e := echo.New()

	e.GET("/", func(c echo.Context) error {
		return c.JSON(http.StatusOK, map[string]string{
			"message": "Hello World from {{.ProjectName}} on Echo!",
		})
	})

	e.Start(":8080")
}
"#;

const FIBER_MAIN: &str = r#"package main

import (
	"github.com/gofiber/fiber/v2"
)

func main() {
	app := fiber.New()

	app.Get("/", func(c *fiber.Ctx) error {
		return c.JSON(fiber.Map{
			"message": "Hello World from {{.ProjectName}} on Fiber!",
		})
	})

	app.Listen(":8080")
}
"#;

const PLAIN_MAIN: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello World from {{.ProjectName}}!")
}
"#;

const README: &str = r#"# {{.ProjectName}}

Awesome project generated with boilerplate-cli!
"#;

const CONFIG_GO: &str = r#"package config

import (
	"fmt"
	"os"
)

type Config struct {
	DBUser     string
	DBPassword string
	DBHost     string
	DBPort     string
	DBName     string
}

func LoadConfig() *Config {
	return &Config{
		DBUser:     getEnv("DB_USER", "user"),
		DBPassword: getEnv("DB_PASSWORD", "password"),
		DBHost:     getEnv("DB_HOST", "localhost"),
		DBPort:     getEnv("DB_PORT", "{{.DefaultPort}}"),
		DBName:     getEnv("DB_NAME", "mydb"),
	}
}

func getEnv(key, defaultVal string) string {
	if val := os.Getenv(key); val != "" {
		return val
	}
	return defaultVal
}

func (c *Config) GetDSN(dbType string) string {
	switch dbType {
	case "postgres":
		return fmt.Sprintf("postgres://%s:%s@%s:%s/%s?sslmode=disable", c.DBUser, c.DBPassword, c.DBHost, c.DBPort, c.DBName)
	case "mysql":
		return fmt.Sprintf("%s:%s@tcp(%s:%s)/%s", c.DBUser, c.DBPassword, c.DBHost, c.DBPort, c.DBName)
	case "mongo":
		return fmt.Sprintf("mongodb://%s:%s@%s:%s", c.DBUser, c.DBPassword, c.DBHost, c.DBPort)
	default:
		return ""
	}
}
"#;

const SQL_DB_GO: &str = r#"package db

import (
	"database/sql"
	"fmt"
	"log"

	"{{.ProjectName}}/internal/config"
	{{.DriverImport}}
)

func InitDB(cfg *config.Config, dbType string) *sql.DB {
	db, err := sql.Open(dbType, cfg.GetDSN(dbType))
	if err != nil {
		log.Fatalf("Failed to connect to %s database: %v", dbType, err)
	}

	if err := db.Ping(); err != nil {
		log.Fatalf("Failed to ping %s database: %v", dbType, err)
	}

	fmt.Println("Database connection established successfully.")
	return db
}
"#;

const MONGO_DB_GO: &str = r#"package db

import (
	"context"
	"fmt"
	"log"
	"time"

	"{{.ProjectName}}/internal/config"
	"go.mongodb.org/mongo-driver/mongo"
	"go.mongodb.org/mongo-driver/mongo/options"
)

func InitDB(cfg *config.Config, dbType string) *mongo.Client {
	client, err := mongo.NewClient(options.Client().ApplyURI(cfg.GetDSN(dbType)))
	if err != nil {
		log.Fatalf("Failed to create Mongo client: %v", err)
	}

	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()

	if err := client.Connect(ctx); err != nil {
		log.Fatalf("Failed to connect to MongoDB: %v", err)
	}

	fmt.Println("Connected to MongoDB successfully.")
	return client
}
"#;

/// `cmd/app/main.go` for the chosen framework
pub fn main_go(framework: Framework, project_name: &str) -> String {
    let template = match framework {
        Framework::GinGonic => GIN_MAIN,
        Framework::Echo => ECHO_MAIN,
        Framework::Fiber => FIBER_MAIN,
        Framework::None => PLAIN_MAIN,
    };
    template.replace(PROJECT_NAME, project_name)
}

/// `go.mod` with one `require` line per selected dependency
pub fn go_mod(request: &ProjectRequest) -> String {
    let mut contents = format!("module {}\n\ngo {}\n", request.name, GO_VERSION);

    let requires = request
        .framework
        .and_then(|f| f.go_module())
        .into_iter()
        .chain(request.database.and_then(|d| d.go_module()));

    for module in requires {
        contents.push_str(&format!("require {} latest\n", module));
    }

    contents
}

pub fn readme(project_name: &str) -> String {
    README.replace(PROJECT_NAME, project_name)
}

/// `internal/config/config.go`, only for projects with a database
pub fn config_go(database: Database) -> Option<String> {
    let port = database.default_port()?;
    Some(CONFIG_GO.replace(DEFAULT_PORT, &port.to_string()))
}

/// `pkg/db/db.go`, only for projects with a database
pub fn db_go(database: Database, project_name: &str) -> Option<String> {
    let driver_import = match database {
        Database::PostgreSQL => "_ \"github.com/lib/pq\"",
        Database::MySql => "_ \"github.com/go-sql-driver/mysql\"",
        Database::MongoDb => return Some(MONGO_DB_GO.replace(PROJECT_NAME, project_name)),
        Database::None => return None,
    };

    Some(
        SQL_DB_GO
            .replace(PROJECT_NAME, project_name)
            .replace(DRIVER_IMPORT, driver_import),
    )
}
