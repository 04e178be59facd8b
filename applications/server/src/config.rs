/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_docs")]
    pub docs: DocsSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Mount point of the Swagger UI
    #[serde(default = "default_docs_path")]
    pub path: String,

    /// Route serving the OpenAPI document as JSON
    #[serde(default = "default_openapi_path")]
    pub openapi_path: String,

    /// Server URL advertised in the OpenAPI document
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl ServerConfig {
    /// Load configuration from `config.toml` and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.toml` if present)
    /// and environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. USUARIO_SERVER__PORT
        settings = settings.add_source(
            config::Environment::with_prefix("USUARIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("server port must not be 0".to_string()));
        }

        if !self.storage.database_url.starts_with("sqlite:") {
            return Err(ServerError::Config(format!(
                "only SQLite databases are supported, got {:?}",
                self.storage.database_url
            )));
        }

        if self.docs.enabled {
            for path in [&self.docs.path, &self.docs.openapi_path] {
                if !path.starts_with('/') {
                    return Err(ServerError::Config(format!(
                        "docs paths must start with '/', got {:?}",
                        path
                    )));
                }
            }

            if self.docs.openapi_path.starts_with(&format!("{}/", self.docs.path)) {
                return Err(ServerError::Config(format!(
                    "openapi path {:?} must not be nested under the docs path {:?}",
                    self.docs.openapi_path, self.docs.path
                )));
            }
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_docs() -> DocsSettings {
    DocsSettings {
        enabled: default_enabled(),
        path: default_docs_path(),
        openapi_path: default_openapi_path(),
        server_url: default_server_url(),
    }
}

fn default_enabled() -> bool {
    true
}

fn default_docs_path() -> String {
    "/api-docs".to_string()
}

fn default_openapi_path() -> String {
    "/openapi.json".to_string()
}

fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            docs: default_docs(),
        }
    }
}
