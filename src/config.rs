use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalogue::plugin_catalogue;
use crate::error::ScaffoldError;
use crate::registry::TemplateRegistry;

#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    /// Directory under which each plugin gets its own folder.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Replaces the bundled plugin catalogue when present.
    #[serde(default)]
    pub templates: Option<Vec<TemplateSpec>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            templates: None,
        }
    }
}

fn default_output_root() -> PathBuf {
    Path::new("libraries").join("plugins")
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSpec {
    pub path: String,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid template: {0}")]
    Template(#[from] ScaffoldError),
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Builds the registry to render: the configured templates in file order,
    /// or the bundled plugin catalogue.
    pub fn registry(&self) -> Result<TemplateRegistry, ConfigError> {
        match &self.templates {
            Some(templates) => {
                let mut registry = TemplateRegistry::new();
                for spec in templates {
                    registry.register(&spec.path, &spec.body)?;
                }
                Ok(registry)
            }
            None => Ok(plugin_catalogue()?),
        }
    }

    /// The directory the templates of plugin `name` are rendered into.
    pub fn plugin_dir(&self, name: &str) -> PathBuf {
        self.output_root.join(name)
    }
}
