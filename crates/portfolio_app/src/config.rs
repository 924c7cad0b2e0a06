use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use portfolio_core::{Catalog, Project};
use portfolio_engine::SubmitSettings;
use serde::{Deserialize, Serialize};
use site_logging::{site_info, site_warn};

pub const CONFIG_FILENAME: &str = "portfolio.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_title: String,
    pub owner_name: String,
    pub tagline: String,
    pub output_dir: PathBuf,
    /// RON list of projects replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Born to Code".to_string(),
            owner_name: "Portfolio Owner".to_string(),
            tagline: "Building web and mobile experiences with modern JavaScript and native tooling."
                .to_string(),
            output_dir: PathBuf::from("dist"),
            catalog_path: None,
            contact: ContactConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Form endpoint; messages are only simulated when unset.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        let defaults = SubmitSettings::default();
        Self {
            endpoint: None,
            simulated_delay_ms: defaults.simulated_delay.as_millis() as u64,
            connect_timeout_ms: defaults.connect_timeout.as_millis() as u64,
            request_timeout_ms: defaults.request_timeout.as_millis() as u64,
        }
    }
}

impl ContactConfig {
    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            simulated_delay: Duration::from_millis(self.simulated_delay_ms),
        }
    }
}

/// Loads the site configuration; a missing or broken file falls back to defaults.
pub fn load_config(path: &Path) -> SiteConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SiteConfig::default();
        }
        Err(err) => {
            site_warn!("Failed to read config from {:?}: {}", path, err);
            return SiteConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            site_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            site_warn!("Failed to parse config from {:?}: {}", path, err);
            SiteConfig::default()
        }
    }
}

/// The configured catalog, or the built-in one when none is configured.
pub fn load_catalog(config: &SiteConfig) -> anyhow::Result<Catalog> {
    let Some(path) = config.catalog_path.as_deref() else {
        return Ok(Catalog::builtin());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading project catalog {}", path.display()))?;
    let projects: Vec<Project> = ron::from_str(&content)
        .with_context(|| format!("parsing project catalog {}", path.display()))?;
    let catalog = Catalog::new(projects)
        .with_context(|| format!("validating project catalog {}", path.display()))?;
    site_info!("Loaded {} projects from {:?}", catalog.len(), path);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = load_config(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact.simulated_delay_ms, 1500);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(site_title: "Jane Codes", contact: (endpoint: Some("https://forms.example.com/contact")))"#,
        )
        .unwrap();

        let config = load_config(&path);

        assert_eq!(config.site_title, "Jane Codes");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        let settings = config.contact.submit_settings();
        assert_eq!(
            settings.endpoint.as_deref(),
            Some("https://forms.example.com/contact")
        );
        assert_eq!(settings.simulated_delay, Duration::from_millis(1500));
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(site_title: 42").unwrap();
        assert_eq!(load_config(&path), SiteConfig::default());
    }

    #[test]
    fn catalog_file_replaces_builtin_and_is_validated() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("projects.ron");
        let entry = r#"(id: 7, title: "Ray Tracer", description: "Renders spheres", long_description: "• Fast", technologies: ["Rust"], category: web)"#;
        fs::write(&path, format!("[{entry}]")).unwrap();
        let config = SiteConfig {
            catalog_path: Some(path.clone()),
            ..SiteConfig::default()
        };

        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().title, "Ray Tracer");

        fs::write(&path, format!("[{entry}, {entry}]")).unwrap();
        assert!(load_catalog(&config).is_err());
    }
}
