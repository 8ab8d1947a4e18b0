//! Batch annotation command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use hooklink_annotate::{AnnotateConfig, BatchAnnotator};
use serde::Deserialize;

/// Configuration file structure (hooklink.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    hooks: HooksConfig,
    #[serde(default)]
    links: LinksConfig,
}

#[derive(Debug, Deserialize)]
struct HooksConfig {
    #[serde(default = "default_hooks_dir")]
    dir: String,
}

#[derive(Debug, Deserialize)]
struct LinksConfig {
    #[serde(default = "default_docs_base_url")]
    docs_base_url: String,
    #[serde(default = "default_source_base_url")]
    source_base_url: String,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            dir: default_hooks_dir(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            docs_base_url: default_docs_base_url(),
            source_base_url: default_source_base_url(),
        }
    }
}

fn default_hooks_dir() -> String {
    "docs/hooks/effect".to_string()
}
fn default_docs_base_url() -> String {
    "https://ahooks.js.org/zh-CN/hooks".to_string()
}
fn default_source_base_url() -> String {
    "https://github.com/alibaba/hooks/blob/master/packages/hooks/src".to_string()
}

/// Load configuration from hooklink.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the annotate command.
pub async fn run(config_path: PathBuf, dir: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(&config_path)?;

    let config = AnnotateConfig {
        dir: dir.unwrap_or_else(|| PathBuf::from(&file_config.hooks.dir)),
        docs_base_url: file_config.links.docs_base_url,
        source_base_url: file_config.links.source_base_url,
    };

    tracing::info!("Annotating {}", config.dir.display());

    let report = BatchAnnotator::new(config).run().await?;

    tracing::info!(
        "Annotated {} files ({} unchanged, {} failed) in {}ms",
        report.annotated,
        report.unchanged,
        report.failures.len(),
        report.duration_ms
    );

    Ok(())
}
