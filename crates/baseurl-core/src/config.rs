use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::env_source::{EmptyValuePolicy, EnvSource, VarNames, PLATFORM_HOST_VAR, SITE_URL_VAR};
use crate::error::BaseUrlError;
use crate::url_model::{resolve_with_source, BaseUrl, Source, UrlSources, DEFAULT_BASE_URL};

/// Optional configuration loaded from `~/.config/baseurl/config.toml`.
/// Every key may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseUrlConfig {
    /// Variable holding the explicit site URL (first priority).
    pub site_url_var: String,
    /// Variable the hosting platform fills with the deployment host (second priority).
    pub platform_host_var: String,
    /// Used when neither variable is available. Normalized like any candidate.
    pub default_url: String,
    /// "unset" (default) or "verbatim".
    pub empty_value: EmptyValuePolicy,
}

impl Default for BaseUrlConfig {
    fn default() -> Self {
        Self {
            site_url_var: SITE_URL_VAR.to_string(),
            platform_host_var: PLATFORM_HOST_VAR.to_string(),
            default_url: DEFAULT_BASE_URL.to_string(),
            empty_value: EmptyValuePolicy::default(),
        }
    }
}

impl BaseUrlConfig {
    pub fn var_names(&self) -> VarNames {
        VarNames {
            site_url: self.site_url_var.clone(),
            platform_host: self.platform_host_var.clone(),
        }
    }

    pub fn sources_from(&self, env: &impl EnvSource) -> UrlSources {
        UrlSources::from_env(env, &self.var_names(), self.empty_value)
    }

    /// Resolves against an already-built set of candidates, using this config's fallback.
    pub fn resolve(&self, sources: &UrlSources) -> (BaseUrl, Source) {
        resolve_with_source(sources, &self.default_url)
    }
}

pub fn config_path() -> Result<PathBuf, BaseUrlError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("baseurl")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir; a missing file means defaults.
pub fn load_or_default() -> Result<BaseUrlConfig, BaseUrlError> {
    let path = config_path()?;
    load_from(&path)
}

/// Load configuration from `path`; a missing file means defaults.
pub fn load_from(path: &Path) -> Result<BaseUrlConfig, BaseUrlError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(BaseUrlConfig::default());
        }
        Err(source) => {
            return Err(BaseUrlError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&data).map_err(|source| BaseUrlError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
