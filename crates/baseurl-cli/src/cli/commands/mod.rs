//! CLI command handlers, one per file.

mod completions;
mod config_path;
mod join;
mod man;
mod resolve;

pub use completions::run_completions;
pub use config_path::run_config_path;
pub use join::run_join;
pub use man::run_man;
pub use resolve::run_resolve;

use anyhow::{Context, Result};
use baseurl_core::config::{self, BaseUrlConfig};
use baseurl_core::env_source::{EnvSource, ProcessEnv};
use baseurl_core::{BaseUrl, Source, UrlSources};

use super::SourceOverrides;

/// Environment view where command-line overrides shadow the real variables.
struct OverriddenEnv<'a, E> {
    inner: E,
    cfg: &'a BaseUrlConfig,
    overrides: &'a SourceOverrides,
}

impl<E: EnvSource> EnvSource for OverriddenEnv<'_, E> {
    fn var(&self, key: &str) -> Option<String> {
        let replaced = if key == self.cfg.site_url_var {
            self.overrides.site_url.as_ref()
        } else if key == self.cfg.platform_host_var {
            self.overrides.platform_host.as_ref()
        } else {
            None
        };
        replaced.cloned().or_else(|| self.inner.var(key))
    }
}

pub(crate) fn sources_with_overrides(
    cfg: &BaseUrlConfig,
    env: impl EnvSource,
    overrides: &SourceOverrides,
) -> UrlSources {
    cfg.sources_from(&OverriddenEnv {
        inner: env,
        cfg,
        overrides,
    })
}

/// Load config and resolve against the process environment plus overrides.
fn resolve_from_process(overrides: &SourceOverrides) -> Result<(BaseUrl, Source)> {
    let cfg = config::load_or_default().context("loading config")?;
    tracing::debug!("loaded config: {:?}", cfg);
    let sources = sources_with_overrides(&cfg, ProcessEnv, overrides);
    let (url, source) = cfg.resolve(&sources);
    tracing::debug!(%url, %source, "resolved base url");
    Ok((url, source))
}
