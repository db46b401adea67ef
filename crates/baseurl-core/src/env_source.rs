//! Environment lookup behind a trait, so resolution never reads process state directly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::url_model::UrlSources;

/// Default name of the explicit site URL variable.
pub const SITE_URL_VAR: &str = "NEXT_PUBLIC_SITE_URL";
/// Default name of the hosting platform's assigned-host variable.
pub const PLATFORM_HOST_VAR: &str = "NEXT_PUBLIC_VERCEL_URL";

/// Read-only key/value lookup, typically the process environment.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment. Non-UTF-8 values read as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests and embedders that carry their own settings.
#[derive(Debug, Clone, Default)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapEnv(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// How a variable that is set to the empty string is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyValuePolicy {
    /// Empty means unset: fall through to the next candidate.
    #[default]
    Unset,
    /// Empty is a real value and wins its slot (resolves to `https://`).
    Verbatim,
}

impl EmptyValuePolicy {
    fn apply(self, value: Option<String>) -> Option<String> {
        match self {
            EmptyValuePolicy::Unset => value.filter(|v| !v.is_empty()),
            EmptyValuePolicy::Verbatim => value,
        }
    }
}

/// Names of the two variables consulted, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarNames {
    pub site_url: String,
    pub platform_host: String,
}

impl Default for VarNames {
    fn default() -> Self {
        Self {
            site_url: SITE_URL_VAR.to_string(),
            platform_host: PLATFORM_HOST_VAR.to_string(),
        }
    }
}

impl UrlSources {
    /// Reads both candidates from `env`, applying `policy` to empty values.
    pub fn from_env(env: &impl EnvSource, names: &VarNames, policy: EmptyValuePolicy) -> Self {
        UrlSources {
            site_url: policy.apply(env.var(&names.site_url)),
            platform_host: policy.apply(env.var(&names.platform_host)),
        }
    }
}
