//! Error type for the fallible edges of the crate (link parsing, config loading).
//!
//! Resolution itself is total and never returns one of these.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    /// The normalized base URL is not a parseable absolute URL (e.g. `https://`).
    #[error("invalid base url {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// Reading the config file failed for a reason other than it being absent.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML for [`crate::config::BaseUrlConfig`].
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_value() {
        let source = url::Url::parse("https://").unwrap_err();
        let err = BaseUrlError::Parse {
            value: "https://".to_string(),
            source,
        };
        assert!(err.to_string().contains("\"https://\""));
    }

    #[test]
    fn config_read_error_mentions_path() {
        let err = BaseUrlError::ConfigRead {
            path: PathBuf::from("/nope/config.toml"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/nope/config.toml"));
    }
}
