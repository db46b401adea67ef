pub mod config;
pub mod env_source;
pub mod error;
pub mod logging;
pub mod url_model;

pub use error::BaseUrlError;
pub use url_model::{resolve_base_url, BaseUrl, Source, UrlSources};
