//! Resolve command: print the base URL.

use anyhow::Result;
use baseurl_core::{BaseUrl, Source};
use serde::Serialize;

use super::resolve_from_process;
use crate::cli::SourceOverrides;

#[derive(Debug, Serialize)]
pub(crate) struct ResolveOutput<'a> {
    pub base_url: &'a BaseUrl,
    pub source: Source,
}

pub(crate) fn render(url: &BaseUrl, source: Source, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&ResolveOutput {
            base_url: url,
            source,
        })?)
    } else {
        Ok(url.to_string())
    }
}

pub fn run_resolve(overrides: &SourceOverrides, json: bool) -> Result<()> {
    let (url, source) = resolve_from_process(overrides)?;
    println!("{}", render(&url, source, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseurl_core::{resolve_base_url, UrlSources};

    #[test]
    fn plain_output_is_the_url() {
        let url = resolve_base_url(&UrlSources::default());
        assert_eq!(
            render(&url, Source::Default, false).unwrap(),
            "http://localhost:3000/"
        );
    }

    #[test]
    fn json_output_names_the_source() {
        let url = resolve_base_url(&UrlSources::new(Some("example.com".into()), None));
        let out = render(&url, Source::SiteUrl, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["base_url"], "https://example.com/");
        assert_eq!(value["source"], "site_url");
    }
}
