//! Join command: absolute link under the base URL.

use anyhow::Result;

use super::resolve_from_process;
use crate::cli::SourceOverrides;

pub fn run_join(path: &str, overrides: &SourceOverrides) -> Result<()> {
    let (url, _) = resolve_from_process(overrides)?;
    println!("{}", url.join(path));
    Ok(())
}
