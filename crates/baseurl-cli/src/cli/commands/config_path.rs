use anyhow::Result;
use baseurl_core::config;

pub fn run_config_path() -> Result<()> {
    let path = config::config_path()?;
    println!("{}", path.display());
    Ok(())
}
