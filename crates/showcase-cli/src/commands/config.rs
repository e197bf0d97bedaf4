use anyhow::Result;
use showcase::ShowcaseConfig;

pub fn execute(config: &ShowcaseConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
